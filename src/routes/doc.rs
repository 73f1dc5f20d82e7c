use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{auth, catalog as catalog_dto, content as content_dto, people as people_dto, site as site_dto},
    entity::{
        contact_messages::MessageStatus,
        courses::{CourseLevel, CourseStatus},
        services::ServiceIcon,
    },
    models::{
        Banner, Category, ContactMessage, Course, CourseModule, Enrollment, Faq, GalleryImage,
        Instructor, Service, SiteSetting, Student, Testimonial, User,
    },
    response::{BulkResult, Meta},
    routes::{
        admin::{catalog, content, people},
        auth as auth_routes, health, params, site,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        site::home,
        site::about,
        site::courses,
        site::team,
        site::testimonials,
        site::submit_testimonial,
        site::contact,
        site::submit_contact,
        auth_routes::register,
        auth_routes::login,
        catalog::list_categories,
        catalog::get_category,
        catalog::create_category,
        catalog::update_category,
        catalog::delete_category,
        catalog::list_courses,
        catalog::get_course,
        catalog::create_course,
        catalog::update_course,
        catalog::delete_course,
        catalog::publish_courses,
        catalog::feature_courses,
        catalog::duplicate_courses,
        catalog::list_modules,
        catalog::get_module,
        catalog::create_module,
        catalog::update_module,
        catalog::delete_module,
        people::list_instructors,
        people::get_instructor,
        people::create_instructor,
        people::update_instructor,
        people::delete_instructor,
        people::feature_instructors,
        people::duplicate_instructors,
        people::list_students,
        people::get_student,
        people::create_student,
        people::update_student,
        people::delete_student,
        people::list_enrollments,
        people::get_enrollment,
        people::create_enrollment,
        people::update_enrollment,
        people::delete_enrollment,
        content::list_testimonials,
        content::get_testimonial,
        content::create_testimonial,
        content::update_testimonial,
        content::delete_testimonial,
        content::feature_testimonials,
        content::verify_testimonials,
        content::activate_testimonials,
        content::list_banners,
        content::get_banner,
        content::create_banner,
        content::update_banner,
        content::delete_banner,
        content::list_services,
        content::get_service,
        content::create_service,
        content::update_service,
        content::delete_service,
        content::list_gallery,
        content::get_gallery_image,
        content::create_gallery_image,
        content::update_gallery_image,
        content::delete_gallery_image,
        content::list_faqs,
        content::get_faq,
        content::create_faq,
        content::update_faq,
        content::delete_faq,
        content::get_settings,
        content::upsert_settings,
        content::list_messages,
        content::get_message,
        content::delete_message,
        content::update_message_status
    ),
    components(
        schemas(
            User,
            Category,
            Course,
            CourseModule,
            Instructor,
            Testimonial,
            Banner,
            Service,
            SiteSetting,
            GalleryImage,
            ContactMessage,
            Student,
            Enrollment,
            Faq,
            CourseLevel,
            CourseStatus,
            MessageStatus,
            ServiceIcon,
            BulkResult,
            Meta,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisteredStudent,
            site_dto::HomePage,
            site_dto::AboutPage,
            site_dto::CoursesPage,
            site_dto::CourseStats,
            site_dto::TeamPage,
            site_dto::TestimonialsPage,
            site_dto::ContactPage,
            site_dto::ContactForm,
            site_dto::TestimonialForm,
            site_dto::SiteContext,
            catalog_dto::CreateCategoryRequest,
            catalog_dto::UpdateCategoryRequest,
            catalog_dto::CreateCourseRequest,
            catalog_dto::UpdateCourseRequest,
            catalog_dto::CreateModuleRequest,
            catalog_dto::UpdateModuleRequest,
            catalog_dto::BulkIdsRequest,
            people_dto::CreateInstructorRequest,
            people_dto::UpdateInstructorRequest,
            people_dto::CreateStudentRequest,
            people_dto::UpdateStudentRequest,
            people_dto::CreateEnrollmentRequest,
            people_dto::UpdateEnrollmentRequest,
            content_dto::CreateTestimonialRequest,
            content_dto::UpdateTestimonialRequest,
            content_dto::CreateBannerRequest,
            content_dto::UpdateBannerRequest,
            content_dto::CreateServiceRequest,
            content_dto::UpdateServiceRequest,
            content_dto::CreateGalleryRequest,
            content_dto::UpdateGalleryRequest,
            content_dto::CreateFaqRequest,
            content_dto::UpdateFaqRequest,
            content_dto::UpdateMessageStatusRequest,
            content_dto::SiteSettingsRequest,
            params::Pagination,
            params::CourseFilter,
            health::HealthData
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Site", description = "Public page contexts and forms"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Admin", description = "Admin CRUD and bulk actions"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
