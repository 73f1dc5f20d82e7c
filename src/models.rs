use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    banners, categories, contact_messages,
    contact_messages::MessageStatus,
    courses,
    courses::{CourseLevel, CourseStatus},
    enrollments, faqs, galleries, instructors, modules, services,
    services::ServiceIcon,
    site_settings, students, testimonials, users,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            role: model.role,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
    pub course_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            image: model.image,
            course_count: model.course_count,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub display_name: String,
    pub experience: String,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub email: String,
    pub phone: String,
    pub telegram: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<instructors::Model> for Instructor {
    fn from(model: instructors::Model) -> Self {
        let display_name = model.display_name();
        Self {
            id: model.id,
            name: model.name,
            designation: model.designation,
            display_name,
            experience: model.experience,
            bio: model.bio,
            profile_picture: model.profile_picture,
            email: model.email,
            phone: model.phone,
            telegram: model.telegram,
            twitter: model.twitter,
            instagram: model.instagram,
            linkedin: model.linkedin,
            is_featured: model.is_featured,
            display_order: model.display_order,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub category_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub price: i64,
    pub discount_price: Option<i64>,
    pub current_price: i64,
    pub is_discounted: bool,
    pub discount_percentage: i64,
    pub level: CourseLevel,
    pub duration_hours: f64,
    pub max_students: i32,
    pub enrolled_students: i32,
    pub thumbnail: String,
    pub featured_image: Option<String>,
    pub rating: f64,
    pub rating_count: i32,
    pub is_featured: bool,
    pub is_published: bool,
    pub status: CourseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_date: Option<DateTime<Utc>>,
}

impl From<courses::Model> for Course {
    fn from(model: courses::Model) -> Self {
        let current_price = model.current_price();
        let is_discounted = model.is_discounted();
        let discount_percentage = model.discount_percentage();
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            short_description: model.short_description,
            full_description: model.full_description,
            category_id: model.category_id,
            instructor_id: model.instructor_id,
            price: model.price,
            discount_price: model.discount_price,
            current_price,
            is_discounted,
            discount_percentage,
            level: model.level,
            duration_hours: model.duration_hours,
            max_students: model.max_students,
            enrolled_students: model.enrolled_students,
            thumbnail: model.thumbnail,
            featured_image: model.featured_image,
            rating: model.rating,
            rating_count: model.rating_count,
            is_featured: model.is_featured,
            is_published: model.is_published,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            published_date: model.published_date.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseModule {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub order: i32,
    pub description: String,
    pub duration_minutes: i32,
    pub video_url: String,
    pub attachment: Option<String>,
    pub is_free_preview: bool,
    pub created_at: DateTime<Utc>,
}

impl From<modules::Model> for CourseModule {
    fn from(model: modules::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            title: model.title,
            order: model.position,
            description: model.description,
            duration_minutes: model.duration_minutes,
            video_url: model.video_url,
            attachment: model.attachment,
            is_free_preview: model.is_free_preview,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub profession: String,
    pub company: String,
    pub display_name: String,
    pub photo: Option<String>,
    pub message: String,
    pub course_id: Option<Uuid>,
    pub rating: i32,
    pub stars: String,
    pub is_featured: bool,
    pub display_order: i32,
    pub is_active: bool,
    pub graduation_year: Option<i32>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<testimonials::Model> for Testimonial {
    fn from(model: testimonials::Model) -> Self {
        let display_name = model.display_name();
        let stars = model.star_rating();
        Self {
            id: model.id,
            name: model.name,
            profession: model.profession,
            company: model.company,
            display_name,
            photo: model.photo,
            message: model.message,
            course_id: model.course_id,
            rating: model.rating,
            stars,
            is_featured: model.is_featured,
            display_order: model.display_order,
            is_active: model.is_active,
            graduation_year: model.graduation_year,
            verified: model.verified,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Banner {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub button_text: String,
    pub button_url: String,
    pub secondary_button_text: String,
    pub secondary_button_url: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<banners::Model> for Banner {
    fn from(model: banners::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            description: model.description,
            image: model.image,
            button_text: model.button_text,
            button_url: model.button_url,
            secondary_button_text: model.secondary_button_text,
            secondary_button_url: model.secondary_button_url,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub display_order: i32,
    pub is_active: bool,
}

impl From<services::Model> for Service {
    fn from(model: services::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            icon: model.icon,
            display_order: model.display_order,
            is_active: model.is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SiteSetting {
    pub site_name: String,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub youtube_url: String,
    pub linkedin_url: String,
    pub instagram_url: String,
    pub footer_copyright: String,
    pub footer_design_credit: String,
    pub footer_design_url: String,
    pub newsletter_enabled: bool,
    pub newsletter_text: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub site_maintenance: bool,
    pub maintenance_message: String,
    pub updated_at: DateTime<Utc>,
}

impl From<site_settings::Model> for SiteSetting {
    fn from(model: site_settings::Model) -> Self {
        Self {
            site_name: model.site_name,
            logo: model.logo,
            favicon: model.favicon,
            address: model.address,
            phone: model.phone,
            email: model.email,
            facebook_url: model.facebook_url,
            twitter_url: model.twitter_url,
            youtube_url: model.youtube_url,
            linkedin_url: model.linkedin_url,
            instagram_url: model.instagram_url,
            footer_copyright: model.footer_copyright,
            footer_design_credit: model.footer_design_credit,
            footer_design_url: model.footer_design_url,
            newsletter_enabled: model.newsletter_enabled,
            newsletter_text: model.newsletter_text,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            meta_keywords: model.meta_keywords,
            site_maintenance: model.site_maintenance,
            maintenance_message: model.maintenance_message,
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GalleryImage {
    pub id: Uuid,
    pub image: String,
    pub caption: String,
    pub label: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<galleries::Model> for GalleryImage {
    fn from(model: galleries::Model) -> Self {
        let label = model.label();
        Self {
            id: model.id,
            image: model.image,
            caption: model.caption,
            label,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<contact_messages::Model> for ContactMessage {
    fn from(model: contact_messages::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            ip_address: model.ip_address,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub phone: String,
    pub profile_picture: Option<String>,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// The user's full name when set, otherwise the login email.
    pub fn from_parts(model: students::Model, user: Option<&users::Model>) -> Self {
        let display_name = user
            .map(|u| match u.full_name.as_deref() {
                Some(name) if !name.trim().is_empty() => name.to_string(),
                _ => u.email.clone(),
            })
            .unwrap_or_default();
        Self {
            id: model.id,
            user_id: model.user_id,
            display_name,
            phone: model.phone,
            profile_picture: model.profile_picture,
            bio: model.bio,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<enrollments::Model> for Enrollment {
    fn from(model: enrollments::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            course_id: model.course_id,
            enrolled_at: model.enrolled_at.with_timezone(&Utc),
            completed_at: model.completed_at.map(|dt| dt.with_timezone(&Utc)),
            is_active: model.is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<faqs::Model> for Faq {
    fn from(model: faqs::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: model.category,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
