//! Page contexts for the public site and the forms it accepts.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::models::{
    Banner, Category, ContactMessage, Course, GalleryImage, Instructor, Service, SiteSetting,
    Testimonial,
};

/// Shared by every page: settings row and navigation categories.
#[derive(Debug, Serialize, ToSchema)]
pub struct SiteContext {
    pub site_settings: Option<SiteSetting>,
    pub navigation_categories: Vec<Category>,
    pub gallery: Vec<GalleryImage>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomePage {
    pub site: SiteContext,
    pub banners: Vec<Banner>,
    pub services: Vec<Service>,
    pub categories: Vec<Category>,
    pub featured_courses: Vec<Course>,
    pub featured_instructors: Vec<Instructor>,
    pub featured_testimonials: Vec<Testimonial>,
    pub total_students: i64,
    pub total_courses: i64,
    pub total_instructors: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AboutPage {
    pub site: SiteContext,
    pub title: String,
    pub instructors: Vec<Instructor>,
    pub total_instructors: i64,
    pub total_courses: i64,
    pub total_students: i64,
}

#[derive(Debug, Default, Serialize, ToSchema, PartialEq)]
pub struct CourseStats {
    pub total: i64,
    pub beginner: i64,
    pub intermediate: i64,
    pub advanced: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CoursesPage {
    pub site: SiteContext,
    pub title: String,
    pub courses: Vec<Course>,
    pub categories: Vec<Category>,
    pub course_stats: CourseStats,
    pub featured_courses: Vec<Course>,
    pub selected_category: Option<String>,
    pub selected_level: Option<String>,
    pub search_query: String,
    pub total_students: i64,
    pub avg_rating: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamPage {
    pub site: SiteContext,
    pub title: String,
    pub instructors: Vec<Instructor>,
    pub total_courses: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialsPage {
    pub site: SiteContext,
    pub title: String,
    pub testimonials: Vec<Testimonial>,
    pub featured_testimonials: Vec<Testimonial>,
    pub total_testimonials: i64,
    pub average_rating: f64,
    pub satisfaction_rate: i64,
    pub active_students: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactPage {
    pub site: SiteContext,
    pub title: String,
    pub form: ContactForm,
}

/// Contact form as posted by the browser. Missing fields arrive empty and are
/// reported by validation rather than rejected by the extractor.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub message: ContactMessage,
}

/// Public testimonial submission.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestimonialForm {
    pub name: String,
    pub profession: String,
    pub company: String,
    pub message: String,
    /// 1 to 5 as typed into the form; blank means 5.
    pub rating: String,
    /// Slug of the course the review is about; empty for none.
    pub course: String,
}
