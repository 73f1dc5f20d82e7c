use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::double_option;
use crate::entity::courses::{CourseLevel, CourseStatus};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Derived from the name when omitted or blank.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub title: String,
    /// Derived from the title when omitted or blank.
    pub slug: Option<String>,
    pub short_description: String,
    pub full_description: String,
    pub category_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub price: i64,
    pub discount_price: Option<i64>,
    pub level: Option<CourseLevel>,
    pub duration_hours: f64,
    pub max_students: Option<i32>,
    pub thumbnail: String,
    pub featured_image: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub instructor_id: Option<Option<Uuid>>,
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub discount_price: Option<Option<i64>>,
    pub level: Option<CourseLevel>,
    pub duration_hours: Option<f64>,
    pub max_students: Option<i32>,
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateModuleRequest {
    pub course_id: Uuid,
    pub title: String,
    pub order: Option<i32>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub video_url: Option<String>,
    pub attachment: Option<String>,
    pub is_free_preview: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateModuleRequest {
    pub course_id: Option<Uuid>,
    pub title: Option<String>,
    pub order: Option<i32>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub attachment: Option<Option<String>>,
    pub is_free_preview: Option<bool>,
}

/// Target rows of a bulk admin action.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BulkIdsRequest {
    pub ids: Vec<Uuid>,
}
