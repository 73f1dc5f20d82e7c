use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::double_option;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateInstructorRequest {
    pub name: String,
    pub designation: String,
    pub experience: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateInstructorRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub profile_picture: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// Attaches a student profile to an existing user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub user_id: Uuid,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub profile_picture: Option<Option<String>>,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEnrollmentRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEnrollmentRequest {
    pub is_active: Option<bool>,
    /// `true` stamps the completion time, `false` clears it.
    pub completed: Option<bool>,
}
