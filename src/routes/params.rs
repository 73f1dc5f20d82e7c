use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entity::{contact_messages::MessageStatus, courses::{CourseLevel, CourseStatus}};

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self { page, per_page }
    }

    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

/// Filters accepted by the public course listing.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseFilter {
    /// Category slug.
    pub category: Option<String>,
    /// beginner, intermediate, advanced or all.
    pub level: Option<String>,
    /// Matched against title, descriptions and instructor name.
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InstructorAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
    pub category_id: Option<Uuid>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModuleAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub course_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TestimonialAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub verified: Option<bool>,
    pub rating: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
    pub status: Option<MessageStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnrollmentAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub student_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
}

/// Listing used by the simple display-ordered content tables.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentAdminQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub is_active: Option<bool>,
}

macro_rules! impl_pagination {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                pub fn pagination(&self) -> Pagination {
                    Pagination::new(self.page, self.per_page)
                }
            }
        )*
    };
}

impl_pagination!(
    CategoryAdminQuery,
    InstructorAdminQuery,
    CourseAdminQuery,
    ModuleAdminQuery,
    TestimonialAdminQuery,
    ContactAdminQuery,
    StudentAdminQuery,
    EnrollmentAdminQuery,
    ContentAdminQuery,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_clamps() {
        assert_eq!(Pagination::default().normalize(), (1, 20, 0));
        assert_eq!(Pagination::new(Some(3), Some(10)).normalize(), (3, 10, 20));
        assert_eq!(Pagination::new(Some(0), Some(500)).normalize(), (1, 100, 0));
    }
}
