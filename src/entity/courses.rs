use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
    #[sea_orm(string_value = "all")]
    All,
}

impl CourseLevel {
    /// Level from its query-string form; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Largest price accepted, in minor units (ten digits).
pub const MAX_PRICE: i64 = 9_999_999_999;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub full_description: String,
    pub category_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    /// Minor currency units.
    pub price: i64,
    pub discount_price: Option<i64>,
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
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub published_date: Option<DateTimeWithTimeZone>,
}

impl Model {
    /// Price the visitor pays: the discount price when one is set, the list price otherwise.
    pub fn current_price(&self) -> i64 {
        match self.discount_price {
            Some(discount) if discount != 0 => discount,
            _ => self.price,
        }
    }

    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some()
    }

    /// Whole-percent reduction, floored.
    pub fn discount_percentage(&self) -> i64 {
        match self.discount_price {
            Some(discount) if discount != 0 && self.price > 0 => {
                let price = i128::from(self.price);
                let percent = ((price - i128::from(discount)) * 100).div_euclid(price);
                i64::try_from(percent).unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Rating and count after folding one more review into the running average.
    pub fn rating_after(&self, new_rating: i32) -> (f64, i32) {
        let count = self.rating_count + 1;
        let total = self.rating * f64::from(self.rating_count) + f64::from(new_rating);
        let average = total / f64::from(count);
        ((average * 100.0).round() / 100.0, count)
    }

    /// No seats left. A zero capacity never fills.
    pub fn is_full(&self) -> bool {
        self.max_students > 0 && self.enrolled_students >= self.max_students
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_delete = "SetNull"
    )]
    Categories,
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id",
        on_delete = "SetNull"
    )]
    Instructors,
    #[sea_orm(has_many = "super::modules::Entity")]
    Modules,
    #[sea_orm(has_many = "super::testimonials::Entity")]
    Testimonials,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructors.def()
    }
}

impl Related<super::modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modules.def()
    }
}

impl Related<super::testimonials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Testimonials.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollments::Relation::Students.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollments::Relation::Courses.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn course(price: i64, discount_price: Option<i64>) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            title: "Web Design".into(),
            slug: "web-design".into(),
            short_description: String::new(),
            full_description: String::new(),
            category_id: None,
            instructor_id: None,
            price,
            discount_price,
            level: CourseLevel::Beginner,
            duration_hours: 1.5,
            max_students: 30,
            enrolled_students: 0,
            thumbnail: "thumb.jpg".into(),
            featured_image: None,
            rating: 0.0,
            rating_count: 0,
            is_featured: false,
            is_published: true,
            status: CourseStatus::Published,
            created_at: now,
            updated_at: now,
            published_date: None,
        }
    }

    #[test]
    fn current_price_prefers_discount() {
        assert_eq!(course(10_000, Some(7_500)).current_price(), 7_500);
        assert_eq!(course(10_000, None).current_price(), 10_000);
    }

    #[test]
    fn zero_discount_falls_back_to_list_price() {
        let c = course(10_000, Some(0));
        assert_eq!(c.current_price(), 10_000);
        assert!(c.is_discounted());
        assert_eq!(c.discount_percentage(), 0);
    }

    #[test]
    fn discount_percentage_truncates() {
        assert_eq!(course(3_000, Some(2_000)).discount_percentage(), 33);
        assert_eq!(course(0, Some(100)).discount_percentage(), 0);
        assert_eq!(course(10_000, None).discount_percentage(), 0);
    }

    #[test]
    fn discount_percentage_handles_extreme_prices() {
        assert_eq!(course(i64::MAX, Some(1)).discount_percentage(), 99);
        assert_eq!(course(MAX_PRICE, Some(1)).discount_percentage(), 99);
        // A discount above the list price is a negative reduction, floored.
        assert_eq!(course(3_000, Some(4_000)).discount_percentage(), -34);
    }

    #[test]
    fn rating_is_a_running_average() {
        let mut c = course(100, None);
        let (rating, count) = c.rating_after(4);
        assert_eq!((rating, count), (4.0, 1));

        c.rating = rating;
        c.rating_count = count;
        let (rating, count) = c.rating_after(5);
        assert_eq!((rating, count), (4.5, 2));

        c.rating = rating;
        c.rating_count = count;
        let (rating, count) = c.rating_after(3);
        assert_eq!(count, 3);
        assert_eq!(rating, 4.0);
    }

    #[test]
    fn full_when_capacity_reached() {
        let mut c = course(100, None);
        c.max_students = 2;
        c.enrolled_students = 1;
        assert!(!c.is_full());
        c.enrolled_students = 2;
        assert!(c.is_full());
        c.max_students = 0;
        assert!(!c.is_full());
    }
}
