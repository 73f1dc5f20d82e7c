use sea_orm::entity::prelude::*;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub profession: String,
    /// Company or school name.
    pub company: String,
    pub photo: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub course_id: Option<Uuid>,
    /// Stars, 1 through 5.
    pub rating: i32,
    pub is_featured: bool,
    pub display_order: i32,
    pub is_active: bool,
    pub graduation_year: Option<i32>,
    pub verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn star_rating(&self) -> String {
        "⭐".repeat(self.rating.clamp(0, MAX_RATING) as usize)
    }

    pub fn display_name(&self) -> String {
        match (self.profession.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{}, {} at {}", self.name, self.profession, self.company),
            (false, true) => format!("{}, {}", self.name, self.profession),
            _ => format!("{}, Student", self.name),
        }
    }
}

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "SetNull"
    )]
    Courses,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn testimonial(profession: &str, company: &str, rating: i32) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            name: "Aziza".into(),
            profession: profession.into(),
            company: company.into(),
            photo: None,
            message: "Great course".into(),
            course_id: None,
            rating,
            is_featured: false,
            display_order: 0,
            is_active: true,
            graduation_year: None,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn display_name_variants() {
        assert_eq!(
            testimonial("Designer", "Acme", 5).display_name(),
            "Aziza, Designer at Acme"
        );
        assert_eq!(testimonial("Designer", "", 5).display_name(), "Aziza, Designer");
        assert_eq!(testimonial("", "Acme", 5).display_name(), "Aziza, Student");
    }

    #[test]
    fn stars_follow_rating() {
        assert_eq!(testimonial("", "", 3).star_rating(), "⭐⭐⭐");
    }

    #[test]
    fn rating_bounds() {
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(6));
    }
}
