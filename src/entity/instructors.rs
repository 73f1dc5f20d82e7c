use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub experience: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub profile_picture: Option<String>,
    pub email: String,
    pub phone: String,
    pub telegram: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    pub is_featured: bool,
    /// Lower numbers appear first.
    pub display_order: i32,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.designation)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
