use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Font Awesome icons offered for homepage service tiles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ServiceIcon {
    #[sea_orm(string_value = "fa-graduation-cap")]
    #[serde(rename = "fa-graduation-cap")]
    GraduationCap,
    #[sea_orm(string_value = "fa-globe")]
    #[serde(rename = "fa-globe")]
    Globe,
    #[sea_orm(string_value = "fa-home")]
    #[serde(rename = "fa-home")]
    Home,
    #[sea_orm(string_value = "fa-book-open")]
    #[serde(rename = "fa-book-open")]
    BookOpen,
    #[sea_orm(string_value = "fa-laptop")]
    #[serde(rename = "fa-laptop")]
    Laptop,
    #[sea_orm(string_value = "fa-certificate")]
    #[serde(rename = "fa-certificate")]
    Certificate,
    #[sea_orm(string_value = "fa-users")]
    #[serde(rename = "fa-users")]
    Users,
    #[sea_orm(string_value = "fa-chalkboard-teacher")]
    #[serde(rename = "fa-chalkboard-teacher")]
    ChalkboardTeacher,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: ServiceIcon,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
