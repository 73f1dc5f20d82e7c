use sea_orm::entity::prelude::*;

/// The only primary key the settings table ever holds.
pub const SINGLETON_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub site_name: String,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    #[sea_orm(column_type = "Text")]
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
    #[sea_orm(column_type = "Text")]
    pub newsletter_text: String,
    pub meta_title: String,
    #[sea_orm(column_type = "Text")]
    pub meta_description: String,
    #[sea_orm(column_type = "Text")]
    pub meta_keywords: String,
    pub site_maintenance: bool,
    #[sea_orm(column_type = "Text")]
    pub maintenance_message: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
