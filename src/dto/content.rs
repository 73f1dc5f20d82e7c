use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::double_option;
use crate::entity::{contact_messages::MessageStatus, services::ServiceIcon};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTestimonialRequest {
    pub name: String,
    pub profession: Option<String>,
    pub company: Option<String>,
    pub photo: Option<String>,
    pub message: String,
    pub course_id: Option<Uuid>,
    pub rating: Option<i32>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub graduation_year: Option<i32>,
    pub verified: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub course_id: Option<Option<Uuid>>,
    pub rating: Option<i32>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub graduation_year: Option<Option<i32>>,
    pub verified: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBannerRequest {
    pub title: String,
    pub subtitle: String,
    pub description: Option<String>,
    pub image: String,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub secondary_button_text: Option<String>,
    pub secondary_button_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub secondary_button_text: Option<String>,
    pub secondary_button_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: String,
    pub icon: Option<ServiceIcon>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<ServiceIcon>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGalleryRequest {
    pub image: String,
    pub caption: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGalleryRequest {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMessageStatusRequest {
    pub status: MessageStatus,
}

/// Full replacement of the settings row; omitted fields keep their defaults.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(default)]
pub struct SiteSettingsRequest {
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
}

impl Default for SiteSettingsRequest {
    fn default() -> Self {
        Self {
            site_name: "eLEARNING".into(),
            logo: None,
            favicon: None,
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            facebook_url: String::new(),
            twitter_url: String::new(),
            youtube_url: String::new(),
            linkedin_url: String::new(),
            instagram_url: String::new(),
            footer_copyright: "© Your Site Name, All Right Reserved.".into(),
            footer_design_credit: "Designed By HTML Codex".into(),
            footer_design_url: "https://htmlcodex.com".into(),
            newsletter_enabled: true,
            newsletter_text: "Dolor amet sit justo amet elitr clita ipsum elitr est.".into(),
            meta_title: String::new(),
            meta_description: String::new(),
            meta_keywords: String::new(),
            site_maintenance: false,
            maintenance_message: String::new(),
        }
    }
}
