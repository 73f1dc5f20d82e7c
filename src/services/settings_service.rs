use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Set};

use crate::{
    audit,
    dto::content::SiteSettingsRequest,
    entity::site_settings::{self, Entity as SiteSettings, SINGLETON_ID},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::SiteSetting,
    response::{ApiResponse, Meta},
    state::AppState,
    validation::Validator,
};

/// The settings row, if one has been saved.
pub async fn load_settings<C: ConnectionTrait>(conn: &C) -> AppResult<Option<site_settings::Model>> {
    Ok(SiteSettings::find_by_id(SINGLETON_ID).one(conn).await?)
}

/// Write `payload` as the settings row. Whatever id the caller had in mind, the row is id 1.
pub async fn save_settings<C: ConnectionTrait>(
    conn: &C,
    payload: SiteSettingsRequest,
) -> AppResult<site_settings::Model> {
    let mut v = Validator::new();
    v.required("site_name", &payload.site_name, 100)
        .max_len("phone", &payload.phone, 20)
        .max_len("footer_copyright", &payload.footer_copyright, 200)
        .max_len("meta_title", &payload.meta_title, 200);
    if !payload.email.trim().is_empty() {
        v.email("email", &payload.email);
    }
    v.finish()?;

    let existing = load_settings(conn).await?;
    let model = site_settings::Model {
        id: SINGLETON_ID,
        site_name: payload.site_name.trim().to_string(),
        logo: payload.logo,
        favicon: payload.favicon,
        address: payload.address,
        phone: payload.phone,
        email: payload.email.trim().to_string(),
        facebook_url: payload.facebook_url,
        twitter_url: payload.twitter_url,
        youtube_url: payload.youtube_url,
        linkedin_url: payload.linkedin_url,
        instagram_url: payload.instagram_url,
        footer_copyright: payload.footer_copyright,
        footer_design_credit: payload.footer_design_credit,
        footer_design_url: payload.footer_design_url,
        newsletter_enabled: payload.newsletter_enabled,
        newsletter_text: payload.newsletter_text,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
        site_maintenance: payload.site_maintenance,
        maintenance_message: payload.maintenance_message,
        updated_at: Utc::now().into(),
    };

    let active = model.into_active_model().reset_all();
    let saved = match existing {
        Some(_) => active.update(conn).await?,
        None => active.insert(conn).await?,
    };
    Ok(saved)
}

pub async fn get_settings(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<SiteSetting>> {
    ensure_admin(user)?;
    let settings = load_settings(&state.orm).await?.ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Site settings", settings.into(), None))
}

pub async fn upsert_settings(
    state: &AppState,
    user: &AuthUser,
    payload: SiteSettingsRequest,
) -> AppResult<ApiResponse<SiteSetting>> {
    ensure_admin(user)?;
    let settings = save_settings(&state.orm, payload).await?;

    audit::record(
        &state.orm,
        user,
        "settings_update",
        "site_settings",
        serde_json::json!({ "site_name": settings.site_name }),
    )
    .await;

    Ok(ApiResponse::success(
        "Site settings saved",
        settings.into(),
        Some(Meta::empty()),
    ))
}
