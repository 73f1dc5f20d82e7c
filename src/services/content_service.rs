//! Admin CRUD for the display-ordered content tables: banners, services, gallery and FAQs.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::content::{
        CreateBannerRequest, CreateFaqRequest, CreateGalleryRequest, CreateServiceRequest,
        UpdateBannerRequest, UpdateFaqRequest, UpdateGalleryRequest, UpdateServiceRequest,
    },
    entity::{
        banners::{self, Entity as Banners},
        faqs::{self, Entity as Faqs},
        galleries::{self, Entity as Galleries},
        services::{self, Entity as Services, ServiceIcon},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Banner, Faq, GalleryImage, Service},
    response::{ApiResponse, ItemList, Meta},
    routes::params::ContentAdminQuery,
    state::AppState,
    validation::Validator,
};

fn deleted() -> ApiResponse<serde_json::Value> {
    ApiResponse::success("Deleted", serde_json::json!({}), Some(Meta::empty()))
}

// Banners

pub async fn list_banners(
    state: &AppState,
    user: &AuthUser,
    query: ContentAdminQuery,
) -> AppResult<ApiResponse<ItemList<Banner>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = Banners::find();
    if let Some(is_active) = query.is_active {
        finder = finder.filter(banners::Column::IsActive.eq(is_active));
    }
    let finder = finder.order_by_asc(banners::Column::DisplayOrder);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Banner::from)
        .collect();

    Ok(ApiResponse::success(
        "Banners",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_banner(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Banner>> {
    ensure_admin(user)?;
    let banner = Banners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Banner", banner.into(), None))
}

pub async fn create_banner(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    ensure_admin(user)?;
    let mut v = Validator::new();
    v.required("title", &payload.title, 200)
        .required("subtitle", &payload.subtitle, usize::MAX)
        .required("image", &payload.image, 500);
    v.finish()?;

    let banner = banners::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title.trim().to_string()),
        subtitle: Set(payload.subtitle),
        description: Set(payload.description.unwrap_or_default()),
        image: Set(payload.image),
        button_text: Set(payload.button_text.unwrap_or_else(|| "Learn More".into())),
        button_url: Set(payload.button_url.unwrap_or_else(|| "#".into())),
        secondary_button_text: Set(payload.secondary_button_text.unwrap_or_default()),
        secondary_button_url: Set(payload.secondary_button_url.unwrap_or_default()),
        display_order: Set(payload.display_order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user,
        "banner_create",
        "banners",
        serde_json::json!({ "banner_id": banner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Banner created",
        banner.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_banner(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    ensure_admin(user)?;
    let existing = Banners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut v = Validator::new();
    if let Some(title) = &payload.title {
        v.required("title", title, 200);
    }
    if let Some(image) = &payload.image {
        v.required("image", image, 500);
    }
    v.finish()?;

    let mut active: banners::ActiveModel = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(subtitle) = payload.subtitle {
        active.subtitle = Set(subtitle);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if let Some(button_text) = payload.button_text {
        active.button_text = Set(button_text);
    }
    if let Some(button_url) = payload.button_url {
        active.button_url = Set(button_url);
    }
    if let Some(text) = payload.secondary_button_text {
        active.secondary_button_text = Set(text);
    }
    if let Some(url) = payload.secondary_button_url {
        active.secondary_button_url = Set(url);
    }
    if let Some(display_order) = payload.display_order {
        active.display_order = Set(display_order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    let banner = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "banner_update",
        "banners",
        serde_json::json!({ "banner_id": banner.id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", banner.into(), Some(Meta::empty())))
}

pub async fn delete_banner(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Banners::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    audit::record(
        &state.orm,
        user,
        "banner_delete",
        "banners",
        serde_json::json!({ "banner_id": id }),
    )
    .await;
    Ok(deleted())
}

// Services

pub async fn list_services(
    state: &AppState,
    user: &AuthUser,
    query: ContentAdminQuery,
) -> AppResult<ApiResponse<ItemList<Service>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = Services::find();
    if let Some(is_active) = query.is_active {
        finder = finder.filter(services::Column::IsActive.eq(is_active));
    }
    let finder = finder.order_by_asc(services::Column::DisplayOrder);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Service::from)
        .collect();

    Ok(ApiResponse::success(
        "Services",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_service(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Service>> {
    ensure_admin(user)?;
    let service = Services::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Service", service.into(), None))
}

pub async fn create_service(
    state: &AppState,
    user: &AuthUser,
    payload: CreateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    ensure_admin(user)?;
    let mut v = Validator::new();
    v.required("title", &payload.title, 100)
        .required("description", &payload.description, usize::MAX);
    v.finish()?;

    let service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description),
        icon: Set(payload.icon.unwrap_or(ServiceIcon::GraduationCap)),
        display_order: Set(payload.display_order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user,
        "service_create",
        "services",
        serde_json::json!({ "service_id": service.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Service created",
        service.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_service(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    ensure_admin(user)?;
    let existing = Services::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut v = Validator::new();
    if let Some(title) = &payload.title {
        v.required("title", title, 100);
    }
    if let Some(description) = &payload.description {
        v.required("description", description, usize::MAX);
    }
    v.finish()?;

    let mut active: services::ActiveModel = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(icon) = payload.icon {
        active.icon = Set(icon);
    }
    if let Some(display_order) = payload.display_order {
        active.display_order = Set(display_order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    let service = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "service_update",
        "services",
        serde_json::json!({ "service_id": service.id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", service.into(), Some(Meta::empty())))
}

pub async fn delete_service(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Services::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    audit::record(
        &state.orm,
        user,
        "service_delete",
        "services",
        serde_json::json!({ "service_id": id }),
    )
    .await;
    Ok(deleted())
}

// Gallery

pub async fn list_gallery(
    state: &AppState,
    user: &AuthUser,
    query: ContentAdminQuery,
) -> AppResult<ApiResponse<ItemList<GalleryImage>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = Galleries::find();
    if let Some(is_active) = query.is_active {
        finder = finder.filter(galleries::Column::IsActive.eq(is_active));
    }
    let finder = finder.order_by_asc(galleries::Column::DisplayOrder);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(GalleryImage::from)
        .collect();

    Ok(ApiResponse::success(
        "Gallery",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_gallery_image(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<GalleryImage>> {
    ensure_admin(user)?;
    let image = Galleries::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Gallery image", image.into(), None))
}

pub async fn create_gallery_image(
    state: &AppState,
    user: &AuthUser,
    payload: CreateGalleryRequest,
) -> AppResult<ApiResponse<GalleryImage>> {
    ensure_admin(user)?;
    let caption = payload.caption.unwrap_or_default();
    let mut v = Validator::new();
    v.required("image", &payload.image, 500)
        .max_len("caption", &caption, 200);
    v.finish()?;

    let image = galleries::ActiveModel {
        id: Set(Uuid::new_v4()),
        image: Set(payload.image),
        caption: Set(caption),
        display_order: Set(payload.display_order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user,
        "gallery_create",
        "galleries",
        serde_json::json!({ "gallery_id": image.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Gallery image created",
        image.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_gallery_image(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateGalleryRequest,
) -> AppResult<ApiResponse<GalleryImage>> {
    ensure_admin(user)?;
    let existing = Galleries::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut v = Validator::new();
    if let Some(image) = &payload.image {
        v.required("image", image, 500);
    }
    if let Some(caption) = &payload.caption {
        v.max_len("caption", caption, 200);
    }
    v.finish()?;

    let mut active: galleries::ActiveModel = existing.into();
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if let Some(caption) = payload.caption {
        active.caption = Set(caption);
    }
    if let Some(display_order) = payload.display_order {
        active.display_order = Set(display_order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    let image = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "gallery_update",
        "galleries",
        serde_json::json!({ "gallery_id": image.id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", image.into(), Some(Meta::empty())))
}

pub async fn delete_gallery_image(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Galleries::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    audit::record(
        &state.orm,
        user,
        "gallery_delete",
        "galleries",
        serde_json::json!({ "gallery_id": id }),
    )
    .await;
    Ok(deleted())
}

// FAQs

pub async fn list_faqs(
    state: &AppState,
    user: &AuthUser,
    query: ContentAdminQuery,
) -> AppResult<ApiResponse<ItemList<Faq>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = Faqs::find();
    if let Some(is_active) = query.is_active {
        finder = finder.filter(faqs::Column::IsActive.eq(is_active));
    }
    let finder = finder.order_by_asc(faqs::Column::DisplayOrder);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Faq::from)
        .collect();

    Ok(ApiResponse::success(
        "FAQs",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_faq(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    let faq = Faqs::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("FAQ", faq.into(), None))
}

pub async fn create_faq(
    state: &AppState,
    user: &AuthUser,
    payload: CreateFaqRequest,
) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    let category = payload.category.unwrap_or_default();
    let mut v = Validator::new();
    v.required("question", &payload.question, 300)
        .required("answer", &payload.answer, usize::MAX)
        .max_len("category", &category, 100);
    v.finish()?;

    let faq = faqs::ActiveModel {
        id: Set(Uuid::new_v4()),
        question: Set(payload.question.trim().to_string()),
        answer: Set(payload.answer),
        category: Set(category),
        display_order: Set(payload.display_order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user,
        "faq_create",
        "faqs",
        serde_json::json!({ "faq_id": faq.id }),
    )
    .await;

    Ok(ApiResponse::success("FAQ created", faq.into(), Some(Meta::empty())))
}

pub async fn update_faq(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateFaqRequest,
) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    let existing = Faqs::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut v = Validator::new();
    if let Some(question) = &payload.question {
        v.required("question", question, 300);
    }
    if let Some(answer) = &payload.answer {
        v.required("answer", answer, usize::MAX);
    }
    if let Some(category) = &payload.category {
        v.max_len("category", category, 100);
    }
    v.finish()?;

    let mut active: faqs::ActiveModel = existing.into();
    if let Some(question) = payload.question {
        active.question = Set(question.trim().to_string());
    }
    if let Some(answer) = payload.answer {
        active.answer = Set(answer);
    }
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(display_order) = payload.display_order {
        active.display_order = Set(display_order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    let faq = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "faq_update",
        "faqs",
        serde_json::json!({ "faq_id": faq.id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", faq.into(), Some(Meta::empty())))
}

pub async fn delete_faq(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Faqs::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    audit::record(
        &state.orm,
        user,
        "faq_delete",
        "faqs",
        serde_json::json!({ "faq_id": id }),
    )
    .await;
    Ok(deleted())
}
