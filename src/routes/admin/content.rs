use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        catalog::BulkIdsRequest,
        content::{
            CreateBannerRequest, CreateFaqRequest, CreateGalleryRequest, CreateServiceRequest,
            CreateTestimonialRequest, SiteSettingsRequest, UpdateBannerRequest, UpdateFaqRequest,
            UpdateGalleryRequest, UpdateMessageStatusRequest, UpdateServiceRequest,
            UpdateTestimonialRequest,
        },
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Banner, ContactMessage, Faq, GalleryImage, Service, SiteSetting, Testimonial},
    response::{ApiResponse, BulkResult, ItemList},
    routes::params::{ContactAdminQuery, ContentAdminQuery, TestimonialAdminQuery},
    services::{contact_service, content_service, settings_service, testimonial_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/testimonials", get(list_testimonials).post(create_testimonial))
        .route(
            "/testimonials/{id}",
            get(get_testimonial)
                .put(update_testimonial)
                .delete(delete_testimonial),
        )
        .route("/testimonials/actions/feature", post(feature_testimonials))
        .route("/testimonials/actions/verify", post(verify_testimonials))
        .route("/testimonials/actions/activate", post(activate_testimonials))
        .route("/banners", get(list_banners).post(create_banner))
        .route(
            "/banners/{id}",
            get(get_banner).put(update_banner).delete(delete_banner),
        )
        .route("/services", get(list_services).post(create_service))
        .route(
            "/services/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/gallery", get(list_gallery).post(create_gallery_image))
        .route(
            "/gallery/{id}",
            get(get_gallery_image)
                .put(update_gallery_image)
                .delete(delete_gallery_image),
        )
        .route("/faqs", get(list_faqs).post(create_faq))
        .route("/faqs/{id}", get(get_faq).put(update_faq).delete(delete_faq))
        .route("/settings", get(get_settings).put(upsert_settings))
        .route("/contact-messages", get(list_messages))
        .route("/contact-messages/{id}", get(get_message).delete(delete_message))
        .route("/contact-messages/{id}/status", patch(update_message_status))
}

#[utoipa::path(
    get,
    path = "/api/admin/testimonials",
    params(TestimonialAdminQuery),
    responses(
        (status = 200, description = "List testimonials", body = ApiResponse<ItemList<Testimonial>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<TestimonialAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Testimonial>>>> {
    let resp = testimonial_service::list_testimonials(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Get testimonial", body = ApiResponse<Testimonial>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_testimonial(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Testimonial>>> {
    let resp = testimonial_service::get_testimonial(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials",
    request_body = CreateTestimonialRequest,
    responses(
        (status = 201, description = "Create testimonial", body = ApiResponse<Testimonial>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTestimonialRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Testimonial>>)> {
    let resp = testimonial_service::create_testimonial(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    request_body = UpdateTestimonialRequest,
    responses(
        (status = 200, description = "Update testimonial", body = ApiResponse<Testimonial>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTestimonialRequest>,
) -> AppResult<Json<ApiResponse<Testimonial>>> {
    let resp = testimonial_service::update_testimonial(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Delete testimonial"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = testimonial_service::delete_testimonial(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials/actions/feature",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Mark selected testimonials as featured", body = ApiResponse<BulkResult>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn feature_testimonials(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BulkIdsRequest>,
) -> AppResult<Json<ApiResponse<BulkResult>>> {
    let resp = testimonial_service::mark_featured(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials/actions/verify",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Mark selected testimonials as verified", body = ApiResponse<BulkResult>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn verify_testimonials(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BulkIdsRequest>,
) -> AppResult<Json<ApiResponse<BulkResult>>> {
    let resp = testimonial_service::mark_verified(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials/actions/activate",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Activate selected testimonials", body = ApiResponse<BulkResult>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn activate_testimonials(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BulkIdsRequest>,
) -> AppResult<Json<ApiResponse<BulkResult>>> {
    let resp = testimonial_service::activate(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/banners",
    params(ContentAdminQuery),
    responses(
        (status = 200, description = "List banners", body = ApiResponse<ItemList<Banner>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_banners(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ContentAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Banner>>>> {
    let resp = content_service::list_banners(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "Get banner", body = ApiResponse<Banner>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let resp = content_service::get_banner(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/banners",
    request_body = CreateBannerRequest,
    responses(
        (status = 201, description = "Create banner", body = ApiResponse<Banner>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBannerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Banner>>)> {
    let resp = content_service::create_banner(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner ID")),
    request_body = UpdateBannerRequest,
    responses(
        (status = 200, description = "Update banner", body = ApiResponse<Banner>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBannerRequest>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let resp = content_service::update_banner(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "Delete banner"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_banner(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/services",
    params(ContentAdminQuery),
    responses(
        (status = 200, description = "List services", body = ApiResponse<ItemList<Service>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_services(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ContentAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Service>>>> {
    let resp = content_service::list_services(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Get service", body = ApiResponse<Service>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let resp = content_service::get_service(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Create service", body = ApiResponse<Service>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_service(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Service>>)> {
    let resp = content_service::create_service(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Update service", body = ApiResponse<Service>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let resp = content_service::update_service(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Delete service"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_service(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/gallery",
    params(ContentAdminQuery),
    responses(
        (status = 200, description = "List gallery images", body = ApiResponse<ItemList<GalleryImage>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_gallery(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ContentAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<GalleryImage>>>> {
    let resp = content_service::list_gallery(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/gallery/{id}",
    params(("id" = Uuid, Path, description = "Gallery image ID")),
    responses(
        (status = 200, description = "Get gallery image", body = ApiResponse<GalleryImage>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_gallery_image(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<GalleryImage>>> {
    let resp = content_service::get_gallery_image(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    request_body = CreateGalleryRequest,
    responses(
        (status = 201, description = "Create gallery image", body = ApiResponse<GalleryImage>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_gallery_image(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateGalleryRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<GalleryImage>>)> {
    let resp = content_service::create_gallery_image(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/gallery/{id}",
    params(("id" = Uuid, Path, description = "Gallery image ID")),
    request_body = UpdateGalleryRequest,
    responses(
        (status = 200, description = "Update gallery image", body = ApiResponse<GalleryImage>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_gallery_image(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGalleryRequest>,
) -> AppResult<Json<ApiResponse<GalleryImage>>> {
    let resp = content_service::update_gallery_image(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/gallery/{id}",
    params(("id" = Uuid, Path, description = "Gallery image ID")),
    responses(
        (status = 200, description = "Delete gallery image"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_gallery_image(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/faqs",
    params(ContentAdminQuery),
    responses(
        (status = 200, description = "List FAQs", body = ApiResponse<ItemList<Faq>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_faqs(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ContentAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Faq>>>> {
    let resp = content_service::list_faqs(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "Get FAQ", body = ApiResponse<Faq>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Faq>>> {
    let resp = content_service::get_faq(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/faqs",
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "Create FAQ", body = ApiResponse<Faq>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateFaqRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Faq>>)> {
    let resp = content_service::create_faq(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "Update FAQ", body = ApiResponse<Faq>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFaqRequest>,
) -> AppResult<Json<ApiResponse<Faq>>> {
    let resp = content_service::update_faq(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "Delete FAQ"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_faq(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses(
        (status = 200, description = "Site settings", body = ApiResponse<SiteSetting>),
        (status = 404, description = "Settings have not been saved yet"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SiteSetting>>> {
    let resp = settings_service::get_settings(&state, &user).await?;
    Ok(Json(resp))
}

/// There is exactly one settings row; this creates it or replaces it.
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    request_body = SiteSettingsRequest,
    responses(
        (status = 200, description = "Save site settings", body = ApiResponse<SiteSetting>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn upsert_settings(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SiteSettingsRequest>,
) -> AppResult<Json<ApiResponse<SiteSetting>>> {
    let resp = settings_service::upsert_settings(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-messages",
    params(ContactAdminQuery),
    responses(
        (status = 200, description = "List contact messages", body = ApiResponse<ItemList<ContactMessage>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ContactAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<ContactMessage>>>> {
    let resp = contact_service::list_messages(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-messages/{id}",
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Get contact message", body = ApiResponse<ContactMessage>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ContactMessage>>> {
    let resp = contact_service::get_message(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contact-messages/{id}",
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Delete contact message"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = contact_service::delete_message(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/contact-messages/{id}/status",
    params(("id" = Uuid, Path, description = "Message ID")),
    request_body = UpdateMessageStatusRequest,
    responses(
        (status = 200, description = "Update message status", body = ApiResponse<ContactMessage>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_message_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMessageStatusRequest>,
) -> AppResult<Json<ApiResponse<ContactMessage>>> {
    let resp = contact_service::update_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
