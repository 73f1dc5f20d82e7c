//! Public pages. Each answers with the JSON context a front-end renders.

use std::net::SocketAddr;

use axum::{
    Form, Json, Router,
    extract::{ConnectInfo, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::site::{
        AboutPage, ContactForm, ContactPage, CoursesPage, HomePage, TeamPage, TestimonialForm,
        TestimonialsPage,
    },
    error::AppResult,
    models::{ContactMessage, Testimonial},
    response::ApiResponse,
    routes::params::CourseFilter,
    services::{contact_service, site_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about/", get(about))
        .route("/courses/", get(courses))
        .route("/team/", get(team))
        .route("/testimonials/", get(testimonials).post(submit_testimonial))
        .route("/contact/", get(contact).post(submit_contact))
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home page", body = ApiResponse<HomePage>)),
    tag = "Site"
)]
pub async fn home(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HomePage>>> {
    Ok(Json(site_service::home(&state).await?))
}

#[utoipa::path(
    get,
    path = "/about/",
    responses((status = 200, description = "About page", body = ApiResponse<AboutPage>)),
    tag = "Site"
)]
pub async fn about(State(state): State<AppState>) -> AppResult<Json<ApiResponse<AboutPage>>> {
    Ok(Json(site_service::about(&state).await?))
}

#[utoipa::path(
    get,
    path = "/courses/",
    params(CourseFilter),
    responses((status = 200, description = "Published courses with filters applied", body = ApiResponse<CoursesPage>)),
    tag = "Site"
)]
pub async fn courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> AppResult<Json<ApiResponse<CoursesPage>>> {
    Ok(Json(site_service::courses(&state, filter).await?))
}

#[utoipa::path(
    get,
    path = "/team/",
    responses((status = 200, description = "Instructor listing", body = ApiResponse<TeamPage>)),
    tag = "Site"
)]
pub async fn team(State(state): State<AppState>) -> AppResult<Json<ApiResponse<TeamPage>>> {
    Ok(Json(site_service::team(&state).await?))
}

#[utoipa::path(
    get,
    path = "/testimonials/",
    responses((status = 200, description = "Testimonials and their statistics", body = ApiResponse<TestimonialsPage>)),
    tag = "Site"
)]
pub async fn testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<TestimonialsPage>>> {
    Ok(Json(site_service::testimonials_page(&state).await?))
}

#[utoipa::path(
    post,
    path = "/testimonials/",
    request_body(content = TestimonialForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Review stored for moderation", body = ApiResponse<Testimonial>),
        (status = 422, description = "Validation failed")
    ),
    tag = "Site"
)]
pub async fn submit_testimonial(
    State(state): State<AppState>,
    Form(form): Form<TestimonialForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<Testimonial>>)> {
    let resp = site_service::submit_testimonial(&state, form).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/contact/",
    responses((status = 200, description = "Empty contact form", body = ApiResponse<ContactPage>)),
    tag = "Site"
)]
pub async fn contact(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ContactPage>>> {
    Ok(Json(site_service::contact_page(&state).await?))
}

#[utoipa::path(
    post,
    path = "/contact/",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Message stored", body = ApiResponse<ContactMessage>),
        (status = 422, description = "Validation failed, nothing stored")
    ),
    tag = "Site"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(form): Form<ContactForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<ContactMessage>>)> {
    let resp = contact_service::submit_contact(&state, form, Some(addr.ip())).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
