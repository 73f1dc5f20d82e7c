#![allow(dead_code)]

use elearning_site::{
    config::AppConfig,
    db::create_schema,
    dto::catalog::{CreateCategoryRequest, CreateCourseRequest},
    entity::users::{ROLE_ADMIN, ROLE_STUDENT},
    middleware::auth::AuthUser,
    models::{Category, Course},
    services::{auth_service, category_service, course_service},
    state::AppState,
};
use sea_orm::{ConnectOptions, Database};

/// Fresh in-memory database with every table created.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // One connection: each new connection to `:memory:` would see an empty database.
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(opts).await?;
    create_schema(&orm).await?;

    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        token_ttl_hours: 1,
    };
    Ok(AppState::new(orm, config))
}

pub async fn admin(state: &AppState) -> anyhow::Result<AuthUser> {
    let email = format!("admin-{}@example.com", uuid::Uuid::new_v4().simple());
    let user = auth_service::create_user(&state.orm, &email, "admin-password", None, ROLE_ADMIN)
        .await?;
    Ok(AuthUser::admin(user.id))
}

pub async fn student_user(state: &AppState) -> anyhow::Result<AuthUser> {
    let email = format!("student-{}@example.com", uuid::Uuid::new_v4().simple());
    let user =
        auth_service::create_user(&state.orm, &email, "student-password", None, ROLE_STUDENT)
            .await?;
    Ok(AuthUser::student(user.id))
}

pub async fn category(state: &AppState, admin: &AuthUser, name: &str) -> anyhow::Result<Category> {
    let resp = category_service::create_category(
        state,
        admin,
        CreateCategoryRequest {
            name: name.into(),
            slug: None,
            description: None,
            image: None,
            is_active: Some(true),
        },
    )
    .await?;
    Ok(resp.data.expect("category"))
}

pub fn course_request(title: &str) -> CreateCourseRequest {
    CreateCourseRequest {
        title: title.into(),
        slug: None,
        short_description: format!("{title} short"),
        full_description: format!("{title} in depth"),
        category_id: None,
        instructor_id: None,
        price: 10_000,
        discount_price: None,
        level: None,
        duration_hours: 6.0,
        max_students: None,
        thumbnail: "/static/img/course.jpg".into(),
        featured_image: None,
        is_featured: None,
        is_published: None,
        status: None,
    }
}

pub async fn course(
    state: &AppState,
    admin: &AuthUser,
    req: CreateCourseRequest,
) -> anyhow::Result<Course> {
    let resp = course_service::create_course(state, admin, req).await?;
    Ok(resp.data.expect("course"))
}
