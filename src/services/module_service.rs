use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::catalog::{CreateModuleRequest, UpdateModuleRequest},
    entity::{
        courses::Entity as Courses,
        modules::{ActiveModel, Column, Entity as Modules},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::CourseModule,
    response::{ApiResponse, ItemList, Meta},
    routes::params::ModuleAdminQuery,
    state::AppState,
    validation::Validator,
};

async fn ensure_course(state: &AppState, course_id: Uuid) -> AppResult<()> {
    if Courses::find_by_id(course_id).one(&state.orm).await?.is_none() {
        return Err(AppError::BadRequest(format!("Unknown course {course_id}")));
    }
    Ok(())
}

pub async fn list_modules(
    state: &AppState,
    user: &AuthUser,
    query: ModuleAdminQuery,
) -> AppResult<ApiResponse<ItemList<CourseModule>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(course_id) = query.course_id {
        condition = condition.add(Column::CourseId.eq(course_id));
    }

    let finder = Modules::find()
        .filter(condition)
        .order_by_asc(Column::Position)
        .order_by_asc(Column::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(CourseModule::from)
        .collect();

    Ok(ApiResponse::success(
        "Modules",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_module(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<CourseModule>> {
    ensure_admin(user)?;
    let module = Modules::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Module", module.into(), None))
}

pub async fn create_module(
    state: &AppState,
    user: &AuthUser,
    payload: CreateModuleRequest,
) -> AppResult<ApiResponse<CourseModule>> {
    ensure_admin(user)?;
    let mut v = Validator::new();
    v.required("title", &payload.title, 200);
    v.finish()?;
    ensure_course(state, payload.course_id).await?;

    let module = ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(payload.course_id),
        title: Set(payload.title.trim().to_string()),
        position: Set(payload.order.unwrap_or(0)),
        description: Set(payload.description.unwrap_or_default()),
        duration_minutes: Set(payload.duration_minutes.unwrap_or(0)),
        video_url: Set(payload.video_url.unwrap_or_default()),
        attachment: Set(payload.attachment),
        is_free_preview: Set(payload.is_free_preview.unwrap_or(false)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user,
        "module_create",
        "modules",
        serde_json::json!({ "module_id": module.id, "course_id": module.course_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Module created",
        module.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_module(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateModuleRequest,
) -> AppResult<ApiResponse<CourseModule>> {
    ensure_admin(user)?;
    let existing = Modules::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(course_id) = payload.course_id {
        ensure_course(state, course_id).await?;
        active.course_id = Set(course_id);
    }
    if let Some(title) = payload.title {
        let mut v = Validator::new();
        v.required("title", &title, 200);
        v.finish()?;
        active.title = Set(title.trim().to_string());
    }
    if let Some(order) = payload.order {
        active.position = Set(order);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(duration_minutes) = payload.duration_minutes {
        active.duration_minutes = Set(duration_minutes);
    }
    if let Some(video_url) = payload.video_url {
        active.video_url = Set(video_url);
    }
    if let Some(attachment) = payload.attachment {
        active.attachment = Set(attachment);
    }
    if let Some(is_free_preview) = payload.is_free_preview {
        active.is_free_preview = Set(is_free_preview);
    }

    let module = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "module_update",
        "modules",
        serde_json::json!({ "module_id": module.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        module.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_module(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Modules::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user,
        "module_delete",
        "modules",
        serde_json::json!({ "module_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
