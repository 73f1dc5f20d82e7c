use chrono::Utc;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::catalog::{CreateCategoryRequest, UpdateCategoryRequest},
    entity::categories::{self, Column, Entity as Categories},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Category,
    response::{ApiResponse, ItemList, Meta},
    routes::params::CategoryAdminQuery,
    services::{catalog_service, icontains, search_term},
    state::AppState,
    validation::Validator,
};

pub async fn list_categories(
    state: &AppState,
    user: &AuthUser,
    query: CategoryAdminQuery,
) -> AppResult<ApiResponse<ItemList<Category>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(q) = search_term(query.q.as_ref()) {
        condition = condition.add(icontains(Column::Name, q));
    }
    if let Some(is_active) = query.is_active {
        condition = condition.add(Column::IsActive.eq(is_active));
    }

    let finder = Categories::find()
        .filter(condition)
        .order_by_asc(Column::Name);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    Ok(ApiResponse::success(
        "Categories",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let category = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Category", category.into(), None))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let mut v = Validator::new();
    v.required("name", &payload.name, 100);
    v.finish()?;

    let category = categories::Model {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        slug: payload.slug.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        image: payload.image,
        course_count: 0,
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now().into(),
    };

    let txn = state.orm.begin().await?;
    let category = catalog_service::save_category(&txn, category, true).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "category_create",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Category created",
        category.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let mut category = Categories::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Some(name) = payload.name {
        let mut v = Validator::new();
        v.required("name", &name, 100);
        v.finish()?;
        category.name = name.trim().to_string();
    }
    if let Some(slug) = payload.slug {
        category.slug = slug;
    }
    if let Some(description) = payload.description {
        category.description = description;
    }
    if let Some(image) = payload.image {
        category.image = image;
    }
    if let Some(is_active) = payload.is_active {
        category.is_active = is_active;
    }

    let category = catalog_service::save_category(&txn, category, false).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "category_update",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        category.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user,
        "category_delete",
        "categories",
        serde_json::json!({ "category_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
