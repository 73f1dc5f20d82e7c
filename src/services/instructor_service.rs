use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::{
        catalog::BulkIdsRequest,
        people::{CreateInstructorRequest, UpdateInstructorRequest},
    },
    entity::instructors::{self, ActiveModel, Column, Entity as Instructors},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Instructor,
    response::{ApiResponse, BulkResult, ItemList, Meta},
    routes::params::InstructorAdminQuery,
    services::{icontains, search_term},
    state::AppState,
    validation::Validator,
};

fn validate_contact(v: &mut Validator, email: &str) {
    if !email.trim().is_empty() {
        v.email("email", email);
    }
}

pub async fn list_instructors(
    state: &AppState,
    user: &AuthUser,
    query: InstructorAdminQuery,
) -> AppResult<ApiResponse<ItemList<Instructor>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(q) = search_term(query.q.as_ref()) {
        condition = condition.add(
            Condition::any()
                .add(icontains(Column::Name, q))
                .add(icontains(Column::Designation, q))
                .add(icontains(Column::Bio, q))
                .add(icontains(Column::Experience, q)),
        );
    }
    if let Some(is_featured) = query.is_featured {
        condition = condition.add(Column::IsFeatured.eq(is_featured));
    }

    let finder = Instructors::find()
        .filter(condition)
        .order_by_asc(Column::DisplayOrder)
        .order_by_asc(Column::Name);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Instructor::from)
        .collect();

    Ok(ApiResponse::success(
        "Instructors",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_instructor(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Instructor>> {
    ensure_admin(user)?;
    let instructor = Instructors::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Instructor", instructor.into(), None))
}

pub async fn create_instructor(
    state: &AppState,
    user: &AuthUser,
    payload: CreateInstructorRequest,
) -> AppResult<ApiResponse<Instructor>> {
    ensure_admin(user)?;
    let email = payload.email.unwrap_or_default();
    let mut v = Validator::new();
    v.required("name", &payload.name, 100)
        .required("designation", &payload.designation, 100);
    validate_contact(&mut v, &email);
    v.finish()?;

    let instructor = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        designation: Set(payload.designation.trim().to_string()),
        experience: Set(payload.experience.unwrap_or_default()),
        bio: Set(payload.bio.unwrap_or_default()),
        profile_picture: Set(payload.profile_picture),
        email: Set(email),
        phone: Set(payload.phone.unwrap_or_default()),
        telegram: Set(payload.telegram.unwrap_or_default()),
        twitter: Set(payload.twitter.unwrap_or_default()),
        instagram: Set(payload.instagram.unwrap_or_default()),
        linkedin: Set(payload.linkedin.unwrap_or_default()),
        is_featured: Set(payload.is_featured.unwrap_or(false)),
        display_order: Set(payload.display_order.unwrap_or(0)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user,
        "instructor_create",
        "instructors",
        serde_json::json!({ "instructor_id": instructor.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Instructor created",
        instructor.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_instructor(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateInstructorRequest,
) -> AppResult<ApiResponse<Instructor>> {
    ensure_admin(user)?;
    let existing = Instructors::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut v = Validator::new();
    if let Some(name) = &payload.name {
        v.required("name", name, 100);
    }
    if let Some(designation) = &payload.designation {
        v.required("designation", designation, 100);
    }
    if let Some(email) = &payload.email {
        validate_contact(&mut v, email);
    }
    v.finish()?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(designation) = payload.designation {
        active.designation = Set(designation.trim().to_string());
    }
    if let Some(experience) = payload.experience {
        active.experience = Set(experience);
    }
    if let Some(bio) = payload.bio {
        active.bio = Set(bio);
    }
    if let Some(profile_picture) = payload.profile_picture {
        active.profile_picture = Set(profile_picture);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(telegram) = payload.telegram {
        active.telegram = Set(telegram);
    }
    if let Some(twitter) = payload.twitter {
        active.twitter = Set(twitter);
    }
    if let Some(instagram) = payload.instagram {
        active.instagram = Set(instagram);
    }
    if let Some(linkedin) = payload.linkedin {
        active.linkedin = Set(linkedin);
    }
    if let Some(is_featured) = payload.is_featured {
        active.is_featured = Set(is_featured);
    }
    if let Some(display_order) = payload.display_order {
        active.display_order = Set(display_order);
    }

    let instructor = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "instructor_update",
        "instructors",
        serde_json::json!({ "instructor_id": instructor.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        instructor.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_instructor(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Instructors::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user,
        "instructor_delete",
        "instructors",
        serde_json::json!({ "instructor_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn mark_featured(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<BulkResult>> {
    ensure_admin(user)?;
    let result = Instructors::update_many()
        .col_expr(Column::IsFeatured, Expr::value(true))
        .filter(Column::Id.is_in(payload.ids.iter().copied()))
        .exec(&state.orm)
        .await?;
    let updated = result.rows_affected;

    audit::record(
        &state.orm,
        user,
        "instructor_feature",
        "instructors",
        serde_json::json!({ "ids": payload.ids, "updated": updated }),
    )
    .await;

    Ok(ApiResponse::success(
        format!("{updated} instructors marked as featured."),
        BulkResult { updated },
        Some(Meta::empty()),
    ))
}

pub async fn duplicate_instructors(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<ItemList<Instructor>>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let originals = Instructors::find()
        .filter(Column::Id.is_in(payload.ids.iter().copied()))
        .order_by_asc(Column::DisplayOrder)
        .all(&txn)
        .await?;

    let mut copies = Vec::with_capacity(originals.len());
    for original in originals {
        let copy = instructors::Model {
            id: Uuid::new_v4(),
            name: format!("{} (Copy)", original.name),
            created_at: Utc::now().into(),
            ..original
        };
        copies.push(copy.into_active_model().reset_all().insert(&txn).await?);
    }
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "instructor_duplicate",
        "instructors",
        serde_json::json!({ "ids": payload.ids, "created": copies.iter().map(|c| c.id).collect::<Vec<_>>() }),
    )
    .await;

    let count = copies.len();
    Ok(ApiResponse::success(
        format!("{count} instructors duplicated."),
        ItemList::new(copies.into_iter().map(Instructor::from).collect()),
        Some(Meta::total(count as i64)),
    ))
}
