use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::{
        catalog::BulkIdsRequest,
        content::{CreateTestimonialRequest, UpdateTestimonialRequest},
    },
    entity::{
        courses::{Column as CourseCol, Entity as Courses},
        testimonials::{self, ActiveModel, Column, Entity as Testimonials, MAX_RATING},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Testimonial,
    response::{ApiResponse, BulkResult, ItemList, Meta},
    routes::params::TestimonialAdminQuery,
    services::{catalog_service, icontains, search_term},
    state::AppState,
    validation::Validator,
};

/// Fields shared by the admin form and the public submission form.
pub struct NewTestimonial {
    pub name: String,
    pub profession: String,
    pub company: String,
    pub photo: Option<String>,
    pub message: String,
    pub course_id: Option<Uuid>,
    pub rating: i32,
    pub is_featured: bool,
    pub display_order: i32,
    pub is_active: bool,
    pub graduation_year: Option<i32>,
    pub verified: bool,
}

pub fn validate_new(new: &NewTestimonial) -> AppResult<()> {
    let mut v = Validator::new();
    v.required("name", &new.name, 100)
        .max_len("profession", &new.profession, 100)
        .max_len("company", &new.company, 100)
        .required("message", &new.message, usize::MAX)
        .rating("rating", new.rating);
    v.finish()
}

/// Insert a testimonial. An active one linked to a course folds its rating into the
/// course's running average; inactive ones wait for [`activate`].
pub async fn insert_testimonial<C: ConnectionTrait>(
    conn: &C,
    new: NewTestimonial,
) -> AppResult<testimonials::Model> {
    validate_new(&new)?;
    if let Some(course_id) = new.course_id {
        if Courses::find_by_id(course_id).one(conn).await?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown course {course_id}")));
        }
    }

    let now = Utc::now();
    let testimonial = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(new.name.trim().to_string()),
        profession: Set(new.profession.trim().to_string()),
        company: Set(new.company.trim().to_string()),
        photo: Set(new.photo),
        message: Set(new.message.trim().to_string()),
        course_id: Set(new.course_id),
        rating: Set(new.rating),
        is_featured: Set(new.is_featured),
        display_order: Set(new.display_order),
        is_active: Set(new.is_active),
        graduation_year: Set(new.graduation_year),
        verified: Set(new.verified),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    if testimonial.is_active {
        fold_rating(conn, &testimonial).await?;
    }

    Ok(testimonial)
}

async fn fold_rating<C: ConnectionTrait>(
    conn: &C,
    testimonial: &testimonials::Model,
) -> AppResult<()> {
    if let Some(course_id) = testimonial.course_id {
        catalog_service::update_rating(conn, course_id, testimonial.rating).await?;
    }
    Ok(())
}

/// Course id for a public form's course slug; blank means none.
pub async fn course_id_for_slug<C: ConnectionTrait>(
    conn: &C,
    slug: &str,
) -> AppResult<Option<Uuid>> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Ok(None);
    }
    let course = Courses::find()
        .filter(CourseCol::Slug.eq(slug))
        .filter(CourseCol::IsPublished.eq(true))
        .one(conn)
        .await?;
    match course {
        Some(c) => Ok(Some(c.id)),
        None => {
            let mut v = Validator::new();
            v.add(
                "course",
                "Select a valid choice. That choice is not one of the available choices.",
            );
            v.finish()?;
            Ok(None)
        }
    }
}

pub async fn list_testimonials(
    state: &AppState,
    user: &AuthUser,
    query: TestimonialAdminQuery,
) -> AppResult<ApiResponse<ItemList<Testimonial>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(q) = search_term(query.q.as_ref()) {
        condition = condition.add(
            Condition::any()
                .add(icontains(Column::Name, q))
                .add(icontains(Column::Profession, q))
                .add(icontains(Column::Company, q))
                .add(icontains(Column::Message, q)),
        );
    }
    if let Some(is_featured) = query.is_featured {
        condition = condition.add(Column::IsFeatured.eq(is_featured));
    }
    if let Some(is_active) = query.is_active {
        condition = condition.add(Column::IsActive.eq(is_active));
    }
    if let Some(verified) = query.verified {
        condition = condition.add(Column::Verified.eq(verified));
    }
    if let Some(rating) = query.rating {
        condition = condition.add(Column::Rating.eq(rating));
    }

    let finder = Testimonials::find()
        .filter(condition)
        .order_by_asc(Column::DisplayOrder)
        .order_by_desc(Column::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Testimonial::from)
        .collect();

    Ok(ApiResponse::success(
        "Testimonials",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_testimonial(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Testimonial>> {
    ensure_admin(user)?;
    let testimonial = Testimonials::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Testimonial", testimonial.into(), None))
}

pub async fn create_testimonial(
    state: &AppState,
    user: &AuthUser,
    payload: CreateTestimonialRequest,
) -> AppResult<ApiResponse<Testimonial>> {
    ensure_admin(user)?;
    let new = NewTestimonial {
        name: payload.name,
        profession: payload.profession.unwrap_or_default(),
        company: payload.company.unwrap_or_default(),
        photo: payload.photo,
        message: payload.message,
        course_id: payload.course_id,
        rating: payload.rating.unwrap_or(MAX_RATING),
        is_featured: payload.is_featured.unwrap_or(false),
        display_order: payload.display_order.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        graduation_year: payload.graduation_year,
        verified: payload.verified.unwrap_or(false),
    };

    let txn = state.orm.begin().await?;
    let testimonial = insert_testimonial(&txn, new).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "testimonial_create",
        "testimonials",
        serde_json::json!({ "testimonial_id": testimonial.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Testimonial created",
        testimonial.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_testimonial(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateTestimonialRequest,
) -> AppResult<ApiResponse<Testimonial>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let existing = Testimonials::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;
    let was_active = existing.is_active;

    let mut v = Validator::new();
    if let Some(name) = &payload.name {
        v.required("name", name, 100);
    }
    if let Some(message) = &payload.message {
        v.required("message", message, usize::MAX);
    }
    if let Some(rating) = payload.rating {
        v.rating("rating", rating);
    }
    v.finish()?;

    if let Some(Some(course_id)) = payload.course_id {
        if Courses::find_by_id(course_id).one(&txn).await?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown course {course_id}")));
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(profession) = payload.profession {
        active.profession = Set(profession);
    }
    if let Some(company) = payload.company {
        active.company = Set(company);
    }
    if let Some(photo) = payload.photo {
        active.photo = Set(photo);
    }
    if let Some(message) = payload.message {
        active.message = Set(message);
    }
    if let Some(course_id) = payload.course_id {
        active.course_id = Set(course_id);
    }
    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }
    if let Some(is_featured) = payload.is_featured {
        active.is_featured = Set(is_featured);
    }
    if let Some(display_order) = payload.display_order {
        active.display_order = Set(display_order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(graduation_year) = payload.graduation_year {
        active.graduation_year = Set(graduation_year);
    }
    if let Some(verified) = payload.verified {
        active.verified = Set(verified);
    }
    active.updated_at = Set(Utc::now().into());

    let testimonial = active.update(&txn).await?;
    if !was_active && testimonial.is_active {
        fold_rating(&txn, &testimonial).await?;
    }
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "testimonial_update",
        "testimonials",
        serde_json::json!({ "testimonial_id": testimonial.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        testimonial.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_testimonial(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Testimonials::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user,
        "testimonial_delete",
        "testimonials",
        serde_json::json!({ "testimonial_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn set_flag(
    state: &AppState,
    user: &AuthUser,
    ids: &[Uuid],
    column: Column,
    action: &str,
) -> AppResult<u64> {
    ensure_admin(user)?;
    let now: DateTime<FixedOffset> = Utc::now().into();
    let result = Testimonials::update_many()
        .col_expr(column, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(now))
        .filter(Column::Id.is_in(ids.iter().copied()))
        .exec(&state.orm)
        .await?;

    audit::record(
        &state.orm,
        user,
        action,
        "testimonials",
        serde_json::json!({ "ids": ids, "updated": result.rows_affected }),
    )
    .await;

    Ok(result.rows_affected)
}

pub async fn mark_featured(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<BulkResult>> {
    let updated = set_flag(state, user, &payload.ids, Column::IsFeatured, "testimonial_feature").await?;
    Ok(ApiResponse::success(
        format!("{updated} testimonials marked as featured."),
        BulkResult { updated },
        Some(Meta::empty()),
    ))
}

pub async fn mark_verified(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<BulkResult>> {
    let updated = set_flag(state, user, &payload.ids, Column::Verified, "testimonial_verify").await?;
    Ok(ApiResponse::success(
        format!("{updated} testimonials verified."),
        BulkResult { updated },
        Some(Meta::empty()),
    ))
}

/// Publish testimonials. Each one switching from inactive to active counts toward its
/// course's rating at this point.
pub async fn activate(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<BulkResult>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let pending = Testimonials::find()
        .filter(Column::Id.is_in(payload.ids.iter().copied()))
        .filter(Column::IsActive.eq(false))
        .all(&txn)
        .await?;

    let now: DateTime<FixedOffset> = Utc::now().into();
    let updated = Testimonials::update_many()
        .col_expr(Column::IsActive, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(now))
        .filter(Column::Id.is_in(payload.ids.iter().copied()))
        .exec(&txn)
        .await?
        .rows_affected;
    for testimonial in &pending {
        fold_rating(&txn, testimonial).await?;
    }
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "testimonial_activate",
        "testimonials",
        serde_json::json!({ "ids": payload.ids, "updated": updated }),
    )
    .await;

    Ok(ApiResponse::success(
        format!("{updated} testimonials activated."),
        BulkResult { updated },
        Some(Meta::empty()),
    ))
}
