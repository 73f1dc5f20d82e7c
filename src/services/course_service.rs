use chrono::Utc;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::catalog::{BulkIdsRequest, CreateCourseRequest, UpdateCourseRequest},
    entity::{
        courses::{self, Column, CourseLevel, CourseStatus, Entity as Courses, MAX_PRICE},
        instructors,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Course,
    response::{ApiResponse, BulkResult, ItemList, Meta},
    routes::params::CourseAdminQuery,
    services::{catalog_service, icontains, search_term},
    state::AppState,
    validation::Validator,
};

fn check_price(v: &mut Validator, field: &str, value: i64) {
    if value < 0 {
        v.add(field, "Ensure this value is greater than or equal to 0.");
    } else if value > MAX_PRICE {
        v.add(field, format!("Ensure this value is less than or equal to {MAX_PRICE}."));
    }
}

fn validate_course(course: &courses::Model) -> AppResult<()> {
    let mut v = Validator::new();
    v.required("title", &course.title, 200)
        .required("short_description", &course.short_description, 300)
        .required("full_description", &course.full_description, usize::MAX)
        .required("thumbnail", &course.thumbnail, 500);
    check_price(&mut v, "price", course.price);
    if let Some(discount) = course.discount_price {
        check_price(&mut v, "discount_price", discount);
    }
    if course.duration_hours < 0.0 {
        v.add("duration_hours", "Ensure this value is greater than or equal to 0.");
    }
    if course.max_students < 0 {
        v.add("max_students", "Ensure this value is greater than or equal to 0.");
    }
    v.finish()
}

pub async fn list_courses(
    state: &AppState,
    user: &AuthUser,
    query: CourseAdminQuery,
) -> AppResult<ApiResponse<ItemList<Course>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(q) = search_term(query.q.as_ref()) {
        condition = condition.add(
            Condition::any()
                .add(icontains(Column::Title, q))
                .add(icontains(Column::ShortDescription, q))
                .add(icontains(instructors::Column::Name, q)),
        );
    }
    if let Some(category_id) = query.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }
    if let Some(is_featured) = query.is_featured {
        condition = condition.add(Column::IsFeatured.eq(is_featured));
    }
    if let Some(is_published) = query.is_published {
        condition = condition.add(Column::IsPublished.eq(is_published));
    }
    if let Some(level) = query.level {
        condition = condition.add(Column::Level.eq(level));
    }
    if let Some(status) = query.status {
        condition = condition.add(Column::Status.eq(status));
    }

    let finder = Courses::find()
        .join(JoinType::LeftJoin, courses::Relation::Instructors.def())
        .filter(condition)
        .order_by_desc(Column::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Course::from)
        .collect();

    Ok(ApiResponse::success(
        "Courses",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_course(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Course>> {
    ensure_admin(user)?;
    let course = Courses::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Course", course.into(), None))
}

pub async fn create_course(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCourseRequest,
) -> AppResult<ApiResponse<Course>> {
    ensure_admin(user)?;
    let now = Utc::now().into();
    let course = courses::Model {
        id: Uuid::new_v4(),
        title: payload.title.trim().to_string(),
        slug: payload.slug.unwrap_or_default(),
        short_description: payload.short_description,
        full_description: payload.full_description,
        category_id: payload.category_id,
        instructor_id: payload.instructor_id,
        price: payload.price,
        discount_price: payload.discount_price,
        level: payload.level.unwrap_or(CourseLevel::Beginner),
        duration_hours: payload.duration_hours,
        max_students: payload.max_students.unwrap_or(30),
        enrolled_students: 0,
        thumbnail: payload.thumbnail,
        featured_image: payload.featured_image,
        rating: 0.0,
        rating_count: 0,
        is_featured: payload.is_featured.unwrap_or(false),
        is_published: payload.is_published.unwrap_or(true),
        status: payload.status.unwrap_or(CourseStatus::Published),
        created_at: now,
        updated_at: now,
        published_date: None,
    };
    validate_course(&course)?;

    let txn = state.orm.begin().await?;
    let course = catalog_service::save_course(&txn, course, None).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "course_create",
        "courses",
        serde_json::json!({ "course_id": course.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Course created",
        course.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_course(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCourseRequest,
) -> AppResult<ApiResponse<Course>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let existing = Courses::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut course = existing.clone();
    if let Some(title) = payload.title {
        course.title = title.trim().to_string();
    }
    if let Some(slug) = payload.slug {
        course.slug = slug;
    }
    if let Some(short_description) = payload.short_description {
        course.short_description = short_description;
    }
    if let Some(full_description) = payload.full_description {
        course.full_description = full_description;
    }
    if let Some(category_id) = payload.category_id {
        course.category_id = category_id;
    }
    if let Some(instructor_id) = payload.instructor_id {
        course.instructor_id = instructor_id;
    }
    if let Some(price) = payload.price {
        course.price = price;
    }
    if let Some(discount_price) = payload.discount_price {
        course.discount_price = discount_price;
    }
    if let Some(level) = payload.level {
        course.level = level;
    }
    if let Some(duration_hours) = payload.duration_hours {
        course.duration_hours = duration_hours;
    }
    if let Some(max_students) = payload.max_students {
        course.max_students = max_students;
    }
    if let Some(thumbnail) = payload.thumbnail {
        course.thumbnail = thumbnail;
    }
    if let Some(featured_image) = payload.featured_image {
        course.featured_image = featured_image;
    }
    if let Some(is_featured) = payload.is_featured {
        course.is_featured = is_featured;
    }
    if let Some(is_published) = payload.is_published {
        course.is_published = is_published;
    }
    if let Some(status) = payload.status {
        course.status = status;
    }
    validate_course(&course)?;

    let course = catalog_service::save_course(&txn, course, Some(&existing)).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "course_update",
        "courses",
        serde_json::json!({ "course_id": course.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        course.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_course(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let course = catalog_service::delete_course(&txn, id).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "course_delete",
        "courses",
        serde_json::json!({ "course_id": course.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

#[derive(Debug, Clone, Copy)]
enum BulkAction {
    Publish,
    Feature,
}

async fn apply_bulk(
    state: &AppState,
    user: &AuthUser,
    ids: &[Uuid],
    action: BulkAction,
) -> AppResult<u64> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let existing = Courses::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(&txn)
        .await?;

    let mut updated = 0;
    for course in existing {
        let mut next = course.clone();
        match action {
            BulkAction::Publish => next.is_published = true,
            BulkAction::Feature => next.is_featured = true,
        }
        catalog_service::save_course(&txn, next, Some(&course)).await?;
        updated += 1;
    }
    txn.commit().await?;
    Ok(updated)
}

pub async fn publish_courses(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<BulkResult>> {
    let updated = apply_bulk(state, user, &payload.ids, BulkAction::Publish).await?;
    audit::record(
        &state.orm,
        user,
        "course_publish",
        "courses",
        serde_json::json!({ "ids": payload.ids, "updated": updated }),
    )
    .await;
    Ok(ApiResponse::success(
        format!("{updated} courses published."),
        BulkResult { updated },
        Some(Meta::empty()),
    ))
}

pub async fn feature_courses(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<BulkResult>> {
    let updated = apply_bulk(state, user, &payload.ids, BulkAction::Feature).await?;
    audit::record(
        &state.orm,
        user,
        "course_feature",
        "courses",
        serde_json::json!({ "ids": payload.ids, "updated": updated }),
    )
    .await;
    Ok(ApiResponse::success(
        format!("{updated} courses marked as featured."),
        BulkResult { updated },
        Some(Meta::empty()),
    ))
}

pub async fn duplicate_courses(
    state: &AppState,
    user: &AuthUser,
    payload: BulkIdsRequest,
) -> AppResult<ApiResponse<ItemList<Course>>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let originals = Courses::find()
        .filter(Column::Id.is_in(payload.ids.iter().copied()))
        .order_by_asc(Column::CreatedAt)
        .all(&txn)
        .await?;

    let now = Utc::now().into();
    let mut copies = Vec::with_capacity(originals.len());
    for original in &originals {
        let copy = catalog_service::duplicate_of(original, now);
        copies.push(catalog_service::save_course(&txn, copy, None).await?);
    }
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "course_duplicate",
        "courses",
        serde_json::json!({ "ids": payload.ids, "created": copies.iter().map(|c| c.id).collect::<Vec<_>>() }),
    )
    .await;

    let count = copies.len();
    Ok(ApiResponse::success(
        format!("{count} courses duplicated."),
        ItemList::new(copies.into_iter().map(Course::from).collect()),
        Some(Meta::total(count as i64)),
    ))
}
