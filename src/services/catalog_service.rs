//! Write paths for categories and courses.
//!
//! Every course write goes through [`save_course`] or [`delete_course`] so that slugs,
//! `published_date` and the denormalized `Category.course_count` stay consistent.

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    entity::{
        categories::{self, Column as CategoryCol, Entity as Categories},
        courses::{self, Column as CourseCol, Entity as Courses},
        instructors::Entity as Instructors,
    },
    error::{AppError, AppResult},
    slug::{slugify, with_suffix},
};

/// First free slug starting from `base`, skipping the row being saved.
pub async fn unique_slug<C, E>(
    conn: &C,
    slug_col: E::Column,
    id_col: E::Column,
    base: &str,
    exclude: Option<Uuid>,
) -> AppResult<String>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    let mut candidate = base.to_string();
    let mut n = 1;
    loop {
        let mut finder = E::find().filter(slug_col.eq(candidate.clone()));
        if let Some(id) = exclude {
            finder = finder.filter(id_col.ne(id));
        }
        if finder.count(conn).await? == 0 {
            return Ok(candidate);
        }
        n += 1;
        candidate = with_suffix(base, n);
    }
}

/// Slug for a row: an explicit one must be free, a derived one gets a numeric suffix.
async fn resolve_slug<C, E>(
    conn: &C,
    slug_col: E::Column,
    id_col: E::Column,
    requested: &str,
    source: &str,
    fallback: &str,
    id: Uuid,
) -> AppResult<String>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    let requested = slugify(requested);
    if !requested.is_empty() {
        let taken = E::find()
            .filter(slug_col.eq(requested.clone()))
            .filter(id_col.ne(id))
            .count(conn)
            .await?;
        if taken > 0 {
            return Err(AppError::Conflict(format!("slug '{requested}' is already in use")));
        }
        return Ok(requested);
    }

    let mut base = slugify(source);
    if base.is_empty() {
        base = fallback.to_string();
    }
    unique_slug::<C, E>(conn, slug_col, id_col, &base, Some(id)).await
}

/// Recount published courses in `category_id` and store the result on the category.
pub async fn recompute_course_count<C: ConnectionTrait>(
    conn: &C,
    category_id: Uuid,
) -> AppResult<i32> {
    let count = Courses::find()
        .filter(CourseCol::CategoryId.eq(category_id))
        .filter(CourseCol::IsPublished.eq(true))
        .count(conn)
        .await? as i32;

    Categories::update_many()
        .col_expr(CategoryCol::CourseCount, Expr::value(count))
        .filter(CategoryCol::Id.eq(category_id))
        .exec(conn)
        .await?;

    Ok(count)
}

/// Insert or update a category, then refresh its own course count.
pub async fn save_category<C: ConnectionTrait>(
    conn: &C,
    mut category: categories::Model,
    is_new: bool,
) -> AppResult<categories::Model> {
    category.slug = resolve_slug::<C, Categories>(
        conn,
        CategoryCol::Slug,
        CategoryCol::Id,
        &category.slug,
        &category.name,
        "category",
        category.id,
    )
    .await?;

    let active = category.into_active_model().reset_all();
    let mut saved = if is_new {
        active.insert(conn).await?
    } else {
        active.update(conn).await?
    };

    saved.course_count = recompute_course_count(conn, saved.id).await?;
    Ok(saved)
}

/// Stamp `published_date` the first time a course is published. Never clears it.
pub fn stamp_publication(course: &mut courses::Model, now: DateTime<FixedOffset>) {
    if course.is_published && course.published_date.is_none() {
        course.published_date = Some(now);
    }
}

async fn ensure_references<C: ConnectionTrait>(
    conn: &C,
    course: &courses::Model,
) -> AppResult<()> {
    if let Some(category_id) = course.category_id {
        if Categories::find_by_id(category_id).one(conn).await?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown category {category_id}")));
        }
    }
    if let Some(instructor_id) = course.instructor_id {
        if Instructors::find_by_id(instructor_id).one(conn).await?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown instructor {instructor_id}")));
        }
    }
    Ok(())
}

/// Insert (`previous == None`) or update a course and refresh the category counts it touches.
pub async fn save_course<C: ConnectionTrait>(
    conn: &C,
    mut course: courses::Model,
    previous: Option<&courses::Model>,
) -> AppResult<courses::Model> {
    ensure_references(conn, &course).await?;

    course.slug = resolve_slug::<C, Courses>(
        conn,
        CourseCol::Slug,
        CourseCol::Id,
        &course.slug,
        &course.title,
        "course",
        course.id,
    )
    .await?;

    let now: DateTime<FixedOffset> = Utc::now().into();
    stamp_publication(&mut course, now);
    course.updated_at = now;

    let active = course.into_active_model().reset_all();
    let saved = match previous {
        None => active.insert(conn).await?,
        Some(_) => active.update(conn).await?,
    };

    if let Some(category_id) = saved.category_id {
        recompute_course_count(conn, category_id).await?;
    }
    if let Some(old_category) = previous.and_then(|p| p.category_id) {
        if Some(old_category) != saved.category_id {
            recompute_course_count(conn, old_category).await?;
        }
    }

    tracing::debug!(course_id = %saved.id, slug = %saved.slug, "course saved");
    Ok(saved)
}

pub async fn delete_course<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<courses::Model> {
    let course = Courses::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;

    Courses::delete_by_id(id).exec(conn).await?;

    if let Some(category_id) = course.category_id {
        recompute_course_count(conn, category_id).await?;
    }
    Ok(course)
}

/// Fold a new review score into the course's running average.
pub async fn update_rating<C: ConnectionTrait>(
    conn: &C,
    course_id: Uuid,
    new_rating: i32,
) -> AppResult<courses::Model> {
    let course = Courses::find_by_id(course_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;

    let (rating, rating_count) = course.rating_after(new_rating);
    let mut next = course.clone();
    next.rating = rating;
    next.rating_count = rating_count;
    save_course(conn, next, Some(&course)).await
}

/// Copy of a course as a fresh, unpublished draft titled "<title> (Copy)".
pub fn duplicate_of(course: &courses::Model, now: DateTime<FixedOffset>) -> courses::Model {
    let mut copy = course.clone();
    copy.id = Uuid::new_v4();
    copy.title = format!("{} (Copy)", course.title);
    copy.slug = String::new();
    copy.is_published = false;
    copy.published_date = None;
    copy.enrolled_students = 0;
    copy.rating = 0.0;
    copy.rating_count = 0;
    copy.created_at = now;
    copy.updated_at = now;
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::courses::{CourseLevel, CourseStatus};
    use chrono::Duration;

    fn draft(is_published: bool) -> courses::Model {
        let now = Utc::now().fixed_offset();
        courses::Model {
            id: Uuid::new_v4(),
            title: "Graphic Design".into(),
            slug: "graphic-design".into(),
            short_description: String::new(),
            full_description: String::new(),
            category_id: None,
            instructor_id: None,
            price: 5_000,
            discount_price: None,
            level: CourseLevel::Beginner,
            duration_hours: 2.0,
            max_students: 30,
            enrolled_students: 12,
            thumbnail: "t.jpg".into(),
            featured_image: None,
            rating: 4.5,
            rating_count: 8,
            is_featured: true,
            is_published,
            status: CourseStatus::Published,
            created_at: now,
            updated_at: now,
            published_date: None,
        }
    }

    #[test]
    fn publication_is_stamped_once() {
        let first = Utc::now().fixed_offset();
        let mut course = draft(true);
        stamp_publication(&mut course, first);
        assert_eq!(course.published_date, Some(first));

        stamp_publication(&mut course, first + Duration::days(3));
        assert_eq!(course.published_date, Some(first));

        course.is_published = false;
        stamp_publication(&mut course, first + Duration::days(4));
        assert_eq!(course.published_date, Some(first));
    }

    #[test]
    fn unpublished_course_gets_no_date() {
        let mut course = draft(false);
        stamp_publication(&mut course, Utc::now().fixed_offset());
        assert!(course.published_date.is_none());
    }

    #[test]
    fn duplicate_is_a_fresh_draft() {
        let original = draft(true);
        let copy = duplicate_of(&original, Utc::now().fixed_offset());
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "Graphic Design (Copy)");
        assert!(copy.slug.is_empty());
        assert!(!copy.is_published);
        assert!(copy.published_date.is_none());
        assert_eq!(copy.enrolled_students, 0);
        assert_eq!(copy.rating_count, 0);
        assert_eq!(copy.price, original.price);
        assert!(copy.is_featured);
    }
}
