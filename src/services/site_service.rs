//! Page contexts for the public site.
//!
//! Each function gathers what one page shows and wraps it with the shared
//! [`SiteContext`] (settings row, navigation categories, gallery strip).

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::{
    dto::site::{
        AboutPage, ContactForm, ContactPage, CourseStats, CoursesPage, HomePage, SiteContext,
        TeamPage, TestimonialForm, TestimonialsPage,
    },
    entity::{
        Banners, Categories, Courses, Galleries, Instructors, Services, Students, Testimonials,
        banners, categories,
        courses::{self, CourseLevel},
        galleries, instructors, services, testimonials,
        testimonials::MAX_RATING,
    },
    error::AppResult,
    models::{Banner, Category, Course, GalleryImage, Instructor, Service, Testimonial},
    response::{ApiResponse, Meta},
    routes::params::CourseFilter,
    services::{
        icontains, search_term, settings_service,
        testimonial_service::{self, NewTestimonial},
    },
    state::AppState,
    validation::Validator,
};

const DEFAULT_SITE_NAME: &str = "eLEARNING";
const HOME_STUDENTS_FALLBACK: i64 = 2000;
const ABOUT_STUDENTS_FALLBACK: i64 = 1500;

pub async fn site_context<C: ConnectionTrait>(conn: &C) -> AppResult<SiteContext> {
    let site_settings = settings_service::load_settings(conn).await?.map(Into::into);
    let navigation_categories = Categories::find()
        .filter(categories::Column::IsActive.eq(true))
        .order_by_asc(categories::Column::Name)
        .limit(8)
        .all(conn)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    let gallery = Galleries::find()
        .filter(galleries::Column::IsActive.eq(true))
        .order_by_asc(galleries::Column::DisplayOrder)
        .limit(6)
        .all(conn)
        .await?
        .into_iter()
        .map(GalleryImage::from)
        .collect();

    Ok(SiteContext {
        site_settings,
        navigation_categories,
        gallery,
    })
}

fn page_title(page: &str, site: &SiteContext) -> String {
    let site_name = site
        .site_settings
        .as_ref()
        .map(|s| s.site_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_SITE_NAME);
    format!("{page} - {site_name}")
}

async fn student_total<C: ConnectionTrait>(conn: &C, fallback: i64) -> AppResult<i64> {
    let count = Students::find().count(conn).await? as i64;
    Ok(if count == 0 { fallback } else { count })
}

async fn published_total<C: ConnectionTrait>(conn: &C) -> AppResult<i64> {
    Ok(Courses::find()
        .filter(courses::Column::IsPublished.eq(true))
        .count(conn)
        .await? as i64)
}

async fn instructors_in_order<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Instructor>> {
    Ok(Instructors::find()
        .order_by_asc(instructors::Column::DisplayOrder)
        .order_by_asc(instructors::Column::Name)
        .all(conn)
        .await?
        .into_iter()
        .map(Instructor::from)
        .collect())
}

pub async fn home(state: &AppState) -> AppResult<ApiResponse<HomePage>> {
    let conn = &state.orm;
    let site = site_context(conn).await?;

    let banners = Banners::find()
        .filter(banners::Column::IsActive.eq(true))
        .order_by_asc(banners::Column::DisplayOrder)
        .all(conn)
        .await?
        .into_iter()
        .map(Banner::from)
        .collect();
    let services = Services::find()
        .filter(services::Column::IsActive.eq(true))
        .order_by_asc(services::Column::DisplayOrder)
        .all(conn)
        .await?
        .into_iter()
        .map(Service::from)
        .collect();
    let categories = Categories::find()
        .filter(categories::Column::IsActive.eq(true))
        .order_by_asc(categories::Column::Name)
        .limit(4)
        .all(conn)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    let featured_courses = Courses::find()
        .filter(courses::Column::IsPublished.eq(true))
        .filter(courses::Column::IsFeatured.eq(true))
        .order_by_desc(courses::Column::CreatedAt)
        .limit(3)
        .all(conn)
        .await?
        .into_iter()
        .map(Course::from)
        .collect();
    let featured_instructors = Instructors::find()
        .filter(instructors::Column::IsFeatured.eq(true))
        .order_by_asc(instructors::Column::DisplayOrder)
        .order_by_asc(instructors::Column::Name)
        .limit(4)
        .all(conn)
        .await?
        .into_iter()
        .map(Instructor::from)
        .collect();
    let featured_testimonials = Testimonials::find()
        .filter(testimonials::Column::IsActive.eq(true))
        .filter(testimonials::Column::IsFeatured.eq(true))
        .order_by_asc(testimonials::Column::DisplayOrder)
        .order_by_desc(testimonials::Column::CreatedAt)
        .limit(4)
        .all(conn)
        .await?
        .into_iter()
        .map(Testimonial::from)
        .collect();

    let page = HomePage {
        site,
        banners,
        services,
        categories,
        featured_courses,
        featured_instructors,
        featured_testimonials,
        total_students: student_total(conn, HOME_STUDENTS_FALLBACK).await?,
        total_courses: published_total(conn).await?,
        total_instructors: Instructors::find().count(conn).await? as i64,
    };

    Ok(ApiResponse::success("Home", page, None))
}

pub async fn about(state: &AppState) -> AppResult<ApiResponse<AboutPage>> {
    let conn = &state.orm;
    let site = site_context(conn).await?;
    let instructors = instructors_in_order(conn).await?;

    let page = AboutPage {
        title: page_title("About Us", &site),
        total_instructors: instructors.len() as i64,
        instructors,
        total_courses: published_total(conn).await?,
        total_students: student_total(conn, ABOUT_STUDENTS_FALLBACK).await?,
        site,
    };

    Ok(ApiResponse::success("About", page, None))
}

async fn level_count<C: ConnectionTrait>(conn: &C, level: CourseLevel) -> AppResult<i64> {
    Ok(Courses::find()
        .filter(courses::Column::IsPublished.eq(true))
        .filter(courses::Column::Level.eq(level))
        .count(conn)
        .await? as i64)
}

/// Average rating over a course list; 0 when empty.
pub fn average_course_rating(courses: &[courses::Model]) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }
    courses.iter().map(|c| c.rating).sum::<f64>() / courses.len() as f64
}

pub async fn courses(state: &AppState, filter: CourseFilter) -> AppResult<ApiResponse<CoursesPage>> {
    let conn = &state.orm;
    let site = site_context(conn).await?;

    let selected_category = filter.category.filter(|c| !c.is_empty());
    let selected_level = filter.level.filter(|l| !l.is_empty());
    let search_query = search_term(filter.search.as_ref())
        .unwrap_or_default()
        .to_string();

    let mut condition = Condition::all().add(courses::Column::IsPublished.eq(true));
    if let Some(slug) = &selected_category {
        condition = condition.add(categories::Column::Slug.eq(slug.as_str()));
    }
    if let Some(level) = &selected_level {
        condition = match CourseLevel::parse(level) {
            Some(level) => condition.add(courses::Column::Level.eq(level)),
            // An unknown level matches nothing.
            None => condition.add(courses::Column::Id.is_null()),
        };
    }
    if !search_query.is_empty() {
        condition = condition.add(
            Condition::any()
                .add(icontains(courses::Column::Title, &search_query))
                .add(icontains(courses::Column::ShortDescription, &search_query))
                .add(icontains(courses::Column::FullDescription, &search_query))
                .add(icontains(instructors::Column::Name, &search_query)),
        );
    }

    let matching = Courses::find()
        .join(JoinType::LeftJoin, courses::Relation::Categories.def())
        .join(JoinType::LeftJoin, courses::Relation::Instructors.def())
        .filter(condition)
        .order_by_desc(courses::Column::CreatedAt)
        .all(conn)
        .await?;

    let total_students = matching.iter().map(|c| i64::from(c.enrolled_students)).sum();
    let avg_rating = average_course_rating(&matching);

    let categories = Categories::find()
        .filter(categories::Column::IsActive.eq(true))
        .order_by_asc(categories::Column::Name)
        .all(conn)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    let course_stats = CourseStats {
        total: published_total(conn).await?,
        beginner: level_count(conn, CourseLevel::Beginner).await?,
        intermediate: level_count(conn, CourseLevel::Intermediate).await?,
        advanced: level_count(conn, CourseLevel::Advanced).await?,
    };
    let featured_courses = Courses::find()
        .filter(courses::Column::IsPublished.eq(true))
        .filter(courses::Column::IsFeatured.eq(true))
        .order_by_desc(courses::Column::CreatedAt)
        .limit(4)
        .all(conn)
        .await?
        .into_iter()
        .map(Course::from)
        .collect();

    let total = matching.len() as i64;
    let page = CoursesPage {
        title: page_title("Courses", &site),
        site,
        courses: matching.into_iter().map(Course::from).collect(),
        categories,
        course_stats,
        featured_courses,
        selected_category,
        selected_level,
        search_query,
        total_students,
        avg_rating,
    };

    Ok(ApiResponse::success("Courses", page, Some(Meta::total(total))))
}

pub async fn team(state: &AppState) -> AppResult<ApiResponse<TeamPage>> {
    let conn = &state.orm;
    let site = site_context(conn).await?;
    let instructors = instructors_in_order(conn).await?;
    let total_courses = Courses::find()
        .filter(courses::Column::InstructorId.is_not_null())
        .count(conn)
        .await? as i64;

    let page = TeamPage {
        title: page_title("Our Team", &site),
        site,
        instructors,
        total_courses,
    };

    Ok(ApiResponse::success("Team", page, None))
}

/// Average rounded to one decimal and the share of 4+ star ratings as a whole percent.
/// Halves round to the even digit.
pub fn testimonial_stats(ratings: &[i32]) -> (f64, i64) {
    if ratings.is_empty() {
        return (0.0, 0);
    }
    let total = ratings.len() as f64;
    let average = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / total;
    let high = ratings.iter().filter(|&&r| r >= 4).count() as f64;
    (
        (average * 10.0).round_ties_even() / 10.0,
        (high / total * 100.0).round_ties_even() as i64,
    )
}

pub async fn testimonials_page(state: &AppState) -> AppResult<ApiResponse<TestimonialsPage>> {
    let conn = &state.orm;
    let site = site_context(conn).await?;

    let active = Testimonials::find()
        .filter(testimonials::Column::IsActive.eq(true))
        .order_by_asc(testimonials::Column::DisplayOrder)
        .order_by_desc(testimonials::Column::CreatedAt)
        .all(conn)
        .await?;
    let featured_testimonials = Testimonials::find()
        .filter(testimonials::Column::IsActive.eq(true))
        .filter(testimonials::Column::IsFeatured.eq(true))
        .order_by_asc(testimonials::Column::DisplayOrder)
        .limit(4)
        .all(conn)
        .await?
        .into_iter()
        .map(Testimonial::from)
        .collect();

    let ratings: Vec<i32> = active.iter().map(|t| t.rating).collect();
    let (average_rating, satisfaction_rate) = testimonial_stats(&ratings);
    let total_testimonials = active.len() as i64;

    let page = TestimonialsPage {
        title: page_title("Testimonials", &site),
        site,
        testimonials: active.into_iter().map(Testimonial::from).collect(),
        featured_testimonials,
        total_testimonials,
        average_rating,
        satisfaction_rate,
        active_students: total_testimonials,
    };

    Ok(ApiResponse::success("Testimonials", page, None))
}

/// Form value for the star rating. Blank takes the top score; anything else must be a number.
fn parse_rating(raw: &str) -> AppResult<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(MAX_RATING);
    }
    match raw.parse::<i32>() {
        Ok(rating) => Ok(rating),
        Err(_) => {
            let mut v = Validator::new();
            v.add("rating", "Enter a whole number.");
            v.finish()?;
            Ok(MAX_RATING)
        }
    }
}

/// Public review. Held back (inactive, unverified) until an admin approves it.
pub async fn submit_testimonial(
    state: &AppState,
    form: TestimonialForm,
) -> AppResult<ApiResponse<Testimonial>> {
    let rating = parse_rating(&form.rating)?;
    let txn = state.orm.begin().await?;
    let course_id = testimonial_service::course_id_for_slug(&txn, &form.course).await?;
    let testimonial = testimonial_service::insert_testimonial(
        &txn,
        NewTestimonial {
            name: form.name,
            profession: form.profession,
            company: form.company,
            photo: None,
            message: form.message,
            course_id,
            rating,
            is_featured: false,
            display_order: 0,
            is_active: false,
            graduation_year: None,
            verified: false,
        },
    )
    .await?;
    txn.commit().await?;

    tracing::info!(testimonial_id = %testimonial.id, "testimonial submitted for review");

    Ok(ApiResponse::success(
        "Thank you! Your review will appear once it has been approved.",
        testimonial.into(),
        Some(Meta::empty()),
    ))
}

pub async fn contact_page(state: &AppState) -> AppResult<ApiResponse<ContactPage>> {
    let site = site_context(&state.orm).await?;
    let page = ContactPage {
        title: page_title("Contact", &site),
        site,
        form: ContactForm::default(),
    };
    Ok(ApiResponse::success("Contact", page, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn stats_for_no_testimonials() {
        assert_eq!(testimonial_stats(&[]), (0.0, 0));
    }

    #[test]
    fn stats_round_average_and_satisfaction() {
        assert_eq!(testimonial_stats(&[5, 4, 4, 3, 5, 5]).0, 4.3);
        assert_eq!(testimonial_stats(&[5, 4, 2]), (3.7, 67));
        assert_eq!(testimonial_stats(&[1, 2, 3]).1, 0);
    }

    #[test]
    fn blank_rating_defaults_to_five() {
        assert_eq!(parse_rating("").ok(), Some(5));
        assert_eq!(parse_rating(" 3 ").ok(), Some(3));
        assert!(matches!(
            parse_rating("five"),
            Err(AppError::Validation(fields)) if fields.contains_key("rating")
        ));
    }

    #[test]
    fn halves_round_to_even() {
        // 4.25 -> 4.2 and 12.5% -> 12
        assert_eq!(testimonial_stats(&[5, 5, 4, 3]).0, 4.2);
        assert_eq!(testimonial_stats(&[5, 1, 1, 1, 1, 1, 1, 1]).1, 12);
        // 37.5% -> 38
        assert_eq!(testimonial_stats(&[5, 5, 5, 1, 1, 1, 1, 1]).1, 38);
    }
}
