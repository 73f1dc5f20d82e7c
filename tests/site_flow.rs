mod common;

use std::net::{IpAddr, Ipv4Addr};

use elearning_site::{
    dto::{
        catalog::{BulkIdsRequest, UpdateCourseRequest},
        content::{CreateTestimonialRequest, SiteSettingsRequest},
        people::CreateInstructorRequest,
        site::{ContactForm, CourseStats, TestimonialForm},
    },
    entity::{
        contact_messages::{Entity as ContactMessages, MessageStatus},
        courses::CourseLevel,
        site_settings::Entity as SiteSettings,
        testimonials::Entity as Testimonials,
    },
    error::AppError,
    routes::params::CourseFilter,
    services::{
        contact_service, course_service, instructor_service, settings_service, site_service,
        testimonial_service,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

fn contact_form(name: &str) -> ContactForm {
    ContactForm {
        name: name.into(),
        email: "visitor@example.com".into(),
        subject: "Course question".into(),
        message: "Do you offer evening classes?".into(),
    }
}

#[tokio::test]
async fn blank_contact_name_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = contact_service::submit_contact(&state, contact_form("   "), None)
        .await
        .err()
        .expect("blank name must fail");
    match err {
        AppError::Validation(fields) => assert!(fields.contains_key("name")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(ContactMessages::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn contact_submission_is_stored_as_new() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let ip = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

    let resp = contact_service::submit_contact(&state, contact_form("Amina"), Some(ip)).await?;
    assert_eq!(resp.message, contact_service::CONTACT_SUCCESS);

    let stored = ContactMessages::find()
        .one(&state.orm)
        .await?
        .expect("message stored");
    assert_eq!(stored.name, "Amina");
    assert_eq!(stored.status, MessageStatus::New);
    assert_eq!(stored.ip_address.as_deref(), Some("203.0.113.7"));
    Ok(())
}

#[tokio::test]
async fn course_listing_filters_combine() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let design = common::category(&state, &admin, "Web Design").await?;
    let marketing = common::category(&state, &admin, "Marketing").await?;

    let jane = instructor_service::create_instructor(
        &state,
        &admin,
        CreateInstructorRequest {
            name: "Jane Doe".into(),
            designation: "Designer".into(),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("instructor");

    let mut html = common::course_request("HTML Fundamentals");
    html.category_id = Some(design.id);
    html.level = Some(CourseLevel::Beginner);
    common::course(&state, &admin, html).await?;

    let mut css = common::course_request("Advanced CSS Layouts");
    css.category_id = Some(design.id);
    css.level = Some(CourseLevel::Advanced);
    css.instructor_id = Some(jane.id);
    common::course(&state, &admin, css).await?;

    let mut seo = common::course_request("SEO Basics");
    seo.category_id = Some(marketing.id);
    seo.level = Some(CourseLevel::Intermediate);
    common::course(&state, &admin, seo).await?;

    let by_category = site_service::courses(
        &state,
        CourseFilter {
            category: Some(design.slug.clone()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("page");
    assert_eq!(by_category.courses.len(), 2);
    assert_eq!(by_category.selected_category.as_deref(), Some("web-design"));
    assert_eq!(
        by_category.course_stats,
        CourseStats {
            total: 3,
            beginner: 1,
            intermediate: 1,
            advanced: 1,
        }
    );

    let narrowed = site_service::courses(
        &state,
        CourseFilter {
            category: Some(design.slug.clone()),
            search: Some("css".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("page");
    assert_eq!(narrowed.courses.len(), 1);
    assert_eq!(narrowed.courses[0].title, "Advanced CSS Layouts");

    let by_instructor = site_service::courses(
        &state,
        CourseFilter {
            search: Some("jane".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("page");
    assert_eq!(by_instructor.courses.len(), 1);

    let unknown_level = site_service::courses(
        &state,
        CourseFilter {
            level: Some("expert".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("page");
    assert!(unknown_level.courses.is_empty());
    assert_eq!(unknown_level.avg_rating, 0.0);
    Ok(())
}

#[tokio::test]
async fn unpublished_courses_are_hidden() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let course = common::course(&state, &admin, common::course_request("Hidden Soon")).await?;
    course_service::update_course(
        &state,
        &admin,
        course.id,
        UpdateCourseRequest {
            is_published: Some(false),
            ..Default::default()
        },
    )
    .await?;

    let page = site_service::courses(&state, CourseFilter::default())
        .await?
        .data
        .expect("page");
    assert!(page.courses.is_empty());
    assert_eq!(page.course_stats.total, 0);
    Ok(())
}

#[tokio::test]
async fn settings_always_land_on_one_row() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    settings_service::upsert_settings(&state, &admin, SiteSettingsRequest::default()).await?;
    let saved = settings_service::upsert_settings(
        &state,
        &admin,
        SiteSettingsRequest {
            site_name: "Academy".into(),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("settings");

    assert_eq!(saved.site_name, "Academy");
    assert_eq!(SiteSettings::find().count(&state.orm).await?, 1);
    let row = SiteSettings::find_by_id(1).one(&state.orm).await?.expect("row 1");
    assert_eq!(row.site_name, "Academy");

    let home = site_service::home(&state).await?.data.expect("page");
    let settings = home.site.site_settings.expect("settings in context");
    assert_eq!(settings.site_name, "Academy");
    assert_eq!(home.total_students, 2000);
    Ok(())
}

#[tokio::test]
async fn testimonial_page_reports_active_stats() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    for (name, rating, is_active) in [
        ("Ana", 5, true),
        ("Ben", 4, true),
        ("Cleo", 2, true),
        ("Dan", 1, false),
    ] {
        testimonial_service::create_testimonial(
            &state,
            &admin,
            CreateTestimonialRequest {
                name: name.into(),
                profession: Some("Developer".into()),
                company: None,
                photo: None,
                message: "Great course".into(),
                course_id: None,
                rating: Some(rating),
                is_featured: None,
                display_order: None,
                is_active: Some(is_active),
                graduation_year: None,
                verified: None,
            },
        )
        .await?;
    }

    let page = site_service::testimonials_page(&state)
        .await?
        .data
        .expect("page");
    assert_eq!(page.total_testimonials, 3);
    assert_eq!(page.average_rating, 3.7);
    assert_eq!(page.satisfaction_rate, 67);
    assert_eq!(page.active_students, 3);
    Ok(())
}

#[tokio::test]
async fn public_testimonial_waits_for_review() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let course = common::course(&state, &admin, common::course_request("Python Basics")).await?;

    let submitted = site_service::submit_testimonial(
        &state,
        TestimonialForm {
            name: "Lena".into(),
            profession: "Analyst".into(),
            company: String::new(),
            message: "Clear and practical.".into(),
            rating: "4".into(),
            course: course.slug.clone(),
        },
    )
    .await?
    .data
    .expect("testimonial");
    assert!(!submitted.is_active);
    assert!(!submitted.verified);
    assert_eq!(submitted.course_id, Some(course.id));

    let page = site_service::testimonials_page(&state)
        .await?
        .data
        .expect("page");
    assert_eq!(page.total_testimonials, 0);
    assert_eq!(Testimonials::find().count(&state.orm).await?, 1);

    let unrated = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(unrated.rating_count, 0);
    assert_eq!(unrated.rating, 0.0);

    testimonial_service::activate(
        &state,
        &admin,
        BulkIdsRequest {
            ids: vec![submitted.id],
        },
    )
    .await?;
    let rated = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(rated.rating_count, 1);
    assert_eq!(rated.rating, 4.0);

    // Activating again does not count the review twice.
    testimonial_service::activate(
        &state,
        &admin,
        BulkIdsRequest {
            ids: vec![submitted.id],
        },
    )
    .await?;
    let again = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(again.rating_count, 1);
    Ok(())
}

#[tokio::test]
async fn unmoderated_reviews_leave_course_rating_alone() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let course = common::course(&state, &admin, common::course_request("Excel Basics")).await?;

    for _ in 0..5 {
        site_service::submit_testimonial(
            &state,
            TestimonialForm {
                name: "Anon".into(),
                message: "Bad".into(),
                rating: "1".into(),
                course: course.slug.clone(),
                ..Default::default()
            },
        )
        .await?;
    }

    let page = site_service::courses(&state, CourseFilter::default())
        .await?
        .data
        .expect("page");
    assert_eq!(page.avg_rating, 0.0);
    let stored = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(stored.rating_count, 0);
    Ok(())
}

#[tokio::test]
async fn blank_form_rating_is_stored_as_five() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let stored = site_service::submit_testimonial(
        &state,
        TestimonialForm {
            name: "Rustam".into(),
            message: "Well paced lessons.".into(),
            rating: String::new(),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("testimonial");
    assert_eq!(stored.rating, 5);

    let err = site_service::submit_testimonial(
        &state,
        TestimonialForm {
            name: "Rustam".into(),
            message: "Well paced lessons.".into(),
            rating: "ten".into(),
            ..Default::default()
        },
    )
    .await
    .err()
    .expect("non-numeric rating");
    assert!(matches!(err, AppError::Validation(ref f) if f.contains_key("rating")));
    Ok(())
}

#[tokio::test]
async fn overlong_contact_email_is_a_field_error() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut form = contact_form("Amina");
    form.email = format!("{}@example.com", "a".repeat(300));

    let err = contact_service::submit_contact(&state, form, None)
        .await
        .err()
        .expect("email too long");
    assert!(matches!(err, AppError::Validation(ref f) if f.contains_key("email")));
    assert_eq!(ContactMessages::find().count(&state.orm).await?, 0);
    Ok(())
}
