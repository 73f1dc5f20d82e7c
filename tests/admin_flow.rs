mod common;

use elearning_site::{
    dto::{
        auth::{LoginRequest, RegisterRequest},
        catalog::BulkIdsRequest,
        content::CreateTestimonialRequest,
        people::{CreateEnrollmentRequest, UpdateEnrollmentRequest},
    },
    entity::{audit_logs::Entity as AuditLogs, users::ROLE_STUDENT},
    error::AppError,
    middleware::auth::decode_token,
    routes::params::CourseAdminQuery,
    services::{auth_service, course_service, student_service, testimonial_service},
    state::AppState,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

async fn register(state: &AppState, email: &str) -> anyhow::Result<Uuid> {
    let registered = auth_service::register_student(
        state,
        RegisterRequest {
            email: email.into(),
            password: "correct-horse".into(),
            full_name: Some("Sam Student".into()),
            phone: None,
        },
    )
    .await?
    .data
    .expect("registered");
    Ok(registered.student.id)
}

#[tokio::test]
async fn duplicate_enrollment_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let course = common::course(&state, &admin, common::course_request("Rust 101")).await?;
    let student_id = register(&state, "sam@example.com").await?;

    let enroll = || CreateEnrollmentRequest {
        student_id,
        course_id: course.id,
    };
    student_service::create_enrollment(&state, &admin, enroll()).await?;
    let err = student_service::create_enrollment(&state, &admin, enroll())
        .await
        .err()
        .expect("second enrollment must fail");
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");

    let course = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(course.enrolled_students, 1);
    Ok(())
}

#[tokio::test]
async fn enrolled_count_follows_active_enrollments() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let course = common::course(&state, &admin, common::course_request("Go 101")).await?;
    let student_id = register(&state, "kim@example.com").await?;

    let enrollment = student_service::create_enrollment(
        &state,
        &admin,
        CreateEnrollmentRequest {
            student_id,
            course_id: course.id,
        },
    )
    .await?
    .data
    .expect("enrollment");

    student_service::update_enrollment(
        &state,
        &admin,
        enrollment.id,
        UpdateEnrollmentRequest {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await?;
    let after = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(after.enrolled_students, 0);

    student_service::delete_enrollment(&state, &admin, enrollment.id).await?;
    Ok(())
}

#[tokio::test]
async fn full_course_rejects_enrollment() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let mut req = common::course_request("Tiny Workshop");
    req.max_students = Some(1);
    let course = common::course(&state, &admin, req).await?;

    let first = register(&state, "first@example.com").await?;
    let second = register(&state, "second@example.com").await?;

    student_service::create_enrollment(
        &state,
        &admin,
        CreateEnrollmentRequest {
            student_id: first,
            course_id: course.id,
        },
    )
    .await?;
    let err = student_service::create_enrollment(
        &state,
        &admin,
        CreateEnrollmentRequest {
            student_id: second,
            course_id: course.id,
        },
    )
    .await
    .err()
    .expect("course is full");
    assert!(matches!(err, AppError::BadRequest(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn students_cannot_use_admin_services() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let student = common::student_user(&state).await?;

    let err = course_service::list_courses(&state, &student, CourseAdminQuery::default())
        .await
        .err()
        .expect("forbidden");
    assert!(matches!(err, AppError::Forbidden), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn register_then_login_issues_student_token() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    register(&state, "Lee@Example.com").await?;

    let login = auth_service::login_user(
        &state,
        LoginRequest {
            email: "lee@example.com".into(),
            password: "correct-horse".into(),
        },
    )
    .await?
    .data
    .expect("login");
    assert_eq!(login.role, ROLE_STUDENT);

    let token = login.token.strip_prefix("Bearer ").expect("bearer prefix");
    let user = decode_token(token, &state.config.jwt_secret)?;
    assert_eq!(user.role, ROLE_STUDENT);

    let wrong = auth_service::login_user(
        &state,
        LoginRequest {
            email: "lee@example.com".into(),
            password: "wrong-password".into(),
        },
    )
    .await
    .err()
    .expect("wrong password");
    assert!(matches!(wrong, AppError::BadRequest(_)));

    let again = auth_service::register_student(
        &state,
        RegisterRequest {
            email: "lee@example.com".into(),
            password: "another-pass".into(),
            full_name: None,
            phone: None,
        },
    )
    .await
    .err()
    .expect("email taken");
    assert!(matches!(again, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn bulk_verify_marks_testimonials_and_audits() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let mut ids = Vec::new();
    for name in ["Ana", "Ben"] {
        let testimonial = testimonial_service::create_testimonial(
            &state,
            &admin,
            CreateTestimonialRequest {
                name: name.into(),
                profession: None,
                company: None,
                photo: None,
                message: "Loved it".into(),
                course_id: None,
                rating: None,
                is_featured: None,
                display_order: None,
                is_active: None,
                graduation_year: None,
                verified: None,
            },
        )
        .await?
        .data
        .expect("testimonial");
        assert!(!testimonial.verified);
        ids.push(testimonial.id);
    }

    let result = testimonial_service::mark_verified(&state, &admin, BulkIdsRequest { ids: ids.clone() })
        .await?
        .data
        .expect("result");
    assert_eq!(result.updated, 2);

    for id in ids {
        let t = testimonial_service::get_testimonial(&state, &admin, id)
            .await?
            .data
            .expect("testimonial");
        assert!(t.verified);
        assert_eq!(t.rating, 5);
    }

    // Two creates and one bulk action.
    assert_eq!(AuditLogs::find().count(&state.orm).await?, 3);
    Ok(())
}

#[tokio::test]
async fn reactivation_respects_capacity() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let mut req = common::course_request("Two Seat Lab");
    req.max_students = Some(2);
    let course = common::course(&state, &admin, req).await?;

    let mut enrollments = Vec::new();
    for email in ["a@example.com", "b@example.com"] {
        let student_id = register(&state, email).await?;
        let enrollment = student_service::create_enrollment(
            &state,
            &admin,
            CreateEnrollmentRequest {
                student_id,
                course_id: course.id,
            },
        )
        .await?
        .data
        .expect("enrollment");
        enrollments.push(enrollment.id);
    }

    student_service::update_enrollment(
        &state,
        &admin,
        enrollments[0],
        UpdateEnrollmentRequest {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await?;
    let third = register(&state, "c@example.com").await?;
    student_service::create_enrollment(
        &state,
        &admin,
        CreateEnrollmentRequest {
            student_id: third,
            course_id: course.id,
        },
    )
    .await?;

    let err = student_service::update_enrollment(
        &state,
        &admin,
        enrollments[0],
        UpdateEnrollmentRequest {
            is_active: Some(true),
            ..Default::default()
        },
    )
    .await
    .err()
    .expect("no seat left to reactivate into");
    assert!(matches!(err, AppError::BadRequest(_)), "got {err:?}");

    let course = course_service::get_course(&state, &admin, course.id)
        .await?
        .data
        .expect("course");
    assert_eq!(course.enrolled_students, 2);
    Ok(())
}
