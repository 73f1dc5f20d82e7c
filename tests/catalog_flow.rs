mod common;

use elearning_site::{
    dto::catalog::{BulkIdsRequest, UpdateCourseRequest},
    entity::{categories::Entity as Categories, courses::MAX_PRICE},
    error::AppError,
    services::{category_service, course_service},
};
use sea_orm::EntityTrait;

#[tokio::test]
async fn course_slug_is_derived_from_title() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let first = common::course(&state, &admin, common::course_request("Web Design & Development")).await?;
    assert_eq!(first.slug, "web-design-development");

    let second = common::course(&state, &admin, common::course_request("Web Design & Development")).await?;
    assert_eq!(second.slug, "web-design-development-2");

    let mut taken = common::course_request("Something Else");
    taken.slug = Some("web-design-development".into());
    let err = course_service::create_course(&state, &admin, taken)
        .await
        .err()
        .expect("explicit duplicate slug must fail");
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn current_price_prefers_discount() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let mut req = common::course_request("Online Marketing");
    req.price = 20_000;
    req.discount_price = Some(15_000);
    let discounted = common::course(&state, &admin, req).await?;
    assert_eq!(discounted.current_price, 15_000);
    assert!(discounted.is_discounted);
    assert_eq!(discounted.discount_percentage, 25);

    let plain = common::course(&state, &admin, common::course_request("Video Editing")).await?;
    assert_eq!(plain.current_price, 10_000);
    assert!(!plain.is_discounted);
    Ok(())
}

#[tokio::test]
async fn published_date_is_set_once() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let mut req = common::course_request("Photography");
    req.is_published = Some(false);
    let draft = common::course(&state, &admin, req).await?;
    assert!(draft.published_date.is_none());

    course_service::publish_courses(&state, &admin, BulkIdsRequest { ids: vec![draft.id] }).await?;
    let published = course_service::get_course(&state, &admin, draft.id)
        .await?
        .data
        .expect("course");
    let stamped = published.published_date.expect("published_date set on publish");

    let edited = course_service::update_course(
        &state,
        &admin,
        draft.id,
        UpdateCourseRequest {
            title: Some("Photography Basics".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("course");
    assert_eq!(edited.published_date, Some(stamped));
    assert_eq!(edited.slug, published.slug);

    let unpublished = course_service::update_course(
        &state,
        &admin,
        draft.id,
        UpdateCourseRequest {
            is_published: Some(false),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("course");
    assert_eq!(unpublished.published_date, Some(stamped));
    Ok(())
}

#[tokio::test]
async fn moving_a_course_updates_both_category_counts() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let design = common::category(&state, &admin, "Design").await?;
    let marketing = common::category(&state, &admin, "Marketing").await?;

    let mut req = common::course_request("Brand Identity");
    req.category_id = Some(design.id);
    let course = common::course(&state, &admin, req).await?;

    let count = |id| {
        let orm = state.orm.clone();
        async move {
            Categories::find_by_id(id)
                .one(&orm)
                .await
                .map(|c| c.map(|c| c.course_count))
        }
    };
    assert_eq!(count(design.id).await?, Some(1));
    assert_eq!(count(marketing.id).await?, Some(0));

    course_service::update_course(
        &state,
        &admin,
        course.id,
        UpdateCourseRequest {
            category_id: Some(Some(marketing.id)),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(count(design.id).await?, Some(0));
    assert_eq!(count(marketing.id).await?, Some(1));

    course_service::delete_course(&state, &admin, course.id).await?;
    assert_eq!(count(marketing.id).await?, Some(0));
    Ok(())
}

#[tokio::test]
async fn unpublished_courses_do_not_count() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let design = common::category(&state, &admin, "Design").await?;

    let mut req = common::course_request("Draft Course");
    req.category_id = Some(design.id);
    req.is_published = Some(false);
    common::course(&state, &admin, req).await?;

    let category = category_service::get_category(&state, &admin, design.id)
        .await?
        .data
        .expect("category");
    assert_eq!(category.course_count, 0);
    Ok(())
}

#[tokio::test]
async fn duplicate_creates_unpublished_copy() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let original = common::course(&state, &admin, common::course_request("Data Science")).await?;

    let copies = course_service::duplicate_courses(
        &state,
        &admin,
        BulkIdsRequest {
            ids: vec![original.id],
        },
    )
    .await?
    .data
    .expect("copies")
    .items;

    assert_eq!(copies.len(), 1);
    let copy = &copies[0];
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.title, "Data Science (Copy)");
    assert_eq!(copy.slug, "data-science-copy");
    assert!(!copy.is_published);
    assert!(copy.published_date.is_none());
    Ok(())
}

#[tokio::test]
async fn feature_goes_through_save_path() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;
    let a = common::course(&state, &admin, common::course_request("Course A")).await?;
    let b = common::course(&state, &admin, common::course_request("Course B")).await?;

    let result = course_service::feature_courses(
        &state,
        &admin,
        BulkIdsRequest {
            ids: vec![a.id, b.id],
        },
    )
    .await?;
    assert_eq!(result.message, "2 courses marked as featured.");

    let a = course_service::get_course(&state, &admin, a.id).await?.data.expect("course");
    assert!(a.is_featured);
    Ok(())
}

#[tokio::test]
async fn oversized_prices_are_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let mut req = common::course_request("Luxury Masterclass");
    req.price = i64::MAX / 10;
    req.discount_price = Some(1);
    let err = course_service::create_course(&state, &admin, req)
        .await
        .err()
        .expect("price above the cap must fail");
    match err {
        AppError::Validation(fields) => assert!(fields.contains_key("price")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut req = common::course_request("Luxury Masterclass");
    req.price = MAX_PRICE;
    req.discount_price = Some(MAX_PRICE + 1);
    let err = course_service::create_course(&state, &admin, req)
        .await
        .err()
        .expect("discount above the cap must fail");
    assert!(matches!(err, AppError::Validation(ref f) if f.contains_key("discount_price")));

    let mut req = common::course_request("Luxury Masterclass");
    req.price = MAX_PRICE;
    req.discount_price = Some(1);
    let course = common::course(&state, &admin, req).await?;
    assert_eq!(course.discount_percentage, 99);
    Ok(())
}

#[tokio::test]
async fn accented_names_keep_their_letters_in_slugs() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::admin(&state).await?;

    let category = common::category(&state, &admin, "Café Français").await?;
    assert_eq!(category.slug, "cafe-francais");

    let course = common::course(&state, &admin, common::course_request("Crème Brûlée 101")).await?;
    assert_eq!(course.slug, "creme-brulee-101");
    Ok(())
}
