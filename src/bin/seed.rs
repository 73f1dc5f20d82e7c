//! Loads demo content: an admin account, site settings, and a small catalog.
//! Safe to run repeatedly; rows that already exist are left alone.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use elearning_site::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::content::SiteSettingsRequest,
    entity::{
        Banners, Categories, Courses, Instructors, Services, Users, banners, categories,
        courses::{self, CourseLevel, CourseStatus},
        instructors, services,
        services::ServiceIcon,
        users::{self, ROLE_ADMIN},
    },
    services::{auth_service, catalog_service, settings_service},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,elearning_site=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let admin_id = ensure_admin(&orm, "admin@example.com", "admin12345").await?;
    ensure_settings(&orm).await?;
    let categories = seed_categories(&orm).await?;
    let instructors = seed_instructors(&orm).await?;
    seed_courses(&orm, &categories, &instructors).await?;
    seed_banners(&orm).await?;
    seed_services(&orm).await?;

    tracing::info!(%admin_id, "seed completed");
    Ok(())
}

async fn ensure_admin(orm: &DatabaseConnection, email: &str, password: &str) -> anyhow::Result<Uuid> {
    if let Some(user) = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(user.id);
    }
    let user = auth_service::create_user(
        orm,
        email,
        password,
        Some("Site Administrator".into()),
        ROLE_ADMIN,
    )
    .await?;
    tracing::info!(email, "created admin user");
    Ok(user.id)
}

async fn ensure_settings(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if settings_service::load_settings(orm).await?.is_some() {
        return Ok(());
    }
    settings_service::save_settings(
        orm,
        SiteSettingsRequest {
            address: "123 Street, Fergana, Uzbekistan".into(),
            phone: "+998 90 123 45 67".into(),
            email: "info@example.com".into(),
            ..SiteSettingsRequest::default()
        },
    )
    .await?;
    tracing::info!("saved default site settings");
    Ok(())
}

async fn seed_categories(orm: &DatabaseConnection) -> anyhow::Result<Vec<Uuid>> {
    let names = [
        ("Web Design", "Layouts, typography and responsive pages"),
        ("Graphic Design", "Branding, illustration and print"),
        ("Video Editing", "Cutting, grading and motion"),
        ("Online Marketing", "Search, social and email campaigns"),
    ];

    let mut ids = Vec::with_capacity(names.len());
    for (name, description) in names {
        if let Some(existing) = Categories::find()
            .filter(categories::Column::Name.eq(name))
            .one(orm)
            .await?
        {
            ids.push(existing.id);
            continue;
        }
        let category = categories::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: String::new(),
            description: description.into(),
            image: None,
            course_count: 0,
            is_active: true,
            created_at: Utc::now().into(),
        };
        let saved = catalog_service::save_category(orm, category, true).await?;
        ids.push(saved.id);
    }
    tracing::info!(count = ids.len(), "seeded categories");
    Ok(ids)
}

async fn seed_instructors(orm: &DatabaseConnection) -> anyhow::Result<Vec<Uuid>> {
    let people = [
        ("Dilnoza Karimova", "Web Developer", "8 years"),
        ("Jasur Aliyev", "Graphic Designer", "6 years"),
        ("Malika Tursunova", "Video Producer", "5 years"),
    ];

    let mut ids = Vec::with_capacity(people.len());
    for (order, (name, designation, experience)) in people.into_iter().enumerate() {
        if let Some(existing) = Instructors::find()
            .filter(instructors::Column::Name.eq(name))
            .one(orm)
            .await?
        {
            ids.push(existing.id);
            continue;
        }
        let instructor = instructors::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.into()),
            designation: Set(designation.into()),
            experience: Set(experience.into()),
            bio: Set(String::new()),
            profile_picture: Set(None),
            email: Set(String::new()),
            phone: Set(String::new()),
            telegram: Set(String::new()),
            twitter: Set(String::new()),
            instagram: Set(String::new()),
            linkedin: Set(String::new()),
            is_featured: Set(true),
            display_order: Set(order as i32),
            created_at: Set(Utc::now().into()),
        }
        .insert(orm)
        .await?;
        ids.push(instructor.id);
    }
    tracing::info!(count = ids.len(), "seeded instructors");
    Ok(ids)
}

async fn seed_courses(
    orm: &DatabaseConnection,
    categories: &[Uuid],
    instructors: &[Uuid],
) -> anyhow::Result<()> {
    if Courses::find().count(orm).await? > 0 {
        return Ok(());
    }

    let catalog = [
        ("Responsive Web Design", 0, 0, 14_900, Some(9_900), CourseLevel::Beginner, 12.0),
        ("Brand Identity Basics", 1, 1, 12_000, None, CourseLevel::Intermediate, 8.5),
        ("Cinematic Video Editing", 2, 2, 19_900, Some(15_900), CourseLevel::Advanced, 20.0),
        ("SEO for Beginners", 3, 0, 7_500, None, CourseLevel::Beginner, 4.0),
    ];

    for (title, category, instructor, price, discount_price, level, hours) in catalog {
        let now = Utc::now().into();
        let course = courses::Model {
            id: Uuid::new_v4(),
            title: title.into(),
            slug: String::new(),
            short_description: format!("{title} in a few focused weeks."),
            full_description: format!("{title}: lessons, exercises and a final project."),
            category_id: categories.get(category).copied(),
            instructor_id: instructors.get(instructor).copied(),
            price,
            discount_price,
            level,
            duration_hours: hours,
            max_students: 30,
            enrolled_students: 0,
            thumbnail: "/static/img/course-1.jpg".into(),
            featured_image: None,
            rating: 0.0,
            rating_count: 0,
            is_featured: true,
            is_published: true,
            status: CourseStatus::Published,
            created_at: now,
            updated_at: now,
            published_date: None,
        };
        catalog_service::save_course(orm, course, None).await?;
    }
    tracing::info!(count = catalog.len(), "seeded courses");
    Ok(())
}

async fn seed_banners(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Banners::find().count(orm).await? > 0 {
        return Ok(());
    }
    let slides = [
        ("The Best Online Learning Platform", "Best Online Courses", "/static/img/carousel-1.jpg"),
        ("Get Educated Online From Your Home", "Learn at your own pace", "/static/img/carousel-2.jpg"),
    ];
    for (order, (title, subtitle, image)) in slides.into_iter().enumerate() {
        banners::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.into()),
            subtitle: Set(subtitle.into()),
            description: Set(String::new()),
            image: Set(image.into()),
            button_text: Set("Read More".into()),
            button_url: Set("/about/".into()),
            secondary_button_text: Set("Join Now".into()),
            secondary_button_url: Set("/contact/".into()),
            display_order: Set(order as i32),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
        }
        .insert(orm)
        .await?;
    }
    tracing::info!("seeded banners");
    Ok(())
}

async fn seed_services(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Services::find().count(orm).await? > 0 {
        return Ok(());
    }
    let tiles = [
        ("Skilled Instructors", ServiceIcon::GraduationCap),
        ("Online Classes", ServiceIcon::Globe),
        ("Home Projects", ServiceIcon::Home),
        ("Book Library", ServiceIcon::BookOpen),
    ];
    for (order, (title, icon)) in tiles.into_iter().enumerate() {
        services::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.into()),
            description: Set("Diam elitr kasd sed at elitr sed ipsum justo dolor sed clita amet diam".into()),
            icon: Set(icon),
            display_order: Set(order as i32),
            is_active: Set(true),
        }
        .insert(orm)
        .await?;
    }
    tracing::info!("seeded services");
    Ok(())
}
