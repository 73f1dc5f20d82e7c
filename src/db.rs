use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema, Statement};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::entity::{
    AuditLogs, Banners, Categories, ContactMessages, Courses, Enrollments, Faqs, Galleries,
    Instructors, Modules, Services, SiteSettings, Students, Testimonials, Users,
};

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Minimal migration runner that executes SQL files in `migrations/` in filename order.
///
/// Every statement in the migration files is idempotent, so running this on each boot is safe.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    run_migrations_from(conn, Path::new("migrations")).await
}

pub async fn run_migrations_from(conn: &DatabaseConnection, dir: &Path) -> Result<()> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        tracing::debug!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            let statement = format!("{stmt};");
            conn.execute(Statement::from_string(backend, statement))
                .await?;
        }
    }

    Ok(())
}

/// Build every table straight from the entity definitions.
///
/// Used for throwaway databases (tests, `sqlite::memory:`) where the SQL migrations,
/// written for Postgres, do not apply.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    // Parents before children so foreign keys resolve.
    let tables = [
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(AuditLogs),
        schema.create_table_from_entity(Categories),
        schema.create_table_from_entity(Instructors),
        schema.create_table_from_entity(Courses),
        schema.create_table_from_entity(Modules),
        schema.create_table_from_entity(Testimonials),
        schema.create_table_from_entity(Banners),
        schema.create_table_from_entity(Services),
        schema.create_table_from_entity(SiteSettings),
        schema.create_table_from_entity(Galleries),
        schema.create_table_from_entity(ContactMessages),
        schema.create_table_from_entity(Students),
        schema.create_table_from_entity(Enrollments),
        schema.create_table_from_entity(Faqs),
    ];
    for table in &tables {
        conn.execute(backend.build(table)).await?;
    }

    // Unique (student, course) pair is not expressible on the entity itself.
    conn.execute(Statement::from_string(
        backend,
        "CREATE UNIQUE INDEX IF NOT EXISTS enrollments_student_course_key ON enrollments (student_id, course_id)",
    ))
    .await?;

    Ok(())
}
