use sea_orm::{
    ColumnTrait,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};

pub mod auth_service;
pub mod catalog_service;
pub mod category_service;
pub mod contact_service;
pub mod content_service;
pub mod course_service;
pub mod instructor_service;
pub mod module_service;
pub mod settings_service;
pub mod site_service;
pub mod student_service;
pub mod testimonial_service;

/// Case-insensitive substring match, portable across Postgres and SQLite.
pub(crate) fn icontains<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::expr(Func::lower(Expr::col((col.entity_name(), col))))
        .like(LikeExpr::new(format!("%{escaped}%")).escape('\\'))
}

/// Trimmed, non-empty search term.
pub(crate) fn search_term(q: Option<&String>) -> Option<&str> {
    q.map(|s| s.trim()).filter(|s| !s.is_empty())
}
