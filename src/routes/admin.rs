//! `/api/admin`: CRUD over every model plus the bulk actions. Every handler requires an admin token.

use axum::Router;

use crate::state::AppState;

pub mod catalog;
pub mod content;
pub mod people;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(people::router())
        .merge(content::router())
}
