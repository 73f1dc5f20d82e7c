use std::net::IpAddr;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::{content::UpdateMessageStatusRequest, site::ContactForm},
    entity::contact_messages::{self, Column, Entity as ContactMessages, MessageStatus},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::ContactMessage,
    response::{ApiResponse, ItemList, Meta},
    routes::params::ContactAdminQuery,
    services::{icontains, search_term},
    state::AppState,
    validation::Validator,
};

pub const CONTACT_SUCCESS: &str = "Your message has been sent successfully!";

pub fn validate_contact(form: &ContactForm) -> AppResult<()> {
    let mut v = Validator::new();
    v.required("name", &form.name, 100)
        .email("email", &form.email)
        .required("subject", &form.subject, 200)
        .required("message", &form.message, usize::MAX);
    v.finish()
}

/// Store a public contact form submission. Nothing is written unless every field passes.
pub async fn submit_contact(
    state: &AppState,
    form: ContactForm,
    ip: Option<IpAddr>,
) -> AppResult<ApiResponse<ContactMessage>> {
    validate_contact(&form)?;

    let now = Utc::now();
    let message = contact_messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(form.name.trim().to_string()),
        email: Set(form.email.trim().to_string()),
        subject: Set(form.subject.trim().to_string()),
        message: Set(form.message.trim().to_string()),
        ip_address: Set(ip.map(|ip| ip.to_string())),
        status: Set(MessageStatus::New),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(message_id = %message.id, "contact message received");

    Ok(ApiResponse::success(
        CONTACT_SUCCESS,
        message.into(),
        Some(Meta::empty()),
    ))
}

pub async fn list_messages(
    state: &AppState,
    user: &AuthUser,
    query: ContactAdminQuery,
) -> AppResult<ApiResponse<ItemList<ContactMessage>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(q) = search_term(query.q.as_ref()) {
        condition = condition.add(
            Condition::any()
                .add(icontains(Column::Name, q))
                .add(icontains(Column::Email, q))
                .add(icontains(Column::Subject, q))
                .add(icontains(Column::Message, q)),
        );
    }
    if let Some(status) = query.status {
        condition = condition.add(Column::Status.eq(status));
    }

    let finder = ContactMessages::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ContactMessage::from)
        .collect();

    Ok(ApiResponse::success(
        "Contact messages",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_message(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<ContactMessage>> {
    ensure_admin(user)?;
    let message = ContactMessages::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Contact message", message.into(), None))
}

/// Only the status of a message can change; its contents are read-only.
pub async fn update_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateMessageStatusRequest,
) -> AppResult<ApiResponse<ContactMessage>> {
    ensure_admin(user)?;
    let existing = ContactMessages::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: contact_messages::ActiveModel = existing.into();
    active.status = Set(payload.status);
    active.updated_at = Set(Utc::now().into());
    let message = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "contact_status",
        "contact_messages",
        serde_json::json!({ "message_id": message.id, "status": message.status }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        message.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_message(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ContactMessages::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user,
        "contact_delete",
        "contact_messages",
        serde_json::json!({ "message_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: "Course question".into(),
            message: "When does the next cohort start?".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate_contact(&form("Aziza", "aziza@example.com")).is_ok());
    }

    #[test]
    fn every_bad_field_is_reported() {
        let Err(AppError::Validation(errors)) = validate_contact(&ContactForm {
            email: "not-an-email".into(),
            subject: "s".repeat(201),
            ..ContactForm::default()
        }) else {
            panic!("expected validation error");
        };
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("subject"));
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn email_longer_than_column_is_rejected() {
        let long = format!("{}@example.com", "x".repeat(300));
        let Err(AppError::Validation(errors)) = validate_contact(&form("Aziza", &long)) else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("email"));
    }
}
