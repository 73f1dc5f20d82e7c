use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest, RegisteredStudent},
    entity::users::{self, Column as UserCol, Entity as Users, ROLE_STUDENT},
    error::{AppError, AppResult},
    models::{Student, User},
    response::{ApiResponse, Meta},
    services::student_service,
    state::AppState,
    validation::Validator,
};

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Insert a user with `role`. The email must not be registered yet.
pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    password: &str,
    full_name: Option<String>,
    role: &str,
) -> AppResult<users::Model> {
    let email = email.trim().to_lowercase();
    let mut v = Validator::new();
    v.email("email", &email);
    if password.chars().count() < MIN_PASSWORD_LEN {
        v.add(
            "password",
            format!("Ensure this value has at least {MIN_PASSWORD_LEN} characters."),
        );
    }
    v.finish()?;

    let exists = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(conn)
        .await?;
    if exists.is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        password_hash: Set(hash_password(password)?),
        full_name: Set(full_name.filter(|n| !n.trim().is_empty())),
        role: Set(role.to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;
    Ok(user)
}

pub async fn register_student(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<RegisteredStudent>> {
    let RegisterRequest {
        email,
        password,
        full_name,
        phone,
    } = payload;

    let txn = state.orm.begin().await?;
    let user = create_user(&txn, &email, &password, full_name, ROLE_STUDENT).await?;
    let student = student_service::insert_student(
        &txn,
        user.id,
        phone.unwrap_or_default(),
        None,
        String::new(),
    )
    .await?;
    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.id),
        "user_register",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id, "student_id": student.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let student = Student::from_parts(student, Some(&user));
    Ok(ApiResponse::success(
        "Student registered",
        RegisteredStudent {
            user: User::from(user),
            student,
        },
        None,
    ))
}

pub fn issue_token(user: &users::Model, secret: &str, ttl_hours: i64) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role.clone(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let user = Users::find()
        .filter(UserCol::Email.eq(email.trim().to_lowercase()))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email or password".into()))?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let token = issue_token(&user, &state.config.jwt_secret, state.config.token_ttl_hours)?;
    let resp = LoginResponse {
        token: format!("Bearer {}", token),
        role: user.role.clone(),
    };

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.id),
        "user_login",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Logged in", resp, Some(Meta::empty())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::decode_token;

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("correct horse").expect("hash");
        assert!(verify_password("correct horse", &hash).expect("verify"));
        assert!(!verify_password("wrong horse", &hash).expect("verify"));
    }

    #[test]
    fn issued_token_decodes_to_same_user() {
        let user = users::Model {
            id: Uuid::new_v4(),
            email: "admin@example.com".into(),
            password_hash: String::new(),
            full_name: None,
            role: users::ROLE_ADMIN.into(),
            created_at: Utc::now().into(),
        };
        let token = issue_token(&user, "secret", 24).expect("token");
        let auth = decode_token(&token, "secret").expect("decode");
        assert_eq!(auth.user_id, user.id);
        assert_eq!(auth.role, users::ROLE_ADMIN);
        assert!(decode_token(&token, "other").is_err());
    }
}
