use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        catalog::BulkIdsRequest,
        people::{
            CreateEnrollmentRequest, CreateInstructorRequest, CreateStudentRequest,
            UpdateEnrollmentRequest, UpdateInstructorRequest, UpdateStudentRequest,
        },
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Enrollment, Instructor, Student},
    response::{ApiResponse, BulkResult, ItemList},
    routes::params::{EnrollmentAdminQuery, InstructorAdminQuery, StudentAdminQuery},
    services::{instructor_service, student_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/instructors", get(list_instructors).post(create_instructor))
        .route(
            "/instructors/{id}",
            get(get_instructor)
                .put(update_instructor)
                .delete(delete_instructor),
        )
        .route("/instructors/actions/feature", post(feature_instructors))
        .route("/instructors/actions/duplicate", post(duplicate_instructors))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/enrollments", get(list_enrollments).post(create_enrollment))
        .route(
            "/enrollments/{id}",
            get(get_enrollment)
                .put(update_enrollment)
                .delete(delete_enrollment),
        )
}

#[utoipa::path(
    get,
    path = "/api/admin/instructors",
    params(InstructorAdminQuery),
    responses(
        (status = 200, description = "List instructors", body = ApiResponse<ItemList<Instructor>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_instructors(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<InstructorAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Instructor>>>> {
    let resp = instructor_service::list_instructors(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/instructors/{id}",
    params(("id" = Uuid, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Get instructor", body = ApiResponse<Instructor>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Instructor>>> {
    let resp = instructor_service::get_instructor(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/instructors",
    request_body = CreateInstructorRequest,
    responses(
        (status = 201, description = "Create instructor", body = ApiResponse<Instructor>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateInstructorRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Instructor>>)> {
    let resp = instructor_service::create_instructor(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/instructors/{id}",
    params(("id" = Uuid, Path, description = "Instructor ID")),
    request_body = UpdateInstructorRequest,
    responses(
        (status = 200, description = "Update instructor", body = ApiResponse<Instructor>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInstructorRequest>,
) -> AppResult<Json<ApiResponse<Instructor>>> {
    let resp = instructor_service::update_instructor(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/instructors/{id}",
    params(("id" = Uuid, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Delete instructor"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = instructor_service::delete_instructor(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/instructors/actions/feature",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Mark selected instructors as featured", body = ApiResponse<BulkResult>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn feature_instructors(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BulkIdsRequest>,
) -> AppResult<Json<ApiResponse<BulkResult>>> {
    let resp = instructor_service::mark_featured(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/instructors/actions/duplicate",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Duplicate selected instructors", body = ApiResponse<ItemList<Instructor>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn duplicate_instructors(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BulkIdsRequest>,
) -> AppResult<Json<ApiResponse<ItemList<Instructor>>>> {
    let resp = instructor_service::duplicate_instructors(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/students",
    params(StudentAdminQuery),
    responses(
        (status = 200, description = "List students", body = ApiResponse<ItemList<Student>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_students(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<StudentAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Student>>>> {
    let resp = student_service::list_students(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Get student", body = ApiResponse<Student>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_student(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Student>>> {
    let resp = student_service::get_student(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Create student", body = ApiResponse<Student>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_student(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Student>>)> {
    let resp = student_service::create_student(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Update student", body = ApiResponse<Student>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_student(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> AppResult<Json<ApiResponse<Student>>> {
    let resp = student_service::update_student(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Delete student"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = student_service::delete_student(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/enrollments",
    params(EnrollmentAdminQuery),
    responses(
        (status = 200, description = "List enrollments", body = ApiResponse<ItemList<Enrollment>>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<EnrollmentAdminQuery>,
) -> AppResult<Json<ApiResponse<ItemList<Enrollment>>>> {
    let resp = student_service::list_enrollments(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Get enrollment", body = ApiResponse<Enrollment>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Enrollment>>> {
    let resp = student_service::get_enrollment(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/enrollments",
    request_body = CreateEnrollmentRequest,
    responses(
        (status = 201, description = "Create enrollment", body = ApiResponse<Enrollment>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateEnrollmentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Enrollment>>)> {
    let resp = student_service::create_enrollment(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    request_body = UpdateEnrollmentRequest,
    responses(
        (status = 200, description = "Update enrollment", body = ApiResponse<Enrollment>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEnrollmentRequest>,
) -> AppResult<Json<ApiResponse<Enrollment>>> {
    let resp = student_service::update_enrollment(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Delete enrollment"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = student_service::delete_enrollment(&state, &user, id).await?;
    Ok(Json(resp))
}
