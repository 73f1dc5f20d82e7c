//! Student profiles and their course enrollments.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::people::{
        CreateEnrollmentRequest, CreateStudentRequest, UpdateEnrollmentRequest,
        UpdateStudentRequest,
    },
    entity::{
        courses::{self, Entity as Courses},
        enrollments::{self, Entity as Enrollments},
        students::{self, Entity as Students},
        users::{self, Entity as Users},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Enrollment, Student},
    response::{ApiResponse, ItemList, Meta},
    routes::params::{EnrollmentAdminQuery, StudentAdminQuery},
    services::{icontains, search_term},
    state::AppState,
    validation::Validator,
};

async fn student_view<C: ConnectionTrait>(conn: &C, model: students::Model) -> AppResult<Student> {
    let user = Users::find_by_id(model.user_id).one(conn).await?;
    Ok(Student::from_parts(model, user.as_ref()))
}

pub async fn list_students(
    state: &AppState,
    user: &AuthUser,
    query: StudentAdminQuery,
) -> AppResult<ApiResponse<ItemList<Student>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(q) = search_term(query.q.as_ref()) {
        condition = condition.add(
            Condition::any()
                .add(icontains(users::Column::Email, q))
                .add(icontains(users::Column::FullName, q))
                .add(icontains(students::Column::Phone, q)),
        );
    }

    let total = Students::find()
        .join(JoinType::LeftJoin, students::Relation::Users.def())
        .filter(condition.clone())
        .count(&state.orm)
        .await? as i64;
    let items = Students::find()
        .find_also_related(Users)
        .filter(condition)
        .order_by_desc(students::Column::CreatedAt)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(student, user)| Student::from_parts(student, user.as_ref()))
        .collect();

    Ok(ApiResponse::success(
        "Students",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_student(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Student>> {
    ensure_admin(user)?;
    let student = Students::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let student = student_view(&state.orm, student).await?;
    Ok(ApiResponse::success("Student", student, None))
}

/// Insert a profile for `user_id`. A user holds at most one.
pub async fn insert_student<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    phone: String,
    profile_picture: Option<String>,
    bio: String,
) -> AppResult<students::Model> {
    let mut v = Validator::new();
    v.max_len("phone", &phone, 20);
    v.finish()?;

    if Users::find_by_id(user_id).one(conn).await?.is_none() {
        return Err(AppError::BadRequest(format!("Unknown user {user_id}")));
    }
    let taken = Students::find()
        .filter(students::Column::UserId.eq(user_id))
        .count(conn)
        .await?;
    if taken > 0 {
        return Err(AppError::Conflict(
            "This user already has a student profile".into(),
        ));
    }

    let student = students::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        phone: Set(phone),
        profile_picture: Set(profile_picture),
        bio: Set(bio),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;
    Ok(student)
}

pub async fn create_student(
    state: &AppState,
    user: &AuthUser,
    payload: CreateStudentRequest,
) -> AppResult<ApiResponse<Student>> {
    ensure_admin(user)?;
    let student = insert_student(
        &state.orm,
        payload.user_id,
        payload.phone.unwrap_or_default(),
        payload.profile_picture,
        payload.bio.unwrap_or_default(),
    )
    .await?;

    audit::record(
        &state.orm,
        user,
        "student_create",
        "students",
        serde_json::json!({ "student_id": student.id }),
    )
    .await;

    let student = student_view(&state.orm, student).await?;
    Ok(ApiResponse::success(
        "Student created",
        student,
        Some(Meta::empty()),
    ))
}

pub async fn update_student(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateStudentRequest,
) -> AppResult<ApiResponse<Student>> {
    ensure_admin(user)?;
    let existing = Students::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut v = Validator::new();
    if let Some(phone) = &payload.phone {
        v.max_len("phone", phone, 20);
    }
    v.finish()?;

    let mut active: students::ActiveModel = existing.into();
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(profile_picture) = payload.profile_picture {
        active.profile_picture = Set(profile_picture);
    }
    if let Some(bio) = payload.bio {
        active.bio = Set(bio);
    }
    let student = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user,
        "student_update",
        "students",
        serde_json::json!({ "student_id": student.id }),
    )
    .await;

    let student = student_view(&state.orm, student).await?;
    Ok(ApiResponse::success("Updated", student, Some(Meta::empty())))
}

pub async fn delete_student(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let course_ids: Vec<Uuid> = Enrollments::find()
        .filter(enrollments::Column::StudentId.eq(id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|e| e.course_id)
        .collect();

    Enrollments::delete_many()
        .filter(enrollments::Column::StudentId.eq(id))
        .exec(&txn)
        .await?;
    let result = Students::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    for course_id in course_ids {
        recompute_enrolled(&txn, course_id).await?;
    }
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "student_delete",
        "students",
        serde_json::json!({ "student_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Store the number of active enrollments on the course.
pub async fn recompute_enrolled<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> AppResult<i32> {
    let count = Enrollments::find()
        .filter(enrollments::Column::CourseId.eq(course_id))
        .filter(enrollments::Column::IsActive.eq(true))
        .count(conn)
        .await? as i32;

    Courses::update_many()
        .col_expr(courses::Column::EnrolledStudents, Expr::value(count))
        .filter(courses::Column::Id.eq(course_id))
        .exec(conn)
        .await?;

    Ok(count)
}

fn check_not_full(course: &courses::Model) -> AppResult<()> {
    if course.is_full() {
        return Err(AppError::BadRequest(format!(
            "Course '{}' has no free places",
            course.title
        )));
    }
    Ok(())
}

async fn ensure_capacity<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> AppResult<()> {
    let course = Courses::find_by_id(course_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    check_not_full(&course)
}

/// Enroll a student. Rejects a repeated (student, course) pair and full courses.
pub async fn enroll<C: ConnectionTrait>(
    conn: &C,
    student_id: Uuid,
    course_id: Uuid,
) -> AppResult<enrollments::Model> {
    if Students::find_by_id(student_id).one(conn).await?.is_none() {
        return Err(AppError::BadRequest(format!("Unknown student {student_id}")));
    }
    let course = Courses::find_by_id(course_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Unknown course {course_id}")))?;

    let existing = Enrollments::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .filter(enrollments::Column::CourseId.eq(course_id))
        .count(conn)
        .await?;
    if existing > 0 {
        return Err(AppError::Conflict(
            "Enrollment with this Student and Course already exists.".into(),
        ));
    }
    check_not_full(&course)?;

    let enrollment = enrollments::ActiveModel {
        id: Set(Uuid::new_v4()),
        student_id: Set(student_id),
        course_id: Set(course_id),
        enrolled_at: Set(Utc::now().into()),
        completed_at: Set(None),
        is_active: Set(true),
    }
    .insert(conn)
    .await?;

    recompute_enrolled(conn, course_id).await?;
    tracing::debug!(%student_id, %course_id, "student enrolled");
    Ok(enrollment)
}

pub async fn list_enrollments(
    state: &AppState,
    user: &AuthUser,
    query: EnrollmentAdminQuery,
) -> AppResult<ApiResponse<ItemList<Enrollment>>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = Enrollments::find();
    if let Some(student_id) = query.student_id {
        finder = finder.filter(enrollments::Column::StudentId.eq(student_id));
    }
    if let Some(course_id) = query.course_id {
        finder = finder.filter(enrollments::Column::CourseId.eq(course_id));
    }
    let finder = finder.order_by_desc(enrollments::Column::EnrolledAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Enrollment::from)
        .collect();

    Ok(ApiResponse::success(
        "Enrollments",
        ItemList::new(items),
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_enrollment(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Enrollment>> {
    ensure_admin(user)?;
    let enrollment = Enrollments::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Enrollment", enrollment.into(), None))
}

pub async fn create_enrollment(
    state: &AppState,
    user: &AuthUser,
    payload: CreateEnrollmentRequest,
) -> AppResult<ApiResponse<Enrollment>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let enrollment = enroll(&txn, payload.student_id, payload.course_id).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "enrollment_create",
        "enrollments",
        serde_json::json!({ "enrollment_id": enrollment.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Enrollment created",
        enrollment.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_enrollment(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateEnrollmentRequest,
) -> AppResult<ApiResponse<Enrollment>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let existing = Enrollments::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let course_id = existing.course_id;
    if payload.is_active == Some(true) && !existing.is_active {
        ensure_capacity(&txn, course_id).await?;
    }
    let mut active: enrollments::ActiveModel = existing.into();
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    match payload.completed {
        Some(true) => active.completed_at = Set(Some(Utc::now().into())),
        Some(false) => active.completed_at = Set(None),
        None => {}
    }
    let enrollment = active.update(&txn).await?;
    recompute_enrolled(&txn, course_id).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "enrollment_update",
        "enrollments",
        serde_json::json!({ "enrollment_id": enrollment.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        enrollment.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_enrollment(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let txn = state.orm.begin().await?;
    let enrollment = Enrollments::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;
    Enrollments::delete_by_id(id).exec(&txn).await?;
    recompute_enrolled(&txn, enrollment.course_id).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        user,
        "enrollment_delete",
        "enrollments",
        serde_json::json!({ "enrollment_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
