use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::{CourseQueryDto, CoursesDto, LectureQueryDto, LecturesDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::course::{CourseFilter, CreateCourseParam, CreateLectureParam},
        service::course::CourseService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List courses, optionally filtered by title keyword and category.
///
/// Lectures are not included. Filters are case-insensitive substring matches.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    params(CourseQueryDto),
    responses(
        (status = 200, description = "Matching courses, newest first", body = CoursesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db, &*state.media, &state.feed)
        .list(CourseFilter {
            keyword: query.keyword,
            category: query.category,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(CoursesDto {
            success: true,
            courses: courses.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Create a course from a multipart form with a poster `file`.
///
/// # Access Control
/// - `Admin` - Only admins can create courses
///
/// # Returns
/// - `201 Created` - Course created
/// - `400 Bad Request` - Missing field or poster
#[utoipa::path(
    post,
    path = "/api/v1/createcourse",
    tag = COURSE_TAG,
    request_body(content = String, content_type = "multipart/form-data", description = "title, description, category, created_by and poster file"),
    responses(
        (status = 201, description = "Course created", body = MessageDto),
        (status = 400, description = "Missing field or poster", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::read(multipart).await?;
    let [title, description, category, created_by] =
        form.require(["title", "description", "category", "created_by"])?;
    let poster = form.require_file()?;

    CourseService::new(&state.db, &*state.media, &state.feed)
        .create(
            CreateCourseParam {
                title,
                description,
                category,
                created_by,
            },
            poster,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(
            "Course Created Successfully. You can add lectures now.",
        )),
    ))
}

/// Get a course's lectures and count the view.
///
/// # Access Control
/// - `Subscriber` - Active subscribers and admins
///
/// # Returns
/// - `200 OK` - Lectures in insertion order
/// - `403 Forbidden` - No active subscription
/// - `404 Not Found` - Unknown course
#[utoipa::path(
    get,
    path = "/api/v1/course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Lectures of the course", body = LecturesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No active subscription", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_lectures(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Subscriber])
        .await?;

    let lectures = CourseService::new(&state.db, &*state.media, &state.feed)
        .get_lectures(course_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LecturesDto {
            success: true,
            lectures: lectures.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}

/// Add a lecture with a video `file` to a course.
///
/// # Access Control
/// - `Admin` - Only admins can add lectures
#[utoipa::path(
    post,
    path = "/api/v1/course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    request_body(content = String, content_type = "multipart/form-data", description = "title, description and video file"),
    responses(
        (status = 200, description = "Lecture added", body = MessageDto),
        (status = 400, description = "Missing field or video", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_lecture(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::read(multipart).await?;
    let [title, description] = form.require(["title", "description"])?;
    let video = form.require_file()?;

    CourseService::new(&state.db, &*state.media, &state.feed)
        .add_lecture(course_id, CreateLectureParam { title, description }, video)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Lecture added in Course")),
    ))
}

/// Delete a course with its lectures and media.
///
/// # Access Control
/// - `Admin` - Only admins can delete courses
#[utoipa::path(
    delete,
    path = "/api/v1/course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CourseService::new(&state.db, &*state.media, &state.feed)
        .delete_course(course_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Course Deleted Successfully")),
    ))
}

/// Delete a single lecture and its video.
///
/// # Access Control
/// - `Admin` - Only admins can delete lectures
#[utoipa::path(
    delete,
    path = "/api/v1/lecture",
    tag = COURSE_TAG,
    params(LectureQueryDto),
    responses(
        (status = 200, description = "Lecture deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Course or lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lecture(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LectureQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CourseService::new(&state.db, &*state.media, &state.feed)
        .delete_lecture(query.course_id, query.lecture_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Lecture Deleted Successfully")),
    ))
}
