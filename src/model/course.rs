use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaDto {
    pub public_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_by: String,
    pub poster: MediaDto,
    pub views: i64,
    pub num_of_videos: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LectureDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub video: MediaDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoursesDto {
    pub success: bool,
    pub courses: Vec<CourseDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LecturesDto {
    pub success: bool,
    pub lectures: Vec<LectureDto>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CourseQueryDto {
    /// Case-insensitive substring matched against the title
    pub keyword: Option<String>,
    /// Case-insensitive substring matched against the category
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LectureQueryDto {
    pub course_id: i32,
    pub lecture_id: i32,
}
