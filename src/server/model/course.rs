//! Course and lecture domain models.

use chrono::{DateTime, Utc};

use crate::model::course::{CourseDto, LectureDto, MediaDto};

/// Poster or video stored on the media host.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub public_id: String,
    pub url: String,
}

impl Media {
    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            public_id: self.public_id,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_by: String,
    pub poster: Media,
    pub views: i64,
    pub num_of_videos: i32,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            created_by: self.created_by,
            poster: self.poster.into_dto(),
            views: self.views,
            num_of_videos: self.num_of_videos,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            category: entity.category,
            created_by: entity.created_by,
            poster: Media {
                public_id: entity.poster_public_id,
                url: entity.poster_url,
            },
            views: entity.views,
            num_of_videos: entity.num_of_videos,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub video: Media,
}

impl Lecture {
    pub fn into_dto(self) -> LectureDto {
        LectureDto {
            id: self.id,
            title: self.title,
            description: self.description,
            video: self.video.into_dto(),
        }
    }

    pub fn from_entity(entity: entity::lecture::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            title: entity.title,
            description: entity.description,
            video: Media {
                public_id: entity.video_public_id,
                url: entity.video_url,
            },
        }
    }
}

/// Course fields supplied by an admin; the poster is uploaded separately.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_by: String,
}

/// Lecture fields supplied by an admin; the video is uploaded separately.
#[derive(Debug, Clone)]
pub struct CreateLectureParam {
    pub title: String,
    pub description: String,
}

/// Case-insensitive substring filters for the course listing.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub keyword: Option<String>,
    pub category: Option<String>,
}
