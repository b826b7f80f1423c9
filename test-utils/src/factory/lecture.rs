//! Lecture factory for creating test lecture entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lectures belonging to a course.
pub struct LectureFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    title: String,
}

impl<'a> LectureFactory<'a> {
    /// Creates a new LectureFactory for the given course.
    ///
    /// Defaults:
    /// - title: `"Lecture {id}"`
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        Self {
            db,
            course_id,
            title: format!("Lecture {}", next_id()),
        }
    }

    /// Sets the title for the lecture.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the lecture entity into the database.
    ///
    /// Does not touch the parent course's `num_of_videos` counter.
    pub async fn build(self) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("A lecture used in tests".to_string()),
            video_public_id: ActiveValue::Set(format!("videos/{}", next_id())),
            video_url: ActiveValue::Set("https://media.example.com/video.mp4".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lecture with default values for the given course.
pub async fn create_lecture(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::lecture::Model, DbErr> {
    LectureFactory::new(db, course_id).build().await
}
