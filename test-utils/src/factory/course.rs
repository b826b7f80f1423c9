//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    views: i64,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"`
    /// - category: `"Web Development"`
    /// - views: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Course {}", id),
            category: "Web Development".to_string(),
            views: 0,
        }
    }

    /// Sets the title for the course.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the category for the course.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the view counter for the course.
    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("A course used in tests".to_string()),
            category: ActiveValue::Set(self.category),
            created_by: ActiveValue::Set("Test Author".to_string()),
            poster_public_id: ActiveValue::Set(format!("posters/{}", next_id())),
            poster_url: ActiveValue::Set("https://media.example.com/poster.png".to_string()),
            views: ActiveValue::Set(self.views),
            num_of_videos: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
