//! Course data repository.
//!
//! Provides `CourseRepository` for the course catalog: creation, filtered listing,
//! the per-course view counter and the platform-wide view total.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::course::{Course, CourseFilter, CreateCourseParam, Media};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    /// Creates a new CourseRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a course with zero views and no lectures.
    ///
    /// # Arguments
    /// - `param` - Course fields
    /// - `poster` - Poster already uploaded to the media host
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCourseParam, poster: Media) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            created_by: ActiveValue::Set(param.created_by),
            poster_public_id: ActiveValue::Set(poster.public_id),
            poster_url: ActiveValue::Set(poster.url),
            views: ActiveValue::Set(0),
            num_of_videos: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Finds a course by id.
    pub async fn find_by_id(&self, course_id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Lists courses matching the filter, newest first.
    ///
    /// Title and category filters are substring matches; SQLite `LIKE` is
    /// case-insensitive for ASCII text.
    pub async fn search(&self, filter: CourseFilter) -> Result<Vec<Course>, DbErr> {
        let mut query = entity::prelude::Course::find();

        if let Some(keyword) = filter.keyword {
            query = query.filter(entity::course::Column::Title.contains(keyword));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::course::Column::Category.contains(category));
        }

        let entities = query
            .order_by_desc(entity::course::Column::CreatedAt)
            .order_by_desc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Adds one to the course's view counter.
    pub async fn increment_views(&self, course_id: i32) -> Result<(), DbErr> {
        entity::prelude::Course::update_many()
            .filter(entity::course::Column::Id.eq(course_id))
            .col_expr(
                entity::course::Column::Views,
                Expr::col(entity::course::Column::Views).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the number of lectures attached to the course.
    pub async fn set_num_of_videos(&self, course_id: i32, count: i32) -> Result<(), DbErr> {
        entity::prelude::Course::update_many()
            .filter(entity::course::Column::Id.eq(course_id))
            .col_expr(entity::course::Column::NumOfVideos, Expr::value(count))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a course by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Course deleted
    /// - `Ok(false)` - No course with that id
    pub async fn delete(&self, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(course_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sums the view counters of every course.
    pub async fn total_views(&self) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::Course::find()
            .select_only()
            .column_as(entity::course::Column::Views.sum(), "total")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }
}
