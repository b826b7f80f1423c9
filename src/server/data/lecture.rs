use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::course::{CreateLectureParam, Lecture, Media};

/// Repository for the lectures of a course.
pub struct LectureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LectureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a lecture whose video is already uploaded.
    pub async fn create(
        &self,
        course_id: i32,
        param: CreateLectureParam,
        video: Media,
    ) -> Result<Lecture, DbErr> {
        let entity = entity::lecture::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            video_public_id: ActiveValue::Set(video.public_id),
            video_url: ActiveValue::Set(video.url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lecture::from_entity(entity))
    }

    /// Gets the lectures of a course in insertion order.
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Lecture>, DbErr> {
        let entities = entity::prelude::Lecture::find()
            .filter(entity::lecture::Column::CourseId.eq(course_id))
            .order_by_asc(entity::lecture::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lecture::from_entity).collect())
    }

    /// Finds a lecture belonging to the given course.
    pub async fn find(&self, course_id: i32, lecture_id: i32) -> Result<Option<Lecture>, DbErr> {
        let entity = entity::prelude::Lecture::find_by_id(lecture_id)
            .filter(entity::lecture::Column::CourseId.eq(course_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Lecture::from_entity))
    }

    pub async fn delete(&self, lecture_id: i32) -> Result<(), DbErr> {
        entity::prelude::Lecture::delete_by_id(lecture_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every lecture of a course.
    pub async fn delete_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Lecture::delete_many()
            .filter(entity::lecture::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Lecture::find()
            .filter(entity::lecture::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }
}
