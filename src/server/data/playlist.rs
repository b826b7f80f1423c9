use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::PlaylistItem;

/// Repository for the courses saved to each user's playlist.
pub struct PlaylistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaylistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's playlist in insertion order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<PlaylistItem>, DbErr> {
        let entities = entity::prelude::PlaylistItem::find()
            .filter(entity::playlist_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::playlist_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PlaylistItem::from_entity).collect())
    }

    /// Checks whether the course is already on the user's playlist.
    pub async fn contains(&self, user_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PlaylistItem::find()
            .filter(entity::playlist_item::Column::UserId.eq(user_id))
            .filter(entity::playlist_item::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a course with its cached poster url.
    pub async fn add(
        &self,
        user_id: i32,
        course_id: i32,
        poster_url: String,
    ) -> Result<PlaylistItem, DbErr> {
        let entity = entity::playlist_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(course_id),
            poster_url: ActiveValue::Set(poster_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlaylistItem::from_entity(entity))
    }

    /// Removes a course from the user's playlist.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry removed
    /// - `Ok(false)` - Course was not on the playlist
    pub async fn remove(&self, user_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlaylistItem::delete_many()
            .filter(entity::playlist_item::Column::UserId.eq(user_id))
            .filter(entity::playlist_item::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes a course from every playlist.
    pub async fn remove_course(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlaylistItem::delete_many()
            .filter(entity::playlist_item::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
