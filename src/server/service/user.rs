//! Account operations for the signed-in user and the admin user list.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, playlist::PlaylistRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    events::feed::{ChangeFeed, CollectionChange},
    media::{MediaFile, MediaHost, MediaKind},
    model::user::{PlaylistItem, Role, UpdateProfileParam, User},
    service::subscription::SubscriptionService,
    util::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    media: &'a dyn MediaHost,
    feed: &'a ChangeFeed,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a dyn MediaHost, feed: &'a ChangeFeed) -> Self {
        Self { db, media, feed }
    }

    /// Gets a user's playlist.
    pub async fn get_playlist(&self, user_id: i32) -> Result<Vec<PlaylistItem>, AppError> {
        Ok(PlaylistRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Changes the password after checking the old one.
    ///
    /// # Returns
    /// - `Ok(())` - New password stored
    /// - `Err(AppError::BadRequest)` - Either field is empty
    /// - `Err(AppError::AuthErr(IncorrectPassword))` - Old password does not match
    pub async fn change_password(
        &self,
        user: &User,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password.is_empty() || new_password.is_empty() {
            return Err(AppError::BadRequest("Please enter all fields".to_string()));
        }

        if !verify_password(old_password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword(user.id).into());
        }

        let password_hash = hash_password(new_password)?;
        UserRepository::new(self.db)
            .set_password(user.id, password_hash)
            .await?;

        Ok(())
    }

    /// Updates name and/or email, rejecting an email held by another account.
    pub async fn update_profile(
        &self,
        user: &User,
        param: UpdateProfileParam,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AppError::Conflict("Email already in use".to_string()));
                }
            }
        }

        user_repo.update_profile(user.id, param).await?;

        Ok(())
    }

    /// Uploads a new avatar, stores it, then destroys the previous image.
    pub async fn update_avatar(&self, user: &User, file: MediaFile) -> Result<(), AppError> {
        let uploaded = self.media.upload(file, MediaKind::Image).await?;

        UserRepository::new(self.db)
            .set_avatar(user.id, uploaded.public_id, uploaded.secure_url)
            .await?;

        self.media
            .destroy(&user.avatar.public_id, MediaKind::Image)
            .await?;

        Ok(())
    }

    /// Deletes an account with its avatar and subscription.
    ///
    /// The avatar is destroyed and the subscription ended at the gateway
    /// (without a refund) before the user row is removed.
    pub async fn delete(
        &self,
        user: &User,
        subscriptions: &SubscriptionService<'_>,
    ) -> Result<(), AppError> {
        self.media
            .destroy(&user.avatar.public_id, MediaKind::Image)
            .await?;

        subscriptions.end_for_deletion(user).await?;

        UserRepository::new(self.db).delete(user.id).await?;
        self.feed.publish(CollectionChange::User);

        tracing::info!("Deleted user {}", user.id);

        Ok(())
    }

    /// Deletes another user by id on behalf of an admin.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete_by_id(
        &self,
        user_id: i32,
        subscriptions: &SubscriptionService<'_>,
    ) -> Result<User, AppError> {
        let user = self.find_existing(user_id).await?;

        self.delete(&user, subscriptions).await?;

        Ok(user)
    }

    /// Adds a course to the user's playlist.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown course
    /// - `Err(AppError::Conflict)` - Course already on the playlist
    pub async fn add_to_playlist(&self, user: &User, course_id: i32) -> Result<(), AppError> {
        let Some(course) = CourseRepository::new(self.db).find_by_id(course_id).await? else {
            return Err(AppError::NotFound("No Course Found".to_string()));
        };

        let playlist_repo = PlaylistRepository::new(self.db);
        if playlist_repo.contains(user.id, course.id).await? {
            return Err(AppError::Conflict("Item already exist".to_string()));
        }

        playlist_repo
            .add(user.id, course.id, course.poster.url)
            .await?;

        Ok(())
    }

    /// Removes a course from the user's playlist. Absent entries are ignored.
    pub async fn remove_from_playlist(&self, user: &User, course_id: i32) -> Result<(), AppError> {
        if CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("No Course Found".to_string()));
        }

        PlaylistRepository::new(self.db)
            .remove(user.id, course_id)
            .await?;

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Switches a user between `user` and `admin`.
    ///
    /// # Returns
    /// - `Ok(Role)` - The role now held
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn toggle_role(&self, user_id: i32) -> Result<Role, AppError> {
        let user = self.find_existing(user_id).await?;
        let role = user.role.toggled();

        UserRepository::new(self.db).set_role(user.id, role).await?;

        tracing::info!("User {} role changed to {}", user.id, role.as_str());

        Ok(role)
    }

    async fn find_existing(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
