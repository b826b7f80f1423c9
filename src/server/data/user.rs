//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, profile and credential updates, the subscription
//! sub-record and the aggregate counts consumed by the stats aggregator.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{
    CreateUserParam, Role, Subscription, SubscriptionStatus, UpdateProfileParam, User,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account with the `user` role and no subscription.
    ///
    /// # Arguments
    /// - `param` - Name, email, password hash and uploaded avatar
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(Role::User.as_str().to_string()),
            avatar_public_id: ActiveValue::Set(param.avatar.public_id),
            avatar_url: ActiveValue::Set(param.avatar.url),
            subscription_id: ActiveValue::Set(None),
            subscription_status: ActiveValue::Set(None),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by creation, oldest first.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies the provided profile changes, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(())` - Update executed (or nothing to update)
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<(), DbErr> {
        if param.name.is_none() && param.email.is_none() {
            return Ok(());
        }

        let mut update = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id));

        if let Some(name) = param.name {
            update = update.col_expr(entity::user::Column::Name, Expr::value(name));
        }
        if let Some(email) = param.email {
            update = update.col_expr(entity::user::Column::Email, Expr::value(email));
        }

        update.exec(self.db).await?;
        Ok(())
    }

    /// Replaces the stored password hash.
    pub async fn set_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the avatar reference after a new image was uploaded.
    pub async fn set_avatar(&self, user_id: i32, public_id: String, url: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::AvatarPublicId, Expr::value(public_id))
            .col_expr(entity::user::Column::AvatarUrl, Expr::value(url))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the user's role.
    pub async fn set_role(&self, user_id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Role, Expr::value(role.as_str().to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores a subscription sub-record, replacing any previous one.
    ///
    /// Id and status are written in a single statement.
    pub async fn set_subscription(
        &self,
        user_id: i32,
        subscription: &Subscription,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::SubscriptionId,
                Expr::value(Some(subscription.id.clone())),
            )
            .col_expr(
                entity::user::Column::SubscriptionStatus,
                Expr::value(Some(subscription.status.as_str().to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks the user's existing subscription as active.
    pub async fn activate_subscription(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::SubscriptionId.is_not_null())
            .col_expr(
                entity::user::Column::SubscriptionStatus,
                Expr::value(Some(SubscriptionStatus::Active.as_str().to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears the subscription sub-record, id and status together.
    pub async fn clear_subscription(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::SubscriptionId,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::SubscriptionStatus,
                Expr::value(Option::<String>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the digest and expiry of a password reset token.
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Some(digest)),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpire,
                Expr::value(Some(expires_at)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Finds the user owning an unexpired reset token digest.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Digest matches and `expires_at > now`
    /// - `Ok(None)` - Unknown digest or expired token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_reset_token(
        &self,
        digest: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetPasswordToken.eq(digest))
            .filter(entity::user::Column::ResetPasswordExpire.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Sets a new password hash and clears the reset token fields.
    pub async fn reset_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpire,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a user. Playlist entries are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts users whose subscription status is active.
    pub async fn count_active_subscribers(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(
                entity::user::Column::SubscriptionStatus.eq(SubscriptionStatus::Active.as_str()),
            )
            .count(self.db)
            .await
    }
}
