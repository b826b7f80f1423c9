//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("CustomUser")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    subscription: Option<(String, String)>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: a placeholder that matches no password
    /// - role: `"user"`
    /// - subscription: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: "not-a-hash".to_string(),
            role: "user".to_string(),
            subscription: None,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role to `admin` when true, `user` otherwise.
    pub fn admin(mut self, admin: bool) -> Self {
        self.role = if admin { "admin" } else { "user" }.to_string();
        self
    }

    /// Sets the gateway subscription id and its status.
    pub fn subscription(mut self, id: impl Into<String>, status: impl Into<String>) -> Self {
        self.subscription = Some((id.into(), status.into()));
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let (subscription_id, subscription_status) = match self.subscription {
            Some((id, status)) => (Some(id), Some(status)),
            None => (None, None),
        };

        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            avatar_public_id: ActiveValue::Set(format!("avatars/{}", next_id())),
            avatar_url: ActiveValue::Set("https://media.example.com/avatar.png".to_string()),
            subscription_id: ActiveValue::Set(subscription_id),
            subscription_status: ActiveValue::Set(subscription_status),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
