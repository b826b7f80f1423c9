//! User domain models and parameters.
//!
//! Provides the account model with its role, avatar and optional subscription
//! sub-record, plus the playlist entries shown on the profile.

use chrono::{DateTime, Utc};

use crate::model::user::{AvatarDto, PlaylistItemDto, SubscriptionDto, UserDto};

/// Account role controlling access to admin endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parses the stored role column; anything other than `admin` is a regular user.
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// The role an admin toggle switches to.
    pub fn toggled(&self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }
}

/// Lifecycle state of a stored subscription.
///
/// A user with no subscription sub-record has no status at all; cancellation
/// clears the sub-record rather than storing a cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Pending,
    Active,
}

impl SubscriptionStatus {
    /// Maps a stored or gateway-reported status. Only `active` counts as active;
    /// every other gateway status (`created`, `authenticated`, ...) is pending.
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            _ => Self::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
        }
    }
}

/// Gateway subscription attached to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    /// Gateway subscription id.
    pub id: String,
    pub status: SubscriptionStatus,
}

/// Image hosted on the media host.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub public_id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub avatar: Avatar,
    pub subscription: Option<Subscription>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the user holds a verified, paid subscription.
    pub fn has_active_subscription(&self) -> bool {
        matches!(
            self.subscription,
            Some(Subscription {
                status: SubscriptionStatus::Active,
                ..
            })
        )
    }

    /// Converts the user to a DTO together with their playlist.
    pub fn into_dto(self, playlist: Vec<PlaylistItem>) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            avatar: AvatarDto {
                public_id: self.avatar.public_id,
                url: self.avatar.url,
            },
            subscription: self.subscription.map(|s| SubscriptionDto {
                id: s.id,
                status: s.status.as_str().to_string(),
            }),
            playlist: playlist.into_iter().map(PlaylistItem::into_dto).collect(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The subscription sub-record is only present when both its columns are set.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let subscription = match (entity.subscription_id, entity.subscription_status) {
            (Some(id), Some(status)) => Some(Subscription {
                id,
                status: SubscriptionStatus::parse(&status),
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::parse(&entity.role),
            avatar: Avatar {
                public_id: entity.avatar_public_id,
                url: entity.avatar_url,
            },
            subscription,
            created_at: entity.created_at,
        }
    }
}

/// Course saved to a user's playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistItem {
    pub course_id: i32,
    pub poster_url: String,
}

impl PlaylistItem {
    pub fn into_dto(self) -> PlaylistItemDto {
        PlaylistItemDto {
            course_id: self.course_id,
            poster_url: self.poster_url,
        }
    }

    pub fn from_entity(entity: entity::playlist_item::Model) -> Self {
        Self {
            course_id: entity.course_id,
            poster_url: entity.poster_url,
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Avatar,
}

/// Optional profile changes; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub email: Option<String>,
}
