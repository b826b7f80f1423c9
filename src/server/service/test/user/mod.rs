use super::{billing, load_user};
use crate::server::{
    data::{payment::PaymentRepository, playlist::PlaylistRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    events::feed::{ChangeFeed, CollectionChange},
    gateway::mock::{GatewayCall, MockGateway},
    media::{
        mock::{test_file, MockMediaHost},
        MediaKind,
    },
    model::user::{Role, UpdateProfileParam},
    service::{subscription::SubscriptionService, user::UserService},
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};

mod change_password;
mod delete;
mod playlist;
mod toggle_role;
mod update_profile;
