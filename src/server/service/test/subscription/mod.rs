use super::{billing, load_user, TEST_SECRET};
use crate::server::{
    data::{payment::PaymentRepository, user::UserRepository},
    error::AppError,
    events::feed::ChangeFeed,
    gateway::mock::{GatewayCall, MockGateway},
    model::{
        subscription::{CancelOutcome, PaymentVerificationParam, VerificationOutcome},
        user::SubscriptionStatus,
    },
    service::subscription::SubscriptionService,
};
use test_utils::{builder::TestBuilder, factory};

mod end_for_deletion;
mod verify;
