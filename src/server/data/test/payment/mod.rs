use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_subscription_id;
