use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{config::BillingConfig, data::user::UserRepository, model::user::User};

mod auth;
mod stats;
mod subscription;
mod user;

const TEST_SECRET: &str = "test_gateway_secret";

fn billing() -> BillingConfig {
    BillingConfig {
        plan_id: "plan_test".to_string(),
        key_id: "rzp_test_key".to_string(),
        key_secret: TEST_SECRET.to_string(),
        refund_days: 7,
    }
}

/// Loads the domain user for a factory-created entity.
async fn load_user(db: &DatabaseConnection, user_id: i32) -> Result<User, DbErr> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", user_id)))
}
