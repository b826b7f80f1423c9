use super::load_user;
use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    events::feed::ChangeFeed,
    mailer::mock::MockMailer,
    media::mock::{test_file, MockMediaHost},
    service::auth::{AuthService, RegisterParam},
    util::password::verify_password,
};
use test_utils::{builder::TestBuilder, factory};
use url::Url;

mod forget_password;
mod login;

fn register_param(email: &str) -> RegisterParam {
    RegisterParam {
        name: "Ada".to_string(),
        email: email.to_string(),
        password: "secret-pass".to_string(),
        avatar: test_file("avatar.png"),
    }
}
