use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::frontend,
};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_REFUND_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: Url,

    pub jwt_secret: String,

    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub plan_id: String,
    pub refund_days: i64,

    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,

    /// Address that receives contact and course request emails.
    pub owner_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let frontend_url = required("FRONTEND_URL")?;
        let frontend_url = Url::parse(&frontend_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            reason: e.to_string(),
        })?;
        let frontend_url = frontend::root(&frontend_url);

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: optional_parsed("PORT", DEFAULT_PORT)?,
            frontend_url,
            jwt_secret: required("JWT_SECRET")?,
            razorpay_key_id: required("RAZORPAY_API_KEY")?,
            razorpay_key_secret: required("RAZORPAY_API_SECRET")?,
            plan_id: required("PLAN_ID")?,
            refund_days: refund_days(optional_parsed("REFUND_DAYS", DEFAULT_REFUND_DAYS)?)?,
            cloudinary_cloud_name: required("CLOUDINARY_CLIENT_NAME")?,
            cloudinary_api_key: required("CLOUDINARY_CLIENT_API")?,
            cloudinary_api_secret: required("CLOUDINARY_CLIENT_SECRET")?,
            smtp_host: required("SMTP_HOST")?,
            smtp_port: optional_parsed("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            smtp_user: required("SMTP_USER")?,
            smtp_password: required("SMTP_PASS")?,
            owner_email: required("MY_MAIL")?,
        })
    }

    /// Subscription settings handed to the subscription service.
    pub fn billing(&self) -> BillingConfig {
        BillingConfig {
            plan_id: self.plan_id.clone(),
            key_id: self.razorpay_key_id.clone(),
            key_secret: self.razorpay_key_secret.clone(),
            refund_days: self.refund_days,
        }
    }
}

/// Gateway plan, credentials and refund window used by the subscription lifecycle.
#[derive(Clone, Debug)]
pub struct BillingConfig {
    pub plan_id: String,
    /// Public key id, also served to the frontend checkout.
    pub key_id: String,
    /// Shared secret used to verify payment signatures.
    pub key_secret: String,
    /// Cancellations within this many days of payment are refunded.
    pub refund_days: i64,
}

/// Rejects refund windows that are negative or too large to express as a duration.
fn refund_days(days: i64) -> Result<i64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "REFUND_DAYS".to_string(),
        reason: reason.to_string(),
    };

    if days < 0 {
        return Err(invalid("must not be negative"));
    }
    chrono::TimeDelta::try_days(days).ok_or_else(|| invalid("window is out of range"))?;

    Ok(days)
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
