//! Authentication tokens and the cookie that carries them.
//!
//! Tokens are HS256 JWTs embedding the user id. They travel in the `token`
//! cookie, which is HttpOnly, Secure and SameSite=None so the separately hosted
//! frontend can send it with credentials.

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError};

/// Name of the cookie carrying the token.
pub const AUTH_COOKIE: &str = "token";

/// Lifetime of both the token and its cookie.
pub const TOKEN_TTL_DAYS: i64 = 15;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies authentication tokens with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for the user, valid for `TOKEN_TTL_DAYS`.
    pub fn issue(&self, user_id: i32) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(InternalError::TokenEncoding)
    }

    /// Verifies signature and expiry and returns the embedded user id.
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;

        data.claims.sub.parse().map_err(|_| {
            AuthError::InvalidToken(jsonwebtoken::errors::ErrorKind::InvalidSubject.into())
        })
    }
}

/// Cookie carrying a freshly issued token.
pub fn auth_cookie(token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .expires(time::OffsetDateTime::now_utc() + time::Duration::days(TOKEN_TTL_DAYS))
        .build()
}

/// Expired, empty cookie that makes the browser drop the token.
pub fn cleared_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .expires(time::OffsetDateTime::now_utc())
        .build()
}

/// Reads the token from the request's `Cookie` header.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    cookie_header
        .split(';')
        .filter_map(|pair| Cookie::parse(pair.trim().to_string()).ok())
        .find(|cookie| cookie.name() == AUTH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
