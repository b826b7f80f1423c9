//! Links into the frontend application, resolved under `FRONTEND_URL`.

use url::Url;

use crate::server::error::internal::InternalError;

/// Returns `frontend_url` with a trailing `/` so joins append below its path.
pub fn root(frontend_url: &Url) -> Url {
    let mut root = frontend_url.clone();
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root
}

/// Resolves `path` relative to the frontend root.
///
/// `https://example.com/app` joined with `paymentfail` gives
/// `https://example.com/app/paymentfail`.
pub fn page(frontend_url: &Url, path: &str) -> Result<Url, InternalError> {
    root(frontend_url)
        .join(path.trim_start_matches('/'))
        .map_err(|source| InternalError::RedirectUrl {
            base: frontend_url.to_string(),
            source,
        })
}
