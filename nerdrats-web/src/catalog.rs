//! Badge catalog resource loading

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use nerdrats_core::BadgeCatalog;

/// Bundled location of the badge catalog resource.
pub const CATALOG_URL: &str = "/static/assets/data/badges.json";

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("Catalog rejected: {0}")]
    Invalid(#[from] nerdrats_core::CatalogError),
}

/// Load and validate the badge catalog from its bundled JSON resource.
///
/// Validation happens in the core: records missing a threshold are a
/// configuration error, not a silently auto-unlocked badge.
///
/// # Errors
///
/// Returns an error if the resource cannot be fetched, is not text, or fails
/// catalog validation.
#[allow(clippy::future_not_send)]
pub async fn load_catalog() -> Result<BadgeCatalog, CatalogLoadError> {
    let response = dom::fetch_response(CATALOG_URL)
        .await
        .map_err(|err| CatalogLoadError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(CatalogLoadError::Request(format!(
            "HTTP {status}: {status_text}",
            status = response.status(),
            status_text = response.status_text()
        )));
    }

    let text_js = JsFuture::from(
        response
            .text()
            .map_err(|err| CatalogLoadError::Request(dom::js_error_message(&err)))?,
    )
    .await
    .map_err(|err| CatalogLoadError::Request(dom::js_error_message(&err)))?;

    let text = text_js.as_string().ok_or(CatalogLoadError::Utf8)?;

    Ok(BadgeCatalog::from_json(&text)?)
}

/// Load the catalog, logging failures and falling back to an empty catalog.
///
/// Components that only decorate rows with badges use this; an unavailable
/// catalog degrades to "no badges shown" rather than an error state.
#[allow(clippy::future_not_send)]
pub async fn load_catalog_or_empty() -> BadgeCatalog {
    match load_catalog().await {
        Ok(catalog) => catalog,
        Err(err) => {
            dom::console_error(&format!("failed to load badge catalog: {err}"));
            BadgeCatalog::empty()
        }
    }
}
