//! Downloading the icon catalog.
use std::{fmt::Display, time::Duration};

use octi_codegen::IconCatalog;
use reqwest::StatusCode;

/// The catalog of every published Octicon, keyed by name
pub const CATALOG_URL: &str = "https://raw.githubusercontent.com/primer/octicons/master/build/svg.json";

#[derive(Debug)]
/// Errors which stop a catalog from being downloaded
pub enum FetchError {
    /// The request couldn't be completed
    Request(reqwest::Error),
    /// The endpoint responded with an unsuccessful status
    Status {
        /// The requested endpoint
        url: String,
        /// The status of the response
        status: StatusCode,
    },
    /// The response isn't a mapping of names to markup
    Decode(serde_json::Error),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(err) => f.write_fmt(format_args!("failed to download catalog: {err}")),
            Self::Status { url, status } => f.write_fmt(format_args!(
                "{url} responded with HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )),
            Self::Decode(err) => f.write_fmt(format_args!("failed to decode catalog: {err}")),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Downloads the catalog at `url` with a single GET request.
///
/// # Errors
///
/// If the request fails, the response is unsuccessful, or the body isn't a catalog
pub fn fetch_catalog(url: &str) -> Result<IconCatalog, FetchError> {
    log::info!("downloading catalog from {url}");
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .user_agent(concat!("octi/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes()?;
    let catalog: IconCatalog = serde_json::from_slice(&body)?;
    log::debug!("downloaded {} icons", catalog.len());
    Ok(catalog)
}
