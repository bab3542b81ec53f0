//! REST helpers for the OctoFit backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and host tests: stubs returning an error, since pages
//! only fetch once they are running in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`]; callers store its text in view
//! state instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::UserPatch;
use crate::config::ApiConfig;

/// Collection endpoints exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Collection {
    /// Path below the API root, trailing slash included.
    pub fn path(self) -> &'static str {
        match self {
            Self::Users => "users/",
            Self::Teams => "teams/",
            Self::Activities => "activities/",
            Self::Leaderboard => "leaderboard/",
            Self::Workouts => "workouts/",
        }
    }

    /// Lowercase plural used in loading text.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Teams => "teams",
            Self::Activities => "activities",
            Self::Leaderboard => "leaderboard",
            Self::Workouts => "workouts",
        }
    }
}

pub fn collection_url(config: &ApiConfig, collection: Collection) -> String {
    config.url(collection.path())
}

pub fn user_url(config: &ApiConfig, user_id: i64) -> String {
    config.url(&format!("users/{user_id}/"))
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// `GET` a collection and normalize it to a list.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request fails, [`ApiError::Status`]
/// for a non-success response and [`ApiError::Decode`] for an unrecognized body.
pub async fn fetch_collection<T: DeserializeOwned>(config: &ApiConfig, collection: Collection) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_url(config, collection);
        log::debug!("fetching {} from {url}", collection.noun());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        super::types::decode_collection(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, collection);
        Err(unavailable())
    }
}

/// `PATCH /users/{id}/` with the edited fields.
///
/// The response body is not read on success; callers refetch the list.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request fails and
/// [`ApiError::Rejected`] with the backend's `detail` for a non-success response.
pub async fn update_user(config: &ApiConfig, user_id: i64, patch: &UserPatch) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_url(config, user_id);
        log::debug!("updating user {user_id} at {url}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(patch)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!("user update rejected: status={} body={body}", resp.status());
            return Err(ApiError::rejected(super::types::decode_error_detail(&body)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user_id, patch);
        Err(unavailable())
    }
}
