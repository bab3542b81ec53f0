//! Wire DTOs for the OctoFit REST API.
//!
//! DESIGN
//! ======
//! Records are passed through to the views unmodified. Text fields the
//! backend omits decode to empty strings and nullable relations to `None`, so
//! a sparse record still renders instead of failing the whole collection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// A registered OctoFit user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Team membership; `None` when the user has no team.
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A team users can belong to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A single logged activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub activity_type: String,
    /// Minutes.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub calories_burned: i64,
    /// Calendar date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
}

/// A suggested workout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    /// Minutes.
    #[serde(default)]
    pub duration: i64,
}

/// One leaderboard row with the user and team summaries embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub rank: i64,
    #[serde(default)]
    pub user: Option<LeaderboardUser>,
    #[serde(default)]
    pub team: Option<LeaderboardTeam>,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub total_calories: i64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardTeam {
    #[serde(default)]
    pub name: String,
}

/// `PATCH /users/{id}/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    pub username: String,
    pub name: String,
    pub email: String,
    /// Serialized as `null` when the user leaves their team.
    pub team_id: Option<i64>,
}

/// Error body returned by the backend on a rejected write.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// The two accepted collection shapes: a bare array or a pagination envelope.
///
/// `Flat` is tried first so an array is never read as a positional struct.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CollectionBody<T> {
    Flat(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> CollectionBody<T> {
    /// Collapse either shape into the record list.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Flat(items) | Self::Paginated { results: items } => items,
        }
    }
}

/// Parse a collection response body and normalize it to a list.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not JSON, or is neither an
/// array nor an object with an array `results` field.
pub fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let shape = match &value {
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(map) if map.get("results").is_some_and(serde_json::Value::is_array) => "page",
        _ => return Err(ApiError::Decode("expected an array or an object with `results`".to_owned())),
    };
    serde_json::from_value::<CollectionBody<T>>(value)
        .map(CollectionBody::into_items)
        .map_err(|e| ApiError::Decode(format!("{shape}: {e}")))
}

/// Pull the `detail` message out of a rejected write, if the body carries one.
pub fn decode_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}
