use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ViewerError;

/// Query parameters of `GET /api/steam-data`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SteamDataQuery {
    /// The SteamID to look up. Only presence is checked.
    #[validate(length(min = 1, message = "Please enter a SteamID"))]
    pub steamid: String,
}

impl SteamDataQuery {
    pub fn new(steamid: impl Into<String>) -> Self {
        Self {
            steamid: steamid.into(),
        }
    }

    /// Validates the query, mapping a missing id to the input error.
    pub fn checked(steamid: impl Into<String>) -> Result<Self, ViewerError> {
        let query = Self::new(steamid);
        query.validate().map_err(|_| ViewerError::MissingSteamId)?;
        Ok(query)
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        format!("steamid={}", urlencoding::encode(&self.steamid))
    }
}

/// Error body returned by the API with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: Option<String>,
}
