use gloo_net::http::Request;
use log::{debug, warn};
use shared::{ErrorResponse, ProfileReport, SteamDataQuery, ViewerError};

use crate::api::api_url;

pub const STEAM_DATA_PATH: &str = "/api/steam-data";

/// Full request URL for one SteamID lookup.
pub fn steam_data_url(query: &SteamDataQuery) -> String {
    format!("{}?{}", api_url(STEAM_DATA_PATH), query.to_query_string())
}

/// Turns a received response into a report or an error.
///
/// `body` is `None` when the body could not be read at all.
pub fn interpret_response(ok: bool, status: u16, body: Option<&str>) -> Result<ProfileReport, ViewerError> {
    if !ok {
        let message = body
            .and_then(|body| serde_json::from_str::<ErrorResponse>(body).ok())
            .and_then(|error| error.error)
            .filter(|message| !message.is_empty());
        return match message {
            Some(message) => {
                warn!("Steam data request failed with status {}: {}", status, message);
                Err(ViewerError::Api(message))
            }
            None => {
                warn!("Steam data request failed with status {} and no error body", status);
                Err(ViewerError::ApiUnstructured)
            }
        };
    }

    let body = body.ok_or_else(|| ViewerError::Transport(format!("unreadable body (status {})", status)))?;
    ProfileReport::from_json(body)
}

/// Issues the single `GET /api/steam-data` request for a submission.
pub async fn fetch_steam_data(query: &SteamDataQuery) -> Result<ProfileReport, ViewerError> {
    let url = steam_data_url(query);
    debug!("Fetching steam data from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ViewerError::Transport(e.to_string()))?;

    let body = match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!("Failed to read steam data response body: {}", e);
            None
        }
    };

    let report = interpret_response(response.ok(), response.status(), body.as_deref())?;
    debug!("Received report with {} owned games", report.owned_games.len());
    Ok(report)
}
