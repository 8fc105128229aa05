use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, ViewerError};
use crate::media::game_icon_url;
use crate::models::analytics::BucketEntry;
use crate::models::genre_distribution::GenreDistribution;

/// A game in the user's library, as returned by Steam's owned-games call
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct OwnedGame {
    #[serde(rename = "appid")]
    pub app_id: u64,

    pub name: String,

    /// Icon token used to build the icon address
    #[serde(rename = "img_icon_url")]
    pub icon_token: String,

    /// Total playtime in minutes
    #[serde(rename = "playtime_forever")]
    pub playtime_minutes: u64,

    /// Store genres, when the API resolved them
    #[serde(default)]
    pub genres: Vec<String>,
}

impl OwnedGame {
    /// Whole hours played, rounded down.
    pub fn hours_played(&self) -> u64 {
        self.playtime_minutes / 60
    }

    pub fn icon_url(&self) -> String {
        game_icon_url(self.app_id, &self.icon_token)
    }
}

/// A rarely played game with a high critic score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct UnderplayedGame {
    #[serde(rename = "appid", default)]
    pub app_id: Option<u64>,

    pub name: String,

    #[serde(rename = "img_icon_url", default)]
    pub icon_token: Option<String>,

    #[serde(rename = "playtime_hours")]
    #[validate(range(min = 0.0, message = "Playtime cannot be negative"))]
    pub playtime_hours: f64,

    #[serde(rename = "user_rating")]
    #[validate(range(max = 100, message = "Rating must be between 0 and 100"))]
    pub rating: u32,

    #[serde(default)]
    pub genres: Vec<String>,
}

impl UnderplayedGame {
    /// Icon address, only when both an app id and a non-empty token are present.
    pub fn icon_url(&self) -> Option<String> {
        match (self.app_id, self.icon_token.as_deref()) {
            (Some(app_id), Some(token)) if !token.is_empty() => Some(game_icon_url(app_id, token)),
            _ => None,
        }
    }
}

/// Player achievement for the top game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Achievement {
    #[serde(default)]
    pub apiname: String,

    /// 1 when unlocked
    #[serde(default)]
    pub achieved: u8,

    /// Unix timestamp of the unlock, 0 when locked
    #[serde(default)]
    pub unlocktime: u64,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.achieved != 0
    }
}

/// The aggregated payload of `GET /api/steam-data` for one SteamID
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProfileReport {
    #[serde(rename = "your_games")]
    pub owned_games: Vec<OwnedGame>,

    pub recommendations: Vec<String>,

    #[validate(range(min = 0.0, message = "Total playtime cannot be negative"))]
    pub total_playtime_hours: f64,

    /// At most five games, most played first
    #[serde(rename = "top_5_games")]
    #[validate(length(max = 5, message = "At most five top games are expected"))]
    pub top_games: Vec<OwnedGame>,

    #[serde(rename = "genres_distribution")]
    pub genre_distribution: GenreDistribution,

    #[serde(rename = "underplayed_highly_rated_games")]
    #[validate]
    pub underplayed_games: Vec<UnderplayedGame>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends_count: Option<u32>,

    #[serde(default)]
    pub top_game_achievements: Vec<Achievement>,
}

impl ProfileReport {
    /// Parses and validates a response body.
    ///
    /// Type mismatches and validation failures both surface as
    /// [`ViewerError::MalformedReport`]; a report is never half-read.
    pub fn from_json(body: &str) -> Result<Self> {
        let report: Self = serde_json::from_str(body)?;
        report.validate().map_err(ViewerError::from)?;
        debug!(
            "Parsed profile report: {} owned games, {} genres, {} underplayed",
            report.owned_games.len(),
            report.genre_distribution.len(),
            report.underplayed_games.len()
        );
        Ok(report)
    }

    /// Genre buckets for the analytics list and pie chart.
    pub fn genre_buckets(&self, n: usize) -> Vec<BucketEntry> {
        self.genre_distribution.bucketed(n)
    }

    /// `(unlocked, total)` achievements for the top game, if any were reported.
    pub fn achievement_progress(&self) -> Option<(usize, usize)> {
        if self.top_game_achievements.is_empty() {
            return None;
        }
        let unlocked = self
            .top_game_achievements
            .iter()
            .filter(|a| a.is_unlocked())
            .count();
        Some((unlocked, self.top_game_achievements.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analytics::DEFAULT_TOP_N;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn sample_payload() -> serde_json::Value {
        json!({
            "your_games": [
                {
                    "appid": 440,
                    "name": "Team Fortress 2",
                    "img_icon_url": "e3f595a92552da3d664ad00277fad2107345f743",
                    "playtime_forever": 754,
                    "has_community_visible_stats": true,
                    "genres": ["Action", "Free to Play"]
                },
                {
                    "appid": 620,
                    "name": "Portal 2",
                    "img_icon_url": "2e478fc6874d06ae5baf0d147f6f21203291aa02",
                    "playtime_forever": 59
                }
            ],
            "friends_count": 12,
            "recommendations": ["Dota 2", "Left 4 Dead 2"],
            "top_game_achievements": [
                { "apiname": "TF_PLAY_GAME_EVERYCLASS", "achieved": 1, "unlocktime": 1290000000 },
                { "apiname": "TF_GET_HEALPOINTS", "achieved": 0, "unlocktime": 0 }
            ],
            "total_playtime_hours": 13.55,
            "top_5_games": [
                {
                    "appid": 440,
                    "name": "Team Fortress 2",
                    "img_icon_url": "e3f595a92552da3d664ad00277fad2107345f743",
                    "playtime_forever": 754
                }
            ],
            "genres_distribution": { "Action": 1, "Free to Play": 1, "Puzzle": 1 },
            "underplayed_highly_rated_games": [
                { "name": "Portal 2", "playtime_hours": 0.98, "user_rating": 95, "genres": ["Puzzle"] }
            ]
        })
    }

    #[test]
    fn test_parse_full_payload() {
        let report = ProfileReport::from_json(&sample_payload().to_string()).unwrap();

        assert_eq!(report.owned_games.len(), 2);
        assert_eq!(report.owned_games[0].hours_played(), 12);
        assert_eq!(report.owned_games[1].hours_played(), 0);
        assert_eq!(report.friends_count, Some(12));
        assert_eq!(report.achievement_progress(), Some((1, 2)));
        assert_eq!(report.underplayed_games[0].app_id, None);
        assert_eq!(report.underplayed_games[0].icon_url(), None);
    }

    #[test]
    fn test_optional_sections_default() {
        let mut payload = sample_payload();
        let object = payload.as_object_mut().unwrap();
        object.remove("friends_count");
        object.remove("top_game_achievements");

        let report = ProfileReport::from_json(&payload.to_string()).unwrap();
        assert_eq!(report.friends_count, None);
        assert_eq!(report.achievement_progress(), None);
    }

    #[test]
    fn test_round_trip_preserves_report() {
        let report = ProfileReport::from_json(&sample_payload().to_string()).unwrap();
        let body = serde_json::to_string(&report).unwrap();
        assert_eq!(ProfileReport::from_json(&body).unwrap(), report);
    }

    #[test]
    fn test_rating_above_100_is_malformed() {
        let mut payload = sample_payload();
        payload["underplayed_highly_rated_games"][0]["user_rating"] = json!(120);

        let err = ProfileReport::from_json(&payload.to_string()).unwrap_err();
        assert!(matches!(err, ViewerError::MalformedReport(_)));
    }

    #[test]
    fn test_more_than_five_top_games_is_malformed() {
        let mut payload = sample_payload();
        let game = payload["top_5_games"][0].clone();
        payload["top_5_games"] = json!([game.clone(), game.clone(), game.clone(), game.clone(), game.clone(), game]);

        let err = ProfileReport::from_json(&payload.to_string()).unwrap_err();
        assert!(matches!(err, ViewerError::MalformedReport(_)));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let mut payload = sample_payload();
        payload.as_object_mut().unwrap().remove("total_playtime_hours");

        let err = ProfileReport::from_json(&payload.to_string()).unwrap_err();
        assert!(err.to_string().contains("total_playtime_hours"));
    }

    #[test]
    fn test_genre_buckets_follow_payload_order_on_ties() {
        let report = ProfileReport::from_json(&sample_payload().to_string()).unwrap();
        let labels: Vec<String> = report
            .genre_buckets(DEFAULT_TOP_N)
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["Action", "Free to Play", "Puzzle"]);
    }

    #[test]
    fn test_underplayed_icon_requires_id_and_token() {
        let game = UnderplayedGame {
            app_id: Some(620),
            name: "Portal 2".to_string(),
            icon_token: Some(String::new()),
            playtime_hours: 0.5,
            rating: 95,
            genres: vec![],
        };
        assert_eq!(game.icon_url(), None);

        let game = UnderplayedGame {
            icon_token: Some("abc".to_string()),
            ..game
        };
        assert_eq!(
            game.icon_url().as_deref(),
            Some("https://media.steampowered.com/steamcommunity/public/images/apps/620/abc.jpg")
        );
    }
}
