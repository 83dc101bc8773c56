use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, Result};
use crate::domain::{Player, PlayerWithTeam, Team};

/// The `error` member of an envelope; the API has sent all of these shapes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Text(String),
    Detail {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
    Other(Value),
}

impl ErrorBody {
    fn is_error(&self) -> bool {
        match self {
            ErrorBody::Text(text) => !text.is_empty(),
            ErrorBody::Detail { .. } => true,
            ErrorBody::Other(value) => !matches!(value, Value::Null | Value::Bool(false)),
        }
    }

    fn detail_message(&self) -> Option<&str> {
        match self {
            ErrorBody::Detail {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            ErrorBody::Detail {
                name: Some(name), ..
            } => Some(name.as_str()),
            _ => None,
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            ErrorBody::Text(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Wrapper around every API response
///
/// ```json
/// { "success": true, "error": null, "data": { "players": [] } }
/// { "success": false, "error": { "name": "NotFound", "message": "..." }, "data": null }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: Option<bool>,
    pub error: Option<ErrorBody>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Returns the failure message if this envelope (or its status) reports an error
    fn failure(&self, status: u16) -> Option<String> {
        let has_error = self.error.as_ref().is_some_and(ErrorBody::is_error);
        let failed = !is_success(status) || self.success == Some(false) || has_error;
        if !failed {
            return None;
        }

        let message = self
            .error
            .as_ref()
            .and_then(ErrorBody::detail_message)
            .or(self.message.as_deref())
            .or_else(|| self.error.as_ref().and_then(ErrorBody::text))
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {status}"));

        Some(message)
    }

    pub fn into_result(self, status: u16) -> Result<T> {
        if let Some(message) = self.failure(status) {
            return Err(ApiError::rejected(message));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response body into the envelope's `data`
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) if is_success(status) => return Err(err.into()),
        Err(_) => return Err(ApiError::Status { status }),
    };
    envelope.into_result(status)
}

/// Decode a response whose `data` we do not care about (e.g. `DELETE`)
pub fn decode_ack(status: u16, body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return if is_success(status) {
            Ok(())
        } else {
            Err(ApiError::Status { status })
        };
    }

    match serde_json::from_str::<Envelope<Value>>(body) {
        Ok(envelope) => match envelope.failure(status) {
            Some(message) => Err(ApiError::rejected(message)),
            None => Ok(()),
        },
        Err(_) if is_success(status) => Ok(()),
        Err(_) => Err(ApiError::Status { status }),
    }
}

/// `data` of `GET /players`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

/// `data` of `GET /players/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub player: PlayerWithTeam,
}

/// `data` of `POST /players`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerData {
    pub new_player: Player,
}

/// `data` of `GET /teams`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamsData {
    pub teams: Vec<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYERS_OK: &str = r#"{
        "success": true,
        "error": null,
        "data": {
            "players": [
                { "id": 1, "name": "Rufus", "breed": "Beagle", "imageUrl": "r.png", "status": "bench", "teamId": null }
            ]
        }
    }"#;

    #[test]
    fn test_decode_players() {
        let data: PlayersData = decode(200, PLAYERS_OK).unwrap();
        assert_eq!(data.players.len(), 1);
        assert_eq!(data.players[0].name, "Rufus");
    }

    #[test]
    fn test_decode_empty_players() {
        let body = r#"{ "success": true, "error": null, "data": { "players": [] } }"#;
        let data: PlayersData = decode(200, body).unwrap();
        assert!(data.players.is_empty());
    }

    #[test]
    fn test_decode_single_player_with_team() {
        let body = r#"{
            "success": true,
            "error": null,
            "data": {
                "player": {
                    "id": 1, "name": "Rufus", "breed": "Beagle", "imageUrl": "r.png",
                    "status": "field", "teamId": 4,
                    "team": { "id": 4, "name": "Ruff", "players": [] }
                }
            }
        }"#;

        let data: PlayerData = decode(200, body).unwrap();
        assert_eq!(data.player.player.team_id, Some(4));
        assert_eq!(data.player.team.map(|t| t.name), Some("Ruff".to_string()));
    }

    #[test]
    fn test_decode_new_player() {
        let body = r#"{
            "success": true,
            "error": null,
            "data": {
                "newPlayer": { "id": 99, "name": "Bella", "breed": "Husky", "imageUrl": "b.png", "status": "bench" }
            }
        }"#;

        let data: NewPlayerData = decode(200, body).unwrap();
        assert_eq!(data.new_player.id, 99);
    }

    #[test]
    fn test_error_object_message_is_reported() {
        let body = r#"{
            "success": false,
            "error": { "name": "NotFoundError", "message": "Player #42 not found" },
            "data": null
        }"#;

        let result: Result<PlayerData> = decode(404, body);
        assert_eq!(result, Err(ApiError::rejected("Player #42 not found")));
    }

    #[test]
    fn test_error_with_top_level_message() {
        let body = r#"{ "error": true, "message": "Name is required" }"#;

        let result: Result<NewPlayerData> = decode(200, body);
        assert_eq!(result, Err(ApiError::rejected("Name is required")));
    }

    #[test]
    fn test_error_string() {
        let body = r#"{ "success": false, "error": "Something broke", "data": null }"#;

        let result: Result<PlayersData> = decode(500, body);
        assert_eq!(result, Err(ApiError::rejected("Something broke")));
    }

    #[test]
    fn test_success_false_without_message() {
        let body = r#"{ "success": false, "data": null }"#;

        let result: Result<PlayersData> = decode(200, body);
        assert_eq!(
            result,
            Err(ApiError::rejected("request failed with status 200"))
        );
    }

    #[test]
    fn test_non_json_error_response() {
        let result: Result<PlayersData> = decode(502, "<html>Bad Gateway</html>");
        assert_eq!(result, Err(ApiError::Status { status: 502 }));
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let result: Result<PlayersData> = decode(200, "not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_missing_data() {
        let body = r#"{ "success": true, "error": null, "data": null }"#;
        let result: Result<PlayersData> = decode(200, body);
        assert_eq!(result, Err(ApiError::MissingData));
    }

    #[test]
    fn test_ack_accepts_null_data() {
        let body = r#"{ "success": true, "error": null, "data": null }"#;
        assert_eq!(decode_ack(200, body), Ok(()));
    }

    #[test]
    fn test_ack_accepts_empty_success_body() {
        assert_eq!(decode_ack(204, ""), Ok(()));
    }

    #[test]
    fn test_ack_rejects_error_status() {
        assert_eq!(decode_ack(500, ""), Err(ApiError::Status { status: 500 }));
        assert_eq!(
            decode_ack(404, r#"{ "success": false, "error": { "message": "gone" } }"#),
            Err(ApiError::rejected("gone"))
        );
    }
}
