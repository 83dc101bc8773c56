use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use puppy_bowl_core::api::{decode, decode_ack, NewPlayerData, PlayerData, PlayersData, TeamsData};
use puppy_bowl_core::{
    ApiConfig, ApiError, NewPlayer, Player, PlayerId, PlayerWithTeam, RosterApi, Team,
};
use serde::de::DeserializeOwned;

/// [`RosterApi`] over `fetch`, for the browser
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRosterApi {
    config: ApiConfig,
}

impl HttpRosterApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        decode(status, &body)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(ApiError::network)?;
        Self::read(response).await
    }
}

#[async_trait(?Send)]
impl RosterApi for HttpRosterApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let data: PlayersData = self.get(&self.config.players_url()).await?;
        Ok(data.players)
    }

    async fn get_player(&self, id: PlayerId) -> Result<PlayerWithTeam, ApiError> {
        let data: PlayerData = self.get(&self.config.player_url(id)).await?;
        Ok(data.player)
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        let data: TeamsData = self.get(&self.config.teams_url()).await?;
        Ok(data.teams)
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        let url = self.config.players_url();
        tracing::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(player)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(ApiError::network)?;

        let data: NewPlayerData = Self::read(response).await?;
        Ok(data.new_player)
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), ApiError> {
        let url = self.config.player_url(id);
        tracing::debug!("DELETE {}", url);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        decode_ack(status, &body)
    }
}
