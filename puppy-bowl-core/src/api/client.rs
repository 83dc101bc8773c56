use async_trait::async_trait;

use super::error::Result;
use crate::domain::{NewPlayer, Player, PlayerId, PlayerWithTeam, Team};

/// Remote roster API (allows mocking in tests)
///
/// Futures are not `Send`: the browser client runs on the single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait RosterApi {
    /// `GET /players`
    async fn list_players(&self) -> Result<Vec<Player>>;

    /// `GET /players/:id`
    async fn get_player(&self, id: PlayerId) -> Result<PlayerWithTeam>;

    /// `GET /teams`
    async fn list_teams(&self) -> Result<Vec<Team>>;

    /// `POST /players`
    async fn create_player(&self, player: &NewPlayer) -> Result<Player>;

    /// `DELETE /players/:id`
    async fn delete_player(&self, id: PlayerId) -> Result<()>;
}
