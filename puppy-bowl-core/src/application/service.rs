use crate::api::{ApiError, RosterApi};
use crate::application::{RosterCommand, RosterEvent};
use crate::domain::{NewPlayer, PlayerId, Roster};
use crate::view::PlayerDetail;

/// Executes roster commands against the API and reports the outcome as events
///
/// Every mutation is followed by a full re-fetch; nothing is patched locally.
#[derive(Debug, Clone, Default)]
pub struct RosterService<A> {
    api: A,
}

impl<A: RosterApi> RosterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Process a single command and return the resulting event
    ///
    /// `roster` is the currently displayed state; it is only read (to resolve
    /// a player's team when the API does not embed it).
    pub async fn handle_command(&self, command: RosterCommand, roster: &Roster) -> RosterEvent {
        let name = command.name();
        tracing::debug!("Handling {}", name);

        let result = match command {
            RosterCommand::Refresh => self.fetch_roster().await.map(RosterEvent::RosterLoaded),
            RosterCommand::AddPlayer(player) => self
                .add_player(&player)
                .await
                .map(RosterEvent::RosterLoaded),
            RosterCommand::RemovePlayer(id) => self
                .remove_player(id)
                .await
                .map(RosterEvent::RosterLoaded),
            RosterCommand::ShowPlayer(id) => self
                .player_detail(id, roster)
                .await
                .map(RosterEvent::PlayerLoaded),
            RosterCommand::ShowList => Ok(RosterEvent::ListShown),
        };

        // each operation has already logged its own failure
        result.unwrap_or_else(|err| RosterEvent::failed(name, err))
    }

    /// Fetch players, then teams
    pub async fn fetch_roster(&self) -> Result<Roster, ApiError> {
        let players = self.api.list_players().await.inspect_err(|err| {
            tracing::error!("Trouble fetching players: {}", err);
        })?;
        let teams = self.api.list_teams().await.inspect_err(|err| {
            tracing::error!("Trouble fetching teams: {}", err);
        })?;

        tracing::info!("Fetched {} players and {} teams", players.len(), teams.len());
        Ok(Roster::new(players, teams))
    }

    pub async fn add_player(&self, player: &NewPlayer) -> Result<Roster, ApiError> {
        let created = self.api.create_player(player).await.inspect_err(|err| {
            tracing::error!("Trouble adding player '{}': {}", player.name, err);
        })?;
        tracing::info!("Added player #{} '{}'", created.id, created.name);

        self.fetch_roster().await
    }

    pub async fn remove_player(&self, id: PlayerId) -> Result<Roster, ApiError> {
        self.api.delete_player(id).await.inspect_err(|err| {
            tracing::error!("Trouble removing player #{} from the roster: {}", id, err);
        })?;
        tracing::info!("Removed player #{}", id);

        self.fetch_roster().await
    }

    pub async fn player_detail(
        &self,
        id: PlayerId,
        roster: &Roster,
    ) -> Result<PlayerDetail, ApiError> {
        let fetched = self.api.get_player(id).await.inspect_err(|err| {
            tracing::error!("Trouble fetching player #{}: {}", id, err);
        })?;

        Ok(PlayerDetail::resolve(&fetched, roster))
    }
}
