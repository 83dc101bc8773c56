//! Shared world and in-memory roster API for the BDD suite

use async_trait::async_trait;
use cucumber::World;
use puppy_bowl_core::api::error::Result;
use puppy_bowl_core::api::{decode, decode_ack, NewPlayerData, PlayerData, PlayersData, TeamsData};
use puppy_bowl_core::{
    ApiError, FormError, NewPlayer, NewPlayerDraft, Player, PlayerId, PlayerStatus,
    PlayerWithTeam, RosterApi, RosterCommand, RosterEvent, RosterModel, RosterService, Team,
    TeamId,
};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

/// How the fake server answers the next request
#[derive(Debug, Clone, Default)]
enum Fault {
    #[default]
    None,
    /// `{ success: false, error: { message } }` with status 500
    Reject(String),
    /// The request never reaches the server
    Offline,
}

#[derive(Debug, Default)]
struct ServerState {
    players: Vec<Player>,
    teams: Vec<Team>,
    next_id: PlayerId,
    embed_team: bool,
    fault: Fault,
    created: Vec<NewPlayer>,
    deleted: Vec<PlayerId>,
}

impl ServerState {
    fn allocate_id(&mut self) -> PlayerId {
        self.next_id = self.next_id.max(self.players.iter().map(|p| p.id).max().unwrap_or(0)) + 1;
        self.next_id
    }

    /// Teams with their current members, the way the API nests them
    fn teams_with_players(&self) -> Vec<Team> {
        self.teams
            .iter()
            .map(|team| Team {
                players: self
                    .players
                    .iter()
                    .filter(|p| p.team_id == Some(team.id))
                    .cloned()
                    .collect(),
                ..team.clone()
            })
            .collect()
    }

    /// Consume the pending fault, if any
    fn take_fault(&mut self) -> std::result::Result<(), (u16, String)> {
        match std::mem::take(&mut self.fault) {
            Fault::None => Ok(()),
            Fault::Reject(message) => Err((
                500,
                json!({
                    "success": false,
                    "error": { "name": "ServerError", "message": message },
                    "data": null
                })
                .to_string(),
            )),
            Fault::Offline => Err((0, String::new())),
        }
    }
}

fn ok_body(data: Value) -> String {
    json!({ "success": true, "error": null, "data": data }).to_string()
}

/// In-memory stand-in for the Puppy Bowl REST API
///
/// Responses are rendered as JSON envelopes and decoded with the same
/// functions the HTTP client uses.
#[derive(Debug, Default)]
pub struct MockRosterApi {
    state: RefCell<ServerState>,
}

impl MockRosterApi {
    pub fn add_team(&self, name: &str) -> TeamId {
        let mut state = self.state.borrow_mut();
        let id = state.teams.len() as TeamId + 100;
        state.teams.push(Team {
            id,
            name: name.to_string(),
            players: Vec::new(),
        });
        id
    }

    pub fn add_player(&self, name: &str, breed: &str, team_id: Option<TeamId>) -> PlayerId {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        state.players.push(Player {
            id,
            name: name.to_string(),
            breed: breed.to_string(),
            image_url: format!("https://img.example.com/{id}.jpg"),
            status: PlayerStatus::Bench,
            team_id,
            cohort_id: Some(1),
            created_at: None,
            updated_at: None,
        });
        id
    }

    pub fn team_id(&self, name: &str) -> Option<TeamId> {
        self.state
            .borrow()
            .teams
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.id)
    }

    /// Whether `GET /players/:id` embeds the player's team
    pub fn set_embed_team(&self, embed: bool) {
        self.state.borrow_mut().embed_team = embed;
    }

    pub fn reject_next(&self, message: &str) {
        self.state.borrow_mut().fault = Fault::Reject(message.to_string());
    }

    pub fn go_offline(&self) {
        self.state.borrow_mut().fault = Fault::Offline;
    }

    /// Payloads received by `POST /players`
    pub fn created(&self) -> Vec<NewPlayer> {
        self.state.borrow().created.clone()
    }

    pub fn deleted(&self) -> Vec<PlayerId> {
        self.state.borrow().deleted.clone()
    }

    fn respond(&self, handler: impl FnOnce(&mut ServerState) -> (u16, String)) -> Result<(u16, String)> {
        let mut state = self.state.borrow_mut();
        match state.take_fault() {
            Ok(()) => Ok(handler(&mut *state)),
            Err((0, _)) => Err(ApiError::network("connection refused")),
            Err(response) => Ok(response),
        }
    }
}

#[async_trait(?Send)]
impl RosterApi for MockRosterApi {
    async fn list_players(&self) -> Result<Vec<Player>> {
        let (status, body) =
            self.respond(|state| (200, ok_body(json!({ "players": state.players }))))?;
        decode::<PlayersData>(status, &body).map(|data| data.players)
    }

    async fn get_player(&self, id: PlayerId) -> Result<PlayerWithTeam> {
        let (status, body) = self.respond(|state| {
            let Some(player) = state.players.iter().find(|p| p.id == id).cloned() else {
                return (
                    404,
                    json!({
                        "success": false,
                        "error": { "name": "NotFound", "message": format!("No player with id {id}") },
                        "data": null
                    })
                    .to_string(),
                );
            };
            let team = state
                .teams_with_players()
                .into_iter()
                .find(|t| state.embed_team && Some(t.id) == player.team_id);
            let player = PlayerWithTeam { player, team };
            (200, ok_body(json!({ "player": player })))
        })?;
        decode::<PlayerData>(status, &body).map(|data| data.player)
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let (status, body) =
            self.respond(|state| (200, ok_body(json!({ "teams": state.teams_with_players() }))))?;
        decode::<TeamsData>(status, &body).map(|data| data.teams)
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player> {
        let (status, body) = self.respond(|state| {
            state.created.push(player.clone());
            let id = state.allocate_id();
            let created = Player {
                id,
                name: player.name.clone(),
                breed: player.breed.clone(),
                image_url: player.image_url.clone(),
                status: player.status,
                team_id: player.team_id,
                cohort_id: Some(1),
                created_at: None,
                updated_at: None,
            };
            state.players.push(created.clone());
            (200, ok_body(json!({ "newPlayer": created })))
        })?;
        decode::<NewPlayerData>(status, &body).map(|data| data.new_player)
    }

    async fn delete_player(&self, id: PlayerId) -> Result<()> {
        let (status, body) = self.respond(|state| {
            state.deleted.push(id);
            state.players.retain(|p| p.id != id);
            (200, ok_body(Value::Null))
        })?;
        decode_ack(status, &body)
    }
}

#[derive(Debug, World, Default)]
pub struct RosterWorld {
    /// Controller under test, wired to the in-memory API
    pub service: RosterService<MockRosterApi>,

    /// What the page currently shows
    pub model: RosterModel,

    /// Last event emitted (for assertions)
    pub last_event: Option<RosterEvent>,

    /// Contents of the add-player form
    pub draft: NewPlayerDraft,

    /// Validation error from the last form submit
    pub form_error: Option<FormError>,

    /// Players the user asked to remove, resolved by name before the request
    pub removed: HashMap<String, PlayerId>,
}

impl RosterWorld {
    pub fn api(&self) -> &MockRosterApi {
        self.service.api()
    }

    /// Run a command through the controller and fold the outcome into the model
    pub async fn execute(&mut self, command: RosterCommand) -> &RosterEvent {
        self.model.begin(&command);
        let event = self.service.handle_command(command, self.model.roster()).await;
        self.model.apply(event.clone());
        self.last_event.insert(event)
    }

    /// Submit the form: validation failures never reach the API
    pub async fn submit_form(&mut self) {
        match self.draft.to_new_player() {
            Ok(player) => {
                self.form_error = None;
                self.draft.clear();
                self.execute(RosterCommand::AddPlayer(player)).await;
            }
            Err(err) => self.form_error = Some(err),
        }
    }

    pub fn player_id(&self, name: &str) -> PlayerId {
        self.model
            .roster()
            .players()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
            .unwrap_or_else(|| panic!("Player '{}' not on the roster", name))
    }

    /// Get the last event (panics if none)
    pub fn last_event(&self) -> &RosterEvent {
        self.last_event.as_ref().expect("No command executed yet")
    }

    pub fn last_command_failed(&self) -> bool {
        matches!(self.last_event, Some(RosterEvent::CommandFailed { .. }))
    }
}
