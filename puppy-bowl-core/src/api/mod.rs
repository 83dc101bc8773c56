pub mod client;
pub mod envelope;
pub mod error;

pub use client::RosterApi;
pub use envelope::{
    decode, decode_ack, Envelope, ErrorBody, NewPlayerData, PlayerData, PlayersData, TeamsData,
};
pub use error::ApiError;
