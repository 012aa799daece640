//! Intent shapes deserialized from JavaScript.
//!
//! Keys are base58 strings. Small integers arrive as JS numbers, so they are
//! read as `f64` and checked for being whole and within their wire width when
//! converted. The league bid is a
//! decimal string so that values above 2^53 survive the trip.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRootIntent {
    pub root: String,
    pub oracle_authority: String,
    pub current_week: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIntent {
    pub external_id: f64,
    pub position: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayersIntent {
    pub root: String,
    pub players: Vec<PlayerIntent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDraftSelectionIntent {
    pub root: String,
    /// User indices in draft order
    pub pick_order: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueIntent {
    pub root: String,
    pub bank: String,
    pub name: String,
    /// Entry bid in lamports (as string for BigInt compatibility)
    pub bid: String,
    pub users_limit: f64,
    pub owner: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinLeagueIntent {
    pub root: String,
    pub bank: String,
    pub league_id: f64,
    pub owner: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickPlayerIntent {
    pub root: String,
    pub league_id: f64,
    pub user_id: f64,
    pub player_id: f64,
    pub owner: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerScoreIntent {
    pub root: String,
    pub bank: String,
    pub player_id: f64,
    pub player_score: f64,
    /// Oracle authority signing the update
    pub owner: String,
}
