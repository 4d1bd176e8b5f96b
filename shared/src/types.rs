//! Wire types shared between the player, game and score services

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SharedError;

/// User id recorded when the caller does not supply one
pub const ANONYMOUS_USER: &str = "Anonymous";

/// One of the five playable game symbols.
///
/// "Unset" is deliberately not a variant: absence is modeled as `Option`
/// at the request boundary so a pseudo-value can never reach a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Choice {
    /// All real choices, in the fixed order used for index mapping.
    /// Opponent selection depends on this ordering being stable.
    pub const ALL: [Choice; 5] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Lizard,
        Choice::Spock,
    ];

    /// Numeric id used by the legacy wire contract (0..=4)
    pub fn id(&self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
            Choice::Lizard => 3,
            Choice::Spock => 4,
        }
    }

    pub fn from_id(id: i64) -> Option<Choice> {
        match id {
            0 => Some(Choice::Rock),
            1 => Some(Choice::Paper),
            2 => Some(Choice::Scissors),
            3 => Some(Choice::Lizard),
            4 => Some(Choice::Spock),
            _ => None,
        }
    }

    /// Lowercase wire name
    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    /// Comma-separated list of valid names, used in validation messages
    pub fn valid_names() -> String {
        Choice::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = SharedError;

    /// Case-insensitive parse, per the receiving-side contract
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            "lizard" => Ok(Choice::Lizard),
            "spock" => Ok(Choice::Spock),
            _ => Err(SharedError::InvalidChoice { input: s.to_string() }),
        }
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Inbound player choice: either a lowercase name or a numeric id.
///
/// The legacy contract allowed both, plus `-1` as an "unset" sentinel; the
/// sentinel is rejected during validation, never folded into [`Choice`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceInput {
    Id(i64),
    Name(String),
}

/// Round result, serialized with the exact labels consumed downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Tie")]
    Tie,
    #[serde(rename = "Player wins!")]
    PlayerWins,
    #[serde(rename = "Computer wins!")]
    ComputerWins,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Tie => "Tie",
            Outcome::PlayerWins => "Player wins!",
            Outcome::ComputerWins => "Computer wins!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inbound play request for the player service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    #[serde(default)]
    pub player_choice: Option<ChoiceInput>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Final play response returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub result: Outcome,
    pub fun_fact: String,
}

/// Resolution request sent to the game service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    #[serde(default)]
    pub player_choice: Option<Choice>,
    #[serde(default)]
    pub computer_choice: Option<Choice>,
}

/// Resolution response from the game service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub result: Outcome,
}

/// Body of the remote randomness source, valid range [1, 100]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomNumberResponse {
    pub random_number: i64,
}

/// One recorded round, as stored by the score service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub result: Outcome,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

fn default_user_id() -> String {
    ANONYMOUS_USER.to_string()
}

/// Choice listing entry for the choices endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDescriptor {
    pub id: u8,
    pub name: String,
}

impl From<Choice> for ChoiceDescriptor {
    fn from(choice: Choice) -> Self {
        ChoiceDescriptor {
            id: choice.id(),
            name: choice.name().to_string(),
        }
    }
}

/// Error body returned by every service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
