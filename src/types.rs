use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

pub type PlayerId = u8;

pub const PLAYER_ONE: PlayerId = 1;
pub const PLAYER_TWO: PlayerId = 2;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// A configured player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: &'static str,
    pub color: &'static str,
}

/// A claimed cell. Never moved or removed once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub player: PlayerId,
}

/// Final result once the board is full.
///
/// Persisted as the winning player id, or the string `"tie"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player(PlayerId),
    Tie,
}

const TIE: &str = "tie";

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Player(id) => serializer.serialize_u8(*id),
            Self::Tie => serializer.serialize_str(TIE),
        }
    }
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WinnerVisitor;

        impl Visitor<'_> for WinnerVisitor {
            type Value = Winner;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a player id or \"tie\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Winner, E> {
                PlayerId::try_from(value)
                    .map(Winner::Player)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Winner, E> {
                PlayerId::try_from(value)
                    .map(Winner::Player)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Winner, E> {
                // serde-wasm-bindgen hands JS numbers over as floats
                if value.fract() == 0.0 && (0.0..=f64::from(PlayerId::MAX)).contains(&value) {
                    Ok(Winner::Player(value as PlayerId))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(value), &self))
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Winner, E> {
                if value == TIE {
                    Ok(Winner::Tie)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(WinnerVisitor)
    }
}

/// Player entry of the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub score: u32,
}

/// The persisted and rendered game record.
///
/// Field names are the storage format; the page reads them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDocument {
    pub game_name: String,
    pub setup_text: String,
    pub board_rows: u8,
    pub board_cols: u8,
    pub players: Vec<PlayerRecord>,
    pub turn: PlayerId,
    pub pieces: Vec<Piece>,
    pub bonus_available: bool,
    pub bonus_player: Option<PlayerId>,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub townhall_color: String,
}

/// Where the Town Hall overlay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Landmark {
    pub row: u8,
    pub col: u8,
    pub span: u8,
}
