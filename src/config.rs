use crate::types::{PLAYER_ONE, PLAYER_TWO, Player};

pub const ROWS: u8 = 8;
pub const COLS: u8 = 10;

/// Top-left corner of the Town Hall, centred on the board.
pub const LANDMARK_ROW: u8 = ROWS / 2 - 1;
pub const LANDMARK_COL: u8 = COLS / 2 - 1;
pub const LANDMARK_SPAN: u8 = 2;

/// Contiguous same-owner pieces needed to earn a bonus placement.
pub const WIN_LENGTH: usize = 5;

pub const NEUTRAL_COLOR: &str = "#8e44ad";
pub const GAME_NAME: &str = "Fight for Town Hall";
pub const SETUP_TEXT: &str = "";

pub const PLAYERS: [Player; 2] = [
    Player {
        id: PLAYER_ONE,
        name: "Artist",
        color: "#e74c3c",
    },
    Player {
        id: PLAYER_TWO,
        name: "Business Owner",
        color: "#3498db",
    },
];

const DEFAULT_STORAGE_KEY: &str = "fight-for-town-hall";

pub fn player(id: u8) -> Option<&'static Player> {
    PLAYERS.iter().find(|p| p.id == id)
}

/// Runtime options for a [`crate::session::Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Persist after every accepted move and after a reset.
    pub autosave: bool,
    /// Key (browser) or file stem (native) used by encoded stores.
    pub storage_key: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            autosave: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
