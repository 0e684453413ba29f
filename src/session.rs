use tracing::{instrument, warn};

use crate::config::SessionOptions;
use crate::error::{SessionError, StoreError};
use crate::game::GameState;
use crate::store::StateStore;
use crate::types::GameDocument;

/// One board served to the page: the current game plus where it is saved.
///
/// Every operation takes `&mut self`, so a move is validated and committed
/// without another caller seeing the state in between.
pub struct Session<S> {
    game: GameState,
    store: S,
    options: SessionOptions,
    /// Autosave is held back while an unread snapshot may still be in the store.
    autosave_held: bool,
}

impl<S: StateStore> Session<S> {
    /// Starts a fresh game without reading the store.
    pub fn new(store: S, options: SessionOptions) -> Self {
        Self {
            game: GameState::new(),
            store,
            options,
            autosave_held: false,
        }
    }

    /// Resumes the stored game, or starts fresh if nothing is stored.
    pub fn open(mut store: S, options: SessionOptions) -> Result<Self, StoreError> {
        let game = read_stored(&mut store)?;
        Ok(Self {
            game,
            store,
            options,
            autosave_held: false,
        })
    }

    /// Like [`Session::open`], but never fails.
    ///
    /// A corrupt snapshot is discarded. Any other failure starts a fresh game
    /// with autosave held until an explicit save or load succeeds, so the
    /// stored snapshot is not overwritten behind the player's back.
    pub fn open_or_default(mut store: S, options: SessionOptions) -> Self {
        let (game, autosave_held) = match read_stored(&mut store) {
            Ok(game) => (game, false),
            Err(err) if err.is_corrupt() => {
                warn!(%err, "discarding stored game");
                (GameState::new(), false)
            }
            Err(err) => {
                warn!(%err, "stored game unreadable, autosave held");
                (GameState::new(), true)
            }
        };
        Self {
            game,
            store,
            options,
            autosave_held,
        }
    }

    fn autosaves(&self) -> bool {
        self.options.autosave && !self.autosave_held
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn state(&self) -> GameDocument {
        self.game.to_document()
    }

    /// Plays a move for whoever holds the turn.
    ///
    /// With autosave the new state is written before it replaces the current
    /// one, so a failed save rejects the move as a whole.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<GameDocument, SessionError> {
        let mut next = self.game.clone();
        if let Err(err) = next.apply_move(row, col) {
            warn!(%err, "move rejected");
            return Err(err.into());
        }

        let document = next.to_document();
        if self.autosaves() {
            self.store.save(&document)?;
        }
        self.game = next;
        Ok(document)
    }

    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<GameDocument, StoreError> {
        let fresh = GameState::new();
        let document = fresh.to_document();
        if self.autosaves() {
            self.store.save(&document)?;
        }
        self.game = fresh;
        Ok(document)
    }

    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.game.to_document())?;
        self.autosave_held = false;
        Ok(())
    }

    /// Replaces the current game with the stored one.
    #[instrument(skip(self))]
    pub fn load(&mut self) -> Result<GameDocument, StoreError> {
        self.game = read_stored(&mut self.store)?;
        self.autosave_held = false;
        Ok(self.state())
    }
}

fn read_stored<S: StateStore>(store: &mut S) -> Result<GameState, StoreError> {
    match store.load()? {
        Some(document) => Ok(GameState::from_document(&document)?),
        None => Ok(GameState::new()),
    }
}
