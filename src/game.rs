use tracing::{debug, info};

use crate::board::{Board, is_placeable, total_placeable_cells};
use crate::config::{self, COLS, GAME_NAME, NEUTRAL_COLOR, PLAYERS, ROWS, SETUP_TEXT};
use crate::error::{DocumentError, MoveError};
use crate::types::{
    GameDocument, PLAYER_ONE, PLAYER_TWO, Piece, PlayerId, PlayerRecord, Position, Winner,
};

/// What a single accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    /// The placed piece is part of a run of at least [`config::WIN_LENGTH`].
    pub completed_run: bool,
    /// The mover keeps the turn for one extra placement.
    pub bonus_granted: bool,
    /// This move used up a pending bonus.
    pub bonus_consumed: bool,
    /// Set when this move filled the board.
    pub winner: Option<Winner>,
}

/// The engine's working set. Only [`GameState::apply_move`] and
/// [`GameState::reset`] change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    pieces: Vec<Piece>,
    scores: [u32; 2],
    turn: PlayerId,
    bonus: Option<PlayerId>,
    winner: Option<Winner>,
    landmark_color: String,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            pieces: Vec::new(),
            scores: [0; 2],
            turn: PLAYER_ONE,
            bonus: None,
            winner: None,
            landmark_color: NEUTRAL_COLOR.to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        slot_of(player).map_or(0, |slot| self.scores[slot])
    }

    /// Player holding a pending bonus placement, if any.
    pub fn bonus_owner(&self) -> Option<PlayerId> {
        self.bonus
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn landmark_color(&self) -> &str {
        &self.landmark_color
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.board.is_occupied(row, col)
    }

    pub fn would_complete_run(&self, row: i32, col: i32, owner: PlayerId) -> bool {
        self.board.would_complete_run(row, col, owner)
    }

    /// Squares that can still be claimed, in row-major order.
    pub fn open_cells(&self) -> Vec<Position> {
        let mut out = Vec::with_capacity(total_placeable_cells() - self.pieces.len());
        for row in 0..ROWS {
            for col in 0..COLS {
                let (r, c) = (i32::from(row), i32::from(col));
                if is_placeable(r, c) && !self.board.is_occupied(r, c) {
                    out.push(Position { row, col });
                }
            }
        }
        out
    }

    /// Claims `(row, col)` for the player to move.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !is_placeable(row, col) {
            return Err(MoveError::NotPlaceable { row, col });
        }
        // in range after the placeable check
        let (row, col) = (row as u8, col as u8);
        if self.board.is_occupied(i32::from(row), i32::from(col)) {
            return Err(MoveError::CellOccupied { row, col });
        }

        let player = self.turn;
        let piece = Piece { row, col, player };
        self.board.claim(row, col, player);
        self.pieces.push(piece);
        if let Some(slot) = slot_of(player) {
            self.scores[slot] += 1;
        }

        let completed_run = self
            .board
            .would_complete_run(i32::from(row), i32::from(col), player);

        // A bonus move never earns another bonus, even if it completes a run.
        let mut bonus_granted = false;
        let mut bonus_consumed = false;
        match self.bonus {
            None if completed_run => {
                self.bonus = Some(player);
                bonus_granted = true;
                debug!(player, row, col, "run completed, bonus placement granted");
            }
            Some(owner) if owner == player => {
                self.bonus = None;
                bonus_consumed = true;
                self.turn = opponent_of(player);
                debug!(player, completed_run, "bonus placement used");
            }
            _ => {
                self.turn = opponent_of(player);
            }
        }

        if self.pieces.len() == total_placeable_cells() {
            self.finish();
        }

        Ok(MoveOutcome {
            piece,
            completed_run,
            bonus_granted,
            bonus_consumed,
            winner: self.winner,
        })
    }

    fn finish(&mut self) {
        let (first, second) = (self.scores[0], self.scores[1]);
        let winner = decide_winner(first, second);
        self.landmark_color = landmark_color_for(Some(winner)).to_string();
        self.winner = Some(winner);
        info!(?winner, first, second, "board full, game over");
    }

    pub fn to_document(&self) -> GameDocument {
        GameDocument {
            game_name: GAME_NAME.to_string(),
            setup_text: SETUP_TEXT.to_string(),
            board_rows: ROWS,
            board_cols: COLS,
            players: PLAYERS
                .iter()
                .zip(self.scores)
                .map(|(player, score)| PlayerRecord {
                    id: player.id,
                    name: player.name.to_string(),
                    color: player.color.to_string(),
                    score,
                })
                .collect(),
            turn: self.turn,
            pieces: self.pieces.clone(),
            bonus_available: self.bonus.is_some(),
            bonus_player: self.bonus,
            game_over: self.is_game_over(),
            winner: self.winner,
            townhall_color: self.landmark_color.clone(),
        }
    }

    /// Rebuilds the engine state from a stored document, rejecting anything
    /// that could not have been produced by play.
    pub fn from_document(doc: &GameDocument) -> Result<Self, DocumentError> {
        if doc.board_rows != ROWS || doc.board_cols != COLS {
            return Err(DocumentError::BoardSize {
                rows: doc.board_rows,
                cols: doc.board_cols,
                expected_rows: ROWS,
                expected_cols: COLS,
            });
        }

        let roster_matches = doc.players.len() == PLAYERS.len()
            && doc.players.iter().zip(PLAYERS.iter()).all(|(stored, configured)| {
                stored.id == configured.id
                    && stored.name == configured.name
                    && stored.color == configured.color
            });
        if !roster_matches {
            return Err(DocumentError::Players);
        }

        let mut board = Board::new();
        let mut counted = [0u32; 2];
        for piece in &doc.pieces {
            let slot = slot_of(piece.player).ok_or(DocumentError::UnknownPlayer(piece.player))?;
            let (r, c) = (i32::from(piece.row), i32::from(piece.col));
            if !is_placeable(r, c) {
                return Err(DocumentError::PieceNotPlaceable {
                    row: piece.row,
                    col: piece.col,
                });
            }
            if board.is_occupied(r, c) {
                return Err(DocumentError::DuplicatePiece {
                    row: piece.row,
                    col: piece.col,
                });
            }
            board.claim(piece.row, piece.col, piece.player);
            counted[slot] += 1;
        }

        let mut scores = [0u32; 2];
        for (slot, record) in doc.players.iter().enumerate() {
            if record.score != counted[slot] {
                return Err(DocumentError::ScoreMismatch {
                    player: record.id,
                    recorded: record.score,
                    counted: counted[slot],
                });
            }
            scores[slot] = record.score;
        }

        if slot_of(doc.turn).is_none() {
            return Err(DocumentError::UnknownPlayer(doc.turn));
        }

        let bonus = match (doc.bonus_available, doc.bonus_player) {
            (false, None) => None,
            (true, Some(owner)) if owner == doc.turn => Some(owner),
            _ => return Err(DocumentError::BonusMismatch),
        };

        let full = doc.pieces.len() == total_placeable_cells();
        if doc.game_over != full {
            return Err(DocumentError::GameOverMismatch);
        }
        let winner = match doc.winner {
            None if !full => None,
            Some(winner) if full && winner == decide_winner(scores[0], scores[1]) => Some(winner),
            _ => return Err(DocumentError::WinnerMismatch),
        };
        if doc.townhall_color != landmark_color_for(winner) {
            return Err(DocumentError::LandmarkColor(doc.townhall_color.clone()));
        }

        Ok(Self {
            board,
            pieces: doc.pieces.clone(),
            scores,
            turn: doc.turn,
            bonus,
            winner,
            landmark_color: doc.townhall_color.clone(),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Neutral until someone wins outright.
fn landmark_color_for(winner: Option<Winner>) -> &'static str {
    match winner {
        Some(Winner::Player(id)) => config::player(id).map_or(NEUTRAL_COLOR, |p| p.color),
        Some(Winner::Tie) | None => NEUTRAL_COLOR,
    }
}

fn decide_winner(first: u32, second: u32) -> Winner {
    if first > second {
        Winner::Player(PLAYER_ONE)
    } else if second > first {
        Winner::Player(PLAYER_TWO)
    } else {
        Winner::Tie
    }
}

fn slot_of(player: PlayerId) -> Option<usize> {
    PLAYERS.iter().position(|p| p.id == player)
}

fn opponent_of(player: PlayerId) -> PlayerId {
    match player {
        PLAYER_ONE => PLAYER_TWO,
        PLAYER_TWO => PLAYER_ONE,
        _ => unreachable!("invalid player value: {}", player),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::landmark_cells;

    /// Plays `moves` in order, panicking on the first rejection.
    fn play(game: &mut GameState, moves: &[(i32, i32)]) {
        for &(row, col) in moves {
            game.apply_move(row, col)
                .unwrap_or_else(|err| panic!("move ({row}, {col}) rejected: {err}"));
        }
    }

    /// Fills every open square in row-major order.
    fn fill_board(game: &mut GameState) {
        for pos in game.open_cells() {
            if game.is_game_over() {
                break;
            }
            game.apply_move(i32::from(pos.row), i32::from(pos.col)).unwrap();
        }
    }

    #[test]
    fn initial_state_is_correct() {
        let game = GameState::new();

        assert!(game.pieces().is_empty());
        assert_eq!(game.score(PLAYER_ONE), 0);
        assert_eq!(game.score(PLAYER_TWO), 0);
        assert_eq!(game.turn(), PLAYER_ONE);
        assert_eq!(game.bonus_owner(), None);
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.landmark_color(), NEUTRAL_COLOR);
        assert_eq!(game.open_cells().len(), 76);
    }

    #[test]
    fn move_appends_piece_scores_and_passes_turn() {
        let mut game = GameState::new();

        let outcome = game.apply_move(2, 3).unwrap();

        assert_eq!(
            outcome.piece,
            Piece {
                row: 2,
                col: 3,
                player: PLAYER_ONE,
            }
        );
        assert!(!outcome.completed_run);
        assert_eq!(game.pieces(), &[outcome.piece]);
        assert_eq!(game.score(PLAYER_ONE), 1);
        assert_eq!(game.score(PLAYER_TWO), 0);
        assert_eq!(game.turn(), PLAYER_TWO);
        assert!(game.is_occupied(2, 3));
    }

    #[test]
    fn occupied_square_is_rejected_without_change() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0)]);
        let before = game.clone();

        let err = game.apply_move(0, 0).unwrap_err();

        assert_eq!(err, MoveError::CellOccupied { row: 0, col: 0 });
        assert_eq!(err.kind(), "cell_occupied");
        assert_eq!(game, before);
    }

    #[test]
    fn landmark_and_off_board_squares_are_rejected() {
        let mut game = GameState::new();
        let before = game.clone();

        for pos in landmark_cells() {
            let (row, col) = (i32::from(pos.row), i32::from(pos.col));
            assert_eq!(
                game.apply_move(row, col),
                Err(MoveError::NotPlaceable { row, col })
            );
        }
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 10), (300, 300)] {
            assert_eq!(
                game.apply_move(row, col).unwrap_err().kind(),
                "not_placeable"
            );
        }
        assert_eq!(game, before);
    }

    #[test]
    fn diagonal_into_landmark_cannot_complete() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(0, 0), (7, 0), (1, 1), (7, 1), (2, 2), (7, 2), (3, 3), (7, 9)],
        );

        assert_eq!(game.turn(), PLAYER_ONE);
        assert!(!game.would_complete_run(4, 4, PLAYER_ONE));
        assert_eq!(game.board().longest_run(3, 3, PLAYER_ONE), 4);
    }

    #[test]
    fn landmark_rejected_while_bonus_is_pending() {
        let mut game = GameState::new();
        // P1 builds row 0, P2 answers on row 7.
        play(
            &mut game,
            &[(0, 0), (7, 0), (0, 1), (7, 1), (0, 2), (7, 2), (0, 3), (7, 3), (0, 4)],
        );
        assert_eq!(game.bonus_owner(), Some(PLAYER_ONE));

        assert_eq!(
            game.apply_move(3, 4),
            Err(MoveError::NotPlaceable { row: 3, col: 4 })
        );
        assert_eq!(game.bonus_owner(), Some(PLAYER_ONE));
        assert_eq!(game.turn(), PLAYER_ONE);
    }

    #[test]
    fn five_in_a_row_grants_bonus_without_passing_turn() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(1, 0), (7, 0), (1, 1), (7, 1), (1, 2), (7, 2), (1, 3), (7, 3)],
        );
        let outcome = game.apply_move(1, 4).unwrap();

        assert!(outcome.completed_run);
        assert!(outcome.bonus_granted);
        assert_eq!(game.bonus_owner(), Some(PLAYER_ONE));
        assert_eq!(game.turn(), PLAYER_ONE);
        assert!(game.to_document().bonus_available);
    }

    #[test]
    fn bonus_move_passes_turn_and_clears_bonus() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(6, 0), (0, 0), (6, 1), (0, 9), (6, 2), (1, 9), (6, 3), (2, 9), (6, 4)],
        );
        assert_eq!(game.bonus_owner(), Some(PLAYER_ONE));

        let outcome = game.apply_move(5, 9).unwrap();

        assert!(outcome.bonus_consumed);
        assert!(!outcome.bonus_granted);
        assert_eq!(game.bonus_owner(), None);
        assert_eq!(game.turn(), PLAYER_TWO);
        assert_eq!(game.score(PLAYER_ONE), 6);
    }

    #[test]
    fn bonus_move_that_completes_a_run_does_not_stack() {
        let mut game = GameState::new();
        // P1: row 0 cols 0..=3 and row 2 cols 0..=3. P2 scatters on row 7.
        play(
            &mut game,
            &[
                (0, 0),
                (7, 0),
                (0, 1),
                (7, 2),
                (0, 2),
                (7, 4),
                (0, 3),
                (7, 6),
                (2, 0),
                (7, 8),
                (2, 1),
                (6, 0),
                (2, 2),
                (6, 2),
                (2, 3),
                (6, 4),
            ],
        );
        assert_eq!(game.turn(), PLAYER_ONE);

        let first = game.apply_move(0, 4).unwrap();
        assert!(first.bonus_granted);
        assert_eq!(game.turn(), PLAYER_ONE);

        let second = game.apply_move(2, 4).unwrap();
        assert!(second.completed_run);
        assert!(second.bonus_consumed);
        assert!(!second.bonus_granted);
        assert_eq!(game.bonus_owner(), None);
        assert_eq!(game.turn(), PLAYER_TWO);
    }

    #[test]
    fn skipped_square_is_not_a_run_until_filled() {
        let mut game = GameState::new();
        // P1: (0,0),(0,1),(0,2),(0,3),(0,5) with (0,4) left open.
        play(
            &mut game,
            &[(0, 0), (7, 0), (0, 1), (7, 2), (0, 2), (7, 4), (0, 3), (7, 6)],
        );
        let gap = game.apply_move(0, 5).unwrap();
        assert!(!gap.completed_run);
        assert_eq!(game.bonus_owner(), None);
        assert_eq!(game.turn(), PLAYER_TWO);

        play(&mut game, &[(7, 8)]);
        let filled = game.apply_move(0, 4).unwrap();

        assert!(filled.completed_run);
        assert!(filled.bonus_granted);
        assert_eq!(game.board().longest_run(0, 4, PLAYER_ONE), 6);
        assert_eq!(game.bonus_owner(), Some(PLAYER_ONE));
        assert_eq!(game.turn(), PLAYER_ONE);
    }

    #[test]
    fn opponent_piece_breaks_a_run() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(5, 0), (5, 2), (5, 1), (7, 0), (5, 3), (7, 1), (5, 4), (7, 2)],
        );
        let outcome = game.apply_move(5, 5).unwrap();

        assert!(!outcome.completed_run);
        assert_eq!(game.turn(), PLAYER_TWO);
    }

    /// Every square but (7,9) claimed, the first `first_owned` of them by
    /// player one, with player two to move.
    fn one_square_left(first_owned: usize) -> GameState {
        let mut open = GameState::new().open_cells();
        assert_eq!(open.pop(), Some(Position { row: 7, col: 9 }));

        let mut doc = GameState::new().to_document();
        for (i, pos) in open.into_iter().enumerate() {
            let player = if i < first_owned { PLAYER_ONE } else { PLAYER_TWO };
            doc.pieces.push(Piece {
                row: pos.row,
                col: pos.col,
                player,
            });
        }
        doc.players[0].score = first_owned as u32;
        doc.players[1].score = 75 - first_owned as u32;
        doc.turn = PLAYER_TWO;
        GameState::from_document(&doc).unwrap()
    }

    #[test]
    fn full_board_with_player_one_ahead_colours_landmark_red() {
        let mut game = one_square_left(39);

        let outcome = game.apply_move(7, 9).unwrap();

        assert_eq!((game.score(PLAYER_ONE), game.score(PLAYER_TWO)), (39, 37));
        assert_eq!(outcome.winner, Some(Winner::Player(PLAYER_ONE)));
        assert!(game.is_game_over());
        assert_eq!(game.landmark_color(), "#e74c3c");
        assert!(game.open_cells().is_empty());
    }

    #[test]
    fn full_board_with_player_two_ahead_colours_landmark_blue() {
        let mut game = one_square_left(37);

        game.apply_move(7, 9).unwrap();

        assert_eq!((game.score(PLAYER_ONE), game.score(PLAYER_TWO)), (37, 39));
        assert_eq!(game.winner(), Some(Winner::Player(PLAYER_TWO)));
        assert_eq!(game.landmark_color(), "#3498db");
        assert!(game.to_document().game_over);
    }

    #[test]
    fn full_board_with_equal_scores_is_a_tie() {
        let mut game = one_square_left(38);

        game.apply_move(7, 9).unwrap();

        assert_eq!((game.score(PLAYER_ONE), game.score(PLAYER_TWO)), (38, 38));
        assert_eq!(game.winner(), Some(Winner::Tie));
        assert_eq!(game.landmark_color(), NEUTRAL_COLOR);
        let doc = game.to_document();
        assert_eq!(doc.winner, Some(Winner::Tie));
        assert_eq!(GameState::from_document(&doc).unwrap(), game);
    }

    #[test]
    fn row_major_fill_ends_the_game() {
        let mut game = GameState::new();

        fill_board(&mut game);

        assert_eq!(game.pieces().len(), total_placeable_cells());
        assert!(game.is_game_over());
        assert_eq!(game.score(PLAYER_ONE) + game.score(PLAYER_TWO), 76);
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut game = GameState::new();
        fill_board(&mut game);
        let before = game.clone();

        assert_eq!(game.apply_move(0, 0), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(3, 4), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(-5, 99), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn winner_is_strict_majority_or_tie() {
        assert_eq!(decide_winner(39, 37), Winner::Player(PLAYER_ONE));
        assert_eq!(decide_winner(30, 46), Winner::Player(PLAYER_TWO));
        assert_eq!(decide_winner(38, 38), Winner::Tie);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(1, 0), (7, 0), (1, 1), (7, 1), (1, 2), (7, 2), (1, 3), (7, 3), (1, 4)],
        );
        assert!(game.bonus_owner().is_some());

        game.reset();

        assert_eq!(game, GameState::new());
        let doc = game.to_document();
        assert!(doc.pieces.is_empty());
        assert!(doc.players.iter().all(|p| p.score == 0));
        assert_eq!(doc.turn, PLAYER_ONE);
        assert!(!doc.bonus_available);
        assert!(!doc.game_over);
        assert_eq!(doc.winner, None);
        assert_eq!(doc.townhall_color, NEUTRAL_COLOR);
    }

    #[test]
    fn document_round_trip_preserves_state() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(1, 0), (7, 0), (1, 1), (7, 1), (1, 2), (7, 2), (1, 3), (7, 3), (1, 4)],
        );

        let doc = game.to_document();
        assert_eq!(doc.game_name, GAME_NAME);
        assert_eq!((doc.board_rows, doc.board_cols), (8, 10));
        assert_eq!(doc.players[0].score, 5);
        assert_eq!(doc.players[1].score, 4);
        assert_eq!(doc.bonus_player, Some(PLAYER_ONE));

        let restored = GameState::from_document(&doc).unwrap();
        assert_eq!(restored, game);

        let mut finished = GameState::new();
        fill_board(&mut finished);
        let restored = GameState::from_document(&finished.to_document()).unwrap();
        assert_eq!(restored, finished);
    }

    #[test]
    fn inconsistent_documents_are_rejected() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0), (0, 1)]);
        let doc = game.to_document();

        let mut bad = doc.clone();
        bad.players[0].score = 7;
        assert!(matches!(
            GameState::from_document(&bad),
            Err(DocumentError::ScoreMismatch { player: 1, recorded: 7, counted: 1 })
        ));

        let mut bad = doc.clone();
        bad.pieces.push(Piece {
            row: 0,
            col: 0,
            player: PLAYER_ONE,
        });
        bad.players[0].score = 2;
        assert_eq!(
            GameState::from_document(&bad),
            Err(DocumentError::DuplicatePiece { row: 0, col: 0 })
        );

        let mut bad = doc.clone();
        bad.pieces.push(Piece {
            row: 4,
            col: 5,
            player: PLAYER_TWO,
        });
        assert_eq!(
            GameState::from_document(&bad),
            Err(DocumentError::PieceNotPlaceable { row: 4, col: 5 })
        );

        let mut bad = doc.clone();
        bad.bonus_available = true;
        assert_eq!(GameState::from_document(&bad), Err(DocumentError::BonusMismatch));

        let mut bad = doc.clone();
        bad.turn = 3;
        assert_eq!(GameState::from_document(&bad), Err(DocumentError::UnknownPlayer(3)));

        let mut bad = doc.clone();
        bad.game_over = true;
        assert_eq!(GameState::from_document(&bad), Err(DocumentError::GameOverMismatch));

        let mut bad = doc.clone();
        bad.winner = Some(Winner::Tie);
        assert_eq!(GameState::from_document(&bad), Err(DocumentError::WinnerMismatch));

        let mut bad = doc.clone();
        bad.townhall_color = "#e74c3c".to_string();
        assert_eq!(
            GameState::from_document(&bad),
            Err(DocumentError::LandmarkColor("#e74c3c".to_string()))
        );

        let mut finished = GameState::new();
        fill_board(&mut finished);
        let mut bad = finished.to_document();
        bad.townhall_color = NEUTRAL_COLOR.to_string();
        assert!(matches!(
            GameState::from_document(&bad),
            Err(DocumentError::LandmarkColor(_))
        ));

        let mut bad = doc.clone();
        bad.board_cols = 9;
        assert!(matches!(
            GameState::from_document(&bad),
            Err(DocumentError::BoardSize { cols: 9, .. })
        ));

        let mut bad = doc;
        bad.players.swap(0, 1);
        assert_eq!(GameState::from_document(&bad), Err(DocumentError::Players));
    }
}
