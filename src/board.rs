use crate::config::{COLS, LANDMARK_COL, LANDMARK_ROW, LANDMARK_SPAN, ROWS, WIN_LENGTH};
use crate::types::{PlayerId, Position};

const NUM_SQUARES: usize = ROWS as usize * COLS as usize;
/// One direction per axis; the opposite direction is walked by negation.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Occupancy index: which player, if any, owns each square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PlayerId>; NUM_SQUARES],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    /// Owner of a square. Off-board squares have no owner.
    pub fn owner(&self, row: i32, col: i32) -> Option<PlayerId> {
        if !in_bounds(row, col) {
            return None;
        }
        self.cells[index(row, col)]
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.owner(row, col).is_some()
    }

    /// Records a claim. Caller contract: the square is placeable and empty.
    pub(crate) fn claim(&mut self, row: u8, col: u8, player: PlayerId) {
        let (row, col) = (i32::from(row), i32::from(col));
        debug_assert!(is_placeable(row, col) && !self.is_occupied(row, col));
        self.cells[index(row, col)] = Some(player);
    }

    /// True if `owner` holding `(row, col)` would give a run of [`WIN_LENGTH`]
    /// on some axis. Does not modify the board.
    pub fn would_complete_run(&self, row: i32, col: i32, owner: PlayerId) -> bool {
        is_placeable(row, col) && self.longest_run(row, col, owner) >= WIN_LENGTH
    }

    /// Longest axis run through `(row, col)` counting the square itself as owned
    /// by `owner`.
    pub fn longest_run(&self, row: i32, col: i32, owner: PlayerId) -> usize {
        AXES.iter()
            .map(|&(dr, dc)| {
                1 + self.count_in_direction(row, col, -dr, -dc, owner)
                    + self.count_in_direction(row, col, dr, dc, owner)
            })
            .max()
            .unwrap_or(1)
    }

    /// Same-owner squares strictly beyond `(row, col)` in one direction.
    /// The landmark stops a run like the board edge does.
    fn count_in_direction(&self, row: i32, col: i32, dr: i32, dc: i32, owner: PlayerId) -> usize {
        let mut count = 0;
        let mut r = row + dr;
        let mut c = col + dc;

        while is_placeable(r, c) && self.cells[index(r, c)] == Some(owner) {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_landmark_cell(row: i32, col: i32) -> bool {
    let top = i32::from(LANDMARK_ROW);
    let left = i32::from(LANDMARK_COL);
    let span = i32::from(LANDMARK_SPAN);
    (top..top + span).contains(&row) && (left..left + span).contains(&col)
}

/// In bounds and outside the landmark.
pub fn is_placeable(row: i32, col: i32) -> bool {
    in_bounds(row, col) && !is_landmark_cell(row, col)
}

pub fn total_placeable_cells() -> usize {
    NUM_SQUARES - usize::from(LANDMARK_SPAN) * usize::from(LANDMARK_SPAN)
}

pub fn landmark_cells() -> impl Iterator<Item = Position> {
    (0..LANDMARK_SPAN).flat_map(|dr| {
        (0..LANDMARK_SPAN).map(move |dc| Position {
            row: LANDMARK_ROW + dr,
            col: LANDMARK_COL + dc,
        })
    })
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..i32::from(ROWS)).contains(&row) && (0..i32::from(COLS)).contains(&col)
}

fn index(row: i32, col: i32) -> usize {
    row as usize * COLS as usize + col as usize
}
