//! Move records and the navigable game history

use serde::Serialize;

use crate::board::{Board, Player, Pos};

/// What happened on a ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The position the game started from (first entry only)
    Start,
    /// A stone was placed
    Place(Pos),
    /// The side to move had no legal placement
    Pass,
}

/// One entry of the history: the position reached and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Board after this ply
    pub board: Board,
    /// Side to move in `board`
    pub to_move: Player,
    pub action: Action,
    /// Whether the ply was chosen by the search
    pub by_agent: bool,
    /// Stones flipped by this ply (empty for passes and the start)
    pub flipped: Vec<Pos>,
}

impl MoveRecord {
    pub fn start(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            action: Action::Start,
            by_agent: false,
            flipped: Vec::new(),
        }
    }

    /// The side that made this ply (`None` for the start entry)
    pub fn mover(&self) -> Option<Player> {
        match self.action {
            Action::Start => None,
            Action::Place(_) | Action::Pass => Some(self.to_move.opponent()),
        }
    }
}

/// A row of the move-record table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    /// 1-based ply number
    pub index: usize,
    pub mover: Player,
    pub action: Action,
    pub by_agent: bool,
}

/// Ordered move records plus a cursor.
///
/// Entries are never modified. Moving the cursor back keeps later entries
/// available for redo until a new record is pushed, which drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<MoveRecord>,
    cursor: usize,
}

impl History {
    pub fn new(start: MoveRecord) -> Self {
        Self {
            entries: vec![start],
            cursor: 0,
        }
    }

    /// Record at the cursor
    #[inline]
    pub fn current(&self) -> &MoveRecord {
        &self.entries[self.cursor]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total entries, including any beyond the cursor
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the start entry is never removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.entries.get(index)
    }

    /// Entries from the start up to and including the cursor
    pub fn line(&self) -> &[MoveRecord] {
        &self.entries[..=self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Copy of this history with `record` appended after the cursor.
    /// Entries beyond the cursor are dropped.
    #[must_use]
    pub fn push(&self, record: MoveRecord) -> Self {
        let mut entries = self.line().to_vec();
        entries.push(record);
        let cursor = entries.len() - 1;
        Self { entries, cursor }
    }

    /// Copy of this history with the cursor at `cursor`
    #[must_use]
    pub fn with_cursor(&self, cursor: usize) -> Self {
        debug_assert!(cursor < self.entries.len());
        Self {
            entries: self.entries.clone(),
            cursor,
        }
    }

    /// Placements on the current line
    pub fn placements(&self) -> usize {
        self.line()
            .iter()
            .filter(|r| matches!(r.action, Action::Place(_)))
            .count()
    }

    /// Move-record table for the current line (start entry excluded)
    pub fn rows(&self) -> Vec<MoveRow> {
        self.line()
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                record.mover().map(|mover| MoveRow {
                    index,
                    mover,
                    action: record.action,
                    by_agent: record.by_agent,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    fn placed(board: &Board, pos: Pos, player: Player) -> MoveRecord {
        let outcome = apply_move(board, pos, player);
        MoveRecord {
            board: outcome.board,
            to_move: player.opponent(),
            action: Action::Place(pos),
            by_agent: false,
            flipped: outcome.flipped,
        }
    }

    #[test]
    fn test_new_history() {
        let history = History::new(MoveRecord::start(Board::new(), Player::Black));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current().mover(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.rows().is_empty());
    }

    #[test]
    fn test_push_does_not_touch_original() {
        let history = History::new(MoveRecord::start(Board::new(), Player::Black));
        let next = history.push(placed(&Board::new(), Pos::new(2, 3), Player::Black));

        assert_eq!(history.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.cursor(), 1);
        assert_eq!(next.current().mover(), Some(Player::Black));
        assert_eq!(next.placements(), 1);
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let start = Board::new();
        let history = History::new(MoveRecord::start(start, Player::Black))
            .push(placed(&start, Pos::new(2, 3), Player::Black))
            .with_cursor(0);
        assert!(history.can_redo());

        let branched = history.push(placed(&start, Pos::new(5, 4), Player::Black));
        assert_eq!(branched.len(), 2);
        assert!(!branched.can_redo());
        assert_eq!(branched.current().action, Action::Place(Pos::new(5, 4)));
    }

    #[test]
    fn test_rows() {
        let start = Board::new();
        let first = placed(&start, Pos::new(2, 3), Player::Black);
        let after = first.board;
        let history = History::new(MoveRecord::start(start, Player::Black))
            .push(first)
            .push(MoveRecord {
                board: after,
                to_move: Player::Black,
                action: Action::Pass,
                by_agent: true,
                flipped: Vec::new(),
            });

        let rows = history.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].mover, Player::Black);
        assert_eq!(rows[0].action, Action::Place(Pos::new(2, 3)));
        assert_eq!(rows[1].mover, Player::White);
        assert_eq!(rows[1].action, Action::Pass);
        assert!(rows[1].by_agent);
        assert_eq!(history.placements(), 1);
    }
}
