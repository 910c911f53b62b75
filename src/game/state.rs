//! Turn controller
//!
//! Every transition takes the current [`GameState`] by reference and returns
//! a new one; nothing is mutated in place. After each board change the
//! state is settled in this order:
//!
//! 1. End: full board, a side without stones, [`MAX_PLACEMENTS`] placements
//!    on the current line, or neither side able to move.
//! 2. Pass: the side to move has no legal placement, so a pass record is
//!    appended and the turn flips.
//! 3. Otherwise the side to move acts: a human seat waits for
//!    [`Event::Place`], an agent seat for [`Event::AgentStarted`] and
//!    [`Event::AgentFinished`] (or [`GameState::play_agent_turn`]).

use log::{debug, info, warn};
use serde::Serialize;

use crate::board::{Board, Player, Pos};
use crate::config::{GameConfig, SeatControl};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, GameResult};
use crate::rules::{apply_move, has_legal_move, is_legal_move, legal_moves};

use super::history::{Action, History, MoveRecord, MoveRow};

/// Placement cap after which the game is scored regardless of position
pub const MAX_PLACEMENTS: usize = 60;

/// Final result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn from_counts(black: u32, white: u32) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    InProgress,
    Ended(Outcome),
}

/// Inputs the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Externally supplied placement for a human seat
    Place(Pos),
    /// An agent has started thinking about the current position
    AgentStarted,
    /// The agent's choice; `None` means it found no move
    AgentFinished(Option<Pos>),
    /// The pending agent move was abandoned
    AgentCancelled,
    Undo,
    Redo,
    Reconfigure(GameConfig),
}

/// Complete game state: configuration, history and the agent guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    history: History,
    status: Status,
    agent_in_flight: bool,
}

impl GameState {
    /// New game from the standard opening with Black to move
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Player::Black, config)
    }

    /// New game from an arbitrary position
    pub fn from_position(board: Board, to_move: Player, config: GameConfig) -> Self {
        Self {
            config,
            history: History::new(MoveRecord::start(board, to_move)),
            status: Status::InProgress,
            agent_in_flight: false,
        }
        .settle()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Ended(_))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.history.current().board
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.history.current().to_move
    }

    /// Legal placements for the side to move (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(self.board(), self.to_move())
    }

    /// Stones flipped by the most recent ply
    pub fn last_flipped(&self) -> &[Pos] {
        &self.history.current().flipped
    }

    pub fn last_move(&self) -> Option<Pos> {
        match self.history.current().action {
            Action::Place(pos) => Some(pos),
            Action::Start | Action::Pass => None,
        }
    }

    /// Stone counts as `(black, white)`
    pub fn score(&self) -> (u32, u32) {
        let board = self.board();
        (board.count(Player::Black), board.count(Player::White))
    }

    #[inline]
    pub fn is_agent_in_flight(&self) -> bool {
        self.agent_in_flight
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.config.seat(self.to_move()) == SeatControl::Human
    }

    pub fn is_agent_turn(&self) -> bool {
        !self.is_over() && self.config.is_agent(self.to_move())
    }

    /// Move-record table for the current line
    pub fn move_table(&self) -> Vec<MoveRow> {
        self.history.rows()
    }

    /// One-line status for display
    pub fn turn_message(&self) -> String {
        let (black, white) = self.score();
        match self.status {
            Status::Ended(Outcome::Winner(player)) => {
                format!("{player} wins {black}-{white}")
            }
            Status::Ended(Outcome::Draw) => format!("Draw {black}-{white}"),
            Status::InProgress => {
                let record = self.history.current();
                match record.action {
                    Action::Pass => format!(
                        "{} has no move, {} to play",
                        record.to_move.opponent(),
                        record.to_move
                    ),
                    _ => format!("{} to play", record.to_move),
                }
            }
        }
    }

    /// Suggested move for the side to move, searched at the configured depth
    pub fn hint(&self) -> Option<MoveResult> {
        if self.is_over() {
            return None;
        }
        let mut engine = AIEngine::with_depth(self.config.depth);
        Some(engine.get_move_with_stats(self.board(), self.to_move()))
    }

    /// Apply an event, returning the new state or why it was rejected.
    pub fn apply(&self, event: Event) -> GameResult<Self> {
        match event {
            Event::Place(pos) => self.place(pos),
            Event::AgentStarted => self.begin_agent_move(),
            Event::AgentFinished(choice) => self.finish_agent_move(choice),
            Event::AgentCancelled => Ok(self.cancel_agent_move()),
            Event::Undo => self.undo(),
            Event::Redo => self.redo(),
            Event::Reconfigure(config) => self.reconfigure(config),
        }
    }

    /// Apply an event; a rejected event leaves the state unchanged.
    #[must_use]
    pub fn dispatch(self, event: Event) -> Self {
        match self.apply(event) {
            Ok(next) => next,
            Err(err) => {
                debug!("ignored {event:?}: {err}");
                self
            }
        }
    }

    /// Placement by a human seat
    pub fn place(&self, pos: Pos) -> GameResult<Self> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.agent_in_flight {
            return Err(GameError::AgentInFlight);
        }
        if self.config.is_agent(self.to_move()) {
            return Err(GameError::NotHumanTurn);
        }
        if !is_legal_move(self.board(), pos, self.to_move()) {
            return Err(GameError::IllegalMove(pos));
        }
        Ok(self.commit_placement(pos, false))
    }

    /// Mark an agent move as in flight. Only one may be pending at a time.
    pub fn begin_agent_move(&self) -> GameResult<Self> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.agent_in_flight {
            return Err(GameError::AgentInFlight);
        }
        if !self.config.is_agent(self.to_move()) {
            return Err(GameError::NotAgentTurn);
        }
        Ok(Self {
            agent_in_flight: true,
            ..self.clone()
        })
    }

    /// Resolve the pending agent move with its choice.
    ///
    /// `None` is treated as a pass when the side to move really has no move.
    pub fn finish_agent_move(&self, choice: Option<Pos>) -> GameResult<Self> {
        if !self.agent_in_flight {
            return Err(GameError::NoAgentInFlight);
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.to_move();
        match choice {
            Some(pos) if is_legal_move(self.board(), pos, player) => {
                Ok(self.commit_placement(pos, true))
            }
            Some(pos) => Err(GameError::IllegalMove(pos)),
            None if !has_legal_move(self.board(), player) => Ok(self.commit_pass(true)),
            None => {
                warn!("agent for {player} returned no move with moves available");
                Ok(self.cancel_agent_move())
            }
        }
    }

    /// Drop the in-flight mark without changing the position
    #[must_use]
    pub fn cancel_agent_move(&self) -> Self {
        Self {
            agent_in_flight: false,
            ..self.clone()
        }
    }

    /// Run the search for the agent to move and apply its choice.
    pub fn play_agent_turn(&self) -> GameResult<Self> {
        let pending = self.begin_agent_move()?;
        let mut engine = AIEngine::with_depth(self.config.depth);
        let choice = engine.get_move(self.board(), self.to_move());
        pending.finish_agent_move(choice)
    }

    /// Step back to the previous position a human would act in.
    ///
    /// With at least one human seat, positions where an agent is to move
    /// are skipped so the agent does not immediately replay the move.
    pub fn undo(&self) -> GameResult<Self> {
        if self.agent_in_flight {
            return Err(GameError::AgentInFlight);
        }
        if !self.history.can_undo() {
            return Err(GameError::NothingToUndo);
        }

        let mut cursor = self.history.cursor() - 1;
        while !self.is_resting_point(cursor) {
            cursor -= 1;
        }
        Ok(self.navigate(cursor))
    }

    /// Reverse of [`undo`](Self::undo).
    pub fn redo(&self) -> GameResult<Self> {
        if self.agent_in_flight {
            return Err(GameError::AgentInFlight);
        }
        if !self.history.can_redo() {
            return Err(GameError::NothingToRedo);
        }

        let mut cursor = self.history.cursor() + 1;
        while !self.is_resting_point(cursor) {
            cursor += 1;
        }
        Ok(self.navigate(cursor))
    }

    /// Replace seat controllers and depth
    pub fn reconfigure(&self, config: GameConfig) -> GameResult<Self> {
        if self.agent_in_flight {
            return Err(GameError::AgentInFlight);
        }
        Ok(Self {
            config,
            ..self.clone()
        })
    }

    /// Undo/redo stop here: the ends of the history, or a position where
    /// the side to move can act (and is human, when any seat is human).
    fn is_resting_point(&self, index: usize) -> bool {
        if index == 0 || index + 1 >= self.history.len() {
            return true;
        }
        let Some(record) = self.history.get(index) else {
            return true;
        };
        has_legal_move(&record.board, record.to_move)
            && (!self.config.has_human() || !self.config.is_agent(record.to_move))
    }

    fn navigate(&self, cursor: usize) -> Self {
        let mut next = Self {
            history: self.history.with_cursor(cursor),
            ..self.clone()
        };
        next.status = match next.outcome() {
            Some(outcome) => Status::Ended(outcome),
            None => Status::InProgress,
        };
        next
    }

    fn commit_placement(&self, pos: Pos, by_agent: bool) -> Self {
        let player = self.to_move();
        let outcome = apply_move(self.board(), pos, player);
        debug!("{player} plays {pos}, flipping {}", outcome.flipped.len());

        self.commit(MoveRecord {
            board: outcome.board,
            to_move: player.opponent(),
            action: Action::Place(pos),
            by_agent,
            flipped: outcome.flipped,
        })
    }

    fn commit_pass(&self, by_agent: bool) -> Self {
        self.commit(self.pass_record(by_agent))
    }

    fn pass_record(&self, by_agent: bool) -> MoveRecord {
        let record = self.history.current();
        MoveRecord {
            board: record.board,
            to_move: record.to_move.opponent(),
            action: Action::Pass,
            by_agent,
            flipped: Vec::new(),
        }
    }

    fn commit(&self, record: MoveRecord) -> Self {
        Self {
            config: self.config,
            history: self.history.push(record),
            status: Status::InProgress,
            agent_in_flight: false,
        }
        .settle()
    }

    /// End-of-game check for the position at the cursor
    fn outcome(&self) -> Option<Outcome> {
        let board = self.board();
        let (black, white) = self.score();

        let over = board.is_full()
            || black == 0
            || white == 0
            || self.history.placements() >= MAX_PLACEMENTS
            || (!has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White));

        over.then(|| Outcome::from_counts(black, white))
    }

    /// Apply end and pass transitions until the side to move can act.
    fn settle(mut self) -> Self {
        loop {
            if let Some(outcome) = self.outcome() {
                let (black, white) = self.score();
                info!("game over: {outcome:?} ({black}-{white})");
                self.status = Status::Ended(outcome);
                return self;
            }

            let player = self.to_move();
            if has_legal_move(self.board(), player) {
                self.status = Status::InProgress;
                return self;
            }

            debug!("{player} has no legal move and passes");
            let record = self.pass_record(self.config.is_agent(player));
            self.history = self.history.push(record);
        }
    }
}
