//! GUI-side session: wraps the pure game state with agent threads,
//! hints, the flip animation and status messages.

use crate::{AIEngine, Event, GameConfig, GameError, GameState, MoveResult, Pos};
use log::warn;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Minimum time an agent move takes on screen, so replies are visible
const AI_MOVE_DELAY: Duration = Duration::from_millis(350);

/// How long flipped stones stay highlighted
const FLIP_FLASH_DURATION: Duration = Duration::from_millis(600);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Highlight of the stones flipped by the latest move
pub struct FlipAnimation {
    cells: Vec<Pos>,
    started: Instant,
}

impl FlipAnimation {
    pub fn new(cells: Vec<Pos>) -> Self {
        Self {
            cells,
            started: Instant::now(),
        }
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Fraction of the animation elapsed, `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        (self.started.elapsed().as_secs_f32() / FLIP_FLASH_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.started.elapsed() >= FLIP_FLASH_DURATION
    }
}

/// Session state driven by the app every frame
pub struct Session {
    pub game: GameState,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub ai_thinking_time: Option<Duration>,
    pub suggestion: Option<Pos>,
    pub flip_animation: Option<FlipAnimation>,
    pub message: Option<String>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: GameState::new(config),
            ai_state: AiState::Idle,
            last_ai_result: None,
            ai_thinking_time: None,
            suggestion: None,
            flip_animation: None,
            message: None,
        }
    }

    /// Start over with the current configuration.
    ///
    /// A pending agent result is dropped with its receiver.
    pub fn reset(&mut self) {
        *self = Self::new(*self.game.config());
    }

    /// Start over with a new configuration
    pub fn new_game(&mut self, config: GameConfig) {
        *self = Self::new(config);
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Human click on the board
    pub fn try_place_stone(&mut self, pos: Pos) {
        match self.game.place(pos) {
            Ok(next) => self.advance(next),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Launch the agent for the side to move on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() || !self.game.is_agent_turn() {
            return;
        }

        let pending = match self.game.begin_agent_move() {
            Ok(pending) => pending,
            Err(err) => {
                self.message = Some(err.to_string());
                return;
            }
        };

        let board = *pending.board();
        let player = pending.to_move();
        let depth = pending.config().depth;
        self.game = pending;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let started = Instant::now();
            let mut engine = AIEngine::with_depth(depth);
            let result = engine.get_move_with_stats(&board, player);
            if let Some(rest) = AI_MOVE_DELAY.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.game = self.game.cancel_agent_move();
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_thinking_time = Some(elapsed);
            let choice = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match self.game.apply(Event::AgentFinished(choice)) {
                Ok(next) => self.advance(next),
                Err(err) => {
                    warn!("agent move rejected: {err}");
                    self.game = self.game.cancel_agent_move();
                    self.message = Some(err.to_string());
                }
            }
        }
    }

    /// Search a suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.is_ai_thinking() {
            self.message = Some(GameError::AgentInFlight.to_string());
            return;
        }

        if let Some(result) = self.game.hint() {
            self.suggestion = result.best_move;
            self.last_ai_result = Some(result);
        }
    }

    pub fn undo(&mut self) {
        self.navigate(Event::Undo);
    }

    pub fn redo(&mut self) {
        self.navigate(Event::Redo);
    }

    /// Change seats or depth mid-game. Returns whether the change was taken.
    pub fn reconfigure(&mut self, config: GameConfig) -> bool {
        match self.game.reconfigure(config) {
            Ok(next) => {
                self.game = next;
                true
            }
            Err(err) => {
                self.message = Some(err.to_string());
                false
            }
        }
    }

    fn navigate(&mut self, event: Event) {
        match self.game.apply(event) {
            Ok(next) => {
                self.game = next;
                self.suggestion = None;
                self.flip_animation = None;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Take a state produced by a move, starting the flip flash
    fn advance(&mut self, next: GameState) {
        self.game = next;
        self.suggestion = None;
        self.message = None;

        let flipped = self.game.last_flipped();
        self.flip_animation = (!flipped.is_empty()).then(|| FlipAnimation::new(flipped.to_vec()));
    }
}
