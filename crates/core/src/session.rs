//! Session module - the tick sequencer
//!
//! This module ties together all core components: board, active group, colour
//! source and bookkeeping. It applies player intents between ticks and runs the
//! fixed per-tick phase order:
//!
//! 1. clear saturated tiles and score them (a tick that clears does nothing else)
//! 2. one gravity pass over resting tiles (a tick that moves anything stops here)
//! 3. move the active group down one row; if it cannot move it lands
//! 4. spawn a new group when none is active; a blocked spawn ends the session
//! 5. ramp the tick interval every `speed_up_rate` groups

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::group::ActiveGroup;
use crate::rng::{ColorSource, SimpleRng};
use crate::snapshot::{board_hash, BoardView, SessionSnapshot};
use crate::state::SessionState;
use crate::types::{Intent, LastEvent, Mask, MAX_GROUP_SIZE};

/// Outcome of one [`Session::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// The board or session state changed since the previous `advance`.
    pub redraw_needed: bool,
}

/// Create a session with the default seeded colour source.
pub fn new_session(
    width: usize,
    height: usize,
    spawn_group_size: usize,
    tick_interval: f64,
    speed_up_rate: u32,
    speed_up_multiplier: f64,
) -> Result<Session, ConfigError> {
    Session::new(SessionConfig::new(
        width,
        height,
        spawn_group_size,
        tick_interval,
        speed_up_rate,
        speed_up_multiplier,
    ))
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session<C = SimpleRng> {
    config: SessionConfig,
    board: Board,
    group: Option<ActiveGroup>,
    state: SessionState,
    colors: C,
    /// Seconds accumulated toward the next tick
    tick_timer: f64,
    slamming: bool,
    /// An intent changed state since the last `advance`
    dirty: bool,
    ticks: u64,
    /// Last tick / landing event (consumed by observers).
    last_event: Option<LastEvent>,
}

impl Session<SimpleRng> {
    /// Create a session seeded from `config.seed`
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let colors = SimpleRng::new(config.seed);
        Self::with_colors(config, colors)
    }
}

impl<C: ColorSource> Session<C> {
    /// Create a session on an empty board drawing spawn colours from `colors`
    pub fn with_colors(config: SessionConfig, colors: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        Ok(Self::assemble(config, board, colors))
    }

    /// Create a session on a pre-seeded board. Every tile starts at rest.
    pub fn from_board(
        config: SessionConfig,
        mut board: Board,
        colors: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardMismatch {
                width: config.width,
                height: config.height,
                actual_width: board.width(),
                actual_height: board.height(),
            });
        }
        board.settle_all();
        Ok(Self::assemble(config, board, colors))
    }

    fn assemble(config: SessionConfig, board: Board, colors: C) -> Self {
        let state = SessionState::new(config.tick_interval);
        Self {
            config,
            board,
            group: None,
            state,
            colors,
            tick_timer: 0.0,
            slamming: false,
            dirty: false,
            ticks: 0,
            last_event: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_group(&self) -> Option<&ActiveGroup> {
        self.group.as_ref()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn total_spawned(&self) -> u64 {
        self.state.total_spawned
    }

    pub fn tick_interval(&self) -> f64 {
        self.state.tick_interval
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn is_slamming(&self) -> bool {
        self.slamming
    }

    /// Ticks run since the session started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Take and clear the last tick or landing event.
    pub fn take_last_event(&mut self) -> Option<LastEvent> {
        self.last_event.take()
    }

    pub fn board_view(&self) -> BoardView {
        BoardView::from_board(&self.board)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.board.fill_from(&self.board);
        out.board_hash = board_hash(&self.board);
        out.active.clear();
        if let Some(group) = &self.group {
            out.active.extend_from_slice(group.members());
        }
        out.score = self.state.score;
        out.total_spawned = self.state.total_spawned;
        out.tick_interval = self.state.tick_interval;
        out.game_over = self.state.game_over;
        out.slamming = self.slamming;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player intent to the active group immediately.
    ///
    /// Returns whether anything changed. Intents are ignored after game over, while
    /// a slam is in progress, and while no group is active.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.state.game_over || self.slamming {
            return false;
        }
        let Some(group) = self.group.as_mut() else {
            return false;
        };

        let changed = match intent {
            Intent::MoveLeft => group.move_by(&mut self.board, -1, 0),
            Intent::MoveRight => group.move_by(&mut self.board, 1, 0),
            Intent::MoveDown => group.move_by(&mut self.board, 0, -1),
            Intent::Swap => group.swap(&mut self.board),
            Intent::Slam if self.config.instant_slam => {
                let rows = group.slam(&mut self.board);
                debug!(rows, "slam");
                self.land();
                self.last_event = Some(LastEvent {
                    landed: true,
                    ..LastEvent::default()
                });
                true
            }
            Intent::Slam => {
                self.slamming = true;
                true
            }
        };

        self.dirty |= changed;
        changed
    }

    /// Advance the session clock by `elapsed` seconds.
    ///
    /// A slam in progress moves the group one row per call. A full tick runs when
    /// the accumulated time reaches the current tick interval, after which the
    /// accumulator restarts from zero. Non-finite or negative `elapsed` counts as
    /// no time.
    pub fn advance(&mut self, elapsed: f64) -> TickResult {
        let mut redraw_needed = std::mem::take(&mut self.dirty);
        if self.state.game_over {
            return TickResult { redraw_needed };
        }

        let mut slam_landed = false;
        if self.slamming {
            slam_landed = self.slam_step();
            redraw_needed = true;
        }

        if elapsed.is_finite() && elapsed > 0.0 {
            self.tick_timer += elapsed;
        }
        if self.tick_timer >= self.state.tick_interval {
            self.tick_timer = 0.0;
            redraw_needed |= self.step();
            // The tick replaced the event; the landing still happened this frame.
            if let Some(event) = self.last_event.as_mut() {
                event.landed |= slam_landed;
            }
        }

        TickResult { redraw_needed }
    }

    /// Run one tick immediately, ignoring the clock. Returns whether anything changed.
    pub fn step(&mut self) -> bool {
        if self.state.game_over {
            return false;
        }
        self.ticks += 1;
        trace!(tick = self.ticks, "tick");

        let mut event = LastEvent::default();
        let changed = self.run_phases(&mut event);
        self.last_event = Some(event);
        changed
    }

    fn run_phases(&mut self, event: &mut LastEvent) -> bool {
        let cleared = self.board.clear_saturated();
        if cleared > 0 {
            event.cleared = cleared as u32;
            event.points = self.state.award_clear(cleared);
            debug!(
                cleared,
                points = event.points,
                score = self.state.score,
                "cleared saturated tiles"
            );
            // A member falling through a cell that saturated was cleared with it.
            let live = self
                .group
                .as_mut()
                .is_some_and(|group| group.retain_live(&self.board));
            if !live {
                self.group = None;
                self.slamming = false;
            }
            return true;
        }

        if self.board.apply_gravity_pass() {
            return true;
        }

        if let Some(group) = self.group.as_mut() {
            if group.move_by(&mut self.board, 0, -1) {
                return true;
            }
            self.land();
            event.landed = true;
        }

        self.spawn(event);
        true
    }

    /// One slam row. Returns whether the group landed.
    fn slam_step(&mut self) -> bool {
        let moved = self
            .group
            .as_mut()
            .is_some_and(|group| group.move_by(&mut self.board, 0, -1));
        if moved {
            return false;
        }
        self.land();
        self.last_event = Some(LastEvent {
            landed: true,
            ..LastEvent::default()
        });
        true
    }

    fn land(&mut self) {
        if let Some(group) = self.group.take() {
            debug!(members = group.len(), "group landed");
            group.clear_active_flags(&mut self.board);
        }
        self.slamming = false;
    }

    fn spawn(&mut self, event: &mut LastEvent) {
        let size = self.config.spawn_group_size;
        let masks: ArrayVec<Mask, MAX_GROUP_SIZE> =
            (0..size).map(|_| self.colors.next_mask()).collect();

        match ActiveGroup::spawn(&mut self.board, self.config.spawner_column(), &masks) {
            Ok(group) => {
                debug!(size, "spawned group");
                self.group = Some(group);
                event.spawned = true;
                event.sped_up = self.state.record_spawn(
                    size,
                    self.config.speed_up_rate,
                    self.config.speed_up_multiplier,
                );
            }
            Err(conflict) => {
                info!(score = self.state.score, %conflict, "game over");
                self.state.end();
                self.slamming = false;
                event.game_over = true;
            }
        }
    }
}
