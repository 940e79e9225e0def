//! Arena - drives one player turn from click to settled board
//!
//! A turn runs through these phases, pausing on the [`Clock`] between them:
//!
//! 1. Two activations pick an adjacent pair; the pair is swapped.
//! 2. The two swapped cells are checked for matches. Without one, the swap stays
//!    visible for the bad-swap delay and is then undone.
//! 3. With a match the cascade loop runs: mark, collapse, re-check the falling
//!    cells; when nothing more falls into place, refill the holes and re-check the
//!    fresh cells. Any new match starts another pass.
//! 4. The settled board is scanned for chances. Zero chances notifies the
//!    game-over sink, which may ask for a fresh board.
//!
//! The arena is single-threaded and takes `&self`, so a renderer can hold it while
//! a turn is in flight. Activations arriving during a turn are rejected with
//! [`ArenaError::BoardLocked`]. No `RefCell` borrow is held across an `.await`.
//!
//! A turn future must be driven to completion. Dropping it between phases releases
//! the lock but leaves the board mid-turn: marked holes, or a swap not yet undone.

use std::cell::{Cell, Ref, RefCell};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::ArenaConfig;
use crate::core::{
    analyze, find_all_matches, mover, Board, BoardError, BoardSnapshot, CellId, ChanceReport,
    MatchSet, PickState, SwapHint, TileGenerator, TilePicker, TurnTally,
};
use crate::error::ArenaError;
use crate::sinks::{GameOverSink, StatisticsSink, StatsUpdate};
use crate::types::{Direction, TileKind};

/// What started a cascade pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassTrigger {
    /// The player's swap
    Swap,
    /// Cells that fell during the previous collapse
    Collapse,
    /// Freshly generated cells
    Refill,
}

/// One mark + collapse pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub trigger: PassTrigger,
    pub matched: Vec<CellId>,
    pub falling: Vec<CellId>,
    pub combo_points: u32,
}

/// Board state once a turn is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub chances: ChanceReport,
    /// The game-over sink was notified
    pub game_over: bool,
    /// The sink asked for a new game and the board was regenerated
    pub restarted: bool,
}

/// A swap that produced at least one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub swapped: (CellId, CellId),
    pub passes: Vec<PassReport>,
    pub matched: u32,
    pub combo: u32,
    pub settlement: Settlement,
}

/// Result of a single activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Only the selection changed
    Picked(PickState),
    /// The swap made no match and was undone
    Reverted {
        swapped: (CellId, CellId),
        direction: Direction,
        settlement: Settlement,
    },
    /// The swap matched and the cascade ran to completion
    Resolved(TurnReport),
}

/// Clears the lock flag when the turn ends, including on early return
struct TurnLock<'a>(&'a Cell<bool>);

impl<'a> TurnLock<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Result<Self, ArenaError> {
        if flag.replace(true) {
            return Err(ArenaError::BoardLocked);
        }
        Ok(Self(flag))
    }
}

impl Drop for TurnLock<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct Arena<G, C, S, O> {
    config: ArenaConfig,
    board: RefCell<Board>,
    picker: RefCell<TilePicker>,
    generator: RefCell<G>,
    clock: C,
    stats: RefCell<S>,
    game_over: RefCell<O>,
    locked: Cell<bool>,
}

impl<G, C, S, O> Arena<G, C, S, O>
where
    G: TileGenerator,
    C: Clock,
    S: StatisticsSink,
    O: GameOverSink,
{
    /// Create an arena with a freshly generated board sized by `config`
    pub fn new(
        config: ArenaConfig,
        mut generator: G,
        clock: C,
        stats: S,
        game_over: O,
    ) -> Result<Self, ArenaError> {
        let board = Board::generate(config.rows, config.cols, config.tile_kinds, &mut generator)?;
        Ok(Self::with_board(config, board, generator, clock, stats, game_over))
    }

    /// Create an arena around an existing board
    ///
    /// The board's dimensions take precedence over the ones in `config`.
    pub fn with_board(
        config: ArenaConfig,
        board: Board,
        generator: G,
        clock: C,
        stats: S,
        game_over: O,
    ) -> Self {
        Self {
            picker: RefCell::new(TilePicker::new(config.wrong_pick)),
            config,
            board: RefCell::new(board),
            generator: RefCell::new(generator),
            clock,
            stats: RefCell::new(stats),
            game_over: RefCell::new(game_over),
            locked: Cell::new(false),
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Borrow the board; do not hold across an await on this arena
    pub fn board(&self) -> Ref<'_, Board> {
        self.board.borrow()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&*self.board.borrow())
    }

    pub fn stats(&self) -> Ref<'_, S> {
        self.stats.borrow()
    }

    pub fn game_over_sink(&self) -> Ref<'_, O> {
        self.game_over.borrow()
    }

    pub fn pick_state(&self) -> PickState {
        self.picker.borrow().state()
    }

    /// A turn is in flight
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn chances(&self) -> ChanceReport {
        analyze(&self.board.borrow())
    }

    /// A swap that would create a match, if the board has one
    pub fn hint(&self) -> Option<SwapHint> {
        self.chances().first_hint()
    }

    /// Replace the board with freshly generated cells and clear all turn state
    pub fn new_game(
        &self,
        rows: usize,
        cols: usize,
        tile_kinds: TileKind,
    ) -> Result<(), ArenaError> {
        if self.locked.get() {
            return Err(ArenaError::BoardLocked);
        }
        self.regenerate(rows, cols, tile_kinds)
    }

    fn regenerate(
        &self,
        rows: usize,
        cols: usize,
        tile_kinds: TileKind,
    ) -> Result<(), ArenaError> {
        let board = Board::generate(rows, cols, tile_kinds, &mut *self.generator.borrow_mut())?;
        *self.board.borrow_mut() = board;
        self.picker.borrow_mut().reset();
        self.stats.borrow_mut().record(StatsUpdate::Reset);
        info!(rows, cols, tile_kinds, "new game");
        Ok(())
    }

    /// Handle a click on the cell at `index`
    ///
    /// When the click completes a pair the whole turn runs inside the returned
    /// future, which must be awaited to the end.
    pub async fn on_cell_activated(&self, index: usize) -> Result<TurnOutcome, ArenaError> {
        if self.locked.get() {
            return Err(ArenaError::BoardLocked);
        }

        let direction = {
            let board = self.board.borrow();
            let id = board
                .get(index)
                .ok_or(ArenaError::IndexOutOfRange {
                    index,
                    len: board.len(),
                })?
                .id;
            self.picker.borrow_mut().select(&board, id)
        };

        match direction {
            Some(_) => self.swap_selected().await,
            None => Ok(TurnOutcome::Picked(self.pick_state())),
        }
    }

    /// Activate both cells of the first available hint
    ///
    /// Returns None on a stalemated board. The selection is left alone while a turn
    /// is in flight.
    pub async fn play_hint(&self) -> Result<Option<TurnOutcome>, ArenaError> {
        if self.locked.get() {
            return Err(ArenaError::BoardLocked);
        }
        let Some(hint) = self.hint() else {
            return Ok(None);
        };
        self.picker.borrow_mut().reset();
        self.on_cell_activated(hint.from).await?;
        self.on_cell_activated(hint.to).await.map(Some)
    }

    /// Swap the two picked cells and resolve the turn
    ///
    /// Fails with [`ArenaError::IncompleteSelection`] unless both picks are set.
    /// The future must not be dropped before it resolves; see the module docs.
    pub async fn swap_selected(&self) -> Result<TurnOutcome, ArenaError> {
        let _lock = TurnLock::acquire(&self.locked)?;

        let (a, b) = self
            .picker
            .borrow()
            .pair()
            .ok_or(ArenaError::IncompleteSelection)?;
        let direction = {
            let board = self.board.borrow();
            let from = board.index_of(a).ok_or(BoardError::UnknownCell(a))?;
            let to = board.index_of(b).ok_or(BoardError::UnknownCell(b))?;
            board
                .geometry()
                .direction_between(from, to)
                .ok_or(ArenaError::IncompleteSelection)?
        };

        mover::swap(&mut self.board.borrow_mut(), a, b)?;
        self.stats.borrow_mut().record(StatsUpdate::Move);

        let found = find_all_matches(&self.board.borrow(), [a, b]);
        let Some(set) = found else {
            info!(a, b, direction = direction.as_str(), "no match, reverting swap");
            self.clock.delay(self.config.bad_swap_delay()).await;
            mover::swap(&mut self.board.borrow_mut(), a, b)?;
            self.picker.borrow_mut().reset();
            let settlement = self.settle()?;
            return Ok(TurnOutcome::Reverted {
                swapped: (a, b),
                direction,
                settlement,
            });
        };

        self.picker.borrow_mut().reset();
        let (passes, tally) = self.cascade(set).await;
        info!(
            passes = tally.passes,
            matched = tally.matched_cells,
            combo = tally.combo,
            "turn resolved"
        );
        let settlement = self.settle()?;

        Ok(TurnOutcome::Resolved(TurnReport {
            swapped: (a, b),
            passes,
            matched: tally.matched_cells,
            combo: tally.combo,
            settlement,
        }))
    }

    async fn cascade(&self, first: MatchSet) -> (Vec<PassReport>, TurnTally) {
        let phase = self.config.phase_delay();
        let mut tally = TurnTally::new();
        let mut passes = Vec::new();
        let mut current = first;
        let mut trigger = PassTrigger::Swap;

        loop {
            let combo_points = tally.record_pass(&current, self.config.initial_pass);
            self.board
                .borrow_mut()
                .mark_matched(current.cells().iter().copied());
            {
                let mut stats = self.stats.borrow_mut();
                stats.record(StatsUpdate::Matched(current.len() as u32));
                if combo_points > 0 {
                    stats.record(StatsUpdate::Combo(combo_points));
                }
            }
            self.clock.delay(phase).await;

            let collapse = mover::collapse(&mut self.board.borrow_mut(), &current);
            debug!(
                pass = tally.passes,
                ?trigger,
                matched = current.len(),
                falling = collapse.falling.len(),
                combo_points,
                "cascade pass"
            );
            passes.push(PassReport {
                trigger,
                matched: current.cells().to_vec(),
                falling: collapse.falling.clone(),
                combo_points,
            });
            self.clock.delay(phase).await;

            let next = find_all_matches(&self.board.borrow(), collapse.falling);
            self.board.borrow_mut().clear_collapsed();
            if let Some(set) = next {
                current = set;
                trigger = PassTrigger::Collapse;
                continue;
            }

            let fresh = self
                .board
                .borrow_mut()
                .refill_holes(&mut *self.generator.borrow_mut());
            debug!(cells = fresh.len(), "refilled holes");
            self.clock.delay(phase).await;

            match find_all_matches(&self.board.borrow(), fresh) {
                Some(set) => {
                    current = set;
                    trigger = PassTrigger::Refill;
                }
                None => break,
            }
        }

        (passes, tally)
    }

    fn settle(&self) -> Result<Settlement, ArenaError> {
        let chances = self.chances();
        self.stats
            .borrow_mut()
            .record(StatsUpdate::Chances(chances.total()));

        if !chances.is_stalemate() {
            return Ok(Settlement {
                chances,
                game_over: false,
                restarted: false,
            });
        }

        warn!("no swap can create a match");
        let restart = self.game_over.borrow_mut().notify(&chances);
        if restart {
            let (rows, cols, kinds) = {
                let board = self.board.borrow();
                (board.rows(), board.cols(), board.tile_kinds())
            };
            self.regenerate(rows, cols, kinds)?;
        }

        Ok(Settlement {
            chances,
            game_over: true,
            restarted: restart,
        })
    }
}
