//! Turn state machine and scheduled steps.
//!
//! ```text
//! AwaitingFirstPick --reveal--> AwaitingSecondPick --reveal--> Evaluating
//! Evaluating --match-->    Locked(ResolveMatch)    --advance--> AwaitingFirstPick (same player)
//! Evaluating --mismatch--> Locked(ResolveMismatch) --advance--> AwaitingFirstPick (next player)
//! AwaitingFirstPick (computer) --> Locked(ComputerTurn) --advance--> agent reveals two cards
//! any --board complete--> GameOver
//! ```
//!
//! Every `Locked` phase carries a `ScheduledStep`. The host waits
//! `step.delay` and calls `advance()`; the controller itself never sleeps.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{Position, RevealGate};
use crate::core::{PlayerId, TimingConfig};

/// Why the board is locked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockReason {
    /// A matched pair is on display before leaving the table.
    ResolveMatch { first: Position, second: Position },
    /// A mismatched pair is on display before turning back.
    ResolveMismatch { first: Position, second: Position },
    /// The computer is about to pick.
    ComputerTurn,
}

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingFirstPick,
    AwaitingSecondPick { first: Position },
    Evaluating { first: Position, second: Position },
    Locked(LockReason),
    GameOver,
}

/// Kind of deferred transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    ResolveMatch,
    ResolveMismatch,
    ComputerTurn,
}

/// A transition the host must trigger with `advance()` after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub kind: StepKind,
    pub delay: Duration,
}

/// Tracks whose turn it is and where in the turn we are.
#[derive(Clone, Debug)]
pub struct TurnController {
    phase: TurnPhase,
    current: PlayerId,
    player_count: usize,
    timing: TimingConfig,
    turn_number: u32,
}

impl TurnController {
    #[must_use]
    pub fn new(player_count: usize, timing: TimingConfig) -> Self {
        Self {
            phase: TurnPhase::AwaitingFirstPick,
            current: PlayerId::new(0),
            player_count,
            timing,
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Number of the current turn. Starts at 1 and counts every rotation.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// True while a pair is resolving, the computer is acting, or the game
    /// is over.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Evaluating { .. } | TurnPhase::Locked(_) | TurnPhase::GameOver
        )
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    #[must_use]
    pub fn pending_first(&self) -> Option<Position> {
        match self.phase {
            TurnPhase::AwaitingSecondPick { first } | TurnPhase::Evaluating { first, .. } => Some(first),
            TurnPhase::Locked(LockReason::ResolveMatch { first, .. })
            | TurnPhase::Locked(LockReason::ResolveMismatch { first, .. }) => Some(first),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_second(&self) -> Option<Position> {
        match self.phase {
            TurnPhase::Evaluating { second, .. }
            | TurnPhase::Locked(LockReason::ResolveMatch { second, .. })
            | TurnPhase::Locked(LockReason::ResolveMismatch { second, .. }) => Some(second),
            _ => None,
        }
    }

    /// Conditions the board checks on every reveal.
    #[must_use]
    pub fn gate(&self) -> RevealGate {
        RevealGate {
            locked: self.is_locked(),
            pending_first: self.pending_first(),
        }
    }

    /// Record a successful reveal. Returns the pair to evaluate once both
    /// picks are in.
    pub fn record_pick(&mut self, position: Position) -> Option<[Position; 2]> {
        match self.phase {
            TurnPhase::AwaitingFirstPick => {
                self.phase = TurnPhase::AwaitingSecondPick { first: position };
                None
            }
            TurnPhase::AwaitingSecondPick { first } => {
                self.phase = TurnPhase::Evaluating {
                    first,
                    second: position,
                };
                Some([first, position])
            }
            _ => None,
        }
    }

    /// Pass the turn to the next seat.
    pub fn rotate(&mut self) -> PlayerId {
        self.current = self.current.next(self.player_count);
        self.turn_number += 1;
        self.current
    }

    /// Lock the board and schedule the follow-up step.
    pub fn lock(&mut self, reason: LockReason) -> ScheduledStep {
        self.phase = TurnPhase::Locked(reason);
        Self::step_for(reason, &self.timing)
    }

    /// Reopen the board for a fresh pair.
    pub fn unlock(&mut self) {
        self.phase = TurnPhase::AwaitingFirstPick;
    }

    /// Enter the terminal phase. No further transitions are accepted.
    pub fn finish(&mut self) {
        self.phase = TurnPhase::GameOver;
    }

    /// The step the host owes us, if the board is locked.
    #[must_use]
    pub fn pending_step(&self) -> Option<ScheduledStep> {
        match self.phase {
            TurnPhase::Locked(reason) => Some(Self::step_for(reason, &self.timing)),
            _ => None,
        }
    }

    fn step_for(reason: LockReason, timing: &TimingConfig) -> ScheduledStep {
        match reason {
            LockReason::ResolveMatch { .. } => ScheduledStep {
                kind: StepKind::ResolveMatch,
                delay: timing.match_resolve(),
            },
            LockReason::ResolveMismatch { .. } => ScheduledStep {
                kind: StepKind::ResolveMismatch,
                delay: timing.mismatch_resolve(),
            },
            LockReason::ComputerTurn => ScheduledStep {
                kind: StepKind::ComputerTurn,
                delay: timing.computer_think(),
            },
        }
    }
}
