//! Turn controller: whose turn it is and which transitions are open.

mod controller;

pub use controller::{LockReason, ScheduledStep, StepKind, TurnController, TurnPhase};
