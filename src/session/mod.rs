//! Game sessions.
//!
//! - `MatchGame`: one headless game, driven by `activate_card` and
//!   `advance`
//! - `GameSession`: start/end lifecycle and rendering through a
//!   `PresentationAdapter`
//! - `GameEvent`: what happened during a transition

mod adapter;
mod events;
mod game;
mod lifecycle;

pub use adapter::{NullAdapter, PresentationAdapter};
pub use events::GameEvent;
pub use game::{GameBuilder, MatchGame};
pub use lifecycle::GameSession;
