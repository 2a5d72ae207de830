//! Presentation adapter interface.
//!
//! The engine knows nothing about screens or input devices. A host
//! implements `PresentationAdapter` to draw the table, and forwards user
//! clicks to `GameSession::on_card_activated`.

use super::events::GameEvent;
use crate::board::BoardSnapshot;
use crate::core::Player;

/// Receives state to display.
pub trait PresentationAdapter {
    /// Draw the table. Called after every state change.
    fn render(&mut self, board: &BoardSnapshot, players: &[Player], current_player: &str);

    /// Announce the end of the game. `None` means a tie.
    ///
    /// Called exactly once per game.
    fn announce_game_over(&mut self, winner: Option<&str>);

    /// Observe an individual event before the next `render`.
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Adapter that displays nothing. For headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAdapter;

impl PresentationAdapter for NullAdapter {
    fn render(&mut self, _board: &BoardSnapshot, _players: &[Player], _current_player: &str) {}

    fn announce_game_over(&mut self, _winner: Option<&str>) {}
}
