//! Session lifecycle around a presentation adapter.
//!
//! `GameSession` is the object a UI holds. It owns the adapter and, while a
//! game is running, a `MatchGame`. Invalid clicks are ignored; everything
//! else is rendered.

use tracing::{debug, info};

use super::adapter::PresentationAdapter;
use super::events::GameEvent;
use super::game::{GameBuilder, MatchGame};
use crate::board::Position;
use crate::core::GameConfig;
use crate::error::{GameError, Result};
use crate::turn::ScheduledStep;

pub struct GameSession<A> {
    config: GameConfig,
    adapter: A,
    game: Option<MatchGame>,
}

impl<A: PresentationAdapter> GameSession<A> {
    pub fn new(config: GameConfig, adapter: A) -> Self {
        Self {
            config,
            adapter,
            game: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The running game, if any.
    #[must_use]
    pub fn game(&self) -> Option<&MatchGame> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.game.is_some()
    }

    /// Deal a fresh game from the session config and render it.
    ///
    /// Scores, turn order and computer memory all start over. Returns the
    /// first scheduled step when the computer opens.
    pub fn start_session(&mut self) -> Result<Option<ScheduledStep>> {
        self.start_with(GameBuilder::new(self.config.clone()))
    }

    /// Start from a prepared builder (fixed layout, seeded memory).
    pub fn start_with(&mut self, builder: GameBuilder) -> Result<Option<ScheduledStep>> {
        let game = builder.build()?;
        info!(seed = game.seed(), "session started");
        let step = game.pending_step();
        self.game = Some(game);
        self.publish();
        Ok(step)
    }

    /// Drop the running game and return to idle.
    pub fn end_session(&mut self) -> Option<MatchGame> {
        let game = self.game.take();
        if game.is_some() {
            info!("session ended");
        }
        game
    }

    /// Forward a card click.
    ///
    /// Clicks that break the current rules (locked board, face-up card,
    /// re-clicking the first pick, game over) are ignored.
    pub fn on_card_activated(&mut self, position: Position) -> Result<Option<ScheduledStep>> {
        let Some(game) = self.game.as_mut() else {
            debug!(%position, "click with no session");
            return Ok(None);
        };

        match game.activate_card(position) {
            Ok(step) => {
                self.publish();
                Ok(step)
            }
            Err(GameError::InvalidSelection(reason)) => {
                debug!(%position, %reason, "ignoring click");
                Ok(None)
            }
            Err(GameError::GameOver) => {
                debug!(%position, "ignoring click after game over");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Run the outstanding scheduled step. Call after `step.delay`.
    pub fn advance(&mut self) -> Result<Option<ScheduledStep>> {
        let game = self.game.as_mut().ok_or(GameError::NoSession)?;
        let step = game.advance()?;
        self.publish();
        Ok(step)
    }

    /// The step the host owes, if any.
    #[must_use]
    pub fn pending_step(&self) -> Option<ScheduledStep> {
        self.game.as_ref().and_then(MatchGame::pending_step)
    }

    /// Run scheduled steps back to back, ignoring their delays, until the
    /// human must act or the game is over.
    pub fn run_until_idle(&mut self) -> Result<()> {
        while self.pending_step().is_some() {
            self.advance()?;
        }
        Ok(())
    }

    fn publish(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let mut finished = false;
        for event in game.drain_events() {
            finished |= matches!(event, GameEvent::GameOver { .. });
            self.adapter.on_event(&event);
        }

        self.adapter
            .render(&game.snapshot(), game.players().as_slice(), game.current_player_name());

        if finished {
            self.adapter.announce_game_over(game.winner_name());
        }
    }
}
