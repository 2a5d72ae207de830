//! Headless matching engine.
//!
//! `MatchGame` owns the board, scores, turn state, computer memory and RNG
//! for one game. It is driven by two calls:
//!
//! - `activate_card(position)`: a human pick
//! - `advance()`: the host's callback for the outstanding `ScheduledStep`
//!
//! Both return the next step to schedule, if any. Nothing here sleeps or
//! spawns; the host owns time.

use tracing::{debug, info};

use super::events::GameEvent;
use crate::agent::{ComputerAgent, ComputerMemory};
use crate::board::{Board, BoardSnapshot, CardStatus, Position};
use crate::cards::{build_deck, shuffle, Card};
use crate::core::{
    validate_layout, GameConfig, GameRecord, GameRng, MoveRecord, Player, PlayerConfig, PlayerId,
    PlayerMap, TimingConfig,
};
use crate::error::{GameError, InvalidSelection, Result};
use crate::rules::{self, GameOutcome};
use crate::turn::{LockReason, ScheduledStep, StepKind, TurnController, TurnPhase};

/// Builder for creating a `MatchGame`.
///
/// ```
/// use memory_match::{GameBuilder, GameConfig};
///
/// let game = GameBuilder::new(GameConfig::default().with_seed(7)).build().unwrap();
/// assert_eq!(game.board().len(), 52);
/// assert_eq!(game.seed(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    layout: Option<Vec<Card>>,
    memory: ComputerMemory,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            layout: None,
            memory: ComputerMemory::new(),
        }
    }

    /// Deal exactly these cards, in this order, instead of shuffling the
    /// configured deck.
    pub fn layout(mut self, cards: Vec<Card>) -> Self {
        self.layout = Some(cards);
        self
    }

    /// Start the computer with something already remembered.
    pub fn computer_memory(mut self, memory: ComputerMemory) -> Self {
        self.memory = memory;
        self
    }

    /// Build the game, dealing the board.
    pub fn build(self) -> Result<MatchGame> {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let layout = match self.layout {
            Some(layout) => {
                self.config.validate_players()?;
                validate_layout(&layout)?;
                layout
            }
            None => {
                self.config.validate()?;
                let deck = build_deck(&self.config.ranks, &self.config.suits);
                shuffle(&deck, &mut rng.for_context("deal"))
            }
        };

        let players = PlayerMap::from_vec(self.config.players.iter().map(PlayerConfig::to_player).collect());

        let mut game = MatchGame {
            seed: rng.seed(),
            seats: self.config.players.clone(),
            timing: self.config.timing,
            board: Board::deal(&layout),
            turn: TurnController::new(players.player_count(), self.config.timing),
            players,
            memory: self.memory,
            agent: ComputerAgent::new(rng.for_context("agent")),
            history: Vec::new(),
            events: Vec::new(),
            outcome: None,
        };

        info!(seed = game.seed, cards = game.board.len(), "dealt a new game");
        game.open_turn();
        Ok(game)
    }
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct MatchGame {
    seed: u64,
    seats: Vec<PlayerConfig>,
    timing: TimingConfig,
    board: Board,
    players: PlayerMap<Player>,
    turn: TurnController,
    memory: ComputerMemory,
    agent: ComputerAgent,
    history: Vec<MoveRecord>,
    events: Vec<GameEvent>,
    outcome: Option<GameOutcome>,
}

impl MatchGame {
    /// The seed behind the deal and the computer's picks.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn timing(&self) -> TimingConfig {
        self.timing
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    #[must_use]
    pub fn current_player_name(&self) -> &str {
        &self.players[self.turn.current_player()].name
    }

    #[must_use]
    pub fn turn(&self) -> &TurnController {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    #[must_use]
    pub fn memory(&self) -> &ComputerMemory {
        &self.memory
    }

    /// Every evaluated pair so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.is_game_over()
    }

    /// The step the host owes, if the board is locked.
    #[must_use]
    pub fn pending_step(&self) -> Option<ScheduledStep> {
        self.turn.pending_step()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Name of the winner, or `None` for a tie or an unfinished game.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.outcome
            .and_then(|o| o.winner())
            .map(|id| self.players[id].name.as_str())
    }

    /// Turn over a card for the human seat.
    pub fn activate_card(&mut self, position: Position) -> Result<Option<ScheduledStep>> {
        if self.turn.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.turn.is_locked() && self.players[self.turn.current_player()].is_computer() {
            return Err(InvalidSelection::NotHumanTurn.into());
        }
        self.reveal(position)
    }

    /// Run the outstanding scheduled step.
    ///
    /// Returns `Ok(None)` without changing anything if no step is pending.
    pub fn advance(&mut self) -> Result<Option<ScheduledStep>> {
        match self.turn.phase() {
            TurnPhase::GameOver => Err(GameError::GameOver),
            TurnPhase::Locked(LockReason::ResolveMatch { first, second }) => {
                self.events.push(GameEvent::CardsRemoved { first, second });
                if self.board.is_complete() {
                    self.finish();
                    Ok(None)
                } else {
                    Ok(self.open_turn())
                }
            }
            TurnPhase::Locked(LockReason::ResolveMismatch { first, second }) => {
                self.board.unreveal([first, second]);
                self.events.push(GameEvent::CardsHidden { first, second });
                Ok(self.open_turn())
            }
            TurnPhase::Locked(LockReason::ComputerTurn) => self.computer_turn().map(Some),
            phase => {
                debug!(?phase, "advance with nothing scheduled");
                Ok(None)
            }
        }
    }

    /// Export the game so far.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            seed: self.seed,
            layout: self.board.cards().collect(),
            players: self.seats.clone(),
            moves: self.history.clone(),
            outcome: self.outcome,
        }
    }

    /// Rebuild a game from its record and check the computer makes the
    /// same moves.
    ///
    /// Stops once the recorded moves are exhausted, so unfinished games
    /// replay to the point they were left. Moves recorded after the game
    /// ended are a divergence.
    pub fn replay(record: &GameRecord) -> Result<MatchGame> {
        let config = GameConfig::default()
            .with_players(record.players.clone())
            .with_seed(record.seed)
            .with_timing(TimingConfig::instant());
        let mut game = GameBuilder::new(config).layout(record.layout.clone()).build()?;

        while !game.is_over() && game.history.len() < record.moves.len() {
            if game.pending_step().is_some() {
                game.advance()?;
            } else {
                let index = game.history.len();
                let mv = record.moves[index];
                if mv.player != game.current_player() {
                    return Err(GameError::ReplayDiverged { index });
                }
                for position in [mv.first, mv.second] {
                    game.activate_card(position)
                        .map_err(|_| GameError::ReplayDiverged { index })?;
                }
            }

            if let Some(index) = game.history.iter().zip(&record.moves).position(|(a, b)| a != b) {
                return Err(GameError::ReplayDiverged { index });
            }
        }

        // Settle the last recorded pair; a following computer turn was never recorded.
        if game.pending_step().is_some_and(|step| step.kind != StepKind::ComputerTurn) {
            game.advance()?;
        }

        if game.history.len() != record.moves.len() {
            return Err(GameError::ReplayDiverged {
                index: game.history.len(),
            });
        }
        if record.outcome.is_some() && game.outcome != record.outcome {
            return Err(GameError::ReplayDiverged {
                index: record.moves.len(),
            });
        }
        Ok(game)
    }

    fn reveal(&mut self, position: Position) -> Result<Option<ScheduledStep>> {
        let card = self.board.reveal(position, self.turn.gate())?;
        let player = self.turn.current_player();
        debug!(%player, %position, %card, "card revealed");
        self.events.push(GameEvent::CardRevealed { player, position, card });

        match self.turn.record_pick(position) {
            Some(pair) => self.evaluate_pair(pair).map(Some),
            None => Ok(None),
        }
    }

    fn evaluate_pair(&mut self, pair: [Position; 2]) -> Result<ScheduledStep> {
        debug_assert_eq!(self.board.count(CardStatus::Revealed), 2);

        let [first, second] = pair;
        let (Some(a), Some(b)) = (self.board.card(first), self.board.card(second)) else {
            return Err(InvalidSelection::OutOfBounds {
                position: second,
                len: self.board.len(),
            }
            .into());
        };

        let actor = self.turn.current_player();
        let result = rules::evaluate(&a, &b);
        self.history.push(MoveRecord::new(
            actor,
            first,
            second,
            result.is_match,
            self.turn.turn_number(),
        ));

        if result.is_match {
            rules::apply_match(actor, pair, a.rank, &mut self.board, &mut self.players, &mut self.memory);
            debug!(player = %actor, rank = %a.rank, score = self.players[actor].score, "pair matched");
            self.events.push(GameEvent::PairMatched {
                player: actor,
                first,
                second,
                rank: a.rank,
            });
            Ok(self.turn.lock(LockReason::ResolveMatch { first, second }))
        } else {
            self.events.push(GameEvent::PairMismatched {
                player: actor,
                first,
                second,
            });
            let next = self.turn.rotate();
            debug!(from = %actor, to = %next, "turn passes");
            self.events.push(GameEvent::TurnPassed { from: actor, to: next });
            Ok(self.turn.lock(LockReason::ResolveMismatch { first, second }))
        }
    }

    /// Reopen the board for the current player, handing over to the agent
    /// if that player is the computer.
    fn open_turn(&mut self) -> Option<ScheduledStep> {
        self.turn.unlock();
        let player = self.turn.current_player();
        if self.players[player].is_computer() {
            self.events.push(GameEvent::ComputerThinking { player });
            Some(self.turn.lock(LockReason::ComputerTurn))
        } else {
            None
        }
    }

    fn computer_turn(&mut self) -> Result<ScheduledStep> {
        self.turn.unlock();
        let choice = self.agent.choose_two_cards(&self.board, &mut self.memory)?;
        let [first, second] = choice.positions;

        self.reveal(first)?;
        self.reveal(second)?.ok_or_else(|| GameError::EmptyAgentSelection {
            eligible: self.board.count(CardStatus::Hidden),
        })
    }

    fn finish(&mut self) {
        let outcome = GameOutcome::from_scores(&self.players);
        self.turn.finish();
        self.outcome = Some(outcome);
        info!(
            ?outcome,
            scores = ?self.players.as_slice().iter().map(|p| p.score).collect::<Vec<_>>(),
            "game over"
        );
        self.events.push(GameEvent::GameOver { outcome });
    }
}
