use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{full_deck, Card, Rank, DECK_SIZE};
use crate::deck::Deck;
use crate::encoder::{encode, Observation};
use crate::errors::{GameError, IllegalAction};
use crate::game::{RoundPhase, RoundState};
use crate::player::{Player, PlayerAction};
use crate::rules::{self, is_lie, LegalActions};

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Something that happened while applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Played {
        seat: usize,
        count: usize,
        claim: Rank,
    },
    Passed {
        seat: usize,
    },
    /// Everyone else passed; the last player opens the next round and the pile carries over.
    RoundClosed {
        starter: usize,
        pile_size: usize,
    },
    ChallengeResolved {
        challenger: usize,
        challenged: usize,
        caught: bool,
        receiver: usize,
        cards: usize,
    },
    /// A hand-emptying play was a lie; the player took the pile back.
    WinningPlayVoided {
        seat: usize,
        cards: usize,
    },
    Won {
        seat: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub acting_seat: usize,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Encoded state for the seat now on turn
    pub observation: Observation,
    /// 0.0, or ±1.0 on the step that ends the game
    pub reward: f32,
    pub terminated: bool,
    pub info: StepInfo,
}

/// The Cheat game engine: owns the deck, the seats and the round state
/// for exactly one game at a time.
///
/// # Examples
///
/// ```
/// use cheat_engine::engine::CheatEnv;
/// use cheat_engine::player::ActionType;
///
/// let mut env = CheatEnv::new(Some(7));
/// let obs = env.reset(&["agent", "bot"]).expect("two players");
/// assert_eq!(obs.len(), 31);
/// assert_eq!(env.players()[0].hand_size(), 27);
/// assert_eq!(env.legal_actions().types, vec![ActionType::Play]);
/// ```
#[derive(Debug)]
pub struct CheatEnv {
    deck: Deck,
    players: Vec<Player>,
    round: RoundState,
    current: usize,
    agent_seat: usize,
    shuffle: bool,
    seed: u64,
}

impl CheatEnv {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            deck: Deck::new_with_seed(seed),
            players: Vec::new(),
            round: RoundState::new(0),
            current: 0,
            agent_seat: 0,
            shuffle: true,
            seed,
        }
    }

    /// Seat whose wins are rewarded with +1.0.
    pub fn with_agent_seat(mut self, seat: usize) -> Self {
        self.agent_seat = seat;
        self
    }

    /// With `false`, every reset deals the canonical unshuffled order.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Starts a new game: fresh deck, shuffled unless disabled, dealt
    /// round-robin from seat 0. Seat 0 opens the first round.
    pub fn reset<S: AsRef<str>>(&mut self, player_names: &[S]) -> Result<Observation, GameError> {
        let mut players = self.seat_players(player_names)?;
        if self.shuffle {
            self.deck.shuffle();
        } else {
            self.deck.reset();
        }
        deal_round_robin(&mut self.deck, &mut players);
        self.begin(players);
        Ok(self.observe())
    }

    /// Starts a new game from explicit hands. Cards not placed in a hand stay
    /// in the deck, so the 54-card partition still holds.
    pub fn reset_with_hands<S: AsRef<str>>(
        &mut self,
        player_names: &[S],
        hands: Vec<Vec<Card>>,
    ) -> Result<Observation, GameError> {
        let mut players = self.seat_players(player_names)?;
        if hands.len() != players.len() {
            return Err(GameError::Configuration(format!(
                "{} hands given for {} players",
                hands.len(),
                players.len()
            )));
        }
        if hands.iter().any(|h| h.is_empty()) {
            return Err(GameError::Configuration(
                "every player needs at least one card".into(),
            ));
        }

        let mut remainder = full_deck();
        for card in hands.iter().flatten() {
            match remainder.iter().position(|c| c == card) {
                Some(i) => {
                    remainder.remove(i);
                }
                None => {
                    return Err(GameError::Configuration(format!(
                        "{} appears more often than the deck holds it",
                        card
                    )))
                }
            }
        }

        for (player, hand) in players.iter_mut().zip(hands) {
            player.receive_cards(hand);
        }
        self.deck.set_cards(remainder);
        self.begin(players);
        Ok(self.observe())
    }

    fn seat_players<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Player>, GameError> {
        if names.len() < 2 {
            return Err(GameError::Configuration(format!(
                "the game needs at least 2 players, got {}",
                names.len()
            )));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].iter().any(|n| n.as_ref() == name.as_ref()) {
                return Err(GameError::Configuration(format!(
                    "duplicate player name: {}",
                    name.as_ref()
                )));
            }
        }
        if self.agent_seat >= names.len() {
            return Err(GameError::Configuration(format!(
                "agent seat {} out of range for {} players",
                self.agent_seat,
                names.len()
            )));
        }
        Ok(names.iter().map(|n| Player::new(n.as_ref())).collect())
    }

    fn begin(&mut self, players: Vec<Player>) {
        self.players = players;
        self.round = RoundState::new(0);
        self.current = 0;
        debug!(
            players = self.players.len(),
            seed = self.seed,
            deck_remaining = self.deck.remaining(),
            "game started"
        );
    }

    /// Legality descriptor for the seat on turn.
    pub fn legal_actions(&self) -> LegalActions {
        let hand_size = self.players.get(self.current).map_or(0, Player::hand_size);
        rules::legal_actions(self.round.phase(), hand_size)
    }

    /// Applies one action for the seat on turn. A rejected action leaves the
    /// game exactly as it was.
    pub fn step(&mut self, action: PlayerAction) -> Result<StepResult, GameError> {
        if self.players.is_empty() {
            return Err(GameError::Configuration(
                "reset must be called before step".into(),
            ));
        }
        let seat = self.current;
        rules::validate_action(&self.legal_actions(), &action)?;
        if let PlayerAction::Play { cards, .. } = &action {
            if !self.players[seat].holds_all(cards) {
                return Err(IllegalAction::CardsNotOwned { seat }.into());
            }
        }

        let mut events = Vec::new();
        match action {
            PlayerAction::Challenge => self.resolve_challenge(seat, &mut events),
            PlayerAction::Pass => self.handle_pass(seat, &mut events),
            PlayerAction::Play { cards, claim } => {
                self.play_cards(seat, &cards, claim, &mut events)?
            }
        }

        let terminated = self.is_over();
        let reward = match terminated {
            false => 0.0,
            true if seat == self.agent_seat => 1.0,
            true => -1.0,
        };
        Ok(StepResult {
            observation: self.observe(),
            reward,
            terminated,
            info: StepInfo {
                acting_seat: seat,
                events,
            },
        })
    }

    fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.players.len()
    }

    fn open_round(&mut self, starter: usize) {
        self.round.open(starter);
        self.current = starter;
    }

    fn handle_pass(&mut self, seat: usize, events: &mut Vec<GameEvent>) {
        debug!(seat, player = self.players[seat].name(), "pass");
        events.push(GameEvent::Passed { seat });

        let passes = self.round.record_pass();
        if passes >= self.players.len() - 1 {
            if let RoundPhase::AwaitingResponse { last_seat, .. } = self.round.phase() {
                let pile_size = self.round.pile().len();
                info!(starter = last_seat, pile_size, "round closed, everyone passed");
                events.push(GameEvent::RoundClosed {
                    starter: last_seat,
                    pile_size,
                });
                self.open_round(last_seat);
                return;
            }
        }
        self.current = self.next_seat(seat);
    }

    fn play_cards(
        &mut self,
        seat: usize,
        cards: &[Card],
        claim: Rank,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        self.players[seat].take_cards(seat, cards)?;
        self.round.record_play(seat, cards, claim);
        debug!(
            seat,
            player = self.players[seat].name(),
            count = cards.len(),
            claim = %claim,
            "play"
        );
        events.push(GameEvent::Played {
            seat,
            count: cards.len(),
            claim,
        });

        if self.players[seat].has_empty_hand() {
            self.judge_winning_play(seat, cards, claim, events);
        } else {
            self.current = self.next_seat(seat);
        }
        Ok(())
    }

    fn judge_winning_play(
        &mut self,
        seat: usize,
        cards: &[Card],
        claim: Rank,
        events: &mut Vec<GameEvent>,
    ) {
        if is_lie(cards, claim) {
            let pile = self.round.take_pile();
            info!(
                seat,
                player = self.players[seat].name(),
                cards = pile.len(),
                "caught lying on the winning play"
            );
            events.push(GameEvent::WinningPlayVoided {
                seat,
                cards: pile.len(),
            });
            self.players[seat].receive_cards(pile);
            let starter = self.next_seat(seat);
            self.open_round(starter);
        } else {
            info!(seat, player = self.players[seat].name(), "game won");
            events.push(GameEvent::Won { seat });
            self.round.finish(seat);
        }
    }

    fn resolve_challenge(&mut self, challenger: usize, events: &mut Vec<GameEvent>) {
        let RoundPhase::AwaitingResponse {
            claim, last_seat, ..
        } = self.round.phase()
        else {
            return;
        };
        let caught = self.round.last_play().is_some_and(|tail| is_lie(tail, claim));
        let (receiver, starter) = if caught {
            (last_seat, challenger)
        } else {
            (challenger, last_seat)
        };

        let pile = self.round.take_pile();
        info!(
            challenger = self.players[challenger].name(),
            challenged = self.players[last_seat].name(),
            caught,
            receiver = self.players[receiver].name(),
            cards = pile.len(),
            "challenge resolved"
        );
        events.push(GameEvent::ChallengeResolved {
            challenger,
            challenged: last_seat,
            caught,
            receiver,
            cards: pile.len(),
        });
        self.players[receiver].receive_cards(pile);
        self.open_round(starter);
    }

    /// Encoded state from the perspective of the seat on turn.
    pub fn observe(&self) -> Observation {
        encode(&self.players, self.current, &self.round)
    }

    /// Encoded state from an arbitrary seat's perspective.
    pub fn observe_for(&self, seat: usize) -> Observation {
        encode(&self.players, seat, &self.round)
    }

    pub fn is_over(&self) -> bool {
        self.round.winner().is_some()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.round.winner().and_then(|i| self.players.get(i))
    }

    pub fn winner_seat(&self) -> Option<usize> {
        self.round.winner()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_seat(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn pile(&self) -> &[Card] {
        self.round.pile()
    }

    /// The announced rank, `None` while the round is open.
    pub fn announced_rank(&self) -> Option<Rank> {
        self.round.announced()
    }

    pub fn agent_seat(&self) -> usize {
        self.agent_seat
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Every card in the game: deck, then hands in seat order, then the pile.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(self.deck.cards());
        for p in &self.players {
            cards.extend_from_slice(p.hand());
        }
        cards.extend_from_slice(self.round.pile());
        cards
    }
}

/// Clears every hand, then deals one card per seat in turn from seat 0 until
/// the deck runs out. Returns the number of cards dealt.
pub fn deal_round_robin(deck: &mut Deck, players: &mut [Player]) -> usize {
    for p in players.iter_mut() {
        p.clear_cards();
    }
    if players.is_empty() {
        return 0;
    }
    let mut dealt = 0;
    while let Ok(card) = deck.try_draw() {
        players[dealt % players.len()].receive_card(card);
        dealt += 1;
    }
    dealt
}
