//! # cheat-engine: Cheat Card Game Engine Core
//!
//! A deterministic engine for the bluffing card game "Cheat" (also known as
//! "Doubt"): players take turns claiming to play cards of an announced rank,
//! opponents may challenge a claim, and the loser of a challenge takes the
//! discard pile. The first player to empty their hand truthfully wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 54-card set
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - `CheatEnv`: dealing, turn order, challenges, win detection
//! - [`game`] - Round phase and discard pile
//! - [`player`] - Seats, hands and player actions
//! - [`rules`] - Legality descriptor and action validation
//! - [`encoder`] - Fixed-length numeric state encoding
//! - [`logger`] - Game records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cheat_engine::cards::Rank;
//! use cheat_engine::engine::CheatEnv;
//! use cheat_engine::player::PlayerAction;
//!
//! let mut env = CheatEnv::new(Some(42));
//! env.reset(&["P0", "P1", "P2"]).expect("valid table");
//!
//! // Seat 0 opens the round: play one card, claiming it is an Ace
//! let card = env.players()[0].hand()[0];
//! let result = env.step(PlayerAction::play(vec![card], Rank::Ace)).unwrap();
//! assert!(!result.terminated);
//! assert_eq!(env.current_seat(), 1);
//! assert_eq!(env.pile().len(), 1);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use cheat_engine::engine::CheatEnv;
//!
//! let mut a = CheatEnv::new(Some(9));
//! let mut b = CheatEnv::new(Some(9));
//! assert_eq!(a.reset(&["x", "y"]).unwrap(), b.reset(&["x", "y"]).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod encoder;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
