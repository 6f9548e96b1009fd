//! Mastermind
//!
//! A four-slot, six-color code-breaking game with three attempts per round,
//! a persistent player scoreboard, a terminal UI and an automatic solver.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, FixedCodeGenerator};
//! use mastermind::game::{GameSession, GameStatus, PlayerRegistry};
//!
//! let secret: Code = "red blue green yellow".parse().unwrap();
//! let mut registry = PlayerRegistry::new();
//! let mut session = GameSession::new(FixedCodeGenerator::new(secret));
//!
//! session.start(&mut registry, "Ana").unwrap();
//! let feedback = session
//!     .submit_guess(&mut registry, "rgby".parse::<Code>().unwrap())
//!     .unwrap();
//! assert_eq!((feedback.exact_matches(), feedback.color_matches()), (2, 2));
//!
//! session.submit_guess(&mut registry, secret).unwrap();
//! assert_eq!(session.status(), GameStatus::Won);
//! assert_eq!(registry.score_of("Ana"), Some(80));
//! ```

// Core domain types
pub mod core;

// Round state machine and player scores
pub mod game;

// Automatic code breaker
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
