//! # Connect Four Engine
//!
//! The game-state core of a drop-piece board game for two or more players:
//! a fixed-size grid, gravity drops, turn rotation, and detection of
//! four-in-a-row wins and full-board ties. Rendering and input handling
//! belong to callers; every operation here is a pure function from a
//! caller-held [`game::GameState`] to a new value or a recoverable error.
//!
//! ## Modules
//!
//! - [`game`] — Board, win rules, turn rotation, the state machine
//! - [`config`] — TOML game setup (dimensions, player roster) with validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
