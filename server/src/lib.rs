//! # Snake Game Server Library
//!
//! This library provides the authoritative server side of the two-process
//! terminal snake game. The server owns the only copy of the game state;
//! the client is a thin keyboard, forwarding one command byte per
//! keypress over TCP.
//!
//! ## Core Responsibilities
//!
//! ### Authoritative Simulation
//! All game rules live here: snake movement, wall and self-collision
//! detection, food placement, and scoring. The client never simulates
//! anything and cannot influence the game beyond sending direction
//! commands.
//!
//! ### Turn-Driven Updates
//! The game advances once per tick. A tick is triggered either by a
//! command byte arriving from the client or by a one-second timeout
//! elapsing with no input, in which case the snake keeps moving in its
//! last direction. Players cannot freeze the game by going silent.
//!
//! ### Session Lifecycle
//! Exactly one client is served, and exactly one game runs at a time.
//! When a game ends the final score is announced and the operator is
//! offered a restart; declining tears down the session and the
//! connection.
//!
//! ## Module Organization
//!
//! ### Game Module (`game`)
//! The `Session` state bundle and the per-tick update engine:
//! - Direction legality (reversals degrade to "continue straight")
//! - Bounds and self-collision checks with tail-vacation semantics
//! - Food consumption, growth, scoring, and re-placement
//!
//! ### Render Module (`render`)
//! Builds the bordered character grid with snake, food, and score line,
//! and presents it on the server's terminal once per tick.
//!
//! ### Network Module (`network`)
//! The TCP listener and the turn-controller loop: the bounded wait for
//! the next command byte, timeout auto-advance, disconnect handling, and
//! the game-over/restart state machine.
//!
//! ## Concurrency Model
//!
//! Single-threaded and single-session by design. The only suspension
//! point is the bounded read of the next command byte; all engine work
//! is synchronous. Session state is exclusively owned by the turn
//! controller and never shared, so no locking is needed.

pub mod game;
pub mod network;
pub mod render;
