//! # Snake Game Client Library
//!
//! The client side of the two-process snake game. It is deliberately
//! thin: capture keypresses, map them to single-byte direction commands,
//! and forward them to the authoritative server over TCP. All game
//! state lives on the server; the client renders nothing and predicts
//! nothing.
//!
//! ## Module Organization
//!
//! ### Input Module (`input`)
//! Raw-mode keyboard capture on a dedicated blocking thread that feeds
//! a channel of command bytes. The polling loop lives entirely on that
//! thread, so the async side never busy-waits for a key.
//!
//! ### Network Module (`network`)
//! Connection management and the forwarding loop: drain the key
//! channel, write one byte per command, quit locally on `q` without
//! sending it over the wire.

pub mod input;
pub mod network;
