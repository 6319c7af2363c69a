//! Core types and algorithms for focusnav.
//!
//! This crate provides the pieces of directional focus navigation that do not
//! depend on any element type or input backend: navigation topologies, the
//! abstract input actions, navigation options, and the pure movement
//! algorithms that turn a direction into a candidate index.

mod action;
mod config;
mod error;
mod movement;

pub use action::{Action, Direction};
pub use config::{NavigationOptions, NavigationOptionsBuilder, ShrinkPolicy, Topology};
pub use error::{ConfigError, ParseActionError, Result};
pub use movement::Cursor;
