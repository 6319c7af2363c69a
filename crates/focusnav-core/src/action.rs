//! Abstract input actions and directions.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ParseActionError;

/// A named slot in an action registry.
///
/// The string form (`up`, `down`, `left`, `right`, `continue`) is the registry
/// key an input backend presses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Confirm the current selection.
    Continue,
}

impl Action {
    /// Parse an action name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, ParseActionError> {
        name.trim()
            .parse()
            .map_err(|_| ParseActionError::new(name.trim()))
    }

    /// The direction this action moves in, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Continue => None,
        }
    }

    /// Whether this is the confirm action.
    pub fn is_confirm(self) -> bool {
        matches!(self, Self::Continue)
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

/// One of the four directional inputs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Check if this direction is on the vertical axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Check if this direction is on the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}
