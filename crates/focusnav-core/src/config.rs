//! Navigation options.

use std::num::NonZeroUsize;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::{ConfigError, Result};

/// Navigational shape of a selectable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Topology {
    /// Flat list: all four directions move along one axis.
    #[default]
    List,
    /// Row-major grid with a fixed column count.
    Grid {
        /// Number of columns per row.
        columns: NonZeroUsize,
    },
}

impl Topology {
    /// Create a grid topology.
    pub fn grid(columns: usize) -> Result<Self> {
        NonZeroUsize::new(columns)
            .map(|columns| Self::Grid { columns })
            .ok_or(ConfigError::InvalidColumns { columns })
    }

    /// Number of columns, if this is a grid.
    pub fn columns(&self) -> Option<usize> {
        match self {
            Self::List => None,
            Self::Grid { columns } => Some(columns.get()),
        }
    }

    /// Check if this is a grid topology.
    pub fn is_grid(&self) -> bool {
        matches!(self, Self::Grid { .. })
    }

    /// Column an index falls in (always 0 for lists).
    pub fn column_of(&self, index: usize) -> usize {
        match self {
            Self::List => 0,
            Self::Grid { columns } => index % columns.get(),
        }
    }
}

/// What happens to the selected index when the selectable set shrinks under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShrinkPolicy {
    /// Leave the index untouched; the owner re-selects when it needs to.
    #[default]
    Keep,
    /// Clamp an out-of-range index to the new last element.
    Clamp,
}

/// Plain-data navigation options, fixed for the lifetime of a controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(error = "ConfigError"))]
pub struct NavigationOptions {
    /// List or grid navigation.
    #[builder(default)]
    #[serde(default)]
    pub topology: Topology,

    /// Stay put at a boundary instead of wrapping around.
    #[builder(default = "false")]
    #[serde(default)]
    pub loop_forbidden: bool,

    /// Do not bind `up`/`down`.
    #[builder(default = "false")]
    #[serde(default)]
    pub suppress_vertical: bool,

    /// Do not bind `left`/`right`.
    #[builder(default = "false")]
    #[serde(default)]
    pub suppress_horizontal: bool,

    /// Do not bind `continue`.
    #[builder(default = "false")]
    #[serde(default)]
    pub suppress_confirm: bool,

    /// Index handling when the selectable set shrinks.
    #[builder(default)]
    #[serde(default)]
    pub shrink_policy: ShrinkPolicy,
}

impl NavigationOptions {
    /// Create a new options builder.
    pub fn builder() -> NavigationOptionsBuilder {
        NavigationOptionsBuilder::default()
    }

    /// Looping list navigation with every action bound.
    pub fn list() -> Self {
        Self::default()
    }

    /// Looping grid navigation with every action bound.
    pub fn grid(columns: usize) -> Result<Self> {
        Ok(Self {
            topology: Topology::grid(columns)?,
            ..Self::default()
        })
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check whether an action is bound under the suppression flags.
    pub fn binds(&self, action: Action) -> bool {
        match action {
            Action::Left | Action::Right => !self.suppress_horizontal,
            Action::Up | Action::Down => !self.suppress_vertical,
            Action::Continue => !self.suppress_confirm,
        }
    }

    /// Actions to bind, in installation order.
    pub fn bound_actions(&self) -> Vec<Action> {
        [
            Action::Left,
            Action::Right,
            Action::Up,
            Action::Down,
            Action::Continue,
        ]
        .into_iter()
        .filter(|&action| self.binds(action))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = NavigationOptions::builder()
            .topology(Topology::grid(3).unwrap())
            .loop_forbidden(true)
            .suppress_confirm(true)
            .build()
            .unwrap();

        assert_eq!(options.topology.columns(), Some(3));
        assert!(options.loop_forbidden);
        assert!(options.suppress_confirm);
        assert!(!options.suppress_vertical);
        assert_eq!(options.shrink_policy, ShrinkPolicy::Keep);
    }

    #[test]
    fn test_grid_rejects_zero_columns() {
        assert!(matches!(
            Topology::grid(0),
            Err(ConfigError::InvalidColumns { columns: 0 })
        ));
        assert!(NavigationOptions::grid(0).is_err());
    }

    #[test]
    fn test_column_of() {
        let grid = Topology::grid(3).unwrap();
        assert_eq!(grid.column_of(0), 0);
        assert_eq!(grid.column_of(4), 1);
        assert_eq!(grid.column_of(8), 2);
        assert_eq!(Topology::List.column_of(7), 0);
    }

    #[test]
    fn test_bound_actions_respect_suppression() {
        let mut options = NavigationOptions::list();
        assert_eq!(options.bound_actions().len(), 5);

        options.suppress_horizontal = true;
        assert_eq!(
            options.bound_actions(),
            vec![Action::Up, Action::Down, Action::Continue]
        );

        options.suppress_vertical = true;
        options.suppress_confirm = true;
        assert!(options.bound_actions().is_empty());
    }

    #[test]
    fn test_from_json() {
        let options =
            NavigationOptions::from_json(r#"{"topology":{"mode":"grid","columns":4},"loop_forbidden":true}"#)
                .unwrap();
        assert_eq!(options.topology.columns(), Some(4));
        assert!(options.loop_forbidden);

        let options = NavigationOptions::from_json("{}").unwrap();
        assert_eq!(options, NavigationOptions::list());
    }

    #[test]
    fn test_from_json_rejects_zero_columns() {
        let result = NavigationOptions::from_json(r#"{"topology":{"mode":"grid","columns":0}}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
