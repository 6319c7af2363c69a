//! Movement algorithms.
//!
//! Every move is a pure function of the current index, the size of the
//! selectable set and the wraparound policy. A move yields `None` when there
//! is nothing to do (an empty set, or a boundary with wrapping forbidden).
//! Otherwise it yields a candidate, which may equal the current index when a
//! wrap lands back where it started. Callers still validate the candidate
//! before applying it, so a stale index (one that points past a set that has
//! since shrunk) can produce a candidate that is rejected.

use crate::action::Direction;
use crate::config::Topology;

/// A position within a selectable set of `len` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Current index.
    pub index: usize,
    /// Number of selectable elements.
    pub len: usize,
    /// Stay put at a boundary instead of wrapping.
    pub loop_forbidden: bool,
}

impl Cursor {
    /// Create a looping cursor.
    pub fn new(index: usize, len: usize) -> Self {
        Self {
            index,
            len,
            loop_forbidden: false,
        }
    }

    /// Set the wraparound policy.
    pub fn with_loop_forbidden(mut self, loop_forbidden: bool) -> Self {
        self.loop_forbidden = loop_forbidden;
        self
    }

    /// Wrap to `target`, unless wrapping is forbidden.
    fn wrap_to(&self, target: usize) -> Option<usize> {
        (!self.loop_forbidden).then_some(target)
    }

    /// One step back along the linear order.
    pub fn previous(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if self.index == 0 {
            self.wrap_to(self.len - 1)
        } else {
            Some(self.index - 1)
        }
    }

    /// One step forward along the linear order.
    pub fn next(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if self.index == self.len - 1 {
            self.wrap_to(0)
        } else {
            Some(self.index + 1)
        }
    }

    /// One row up in a grid of `columns` columns.
    ///
    /// From the first row this wraps to the last element, not to the same
    /// column of the last row.
    pub fn up(&self, columns: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if self.index < columns {
            self.wrap_to(self.len - 1)
        } else {
            Some(self.index - columns)
        }
    }

    /// One row down in a grid of `columns` columns.
    ///
    /// From the last row this wraps to the first element.
    pub fn down(&self, columns: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if self.index >= self.len.saturating_sub(columns) {
            self.wrap_to(0)
        } else {
            Some(self.index + columns)
        }
    }

    /// Candidate index for a directional input under a topology.
    ///
    /// Lists treat all four directions as one axis. Grids stride by the
    /// column count vertically and move linearly horizontally.
    pub fn step(&self, topology: Topology, direction: Direction) -> Option<usize> {
        match (topology, direction) {
            (Topology::List, Direction::Up) => self.previous(),
            (Topology::List, Direction::Down) => self.next(),
            (Topology::Grid { columns }, Direction::Up) => self.up(columns.get()),
            (Topology::Grid { columns }, Direction::Down) => self.down(columns.get()),
            (_, Direction::Left) => self.previous(),
            (_, Direction::Right) => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_and_next() {
        assert_eq!(Cursor::new(1, 3).previous(), Some(0));
        assert_eq!(Cursor::new(1, 3).next(), Some(2));
        assert_eq!(Cursor::new(0, 3).previous(), Some(2));
        assert_eq!(Cursor::new(2, 3).next(), Some(0));
    }

    #[test]
    fn test_loop_forbidden_stays_at_bounds() {
        let first = Cursor::new(0, 3).with_loop_forbidden(true);
        let last = Cursor::new(2, 3).with_loop_forbidden(true);
        assert_eq!(first.previous(), None);
        assert_eq!(last.next(), None);
        assert_eq!(first.up(3), None);
        assert_eq!(last.down(3), None);
        assert_eq!(first.next(), Some(1));
    }

    #[test]
    fn test_empty_set_is_noop() {
        let cursor = Cursor::new(0, 0);
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.up(3), None);
        assert_eq!(cursor.down(3), None);
    }

    #[test]
    fn test_single_element_wraps_onto_itself() {
        let cursor = Cursor::new(0, 1);
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.previous(), Some(0));
        assert_eq!(cursor.with_loop_forbidden(true).next(), None);
    }

    #[test]
    fn test_grid_up_and_down() {
        // 2 rows of 3
        assert_eq!(Cursor::new(1, 6).down(3), Some(4));
        assert_eq!(Cursor::new(4, 6).down(3), Some(0));
        assert_eq!(Cursor::new(4, 6).up(3), Some(1));
        assert_eq!(Cursor::new(1, 6).up(3), Some(5));
    }

    #[test]
    fn test_grid_narrower_than_columns() {
        // Fewer elements than columns: every index is in both first and last row.
        assert_eq!(Cursor::new(1, 2).down(3), Some(0));
        assert_eq!(Cursor::new(1, 2).up(3), Some(1));
        assert_eq!(Cursor::new(1, 2).with_loop_forbidden(true).down(3), None);
    }

    #[test]
    fn test_step_dispatch() {
        let grid = Topology::grid(3).unwrap();
        let cursor = Cursor::new(1, 6);

        assert_eq!(cursor.step(Topology::List, Direction::Up), Some(0));
        assert_eq!(cursor.step(Topology::List, Direction::Down), Some(2));
        assert_eq!(cursor.step(grid, Direction::Up), Some(5));
        assert_eq!(cursor.step(grid, Direction::Down), Some(4));
        assert_eq!(cursor.step(grid, Direction::Left), Some(0));
        assert_eq!(cursor.step(grid, Direction::Right), Some(2));
    }
}
