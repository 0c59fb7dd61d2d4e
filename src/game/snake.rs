use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::Position;

/// The snake's body, ordered head to tail.
///
/// Backed by a `VecDeque` so the per-tick push at the head and pop at the
/// tail are both O(1). Membership tests scan every segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Position) -> Self {
        Self {
            segments: VecDeque::from([head]),
        }
    }

    /// Create a straight snake of `length` segments whose body trails behind
    /// the head, opposite to `heading`
    pub fn with_length(head: Position, heading: Direction, length: usize) -> Self {
        let back = heading.opposite();
        let mut snake = Self::new(head);
        let mut segment = head;
        for _ in 1..length {
            segment = segment.moved_in_direction(back);
            snake.segments.push_back(segment);
        }
        snake
    }

    /// Insert a new head in front of the current one
    pub fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Remove and return the tail segment
    pub fn pop_tail(&mut self) -> Option<Position> {
        self.segments.pop_back()
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        *self.segments.front().expect("snake has a head")
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.segments.back().expect("snake has a tail")
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Only true transiently; a snake in play always has a head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
