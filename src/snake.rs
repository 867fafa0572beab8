use std::collections::VecDeque;

use crate::config::{
    INITIAL_BODY_PARTS, MAX_SEGMENTS, PANEL_HEIGHT, PANEL_WIDTH, START_HEAD_X, START_HEAD_Y,
    UNIT_SIZE,
};
use crate::input::{Direction, direction_change_is_valid};

/// Cell-aligned position in drawing units (multiples of [`UNIT_SIZE`]).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies on the canvas.
    #[must_use]
    pub fn is_on_board(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < PANEL_WIDTH && self.y < PANEL_HEIGHT
    }

    /// Returns the neighbouring cell one unit away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - UNIT_SIZE),
            Direction::Down => Self::new(self.x, self.y + UNIT_SIZE),
            Direction::Left => Self::new(self.x - UNIT_SIZE, self.y),
            Direction::Right => Self::new(self.x + UNIT_SIZE, self.y),
        }
    }
}

/// Snake body (front is head) and current heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    // Cell vacated by the tail on the last advance; becomes the new tail on growth.
    trail: Option<Position>,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the starting snake: head at the start cell, body trailing to the left.
    #[must_use]
    pub fn new() -> Self {
        let head = Position::new(START_HEAD_X, START_HEAD_Y);
        let mut body = VecDeque::with_capacity(MAX_SEGMENTS);
        body.extend((0..INITIAL_BODY_PARTS).scan(head, |segment, _| {
            let current = *segment;
            *segment = current.stepped(Direction::Left);
            Some(current)
        }));

        Self {
            body,
            heading: Direction::Right,
            trail: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        let mut body = VecDeque::with_capacity(MAX_SEGMENTS.max(segments.len()));
        body.extend(segments);

        Self {
            body,
            heading,
            trail: None,
        }
    }

    /// Shifts every segment onto its predecessor and moves the head one cell.
    pub fn advance(&mut self) {
        let next_head = self.head().stepped(self.heading);
        self.body.push_front(next_head);
        self.trail = self.body.pop_back();
    }

    /// Appends one segment at the cell the tail vacated on the last advance.
    pub fn grow(&mut self) {
        let tail = self.trail.take().unwrap_or_else(|| self.tail());
        self.body.push_back(tail);
    }

    /// Requests a new heading. Returns false when it would reverse the snake.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.heading, direction) {
            return false;
        }

        self.heading = direction;
        true
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if the head shares a cell with any segment behind it.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
