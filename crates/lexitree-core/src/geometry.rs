// Integer pixel geometry shared by the layout pass and presentation shells.

/// A node position in pixels. `y` grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A half-open horizontal interval `[x, x + width)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub x: i32,
    pub width: i32,
}

impl Span {
    pub const fn new(x: i32, width: i32) -> Self {
        Self { x, width }
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub const fn end(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Midpoint, rounding towards the left edge.
    pub const fn midpoint(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }

    pub const fn contains(&self, x: i32) -> bool {
        self.x <= x && x < self.end()
    }

    /// Whether the two spans share at least one pixel column.
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.x < other.end() && other.x < self.end()
    }
}
