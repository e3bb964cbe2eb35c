//! Resizable regions and the drag handles between them

/// A pointer position in container coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Orientation of a handle bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// A vertical bar; dragging it resizes along the x axis
    #[default]
    Vertical,
    /// A horizontal bar; dragging it resizes along the y axis
    Horizontal,
}

impl Orientation {
    /// Project a straight-line pointer delta onto the resize axis
    pub fn project(self, from: Point, to: Point) -> f32 {
        match self {
            Orientation::Vertical => to.x - from.x,
            Orientation::Horizontal => to.y - from.y,
        }
    }
}

/// Boundary between region `index` and region `index + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    pub index: usize,
    pub orientation: Orientation,
    /// Dragging towards the preceding region grows it instead of shrinking it
    pub reverse: bool,
}

impl Handle {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            orientation: Orientation::Vertical,
            reverse: false,
        }
    }

    pub const fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub const fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    /// Signed size change of the preceding region for a pointer move
    pub fn delta(&self, from: Point, to: Point) -> f32 {
        let delta = self.orientation.project(from, to);
        if self.reverse {
            -delta
        } else {
            delta
        }
    }
}

/// One layout slot owned by the resizer
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    size: f32,
    min: f32,
    max: f32,
    collapsed: bool,
    /// Live drag state: releasing now would collapse this region
    would_collapse: bool,
    /// Absorbs the opposite of its neighbor's size change
    flexible: bool,
}

impl Region {
    /// A region with the given size and no bounds beyond non-negative
    pub fn new(size: f32) -> Self {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        Self {
            size,
            min: 0.0,
            max: f32::MAX,
            collapsed: false,
            would_collapse: false,
            flexible: false,
        }
    }

    /// Set size bounds. A reversed pair is swapped, negatives become zero.
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
        let max = if max.is_nan() { f32::MAX } else { max.max(0.0) };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.size = self.size.clamp(min, max);
        self
    }

    /// Mark this region as taking up whatever its neighbor gives away
    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn would_collapse(&self) -> bool {
        self.would_collapse
    }

    pub fn is_flexible(&self) -> bool {
        self.flexible
    }

    pub fn clamp(&self, size: f32) -> f32 {
        size.clamp(self.min, self.max)
    }

    /// Set a clamped size without touching the collapsed flag
    pub(crate) fn apply(&mut self, size: f32) -> f32 {
        if !size.is_finite() {
            return self.size;
        }
        self.size = self.clamp(size);
        self.size
    }

    /// Flexible regions are sized by their neighbor, not by their own bounds
    pub(crate) fn absorb(&mut self, size: f32) {
        if size.is_finite() {
            self.size = size.max(0.0);
        }
    }

    pub(crate) fn collapse(&mut self) {
        self.size = 0.0;
        self.collapsed = true;
        self.would_collapse = false;
    }

    pub(crate) fn expand(&mut self) {
        self.collapsed = false;
    }

    pub(crate) fn set_would_collapse(&mut self, would_collapse: bool) {
        self.would_collapse = would_collapse;
    }
}
