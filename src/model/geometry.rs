//! Geometry primitives shared by the style, cell and keyboard layers.
//!
//! All values are in host layout units (points on a touch screen, cells in a
//! terminal). Coordinates grow right and down.

/// A location in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
///
/// # Invariants
/// - `size.width >= 0` and `size.height >= 0` for every rectangle produced by
///   this module's operations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// The zero rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from components.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from an origin and a size.
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Left edge.
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    pub fn y(&self) -> f32 {
        self.origin.y
    }

    /// Width.
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height.
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Top edge, alias of [`Rect::y`].
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Same origin, new size.
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    /// Same origin and width, new height.
    pub fn with_height(self, height: f32) -> Self {
        Self {
            size: Size::new(self.size.width, height),
            ..self
        }
    }

    /// Overlapping region of two rectangles.
    ///
    /// Disjoint (or merely touching) rectangles intersect to [`Rect::ZERO`].
    pub fn intersection(&self, other: &Rect) -> Rect {
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return Rect::ZERO;
        }

        Rect::new(left, top, right - left, bottom - top)
    }

    /// Swap the roles of the axes: `(x, y, w, h)` becomes `(y, x, h, w)`.
    ///
    /// Used to correct keyboard frames reported in the wrong orientation.
    pub fn transposed(&self) -> Rect {
        Rect::new(self.y(), self.x(), self.height(), self.width())
    }
}
