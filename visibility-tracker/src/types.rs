/// An axis-aligned rectangle in the viewport's coordinate space.
///
/// Negative extents are allowed and are normalized by the edge accessors (`min_x`, `max_y`, ...),
/// so a rectangle shrunk past zero behaves as an empty one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x.min(self.x + self.width)
    }

    pub fn max_x(&self) -> f32 {
        self.x.max(self.x + self.width)
    }

    pub fn min_y(&self) -> f32 {
        self.y.min(self.y + self.height)
    }

    pub fn max_y(&self) -> f32 {
        self.y.max(self.y + self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns the overlapping region of `self` and `other`.
    ///
    /// Disjoint rectangles yield [`Rect::ZERO`]; rectangles that only share an edge yield a
    /// zero-width (or zero-height) rectangle on that edge.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let min_x = self.min_x().max(other.min_x());
        let max_x = self.max_x().min(other.max_x());
        let min_y = self.min_y().max(other.min_y());
        let max_y = self.max_y().min(other.max_y());

        if max_x < min_x || max_y < min_y {
            return Rect::ZERO;
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Instantaneous pan velocity reported by the scroll host.
///
/// Sign convention follows the pan gesture, not the content offset: dragging content upwards
/// (revealing items further down the list) produces a negative `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// The axis and sign along which visibility is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// A tracked candidate.
///
/// `key` is the identity: two items with the same key are the same tracked entity even if their
/// frames differ. The ratio fields are only populated while a debug observer is registered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackingItem<K> {
    pub key: K,
    pub frame: Rect,
    pub is_tracked: bool,
    pub current_visible_ratio: f32,
    pub objective_visible_ratio: f32,
}

impl<K> TrackingItem<K> {
    pub fn new(key: K, frame: Rect) -> Self {
        Self {
            key,
            frame,
            is_tracked: false,
            current_visible_ratio: 0.0,
            objective_visible_ratio: 0.0,
        }
    }
}
