use crate::{Rect, ScrollDirection, Velocity};

/// Resolves the scroll direction from the host's pan velocity.
///
/// - `(0, 0)` falls back to `previous`, then to `default`.
/// - Movement along exactly one axis maps to that axis: negative `y` is [`ScrollDirection::Up`],
///   negative `x` is [`ScrollDirection::Right`].
/// - Anything else (diagonal movement, NaN components) is unresolved and returns `None`.
pub fn resolve_scroll_direction(
    velocity: Velocity,
    previous: Option<ScrollDirection>,
    default: ScrollDirection,
) -> Option<ScrollDirection> {
    if velocity.is_zero() {
        return Some(previous.unwrap_or(default));
    }
    let Velocity { x, y } = velocity;
    if x == 0.0 && y < 0.0 {
        Some(ScrollDirection::Up)
    } else if x == 0.0 && y > 0.0 {
        Some(ScrollDirection::Down)
    } else if x < 0.0 && y == 0.0 {
        Some(ScrollDirection::Right)
    } else if x > 0.0 && y == 0.0 {
        Some(ScrollDirection::Left)
    } else {
        None
    }
}

/// Fraction of `frame` that lies inside `tracking_rect`, measured along the direction's axis.
///
/// The result is clamped to `1.0`. A frame with no extent along the active axis yields `0.0`.
pub fn visible_ratio(direction: ScrollDirection, tracking_rect: &Rect, frame: &Rect) -> f32 {
    let visible = tracking_rect.intersection(frame);
    let (visible_extent, extent) = if direction.is_vertical() {
        (visible.height, frame.height.abs())
    } else {
        (visible.width, frame.width.abs())
    };

    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    (visible_extent / extent).min(1.0)
}

/// Shrinks `tracking_rect` by `objective_ratio` of the item's extent, from the edge opposite the
/// scroll direction.
///
/// The result is the region the item's leading edge must lie in for the item to be at least
/// `objective_ratio` visible.
pub fn shrink_tracking_rect(
    direction: ScrollDirection,
    tracking_rect: &Rect,
    frame: &Rect,
    objective_ratio: f32,
) -> Rect {
    let mut rect = *tracking_rect;
    match direction {
        ScrollDirection::Up => {
            rect.height -= frame.height * objective_ratio;
        }
        ScrollDirection::Down => {
            let shrink = frame.height * objective_ratio;
            rect.y += shrink;
            rect.height -= shrink;
        }
        ScrollDirection::Left => {
            rect.width -= frame.width * objective_ratio;
        }
        ScrollDirection::Right => {
            let shrink = frame.width * objective_ratio;
            rect.x += shrink;
            rect.width -= shrink;
        }
    }
    rect
}
