// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer layout bounds reported by the platform.

/// Visible bounds of a bound surface, in integer pixels.
///
/// Edges are stored as reported by the platform (`right` and `bottom` are
/// exclusive). No normalization is applied; a rect with `right < left` is
/// forwarded as-is and reports a width of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayoutRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl LayoutRect {
    /// Creates a rect from its four edges.
    #[inline]
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels, zero if the edges are inverted.
    #[must_use]
    pub const fn width(&self) -> u32 {
        if self.right > self.left {
            self.right.abs_diff(self.left)
        } else {
            0
        }
    }

    /// Height in pixels, zero if the edges are inverted.
    #[must_use]
    pub const fn height(&self) -> u32 {
        if self.bottom > self.top {
            self.bottom.abs_diff(self.top)
        } else {
            0
        }
    }

    /// Returns `true` if the rect covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl From<LayoutRect> for kurbo::Rect {
    fn from(r: LayoutRect) -> Self {
        Self::new(
            f64::from(r.left),
            f64::from(r.top),
            f64::from(r.right),
            f64::from(r.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutRect;

    #[test]
    fn size_of_regular_rect() {
        let r = LayoutRect::new(10, 20, 810, 620);
        assert_eq!(r.width(), 800);
        assert_eq!(r.height(), 600);
        assert!(!r.is_empty());
    }

    #[test]
    fn inverted_edges_are_empty() {
        let r = LayoutRect::new(100, 0, 50, 10);
        assert_eq!(r.width(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn converts_to_kurbo() {
        let r: kurbo::Rect = LayoutRect::new(-5, 0, 5, 20).into();
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 20.0);
        assert_eq!(r.x0, -5.0);
    }
}
