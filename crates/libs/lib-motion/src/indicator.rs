//! Navigation bar hover indicator.
//!
//! A single highlight element follows whichever navigation item is hovered.
//! Its offset is measured from the container's leading edge under LTR and
//! from the trailing edge under RTL:
//!
//! ```text
//! ltr: offset = item.left - container.left                                (anchored left)
//! rtl: offset = container.width - (item.right - container.left) - item.width
//!      inset  = offset + item.width                                       (anchored right)
//! ```
//!
//! Leaving without a new target hides the indicator and forgets the position.

use lib_i18n::{Direction, PhysicalOffset, PhysicalSide};

/// Viewport-relative box of a DOM element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Where the indicator sits for the hovered item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorPlacement {
    pub item: usize,
    /// Offset from the leading (LTR) or trailing (RTL) edge of the container.
    pub offset: f64,
    pub width: f64,
    pub direction: Direction,
}

impl IndicatorPlacement {
    /// Physical inset to write as `left` / `right`.
    pub fn inset(&self) -> PhysicalOffset {
        match self.direction {
            Direction::Ltr => PhysicalOffset {
                side: PhysicalSide::Left,
                amount: self.offset,
            },
            Direction::Rtl => PhysicalOffset {
                side: PhysicalSide::Right,
                amount: self.offset + self.width,
            },
        }
    }

    /// Inline style for the indicator element.
    pub fn to_style(&self, fade_ms: f64) -> String {
        format!(
            "{}; width: {}px; opacity: 1; transition: opacity {}ms ease",
            self.inset().to_css(),
            self.width,
            fade_ms
        )
    }
}

/// Offset of `item` inside `container` for `direction`.
pub fn indicator_offset(direction: Direction, container: Rect, item: Rect) -> f64 {
    match direction {
        Direction::Ltr => item.left - container.left,
        Direction::Rtl => container.width - (item.right() - container.left) - item.width,
    }
}

#[derive(Clone, Debug, Default)]
pub struct NavIndicator {
    placement: Option<IndicatorPlacement>,
}

impl NavIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover_enter(
        &mut self,
        item: usize,
        direction: Direction,
        container: Rect,
        item_rect: Rect,
    ) -> IndicatorPlacement {
        let placement = IndicatorPlacement {
            item,
            offset: indicator_offset(direction, container, item_rect),
            width: item_rect.width,
            direction,
        };
        self.placement = Some(placement);
        placement
    }

    /// Pointer left the item without entering another.
    pub fn hover_leave(&mut self) {
        self.placement = None;
    }

    pub fn placement(&self) -> Option<IndicatorPlacement> {
        self.placement
    }

    pub fn opacity(&self) -> f64 {
        if self.placement.is_some() {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(100.0, 0.0, 600.0, 40.0)
    }

    fn items() -> [Rect; 2] {
        [Rect::new(120.0, 0.0, 80.0, 40.0), Rect::new(220.0, 0.0, 120.0, 40.0)]
    }

    #[test]
    fn test_ltr_offset_from_leading_edge() {
        let mut indicator = NavIndicator::new();
        let placement = indicator.hover_enter(1, Direction::Ltr, container(), items()[1]);
        assert_eq!(placement.offset, 120.0);
        assert_eq!(placement.inset().to_css(), "left: 120px");
    }

    #[test]
    fn test_rtl_hover_sequence() {
        // Arrange
        let mut indicator = NavIndicator::new();
        let [item0, item1] = items();
        let mut offsets = Vec::new();

        // Act: item0, item1, item0, none
        for (index, rect) in [(0, item0), (1, item1), (0, item0)] {
            let placement = indicator.hover_enter(index, Direction::Rtl, container(), rect);
            offsets.push((index, placement));
        }
        let opacity_while_hovered = indicator.opacity();
        indicator.hover_leave();

        // Assert
        let (_, item1_placement) = offsets[1];
        let expected = container().width - (item1.right() - container().left) - item1.width;
        assert_eq!(item1_placement.offset, expected);
        assert_eq!(item1_placement.offset, 240.0);
        // Anchored at the item's distance from the trailing edge
        assert_eq!(item1_placement.inset().to_css(), "right: 360px");
        assert_eq!(opacity_while_hovered, 1.0);
        assert_eq!(indicator.opacity(), 0.0);
        assert!(indicator.placement().is_none());
    }

    #[test]
    fn test_placement_follows_latest_item() {
        let mut indicator = NavIndicator::new();
        let [item0, item1] = items();
        indicator.hover_enter(1, Direction::Ltr, container(), item1);
        indicator.hover_enter(0, Direction::Ltr, container(), item0);
        assert_eq!(indicator.placement().unwrap().item, 0);
        assert_eq!(indicator.placement().unwrap().offset, 20.0);
    }

    #[test]
    fn test_style_includes_width_and_fade() {
        let mut indicator = NavIndicator::new();
        let placement = indicator.hover_enter(0, Direction::Ltr, container(), items()[0]);
        assert_eq!(
            placement.to_style(300.0),
            "left: 20px; width: 80px; opacity: 1; transition: opacity 300ms ease"
        );
    }
}
