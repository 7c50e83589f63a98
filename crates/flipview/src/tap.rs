//! Tap routing.

use crate::layout::FlipLayout;
use flipview_ui_graphics::Point;

/// Where a tap that did not start a flip should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TapPolicy {
    /// Every tap goes to the content under the pointer.
    #[default]
    ForwardToContent,
    /// Taps on `merge_page` select the item shown in the tapped half.
    MergedHalves { merge_page: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapTarget {
    /// A list item, by its index in the full item list.
    Item(usize),
    /// Let the current page's content handle the tap at `position`.
    Content { position: Point },
}

impl TapPolicy {
    /// Routes a tap at view-local `position`. `row` and `item_count` locate
    /// the two items a merged row shows.
    pub fn route(
        &self,
        position: Point,
        current_page: Option<usize>,
        row: usize,
        item_count: usize,
        layout: &FlipLayout,
    ) -> TapTarget {
        let forward = TapTarget::Content { position };
        let TapPolicy::MergedHalves { merge_page } = *self else {
            return forward;
        };
        if current_page != Some(merge_page) {
            return forward;
        }

        let first = row * 2;
        let second = first + 1;
        if layout.left.contains(position.x, position.y) {
            TapTarget::Item(first)
        } else if layout.right.contains(position.x, position.y) && item_count > second {
            TapTarget::Item(second)
        } else {
            forward
        }
    }
}
