//! The continuous flip position.
//!
//! One page transition spans `page_unit` units of distance. The discrete page
//! index is the half-up rounding of `distance / page_unit`; every change of
//! that index yields a new [`PageWindow`] for the content cache to refill.

/// Distance units per page: one half turn of the flipping slab.
pub const DEFAULT_PAGE_UNIT: f32 = 180.0;

/// The pages that should occupy the previous, current and next slots.
///
/// Indices outside `0..page_count` are left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub index: i32,
    pub previous: Option<usize>,
    pub current: Option<usize>,
    pub next: Option<usize>,
}

impl PageWindow {
    pub fn around(index: i32, page_count: usize) -> Self {
        let in_range = |page: i64| -> Option<usize> {
            (page >= 0 && page < page_count as i64).then_some(page as usize)
        };
        let index64 = i64::from(index);
        Self {
            index,
            previous: if index > 0 { in_range(index64 - 1) } else { None },
            current: in_range(index64),
            next: in_range(index64 + 1),
        }
    }

    /// Occupied slot pages in previous, current, next order.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        [self.previous, self.current, self.next].into_iter().flatten()
    }
}

/// Result of moving the flip distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceChange {
    /// Same value as before; nothing to redraw.
    Unchanged,
    /// The distance moved within the current page.
    Moved,
    /// The discrete page index changed; refill the slots from the window.
    PageChanged(PageWindow),
}

impl DistanceChange {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, DistanceChange::Unchanged)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlipPosition {
    page_unit: f32,
    distance: f32,
    page_count: usize,
    current_page: Option<i32>,
    overscrolled: bool,
}

impl FlipPosition {
    pub fn new(page_unit: f32) -> Self {
        Self {
            page_unit,
            distance: -1.0,
            page_count: 0,
            current_page: None,
            overscrolled: false,
        }
    }

    /// Returns to the unbound state ahead of binding `page_count` pages.
    pub fn reset(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.distance = -1.0;
        self.current_page = None;
        self.overscrolled = false;
    }

    pub fn set_distance(&mut self, distance: f32) -> DistanceChange {
        if distance == self.distance {
            return DistanceChange::Unchanged;
        }
        self.distance = distance;

        let index = self.page_index_for(distance);
        if self.current_page == Some(index) {
            return DistanceChange::Moved;
        }
        self.current_page = Some(index);
        log::debug!("flip page index -> {index} (distance {distance})");
        DistanceChange::PageChanged(PageWindow::around(index, self.page_count))
    }

    /// Half-up rounding of `distance / page_unit`. A degenerate page unit
    /// maps everything to page 0.
    pub fn page_index_for(&self, distance: f32) -> i32 {
        if !(self.page_unit.is_finite() && self.page_unit > 0.0) || !distance.is_finite() {
            return 0;
        }
        (distance / self.page_unit + 0.5).floor() as i32
    }

    pub fn max_distance(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32 * self.page_unit
    }

    /// Pins `distance` into `[0, max_distance]`, returning the pinned value
    /// and the signed excess (negative before the first page).
    pub fn clamp_with_excess(&self, distance: f32) -> (f32, f32) {
        let max = self.max_distance();
        if distance < 0.0 {
            (0.0, distance)
        } else if distance > max {
            (max, distance - max)
        } else {
            (distance, 0.0)
        }
    }

    pub fn page_distance(&self, page: usize) -> f32 {
        page as f32 * self.page_unit
    }

    /// Clamps a requested page into range; `None` when there are no pages.
    pub fn clamp_page(&self, page: i64) -> Option<usize> {
        if self.page_count == 0 {
            return None;
        }
        Some(page.clamp(0, self.page_count as i64 - 1) as usize)
    }

    /// The page a released drag settles on. Positive velocity (pointer moving
    /// right) above `min_velocity` goes back, negative goes forward, anything
    /// slower settles on the nearest page.
    pub fn target_for_release(&self, velocity: f32, min_velocity: f32) -> Option<usize> {
        if !(self.page_unit.is_finite() && self.page_unit > 0.0) {
            return self.clamp_page(0);
        }
        let pages = self.distance / self.page_unit;
        let target = if velocity > min_velocity {
            pages.floor()
        } else if velocity < -min_velocity {
            pages.ceil()
        } else {
            (pages + 0.5).floor()
        };
        self.clamp_page(target as i64)
    }

    pub fn set_overscrolled(&mut self, overscrolled: bool) {
        self.overscrolled = overscrolled;
    }

    pub fn page_unit(&self) -> f32 {
        self.page_unit
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> Option<i32> {
        self.current_page
    }

    pub fn is_overscrolled(&self) -> bool {
        self.overscrolled
    }

    pub fn window(&self) -> Option<PageWindow> {
        self.current_page
            .map(|index| PageWindow::around(index, self.page_count))
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
