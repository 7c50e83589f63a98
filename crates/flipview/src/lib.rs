//! Paged flip view.
//!
//! Two half pages joined by a 3D flip about the vertical axis, driven by
//! drags, flings and programmatic navigation. The widget is headless: hosts
//! feed it touch events and frame timestamps, and it draws through a
//! [`FlipCanvas`] they implement.

mod adapter;
mod close;
mod layout;
mod pager;
mod render;
mod settings;
mod tap;

pub use adapter::{FlipListAdapter, MergeProvider, RowPage, RowPageBinder};
pub use close::CloseHandle;
pub use layout::FlipLayout;
pub use pager::{FlipViewPager, OnChangePageListener, TouchResponse};
pub use render::{
    degrees_done, FlipCanvas, FlipScene, HalfPage, Overlay, RotatingHalf, SceneFrame,
};
pub use settings::{FlipSettings, FlipSettingsBuilder, FLIP_BASE_DURATION_MS, FLIP_SHADE_MAX_ALPHA};
pub use tap::{TapPolicy, TapTarget};

pub use flipview_animation::{EdgeGlow, EdgeSide, Easing};
pub use flipview_core::{
    shared_page_states, FlipError, PageStateStore, RowPageStates, SharedPageStates,
};
pub use flipview_foundation::{
    content_provider_fn, ContentProvider, PageSlot, PointerId, PointerSample, SlotKind,
    TouchAction, TouchEvent,
};
pub use flipview_ui_graphics::{Color, Point, Rect, Size};
