use flipview_ui_graphics::Point;
use smallvec::{smallvec, SmallVec};

pub type PointerId = u64;

/// Pointer lifecycle actions, mirroring the platform's masked action codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// First pointer went down.
    Down,
    /// Last pointer went up.
    Up,
    Move,
    Cancel,
    /// An additional pointer went down; `action_index` names it.
    PointerDown,
    /// A non-last pointer went up; `action_index` names it.
    PointerUp,
}

impl TouchAction {
    /// Maps a masked platform action code. Unknown codes (including the
    /// "outside" action) yield `None` and are dropped by the widget.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Down),
            1 => Some(Self::Up),
            2 => Some(Self::Move),
            3 => Some(Self::Cancel),
            5 => Some(Self::PointerDown),
            6 => Some(Self::PointerUp),
            _ => None,
        }
    }
}

/// One pointer's position in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// A touch event carrying every pointer currently on the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    /// Index into `pointers` of the pointer the action is about.
    pub action_index: usize,
    pub pointers: SmallVec<[PointerSample; 2]>,
    pub time_ms: i64,
    /// Offset from view-local to screen coordinates.
    pub raw_offset: Point,
}

impl TouchEvent {
    pub fn new(action: TouchAction, time_ms: i64, pointers: &[PointerSample]) -> Self {
        Self {
            action,
            action_index: 0,
            pointers: SmallVec::from_slice(pointers),
            time_ms,
            raw_offset: Point::ZERO,
        }
    }

    /// Single-pointer event.
    pub fn single(action: TouchAction, id: PointerId, x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            action,
            action_index: 0,
            pointers: smallvec![PointerSample::new(id, x, y)],
            time_ms,
            raw_offset: Point::ZERO,
        }
    }

    pub fn with_action_index(mut self, action_index: usize) -> Self {
        self.action_index = action_index;
        self
    }

    pub fn with_raw_offset(mut self, raw_offset: Point) -> Self {
        self.raw_offset = raw_offset;
        self
    }

    pub fn find_pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|pointer| pointer.id == id)
    }

    pub fn pointer(&self, index: usize) -> Option<&PointerSample> {
        self.pointers.get(index)
    }

    /// The pointer named by `action_index`.
    pub fn action_pointer(&self) -> Option<&PointerSample> {
        self.pointers.get(self.action_index)
    }

    /// Screen position of the pointer at `index`.
    pub fn raw_position(&self, index: usize) -> Option<Point> {
        self.pointers.get(index).map(|pointer| {
            Point::new(
                pointer.position.x + self.raw_offset.x,
                pointer.position.y + self.raw_offset.y,
            )
        })
    }
}
