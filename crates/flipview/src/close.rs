use std::cell::Cell;
use std::rc::Rc;

/// Lets page content ask its flip view to return to the default page.
///
/// The request is recorded here and honoured by the owning view on its next
/// frame, so content never needs a reference to the view itself.
#[derive(Clone, Debug, Default)]
pub struct CloseHandle {
    requested: Rc<Cell<bool>>,
}

impl CloseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&self) {
        self.requested.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }

    /// Clears and returns the pending request.
    pub(crate) fn take_request(&self) -> bool {
        self.requested.replace(false)
    }

    /// True when both handles reach the same view.
    pub fn same_view(&self, other: &CloseHandle) -> bool {
        Rc::ptr_eq(&self.requested, &other.requested)
    }
}
