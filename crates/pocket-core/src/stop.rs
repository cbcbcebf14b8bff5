use std::cell::Cell;
use std::rc::Rc;

/// Shared flag asking the run loop to finish after the current iteration.
///
/// Cheap to clone; press callbacks capture a copy and call
/// [`request`](Self::request) from inside the loop.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    requested: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        if !self.requested.replace(true) {
            log::debug!("stop requested");
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}
