use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pocket_core::{CallbackError, Error, IntoCallbackResult, InvalidStateError};

type PressFn = dyn FnMut() -> Result<(), CallbackError>;

/// Callback attached to a button's `on_press` attribute.
///
/// Cloning shares the same callback; rebuilding a tree hands the same
/// handler to the fresh layout so hit targets stay valid across frames.
#[derive(Clone)]
pub struct PressHandler {
    callback: Rc<RefCell<PressFn>>,
}

impl PressHandler {
    pub fn new<F, R>(mut callback: F) -> Self
    where
        F: FnMut() -> R + 'static,
        R: IntoCallbackResult,
    {
        let callback: Rc<RefCell<PressFn>> =
            Rc::new(RefCell::new(move || callback().into_callback_result()));
        Self { callback }
    }

    /// Runs the callback. A handler that presses itself again while running
    /// fails with [`InvalidStateError::ReentrantPress`].
    pub fn invoke(&self) -> Result<(), Error> {
        let mut callback = self
            .callback
            .try_borrow_mut()
            .map_err(|_| InvalidStateError::ReentrantPress)?;
        (*callback)()?;
        Ok(())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PressHandler(..)")
    }
}

/// Wraps a closure for use as an `on_press` attribute value.
pub fn press<F, R>(callback: F) -> PressHandler
where
    F: FnMut() -> R + 'static,
    R: IntoCallbackResult,
{
    PressHandler::new(callback)
}
