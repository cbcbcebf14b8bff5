use pocket_core::{ConfigurationError, StopHandle};

use crate::widget::Widget;

/// A unit of UI that owns its observables and declares a widget tree for
/// their current values.
///
/// `body` is called again every time the root is rebuilt and must return a
/// fresh, unmounted tree each time.
pub trait View: 'static {
    fn body(&self) -> Result<Widget, ConfigurationError>;

    /// Called once when the view is installed in an app.
    fn attached(&mut self, _stop: StopHandle) {}
}

impl<F> View for F
where
    F: Fn() -> Result<Widget, ConfigurationError> + 'static,
{
    fn body(&self) -> Result<Widget, ConfigurationError> {
        self()
    }
}
