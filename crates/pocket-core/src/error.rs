//! Error taxonomy shared by every Pocket UI crate.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::ids::WidgetId;

/// Boxed application error carried by [`CallbackError`].
pub type BoxedError = Box<dyn StdError + 'static>;

/// An invalid or unsupported widget attribute, reported at construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{widget} does not recognise attribute `{attribute}`")]
    UnknownAttribute {
        widget: &'static str,
        attribute: String,
    },
    #[error("attribute `{attribute}` is not supported by {widget}")]
    UnsupportedAttribute {
        widget: &'static str,
        attribute: String,
    },
    #[error("attribute `{attribute}` given twice to {widget}")]
    DuplicateAttribute {
        widget: &'static str,
        attribute: String,
    },
    #[error("attribute `{attribute}` of {widget} expects {expected}")]
    InvalidValue {
        widget: &'static str,
        attribute: String,
        expected: &'static str,
    },
}

/// An illegal lifecycle transition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("a view cannot be installed after the run loop has started")]
    AlreadyRunning,
    #[error("the app has already finished running")]
    AlreadyFinished,
    #[error("no root view installed")]
    NoView,
    #[error("widget {0} is already mounted")]
    AlreadyMounted(WidgetId),
    #[error("widget {0} was unmounted and cannot be mounted again")]
    Detached(WidgetId),
    #[error("press handler invoked while it was already running")]
    ReentrantPress,
}

/// The preferred backend could not initialise. Recovered by falling back.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{backend} backend unavailable: {reason}")]
pub struct BackendUnavailable {
    pub backend: &'static str,
    pub reason: String,
}

impl BackendUnavailable {
    pub fn new(backend: &'static str, reason: impl Into<String>) -> Self {
        Self {
            backend,
            reason: reason.into(),
        }
    }
}

/// A surface failure after the backend was constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{backend} backend failed: {message}")]
pub struct BackendError {
    pub backend: &'static str,
    pub message: String,
}

impl BackendError {
    pub fn new(backend: &'static str, message: impl Into<String>) -> Self {
        Self {
            backend,
            message: message.into(),
        }
    }
}

/// An error raised by application code inside a press callback or an
/// observable listener.
///
/// The source error is kept intact and can be recovered with
/// [`CallbackError::downcast_ref`].
pub struct CallbackError {
    source: BoxedError,
}

impl CallbackError {
    pub fn new(source: impl StdError + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn from_boxed(source: BoxedError) -> Self {
        Self { source }
    }

    pub fn inner(&self) -> &(dyn StdError + 'static) {
        self.source.as_ref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    pub fn into_inner(self) -> BoxedError {
        self.source
    }
}

impl fmt::Debug for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallbackError").field(&self.source).finish()
    }
}

impl fmt::Display for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callback failed: {}", self.source)
    }
}

impl StdError for CallbackError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<BoxedError> for CallbackError {
    fn from(source: BoxedError) -> Self {
        Self::from_boxed(source)
    }
}

impl From<String> for CallbackError {
    fn from(message: String) -> Self {
        Self::from_boxed(message.into())
    }
}

impl From<&str> for CallbackError {
    fn from(message: &str) -> Self {
        Self::from_boxed(message.into())
    }
}

impl From<InvalidStateError> for CallbackError {
    fn from(err: InvalidStateError) -> Self {
        Self::new(err)
    }
}

impl From<ConfigurationError> for CallbackError {
    fn from(err: ConfigurationError) -> Self {
        Self::new(err)
    }
}

/// Any failure surfaced by the toolkit.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error(transparent)]
    BackendUnavailable(#[from] BackendUnavailable),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Callback(#[from] CallbackError),
}

impl Error {
    /// Returns the callback error when this failure came from application code.
    pub fn as_callback(&self) -> Option<&CallbackError> {
        match self {
            Error::Callback(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return values accepted from listeners and press callbacks.
///
/// Callbacks may return `()` or a `Result` whose error converts into
/// [`CallbackError`], so `move || counter.set(counter.get() + 1)` works as a
/// press handler as is.
pub trait IntoCallbackResult {
    fn into_callback_result(self) -> Result<(), CallbackError>;
}

impl IntoCallbackResult for () {
    fn into_callback_result(self) -> Result<(), CallbackError> {
        Ok(())
    }
}

impl<E> IntoCallbackResult for std::result::Result<(), E>
where
    E: Into<CallbackError>,
{
    fn into_callback_result(self) -> Result<(), CallbackError> {
        self.map_err(Into::into)
    }
}
