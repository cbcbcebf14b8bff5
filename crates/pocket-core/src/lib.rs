//! Core reactive runtime for Pocket UI.
//!
//! Provides the [`Observable`] value cell, [`Binding`]s that let widget
//! attributes read from observables, the [`RebuildQueue`] that collects roots
//! invalidated during notification, and the shared error taxonomy.

mod binding;
mod error;
mod ids;
mod observable;
mod rebuild;
mod stop;

pub use binding::Binding;
pub use error::{
    BackendError, BackendUnavailable, BoxedError, CallbackError, ConfigurationError, Error,
    IntoCallbackResult, InvalidStateError, Result,
};
pub use ids::{RootId, WidgetId};
pub use observable::{ListenerId, Observable, Subscription, Watchable};
pub use rebuild::RebuildQueue;
pub use stop::StopHandle;

#[cfg(test)]
#[path = "tests/observable_tests.rs"]
mod observable_tests;

#[cfg(test)]
#[path = "tests/binding_tests.rs"]
mod binding_tests;
