use std::fmt;
use std::rc::Rc;

use crate::observable::{Observable, Watchable};

/// An attribute value that is either fixed or read from an [`Observable`].
///
/// Resolved once per build; a bound value also tells the owning widget which
/// cell to watch.
pub enum Binding<T> {
    Literal(T),
    Bound {
        source: Rc<dyn Watchable>,
        read: Rc<dyn Fn() -> T>,
    },
}

impl<T: Clone> Binding<T> {
    pub fn literal(value: T) -> Self {
        Binding::Literal(value)
    }

    /// Binds to `observable`, mapping its value through `map` at build time.
    pub fn bound<U: 'static>(observable: &Observable<U>, map: impl Fn(&U) -> T + 'static) -> Self {
        let reader = observable.clone();
        Binding::Bound {
            source: observable.watchable(),
            read: Rc::new(move || reader.with(|value| map(value))),
        }
    }

    pub fn resolve(&self) -> T {
        match self {
            Binding::Literal(value) => value.clone(),
            Binding::Bound { read, .. } => read(),
        }
    }

    pub fn source(&self) -> Option<Rc<dyn Watchable>> {
        match self {
            Binding::Literal(_) => None,
            Binding::Bound { source, .. } => Some(Rc::clone(source)),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Binding::Bound { .. })
    }
}

impl<T: Clone> Clone for Binding<T> {
    fn clone(&self) -> Self {
        match self {
            Binding::Literal(value) => Binding::Literal(value.clone()),
            Binding::Bound { source, read } => Binding::Bound {
                source: Rc::clone(source),
                read: Rc::clone(read),
            },
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Binding::Bound { read, .. } => f.debug_tuple("Bound").field(&read()).finish(),
        }
    }
}

impl From<&str> for Binding<String> {
    fn from(value: &str) -> Self {
        Binding::Literal(value.to_string())
    }
}

impl From<String> for Binding<String> {
    fn from(value: String) -> Self {
        Binding::Literal(value)
    }
}

impl<U: fmt::Display + 'static> From<&Observable<U>> for Binding<String> {
    fn from(observable: &Observable<U>) -> Self {
        Binding::bound(observable, |value| value.to_string())
    }
}

impl<U: fmt::Display + 'static> From<Observable<U>> for Binding<String> {
    fn from(observable: Observable<U>) -> Self {
        Binding::from(&observable)
    }
}
