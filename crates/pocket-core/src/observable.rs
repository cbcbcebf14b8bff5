use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::{CallbackError, IntoCallbackResult};

/// Handle returned by [`Observable::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) type Listener = Rc<dyn Fn() -> Result<(), CallbackError>>;

struct ObservableCore<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl<T> ObservableCore<T> {
    fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    fn notify(&self) -> Result<(), CallbackError> {
        // Listeners may subscribe or unsubscribe while running, so iterate a
        // snapshot and never hold a borrow across a call.
        let snapshot: Vec<(ListenerId, Listener)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        for (id, listener) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            listener()?;
        }
        Ok(())
    }
}

/// A single value cell that synchronously notifies its listeners whenever
/// the value is replaced.
///
/// Handles are reference-counted: cloning an `Observable` yields another
/// handle to the same cell, so views can hand copies to widgets and press
/// callbacks. Every write notifies, including writes of an equal value.
pub struct Observable<T> {
    core: Rc<ObservableCore<T>>,
}

impl<T: 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            core: Rc::new(ObservableCore::new(initial)),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.core.value.borrow().clone()
    }

    /// Runs `f` with a shared reference to the current value.
    ///
    /// # Panics
    ///
    /// The value stays borrowed while `f` runs, so calling [`set`](Self::set)
    /// or [`update`](Self::update) on the same cell from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.core.value.borrow();
        f(&value)
    }

    /// Replaces the value, then runs every listener in registration order.
    ///
    /// A failing listener stops the pass and its error is returned; the
    /// stored value stays the new one.
    pub fn set(&self, value: T) -> Result<(), CallbackError> {
        let previous = self.core.value.replace(value);
        drop(previous);
        self.core.notify()
    }

    /// Mutates the value in place, then notifies exactly like [`set`](Self::set).
    ///
    /// # Panics
    ///
    /// The value is mutably borrowed while `f` runs, so reading or writing the
    /// same cell from inside `f` panics. Listeners run after the borrow ends
    /// and may read the new value.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> Result<(), CallbackError> {
        {
            let mut value = self.core.value.borrow_mut();
            f(&mut value);
        }
        self.core.notify()
    }

    pub fn subscribe<F, R>(&self, listener: F) -> ListenerId
    where
        F: Fn() -> R + 'static,
        R: IntoCallbackResult,
    {
        self.core
            .add_listener(Rc::new(move || listener().into_callback_result()))
    }

    /// Removes a listener. Unknown or already removed handles are ignored.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.core.remove_listener(id);
    }

    pub fn listener_count(&self) -> usize {
        self.core.listeners.borrow().len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }

    /// Type-erased handle used by widgets to watch this cell.
    pub fn watchable(&self) -> Rc<dyn Watchable> {
        Rc::new(self.clone())
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T: Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Observable");
        match self.core.value.try_borrow() {
            Ok(value) => debug.field("value", &*value),
            Err(_) => debug.field("value", &"<borrowed>"),
        };
        debug
            .field("listeners", &self.core.listeners.borrow().len())
            .finish()
    }
}

/// Object-safe view of an observable, independent of its value type.
pub trait Watchable {
    fn watch(&self, listener: Rc<dyn Fn() -> Result<(), CallbackError>>) -> ListenerId;
    fn unwatch(&self, id: ListenerId);
}

impl<T: 'static> Watchable for Observable<T> {
    fn watch(&self, listener: Rc<dyn Fn() -> Result<(), CallbackError>>) -> ListenerId {
        self.core.add_listener(listener)
    }

    fn unwatch(&self, id: ListenerId) {
        self.core.remove_listener(id);
    }
}

/// A live listener registration that is removed on [`cancel`](Self::cancel)
/// or drop.
pub struct Subscription {
    source: Rc<dyn Watchable>,
    id: Option<ListenerId>,
}

impl Subscription {
    pub fn new(
        source: Rc<dyn Watchable>,
        listener: Rc<dyn Fn() -> Result<(), CallbackError>>,
    ) -> Self {
        let id = source.watch(listener);
        Self {
            source,
            id: Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.unwatch(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
