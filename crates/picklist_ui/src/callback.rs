//! Optional event handlers carried by widgets.
//!
//! Widgets store `Callback<T, M>` instead of `Option<Box<dyn Fn(T) -> M>>` so
//! builder methods and dispatch read the same everywhere:
//!
//! ```ignore
//! let list = VirtualList::new(rows, &state)
//!     .on_toggle(Message::ToggleItem)
//!     .on_scroll(Message::ListChanged);
//! ```

use std::fmt;

/// A handler mapping a widget value to an application message.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// An unset handler; `call` always returns `None`.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the handler, if set.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_set", &self.f.is_some())
            .finish()
    }
}

/// A handler that takes no input, used for clicks and open/close notifications.
pub struct Callback0<M> {
    f: Option<Box<dyn Fn() -> M>>,
}

impl<M> Callback0<M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    pub fn none() -> Self {
        Self { f: None }
    }

    pub fn call(&self) -> Option<M> {
        self.f.as_ref().map(|f| f())
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<M> Default for Callback0<M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<M> fmt::Debug for Callback0<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback0")
            .field("is_set", &self.f.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Msg {
        Toggle(usize),
        Open,
    }

    #[test]
    fn test_set_callback_produces_message() {
        let cb = Callback::new(Msg::Toggle);
        assert!(cb.is_some());
        assert_eq!(cb.call(7), Some(Msg::Toggle(7)));
    }

    #[test]
    fn test_unset_callback_is_silent() {
        let cb: Callback<usize, Msg> = Callback::default();
        assert!(!cb.is_some());
        assert_eq!(cb.call(1), None);

        let cb0: Callback0<Msg> = Callback0::none();
        assert_eq!(cb0.call(), None);
    }

    #[test]
    fn test_callback0() {
        let cb = Callback0::new(|| Msg::Open);
        assert_eq!(cb.call(), Some(Msg::Open));
    }
}
