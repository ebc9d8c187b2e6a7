use std::{fmt, sync::Arc};

/// The single capability host code logs through.
///
/// Implementations decide whether to forward `values` to their sink. They
/// return nothing and must never alter the caller's control flow: a
/// suppressed message is indistinguishable from a logged one.
///
/// Adapting another leveled logger takes one small shim that switches on
/// `level`, see [`super::TracingSink`].
pub trait LogDispatcher: Send + Sync {
    fn dispatch(&self, level: super::Level, values: &[&dyn fmt::Display]);
}

impl<T: LogDispatcher + ?Sized> LogDispatcher for Box<T> {
    fn dispatch(&self, level: super::Level, values: &[&dyn fmt::Display]) {
        (**self).dispatch(level, values)
    }
}

impl<T: LogDispatcher + ?Sized> LogDispatcher for Arc<T> {
    fn dispatch(&self, level: super::Level, values: &[&dyn fmt::Display]) {
        (**self).dispatch(level, values)
    }
}

impl<T: LogDispatcher + ?Sized> LogDispatcher for &T {
    fn dispatch(&self, level: super::Level, values: &[&dyn fmt::Display]) {
        (**self).dispatch(level, values)
    }
}
