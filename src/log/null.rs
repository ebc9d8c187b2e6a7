use std::fmt;

/// Discards everything. Lets a host turn logging off without special-casing
/// its log points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn into_box(self) -> Box<dyn super::LogDispatcher> {
        Box::new(self)
    }
}

impl super::LogDispatcher for NullSink {
    fn dispatch(&self, _level: super::Level, _values: &[&dyn fmt::Display]) {}
}
