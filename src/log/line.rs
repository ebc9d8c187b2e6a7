use std::{fmt, sync::Arc};

/// Forwards each allowed dispatch to a line-writing function, with the level
/// inserted as the first operand.
///
/// All levels are reported unless levels are passed at construction, in
/// which case they act as a whitelist. The whitelist is fixed for the
/// lifetime of the sink.
#[derive(Clone)]
pub struct LineSink {
    emit: super::Emit,
    filter: super::LevelFilter,
}

impl LineSink {
    /// Sink over a caller-supplied line function.
    pub fn new<F, I>(emit: F, levels: I) -> Self
    where
        F: Fn(&[&dyn fmt::Display]) + Send + Sync + 'static,
        I: IntoIterator<Item = super::Level>,
    {
        Self::with_filter(Arc::new(emit), super::LevelFilter::from_levels(levels))
    }

    /// Sink over the process default writer, which prints timestamped lines
    /// to stderr.
    pub fn global<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = super::Level>,
    {
        Self::with_writer(super::LineWriter::stderr(), levels)
    }

    /// Sink over a caller-supplied [`super::LineWriter`].
    pub fn with_writer<I>(writer: super::LineWriter, levels: I) -> Self
    where
        I: IntoIterator<Item = super::Level>,
    {
        Self::with_filter(writer.into_emit(), super::LevelFilter::from_levels(levels))
    }

    /// Use [`super::LevelFilter::none`] here for a sink that forwards nothing;
    /// the level-list constructors cannot express an empty whitelist.
    pub fn with_filter(emit: super::Emit, filter: super::LevelFilter) -> Self {
        Self { emit, filter }
    }

    pub fn filter(&self) -> &super::LevelFilter {
        &self.filter
    }

    pub fn into_box(self) -> Box<dyn super::LogDispatcher> {
        Box::new(self)
    }
}

impl super::LogDispatcher for LineSink {
    fn dispatch(&self, level: super::Level, values: &[&dyn fmt::Display]) {
        if !self.filter.allows(level) {
            return;
        }

        let mut line: Vec<&dyn fmt::Display> = Vec::with_capacity(values.len() + 1);
        line.push(&level);
        for value in values {
            line.push(*value);
        }

        (self.emit)(&line);
    }
}

impl fmt::Debug for LineSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
