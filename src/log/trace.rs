use std::fmt;

/// Adapter onto the `tracing` ecosystem. Operands are rendered into one
/// message and emitted at the matching `tracing` severity.
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    filter: super::LevelFilter,
}

impl TracingSink {
    pub fn new<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = super::Level>,
    {
        Self::with_filter(super::LevelFilter::from_levels(levels))
    }

    pub fn with_filter(filter: super::LevelFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &super::LevelFilter {
        &self.filter
    }

    pub fn into_box(self) -> Box<dyn super::LogDispatcher> {
        Box::new(self)
    }
}

impl super::LogDispatcher for TracingSink {
    fn dispatch(&self, level: super::Level, values: &[&dyn fmt::Display]) {
        if !self.filter.allows(level) {
            return;
        }

        let message = super::render_line(values);
        match level {
            super::Level::Error => ::tracing::error!("{}", message),
            super::Level::Warn => ::tracing::warn!("{}", message),
            super::Level::Info => ::tracing::info!("{}", message),
        }
    }
}
