use std::sync::Arc;

use crate::option;

/// Builds the root dispatcher a host holds for its whole lifetime.
pub fn from_options(
    options: &option::LogOptions,
) -> anyhow::Result<Arc<Box<dyn super::LogDispatcher>>> {
    if options.disabled {
        return Ok(Arc::new(super::NullSink.into_box()));
    }

    let filter = super::LevelFilter::from(options.levels.clone());
    let dispatcher = match options.backend {
        option::LogBackend::Tracing => super::TracingSink::with_filter(filter).into_box(),
        option::LogBackend::Line => {
            let writer = match options.output.as_str() {
                "" | "stderr" => super::LineWriter::stderr(),
                "stdout" => super::LineWriter::stdout(),
                path => super::LineWriter::file(path)?,
            }
            .disable_timestamp(options.disable_timestamp);
            super::LineSink::with_filter(writer.into_emit(), filter).into_box()
        }
    };
    Ok(Arc::new(dispatcher))
}
