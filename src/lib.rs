pub mod log;
pub mod option;

pub use log::{Level, LevelFilter, LineSink, LineWriter, LogDispatcher, NullSink, TracingSink};
pub use option::{LogBackend, LogOptions, Options};

use shadow_rs::shadow;

shadow!(build_info);
