mod build;
mod dispatcher;
mod filter;
mod level;
mod line;
mod r#macro;
mod null;
mod trace;
mod writer;


pub use build::*;
pub use dispatcher::*;
pub use filter::*;
pub use level::*;
pub use line::*;
pub use null::*;
pub use trace::*;
pub use writer::*;
