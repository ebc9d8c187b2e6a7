use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
};

/// Function a [`super::LineSink`] forwards to. It receives the full operand
/// list of one line and produces that line.
pub type Emit = Arc<dyn Fn(&[&dyn fmt::Display]) + Send + Sync>;

/// Joins operands with single spaces, println style. An operand whose
/// `Display` fails is rendered as `%!v(ERROR)`.
pub fn render_line(values: &[&dyn fmt::Display]) -> String {
    let mut s = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let mut operand = String::new();
        if fmt::Write::write_fmt(&mut operand, format_args!("{}", value)).is_ok() {
            s.push_str(&operand);
        } else {
            s.push_str("%!v(ERROR)");
        }
    }
    s
}

/// Line-oriented text output, the default target of a [`super::LineSink`].
#[derive(Clone)]
pub struct LineWriter {
    disable_timestamp: bool,
    output: Arc<Mutex<Box<dyn Write + Send + Sync>>>,
}

impl LineWriter {
    pub fn new(output: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            disable_timestamp: false,
            output: Arc::new(Mutex::new(output)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    pub fn file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .map_err(|err| anyhow::anyhow!("failed to open log file: {}", err))?;
        Ok(Self::new(Box::new(f)))
    }

    pub fn disable_timestamp(self, disable_timestamp: bool) -> Self {
        Self {
            disable_timestamp,
            ..self
        }
    }

    pub fn write_line(&self, values: &[&dyn fmt::Display]) {
        let mut s = if self.disable_timestamp {
            render_line(values)
        } else {
            format!(
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                render_line(values)
            )
        };
        s.push('\n');

        self.write_to_output(&s);
    }

    pub fn into_emit(self) -> Emit {
        Arc::new(move |values: &[&dyn fmt::Display]| self.write_line(values))
    }

    fn write_to_output(&self, s: &str) {
        if let Ok(mut output) = self.output.lock() {
            if output.write_all(s.as_bytes()).is_ok() {
                output.flush().ok();
            }
        }
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("disable_timestamp", &self.disable_timestamp)
            .finish_non_exhaustive()
    }
}
