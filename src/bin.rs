extern crate fakes3_log;

use std::{fs, process::exit, sync::Arc};

use clap::{Args, Parser, Subcommand};
use fakes3_log::log::{self, LogDispatcher};

#[derive(Debug, Parser)]
#[command(about = fakes3_log::build_info::PKG_DESCRIPTION, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    #[clap(help = "config path, defaults apply when omitted", short, long)]
    config: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(about = "show version")]
    Version,
    #[clap(about = "dispatch one line through the configured logger")]
    Emit {
        #[clap(help = "severity level (err, warn, info)", short, long, default_value = "info")]
        level: log::Level,
        #[clap(help = "values to log")]
        values: Vec<String>,
    },
    #[clap(about = "show the effective log configuration")]
    Check,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Version => {
            println!(
                "fakes3-log v{}-{}",
                fakes3_log::build_info::PKG_VERSION,
                fakes3_log::build_info::SHORT_COMMIT
            );
            Ok(())
        }
        Commands::Emit { level, values } => emit(cli.args.config, level, values),
        Commands::Check => check(cli.args.config),
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        exit(1);
    }
}

fn load_options(config_file: Option<String>) -> anyhow::Result<fakes3_log::Options> {
    match config_file {
        Some(config_file) => {
            let config_content = fs::read_to_string(config_file)
                .map_err(|err| anyhow::anyhow!("failed to read config file: {}", err))?;
            fakes3_log::Options::from_yaml(&config_content)
        }
        None => Ok(fakes3_log::Options::default()),
    }
}

fn prepare_logger(
    options: &fakes3_log::LogOptions,
) -> anyhow::Result<Arc<Box<dyn log::LogDispatcher>>> {
    if !options.disabled && options.backend == fakes3_log::LogBackend::Tracing {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {}", err))?;
    }
    log::from_options(options)
}

fn emit(config_file: Option<String>, level: log::Level, values: Vec<String>) -> anyhow::Result<()> {
    let options = load_options(config_file)?;
    let logger = prepare_logger(&options.log)?;
    let values: Vec<&dyn std::fmt::Display> = values
        .iter()
        .map(|v| v as &dyn std::fmt::Display)
        .collect();
    logger.dispatch(level, &values);
    Ok(())
}

fn check(config_file: Option<String>) -> anyhow::Result<()> {
    let options = load_options(config_file)?;
    let filter = log::LevelFilter::from(options.log.levels.clone());
    let mut s = String::new();
    s.push_str(format!("disabled: {}", options.log.disabled).as_str());
    s.push('\n');
    s.push_str(format!("backend: {:?}", options.log.backend).as_str());
    s.push('\n');
    s.push_str(format!("levels: {}", filter).as_str());
    s.push('\n');
    s.push_str(
        format!(
            "output: {}",
            if options.log.output.is_empty() {
                "stderr"
            } else {
                options.log.output.as_str()
            }
        )
        .as_str(),
    );
    println!("{}", s);
    Ok(())
}
