mod config;
mod convert;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coursecal")]
#[command(about = "Turn a course-schedule export into a calendar with one recurring event per course")]
struct Cli {
    /// Schedule export to read (default: my_classes.json)
    input: Option<PathBuf>,

    /// Where to write the .ics file (default: calendar.ics)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Faculty directory CSV used to add instructor position titles
    #[arg(long)]
    faculty: Option<PathBuf>,

    /// Start each course on its first meeting day rather than the first day of classes
    #[arg(long)]
    align_first_occurrence: bool,

    /// Config file (default: ~/.config/coursecal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let mut cfg = config::load_config(&config_path)?;

    if let Some(input) = cli.input {
        cfg.input = input;
    }
    if let Some(output) = cli.output {
        cfg.output = output;
    }
    if cli.faculty.is_some() {
        cfg.faculty = cli.faculty;
    }
    cfg.align_first_occurrence |= cli.align_first_occurrence;

    convert::run(&cfg)
}
