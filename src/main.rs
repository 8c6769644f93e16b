mod cli;
mod error;
mod metrics;
mod prtg;

use clap::Parser;
use cli::{Args, Config};
use error::Result;
use log::{debug, error};
use metrics::{parser::parse_snapshot, source::MetricsSource};

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    match run(&args) {
        Ok(doc) => println!("{}", doc),
        Err(e) => {
            error!("{}", e);
            // The agent still expects a well-formed document on failure.
            println!("{}", prtg::xml::error_document(&e.to_string()));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let source = MetricsSource::new(&config.tool, args.tool_path.as_deref());
    let raw = source.collect()?;

    let snapshot = parse_snapshot(&raw, &config.fields)?;
    debug!("snapshot: {:?}", snapshot);

    Ok(prtg::xml::render_document(&prtg::channel_results(&snapshot)))
}
