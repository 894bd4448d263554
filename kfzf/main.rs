use anyhow::Result;
use clap::Parser;
use kfzf_config::{APP_NAME, APP_VERSION, Config};
use std::io::{BufWriter, Write};
use tokio::runtime::Builder;
use tracing::{debug, error, info, warn};

use crate::input::{Source, parse_objects, read_sources};
use crate::processor::Processor;

pub mod cli;
pub mod input;
pub mod processor;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = kfzf_common::logging::initialize(APP_NAME, args.verbose)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    if let Err(error) = run_application(&args) {
        error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;

    let config = rt.block_on(Config::load_or_default(&args.config_path()));
    let ctor_config = config.ctor_config(args.cluster.as_deref());
    debug!("Using cluster '{}'", ctor_config.cluster());

    let sources = rt.block_on(read_sources(&args.files))?;
    let mut processor = Processor::new(ctor_config, args.kind, args.typed);
    let mut out = BufWriter::new(std::io::stdout().lock());

    let mut stats = Stats::default();
    for source in &sources {
        process_source(source, &mut processor, &mut out, &mut stats)?;
    }

    out.flush()?;
    info!(
        "Processed {} objects from {} sources: {} printed, {} skipped, {} tracked",
        stats.objects,
        sources.len(),
        stats.printed,
        stats.skipped,
        processor.tracked()
    );

    Ok(())
}

#[derive(Default)]
struct Stats {
    objects: usize,
    printed: usize,
    skipped: usize,
}

fn process_source(source: &Source, processor: &mut Processor, out: &mut impl Write, stats: &mut Stats) -> Result<()> {
    let objects = match parse_objects(&source.content) {
        Ok(objects) => objects,
        Err(error) => {
            error!("Cannot parse {}: {}", source.name, error);
            return Ok(());
        },
    };

    for object in &objects {
        stats.objects += 1;
        match processor.process(object) {
            Ok(Some(line)) => {
                writeln!(out, "{line}")?;
                stats.printed += 1;
            },
            Ok(None) => (),
            Err(error) => {
                let name = object["metadata"]["name"].as_str().unwrap_or("<unnamed>");
                warn!("Skipping object '{}' from {}: {:#}", name, source.name, anyhow::Error::from(error));
                stats.skipped += 1;
            },
        }
    }

    Ok(())
}
