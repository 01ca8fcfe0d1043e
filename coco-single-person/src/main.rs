use anyhow::{Context, Result};
use clap::Parser;
use coco_single_person::config::Config;
use std::{env, path::PathBuf};
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
/// Make the COCO single person keypoints dataset
struct Args {
    /// path to the COCO dataset directory
    pub coco_dir: PathBuf,
    /// path to the directory to save the dataset
    pub save_dir: PathBuf,
    #[clap(long)]
    /// subset of the COCO dataset, val2017 (default) or train2017
    pub subset: Option<String>,
    #[clap(long)]
    /// minimum area of the person annotation [default: 16384]
    pub min_area: Option<u64>,
    #[clap(long)]
    /// minimum number of keypoints on the person [default: 10]
    pub min_keypoints: Option<u32>,
    #[clap(long)]
    /// optional JSON5 configuration file, overridden by command line options
    pub config_file: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    // parse arguments
    let Args {
        coco_dir,
        save_dir,
        subset,
        min_area,
        min_keypoints,
        config_file,
    } = Args::parse();

    let config = match &config_file {
        Some(path) => Config::open(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => Config::default(),
    }
    .with_overrides(subset, min_area, min_keypoints);
    config.validate()?;

    // start the program
    coco_single_person::start(&config, &coco_dir, &save_dir)?;

    Ok(())
}
