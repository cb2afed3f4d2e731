extern crate rust_raycaster as root;

use root::parsing::tonemap::TonemapSettings;
use root::parsing::{get_settings, parse_tonemapper};
use root::ppm::output_film;
use root::prelude::*;
use root::renderer::render_from_config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    // without a config file the built-in reference scene is rendered
    #[structopt(long, parse(from_os_str))]
    pub config_file: Option<PathBuf>,
    // "-" for stdout
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    #[structopt(short = "t", long)]
    pub threads: Option<usize>,
    #[structopt(long)]
    pub clamp: bool,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn load_config(opts: &Opt) -> anyhow::Result<Config> {
    let mut config = match &opts.config_file {
        Some(path) => get_settings(path)?,
        None => {
            info!("no config file given, using reference scene");
            Config::default()
        }
    };
    // command line overrides
    if let Some(output) = &opts.output {
        config.output = output.clone();
    }
    if let Some(threads) = opts.threads {
        config.threads = Some(threads);
    }
    if opts.clamp {
        config.tonemap = TonemapSettings::Clamp;
    }
    config.validate()?;
    Ok(config)
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = load_config(&opts)?;

    let threads = config.thread_count();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;

    if opts.dry_run {
        let camera = config.build_camera();
        info!(
            "dry run, would render {}x{} to {}",
            camera.image_width,
            camera.image_height,
            config.output_target()
        );
        return Ok(());
    }

    let now = Instant::now();
    let renderer: Box<dyn Renderer> = Box::new(NaiveRenderer::new());
    let (film, _profile) = render_from_config(renderer.as_ref(), &config);

    let tonemapper = parse_tonemapper(config.tonemap);
    output_film(&film, tonemapper.as_ref(), &config.output_target())?;
    info!("done in {}s", (now.elapsed().as_millis() as f32) / 1000.0);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    let level = parse_log_level(&opts.log_level, LevelFilter::INFO);
    // stdout may carry the image, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(opts).inspect_err(|e| error!("fatal error, aborting: {:?}", e))
}
