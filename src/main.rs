mod actions;
mod app;
mod config;
mod host;
mod render;

use std::path::PathBuf;

use clap::Parser;
use hotspot_ui::Question;

use crate::app::{App, AppEvent};
use crate::config::Config;
use crate::host::ConsoleHost;

#[derive(Parser, Debug)]
#[command(name = "hotspot", about = "Run an image hotspot question through a scripted session")]
struct Args {
    /// Question configuration
    #[arg(short, long, default_value = "question.toml")]
    config: PathBuf,

    /// Container width, overrides the configured layout
    #[arg(short, long)]
    width: Option<f32>,

    /// Scripted events: resize:<w>, click:<x>,<y>, press:<button>, tick:<s>, solutions, reset
    #[arg(short, long = "event", value_parser = actions::parse_event)]
    events: Vec<AppEvent>,

    /// Write the final view as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Directory for screenshots taken after a full score
    #[arg(long)]
    screenshots: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    // --- 1. LOAD CONFIG ---
    let mut config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load {}: {}", args.config.display(), e);
            std::process::exit(1);
        }
    };
    if let Some(width) = args.width {
        config.layout.container_width = width;
    }

    // --- 2. CREATE HOST AND QUESTION ---
    let mut host = ConsoleHost::new(&config.content.assets_dir);
    if let Some(dir) = &args.screenshots {
        host = host.with_screenshots(dir);
    }
    let mut app = App::new(config, host);
    app.start();

    // --- 3. RUN THE SESSION ---
    for event in args.events {
        app.on_event(event);
    }

    let question = app.question();
    log::info!(
        "Session finished: score {}/{}, answered: {}",
        question.score(),
        question.max_score(),
        question.answer_given()
    );

    match serde_json::to_string_pretty(&question.xapi_data()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize xAPI data: {}", e),
    }

    if let Some(path) = args.svg {
        if let Err(e) = std::fs::write(&path, render::render_svg(&app.view())) {
            log::error!("Failed to write {}: {}", path.display(), e);
        }
    }
}
