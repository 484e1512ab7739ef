use clap::Parser;
use macroquad::prelude::*;

mod canvas;
mod cell;
mod cli;
mod color;
mod config;
mod error;
mod events;
mod lifecycle;
mod logging;
mod pool;
mod renderer;
mod reporting;
mod simulation;
mod stats;

use canvas::Bounds;
use cli::Cli;
use renderer::ScreenCanvas;
use simulation::Simulation;
use stats::CellStats;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cell Cycle".to_string(),
        window_width: config::CANVAS_WIDTH as i32,
        window_height: config::CANVAS_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(&cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> error::Result<()> {
    let bounds = Bounds::new(config::CANVAS_WIDTH, config::CANVAS_HEIGHT);
    let mut canvas = ScreenCanvas;
    let mut sim = Simulation::new(cli.cells, cli.seed, bounds, &mut canvas)?;
    let mut stats = CellStats::new(config::STATS_CAPACITY, config::STATS_SAMPLE_INTERVAL);

    prevent_quit();
    sim.start();
    // Each frame is one full pass; the next is requested only once it returns.
    while sim.is_running() {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            sim.stop();
            continue;
        }
        if let Some(frame) = sim.step(&mut canvas) {
            stats.record(frame.census, frame.events);
        }
        renderer::draw_hud(&sim, &stats);
        next_frame().await;
    }

    if cli.summary {
        println!("{}", serde_json::to_string(&sim.summary())?);
    }
    Ok(())
}
