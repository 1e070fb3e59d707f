use std::path::PathBuf;

use anyhow::{Context, Result};
use chimely_components::timer_indicator::{
    TimerIndicatorArgs, TimerIndicatorVisual, sample_transition, timer_indicator,
};
use chimely_ui::{dp::set_scale_factor, logging::init_tracing};
use clap::Parser;
use tracing::info;

mod scene;
use scene::Scene;

#[derive(Parser)]
#[command(name = "chimely-scene")]
#[command(version, about = "Render a timer indicator scene", long_about = None)]
struct Cli {
    /// Scene file (TOML); the built-in idle scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,
    /// Override the drawing area width in dp
    #[arg(long)]
    width: Option<f64>,
    /// Override the drawing area height in dp
    #[arg(long)]
    height: Option<f64>,
    /// Physical pixels per dp, used for the pixel sizes in the summary
    #[arg(long, default_value_t = 1.0)]
    scale_factor: f64,
    /// Sample the transition from the idle indicator this many seconds in
    #[arg(long)]
    elapsed: Option<f32>,
    /// Print the full visual as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    set_scale_factor(cli.scale_factor);

    let mut scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::default(),
    };
    if let Some(width) = cli.width {
        scene.width = width;
    }
    if let Some(height) = cli.height {
        scene.height = height;
    }

    let (width, height) = scene.area();
    let target = timer_indicator(&scene.indicator_args(), width, height);
    let visual = match cli.elapsed {
        Some(elapsed) => {
            let idle = timer_indicator(&TimerIndicatorArgs::default(), width, height);
            info!(elapsed, "sampling transition from idle");
            sample_transition(&idle, &target, elapsed)
        }
        None => target,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&visual).context("failed to encode visual")?;
        println!("{json}");
    } else {
        print_summary(&visual);
    }
    Ok(())
}

fn print_summary(visual: &TimerIndicatorVisual) {
    let geometry = &visual.geometry;
    println!(
        "size         {:.2} dp ({:.0} px)",
        geometry.size.0,
        geometry.size.to_pixels_f32()
    );
    println!("line width   {:.2} dp", geometry.line_width.0);
    println!("gap          {:.2} dp", geometry.gap.0);

    for (name, ring) in [
        ("duration", &visual.duration_ring),
        ("interval", &visual.interval_ring),
    ] {
        let sweep = ring.sweep.map_or(0.0, |sweep| sweep.sweep_angle_degrees);
        print!(
            "{name:<12} radius {:.2} dp, sweep {sweep:.1}°",
            ring.radius.0
        );
        match ring.periodic_marker {
            Some(marker) => println!(", marker {:.1}°", marker.angle_degrees),
            None => println!(),
        }
    }

    let button = &visual.button;
    println!(
        "button       {:?} \"{}\", diameter {:.2} dp, scale {:.2}",
        button.state, button.label, button.diameter.0, button.press_scale
    );
    println!(
        "halo         {}",
        if visual.halo.active { "active" } else { "resting" }
    );
    let commands = visual.draw_commands();
    let visible = commands.iter().filter(|command| !command.is_invisible()).count();
    println!("commands     {} ({visible} visible)", commands.len());
}
