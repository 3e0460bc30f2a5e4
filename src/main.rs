// ./src/main.rs
//
// Usage: obstacle_voronoi [IMAGE] [FUSION_RADIUS] [SVG_OUT]
use bevy::app::App;
use bevy::log::{LogPlugin, error, info};
use obstacle_voronoi::debug::LogReporter;
use obstacle_voronoi::{ObstaclePipeline, PipelineConfig};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // LogPlugin installiert den globalen Subscriber beim Hinzufügen.
    let mut app = App::new();
    app.add_plugins(LogPlugin::default());

    let mut config = PipelineConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(path) = args.next() {
        config = config.with_image_path(path);
    }
    if let Some(radius) = args.next() {
        match radius.parse::<f64>() {
            Ok(radius) => config = config.with_fusion_radius(radius),
            Err(e) => {
                error!("Invalid fusion radius '{}': {}", radius, e);
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(svg_path) = args.next() {
        config = config.with_svg_output(svg_path);
    }

    let mut pipeline = ObstaclePipeline::new(config).with_reporter(LogReporter);
    match pipeline.run() {
        Ok(output) => {
            info!("Voronoi sites (coordinates, cell size):");
            for site in output.diagram.sites() {
                info!("{:?} \t {:.3}", site.coordinates(), site.cell_size());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Obstacle pipeline failed: {}", e);
            if let Some(source) = e.source() {
                error!("  caused by: {}", source);
            }
            ExitCode::FAILURE
        }
    }
}
