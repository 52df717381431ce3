mod cli;

use clap::Parser;
use meadow_geom::Vec3;
use meadow_grass::{GenerationOutcome, GrassConfig, GrassField, HeadlessScene};
use std::error::Error;

use crate::cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut cfg = match &cli.config {
        Some(path) => {
            log::info!("loading grass config from {}", path.display());
            GrassConfig::load_from_path(path)?
        }
        None => GrassConfig::default(),
    };
    cli.apply(&mut cfg);
    cfg.validate()?;

    let [ox, oy, oz] = cli.origin;
    let origin = Vec3::new(ox, oy, oz);
    let mut scene = HeadlessScene::new(origin);
    let field = GrassField::new(cfg).at(origin);
    let material = cli.material();

    match field.generate(&mut scene, material.as_ref())? {
        GenerationOutcome::Skipped(reason) => {
            log::info!("nothing generated: {}", reason);
        }
        GenerationOutcome::Built(report) => {
            log::info!(
                "{} block(s) on a {}x{} grid ({} masked), {} vertices / {} indices",
                report.blocks_built,
                report.grid_count,
                report.grid_count,
                report.cells_masked,
                scene.total_vertices(),
                scene.total_indices()
            );
            if let Some(bb) = report.bounds.map(|bb| bb.translated(origin)) {
                log::info!(
                    "bounds min=({:.2}, {:.2}, {:.2}) max=({:.2}, {:.2}, {:.2})",
                    bb.min.x,
                    bb.min.y,
                    bb.min.z,
                    bb.max.x,
                    bb.max.y,
                    bb.max.z
                );
            }
        }
    }
    Ok(())
}
