use anyhow::Context;
use geonoise::config::Config;
use geonoise::export::{export_json, export_noise_png, sample_grid};
use geonoise::report::ClassificationReport;
use geonoise::Containment;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Usage: geonoise [config.json]
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("failed to load configuration")?;
    let render = &config.render;

    let seed = render.seed.unwrap_or_else(rand::random);
    let dir = render.output_dir.join(seed.to_string());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let grid = sample_grid(render, seed);
    let caption = format!(
        "noise{} x{} oct {} seed {}",
        render.dimensions, render.scale, render.octaves, seed
    );
    export_noise_png(&grid, &caption, &dir.join("noise.png"))?;

    let report = ClassificationReport::from_scene(&config.scene);
    export_json(&report, &dir.join("classification.json"))?;
    info!(
        contains = report.count(Containment::Contains),
        intersects = report.count(Containment::Intersects),
        disjoint = report.count(Containment::Disjoint),
        "classified scene"
    );

    println!("Output written → {}/", dir.display());
    Ok(())
}
