use region_painter::config::demo::load_config;
use region_painter::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use region_painter::RegionFinder;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_rgb_image(&config.input)?;
    let target = config.target.resolve(&frame)?;
    let params = config.finder.resolve();

    let mut finder = RegionFinder::new(params);
    finder.set_image(frame);
    let report = finder
        .find_regions_with_report(target)
        .map_err(|e| e.to_string())?;

    println!(
        "{}x{} input, target {:?}: {} region(s), {} component(s) below min_region, largest {} px, {:.3} ms",
        report.width,
        report.height,
        report.target,
        report.regions_found(),
        report.discarded_components,
        report.largest_region,
        report.elapsed_ms
    );

    if let Some(path) = config.output.recolored_path() {
        finder.recolor_image().map_err(|e| e.to_string())?;
        let recolored = finder
            .recolored_image()
            .ok_or("Recolored image missing after recolor_image")?;
        save_rgb_image(recolored, &path)?;
        println!("Saved recolored image to {}", path.display());
    }

    if let Some(path) = config.output.report_path() {
        write_json_file(&path, &report)?;
        println!("Saved segmentation report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: region_demo <config.json>".to_string()
}
