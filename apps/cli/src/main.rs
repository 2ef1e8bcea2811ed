// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: detect shelves in a bookshelf scene and lay out a book catalog
//!
//! The scene is a JSON `SceneNode` tree (column-major transforms, flat
//! position/normal buffers). With `--catalog`, books from a JSON array of
//! `{title, author, texture?}` records are placed onto the detected shelves.
//!
//! Usage:
//!   shelfscan <scene.json> [options]

use anyhow::{bail, Context, Result};
use serde::Serialize;
use shelfscan_geometry::SceneNode;
use shelfscan_layout::{layout_books, load_catalog, shelf_capacity, BookPlacement};
use shelfscan_shelves::{detect_shelves_with_report, find_preset, DetectionStats, Shelf};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Debug, Default)]
struct Args {
    scene: PathBuf,
    catalog: Option<PathBuf>,
    config: Option<PathBuf>,
    preset: Option<String>,
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    shelves: &'a [Shelf],
    placements: &'a [BookPlacement],
    stats: &'a DetectionStats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.is_empty() || raw.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let result = parse_args(&raw).and_then(|args| run(&args));
    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut args = Args::default();
    let mut scene = None;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => args.catalog = Some(value(&mut iter, arg)?.into()),
            "--config" => args.config = Some(value(&mut iter, arg)?.into()),
            "--preset" => args.preset = Some(value(&mut iter, arg)?.to_string()),
            "--json" => args.json = true,
            other if other.starts_with("--") => bail!("unknown option: {}", other),
            path if scene.is_none() => scene = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument: {}", extra),
        }
    }

    args.scene = scene.context("missing scene path")?;
    Ok(args)
}

fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(String::as_str)
        .with_context(|| format!("{} expects a value", flag))
}

fn run(args: &Args) -> Result<()> {
    let preset = args.preset.as_deref().map(find_preset).transpose()?;

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(preset) = preset {
        config = config.with_preset(preset);
    }
    let config = config.with_env_overrides();
    config.validate()?;

    let mut scene = read_scene(&args.scene)?;
    if let Some(preset) = preset {
        tracing::info!(preset = preset.id, name = preset.name, "placing scene with preset");
        let mut root = SceneNode::group(preset.id).transformed(&preset.placement_transform());
        root.add_child(scene);
        scene = root;
    }

    let detection = detect_shelves_with_report(&scene, &config.detection)?;

    let placements = match &args.catalog {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            let books = load_catalog(&text)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            layout_books(&detection.shelves, &books, &config.footprint)?
        }
        None => Vec::new(),
    };

    if args.json {
        let report = Report {
            shelves: &detection.shelves,
            placements: &placements,
            stats: &detection.stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&detection.shelves, &placements, &detection.stats, &config);
    }

    Ok(())
}

fn read_scene(path: &Path) -> Result<SceneNode> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse scene {}", path.display()))
}

fn print_report(shelves: &[Shelf], placements: &[BookPlacement], stats: &DetectionStats, config: &Config) {
    println!(
        "Scanned {} meshes ({} skipped), {} upward vertices in {} height groups",
        stats.meshes_visited, stats.meshes_skipped, stats.upward_vertices, stats.height_groups
    );
    println!(
        "Candidates: {} ({} rejected), merged: {}, excluded: {}",
        stats.candidates, stats.rejected_candidates, stats.merged_shelves, stats.excluded_shelves
    );
    println!();

    if shelves.is_empty() {
        println!("No shelves detected");
        return;
    }

    println!("{:>5}  {:>8}  {:>8}  {:>8}  {:>5}  {:>5}  source", "shelf", "height", "width", "depth", "slots", "books");
    for (i, shelf) in shelves.iter().enumerate() {
        let books = placements.iter().filter(|p| p.shelf_index == i).count();
        println!(
            "{:>5}  {:>8.3}  {:>8.3}  {:>8.3}  {:>5}  {:>5}  {}",
            i,
            shelf.height,
            shelf.usable_space.width,
            shelf.usable_space.depth,
            shelf_capacity(shelf, &config.footprint),
            books,
            shelf.source_mesh.name.as_deref().unwrap_or("-"),
        );
    }

    if !placements.is_empty() {
        println!();
        println!("Placed {} books", placements.len());
    }
}

fn print_usage() {
    eprintln!("shelfscan - Detect bookshelf shelves and lay out books");
    eprintln!();
    eprintln!("Usage: shelfscan <scene.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog <file>   JSON array of books to place on the shelves");
    eprintln!("  --config <file>    JSON config with `detection` and `footprint` sections");
    eprintln!("  --preset <id>      Bookshelf preset: classic, modern, modern-3");
    eprintln!("  --json             Print shelves, placements and stats as JSON");
    eprintln!("  -h, --help         Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG                      Log filter (default: info)");
    eprintln!("  SHELFSCAN_MIN_SHELF_WIDTH     Override minimum shelf width (m)");
    eprintln!("  SHELFSCAN_MIN_SHELF_DEPTH     Override minimum shelf depth (m)");
    eprintln!("  SHELFSCAN_HEIGHT_TOLERANCE    Override height grouping tolerance (m)");
    eprintln!("  SHELFSCAN_MERGE_THRESHOLD     Override shelf merge threshold (m)");
}
