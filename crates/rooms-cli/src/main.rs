//! Command-line host for the rooms layout generator
//!
//! Reads a configuration, runs generation passes and prints what each
//! debug stage produced.

mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};

use rooms_core::{
    ConnectMode, GridBounds, LayoutConfig, LayoutGenerator, LayoutRng, SizeRange, detect_boundaries,
};

use preview::Preview;

/// Which pipeline stage to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Stage {
    Rooms,
    Regions,
    Boundaries,
    Connect,
}

/// Random rooms layout generator
#[derive(Parser, Debug)]
#[command(name = "rooms")]
#[command(author, version, about = "Place random rooms, merge them into regions and connect them", long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Rooms placed per pass
    #[arg(short = 'n', long = "iterations")]
    iterations: Option<u32>,

    /// Room width range, MIN:MAX
    #[arg(long = "room-width", value_parser = parse_range)]
    room_width: Option<SizeRange>,

    /// Room height range, MIN:MAX
    #[arg(long = "room-height", value_parser = parse_range)]
    room_height: Option<SizeRange>,

    /// Grid size in tiles, WxH
    #[arg(long = "grid", value_parser = parse_size, conflicts_with = "viewport")]
    grid: Option<(u32, u32)>,

    /// Viewport size in pixels, WxH (divided by the cell size)
    #[arg(long = "viewport", value_parser = parse_size)]
    viewport: Option<(u32, u32)>,

    /// Cell size in pixels, used with --viewport
    #[arg(long = "cell-size", default_value_t = rooms_core::DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Keep rooms from earlier passes
    #[arg(long = "no-auto-clear")]
    no_auto_clear: bool,

    /// Number of generation passes
    #[arg(short = 'p', long = "passes", default_value_t = 1)]
    passes: u32,

    /// How the connector shrinks its candidate list (truncate-tail, remove-processed)
    #[arg(long = "connect-mode")]
    connect_mode: Option<ConnectMode>,

    /// Stage to report
    #[arg(long = "stage", value_enum, default_value_t = Stage::Connect)]
    stage: Stage,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// Skip the character preview
    #[arg(long = "no-preview")]
    no_preview: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn parse_range(s: &str) -> Result<SizeRange, String> {
    let (min, max) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got '{s}'"))?;
    let min = min.trim().parse().map_err(|e| format!("bad min: {e}"))?;
    let max = max.trim().parse().map_err(|e| format!("bad max: {e}"))?;
    Ok(SizeRange::new(min, max))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Start from the file (or defaults) and apply command-line overrides
fn build_config(args: &Args) -> Result<LayoutConfig> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => LayoutConfig::default(),
    };

    if let Some(n) = args.iterations {
        config.room_iterations = n;
    }
    if let Some(range) = args.room_width {
        config.room_width = range;
    }
    if let Some(range) = args.room_height {
        config.room_height = range;
    }
    if let Some((w, h)) = args.grid {
        let width = i32::try_from(w).context("grid width too large")?;
        let height = i32::try_from(h).context("grid height too large")?;
        config.grid = GridBounds::new(width, height);
    } else if let Some((w, h)) = args.viewport {
        config.grid = GridBounds::from_viewport(w, h, args.cell_size)?;
    }
    if args.no_auto_clear {
        config.auto_clear = false;
    }
    if let Some(mode) = args.connect_mode {
        config.connect_mode = mode;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    if args.print_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }
    if args.passes == 0 {
        bail!("--passes must be at least 1");
    }

    let rng = match args.seed {
        Some(seed) => LayoutRng::new(seed),
        None => LayoutRng::from_entropy(),
    };
    let mut generator = LayoutGenerator::new(config, rng);

    for pass in 1..=args.passes {
        generator.generate();
        log::info!("pass {pass}: {} rooms in pool", generator.rooms().len());
    }

    println!("seed: {}", generator.rng().seed());
    let mut preview = Preview::new();

    match args.stage {
        Stage::Rooms => {
            let rooms = generator.rooms();
            let tiles: usize = rooms.iter().map(Vec::len).sum();
            println!("rooms: {} ({} tiles)", rooms.len(), tiles);
            preview.add_rooms(rooms);
        }
        Stage::Regions => {
            let regions = generator.extract_regions();
            println!("regions: {}", regions.len());
            for (i, region) in regions.iter().enumerate() {
                println!("  {:>3}: {} tiles", i, region.len());
            }
            preview.add_regions(&regions);
        }
        Stage::Boundaries => {
            let regions = generator.extract_regions();
            let boundaries = generator.detect_boundaries();
            println!("regions: {}", regions.len());
            for (i, (region, boundary)) in regions.iter().zip(&boundaries).enumerate() {
                println!(
                    "  {:>3}: {} tiles, {} on the boundary",
                    i,
                    region.len(),
                    boundary.len()
                );
            }
            preview.add_boundaries(&regions, &boundaries);
        }
        Stage::Connect => {
            let layout = generator.build_layout();
            let boundaries = detect_boundaries(&layout.regions);
            println!(
                "regions: {}, corridors: {} ({} tiles), groups: {}",
                layout.regions.len(),
                layout.connections.len(),
                layout.corridors.len(),
                layout.connectivity().count()
            );
            for link in &layout.connections {
                println!(
                    "  {:>3} -> {:<3} {} -> {} ({} tiles)",
                    link.from_region,
                    link.to_region,
                    link.from,
                    link.to,
                    link.corridor.len()
                );
            }
            preview.add_boundaries(&layout.regions, &boundaries);
            preview.add_corridors(&layout.corridors);
        }
    }

    if !args.no_preview {
        print!("{preview}");
    }

    Ok(())
}
