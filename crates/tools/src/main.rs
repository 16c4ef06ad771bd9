use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use levelgen::{Level, ProceduralLevelGenerator};
use log::warn;

mod settings;

use settings::{ConfigOverrides, resolve_config};

/// Generate a procedural dungeon level
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed; drawn from runtime entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Grid width in tiles
    #[arg(long)]
    width: Option<usize>,
    /// Grid height in tiles
    #[arg(long)]
    height: Option<usize>,
    /// Target number of rooms
    #[arg(long)]
    rooms: Option<usize>,
    #[arg(long)]
    min_room_size: Option<usize>,
    #[arg(long)]
    max_room_size: Option<usize>,
    /// Placement attempts per room slot
    #[arg(long)]
    attempts: Option<usize>,
    /// TOML file with a [generator] table
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the ASCII tile map
    #[arg(long)]
    ascii: bool,
    /// Print full level data as JSON
    #[arg(long)]
    json: bool,
    /// JSON indent width
    #[arg(long, default_value_t = 2)]
    indent: usize,
    /// Also print the level fingerprint
    #[arg(long)]
    fingerprint: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            num_rooms: self.rooms,
            min_room_size: self.min_room_size,
            max_room_size: self.max_room_size,
            max_placement_attempts: self.attempts,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.overrides())?;
    let generator =
        ProceduralLevelGenerator::new(config).context("Invalid generator configuration")?;
    let level = generator.generate(args.seed);

    let metadata = level.metadata();
    if metadata.room_count < metadata.requested_rooms {
        warn!(
            "placed {} of {} requested rooms (seed {})",
            metadata.room_count,
            metadata.requested_rooms,
            level.seed()
        );
    }

    if args.json {
        let json = level.to_json(Some(args.indent)).context("Failed to encode level as JSON")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", render_summary(&level, args.ascii, args.fingerprint));
    Ok(())
}

fn render_summary(level: &Level, with_ascii: bool, with_fingerprint: bool) -> String {
    let metadata = level.metadata();
    let mut out = format!(
        "Seed: {}\nRooms: {}  Corridors: {}\n",
        level.seed(),
        metadata.room_count,
        metadata.corridor_count
    );
    if with_fingerprint {
        out += &format!("Fingerprint: {:#018x}\n", level.fingerprint());
    }

    if with_ascii {
        out += &format!("\n{}\n", level.to_ascii());
        return out;
    }

    out += "\nRooms:\n";
    for room in level.rooms() {
        out += &format!(
            "  [{}] {:10}  ({},{})  {}×{}\n",
            room.id,
            room.room_type.as_str(),
            room.x,
            room.y,
            room.width,
            room.height
        );
    }
    out += "\nRun with --ascii to see the tile map, or --json for full data.\n";
    out
}
