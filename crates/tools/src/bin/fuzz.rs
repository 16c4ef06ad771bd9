use anyhow::{Result, bail};
use clap::Parser;
use env_logger::Env;
use levelgen::{GeneratorConfig, Level, ProceduralLevelGenerator, RoomType, Tile};
use log::info;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about = "Stress the level generator with random configurations")]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    iterations: u32,
}

fn pick(rng: &mut ChaCha8Rng, low: usize, high: usize) -> usize {
    low + rng.next_u64() as usize % (high - low + 1)
}

fn random_config(rng: &mut ChaCha8Rng) -> GeneratorConfig {
    let width = pick(rng, 10, 120);
    let height = pick(rng, 10, 80);
    let largest_room = width.min(height) - 2;
    let max_room_size = pick(rng, 2, largest_room);
    let min_room_size = pick(rng, 2, max_room_size);
    GeneratorConfig {
        width,
        height,
        num_rooms: pick(rng, 0, 30),
        min_room_size,
        max_room_size,
        max_placement_attempts: pick(rng, 0, 80),
    }
}

fn check_invariants(level: &Level, config: &GeneratorConfig) -> Result<()> {
    let rooms = level.rooms();
    if level.tile_map().rows().iter().any(|row| row.chars().count() != config.width)
        || level.tile_map().height() != config.height
    {
        bail!("tile map shape differs from {}x{}", config.width, config.height);
    }
    for (index, room) in rooms.iter().enumerate() {
        if room.x < 1
            || room.y < 1
            || room.x + room.width > config.width - 1
            || room.y + room.height > config.height - 1
        {
            bail!("room {} leaves the grid margin", room.id);
        }
        if let Some(other) = rooms[index + 1..].iter().find(|other| room.overlaps(other, 1)) {
            bail!("room {} overlaps room {}", room.id, other.id);
        }
    }
    if level.corridors().len() != rooms.len().saturating_sub(1) {
        bail!("{} rooms joined by {} corridors", rooms.len(), level.corridors().len());
    }
    for corridor in level.corridors() {
        if corridor.path.iter().any(|&cell| level.tile_at(cell) == Tile::Wall) {
            bail!("corridor {} -> {} crosses a wall", corridor.from_room, corridor.to_room);
        }
    }
    if rooms.len() >= 4 && level.rooms_of_type(RoomType::Boss).count() != 1 {
        bail!("expected exactly one boss room among {} rooms", rooms.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting fuzz harness on seed {} for {} iterations...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let config = random_config(&mut rng);
        let level_seed = rng.next_u64();
        let generator = ProceduralLevelGenerator::new(config.clone())?;

        let first = generator.generate(Some(level_seed));
        let second = generator.generate(Some(level_seed));
        if first.fingerprint() != second.fingerprint() {
            bail!("iteration {iteration}: seed {level_seed} is not deterministic for {config:?}");
        }
        if let Err(err) = check_invariants(&first, &config) {
            bail!("iteration {iteration}: seed {level_seed} with {config:?}: {err}");
        }
    }

    info!("Fuzzing completed successfully.");
    Ok(())
}
