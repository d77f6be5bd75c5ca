use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use ratmaze::levels;
use ratmaze::{Dir8, Map, MoveEffect, PlayState};

/// Replays rat and cat moves on a map and prints the outcome.
///
/// Moves are read one per line as `<rank> <direction>`, where rank 1.. counts
/// the live rats and then the live cats, and direction is one of
/// n ne e se s sw w nw. Blank lines and lines starting with `#` are skipped.
#[derive(Parser, Debug)]
#[command(name = "ratmaze", version)]
struct Args {
    /// Map file to load (`.csv` files use the CSV layout).
    #[arg(long, conflicts_with = "level")]
    map: Option<PathBuf>,

    /// Bundled level to play. Defaults to the first one.
    #[arg(long)]
    level: Option<String>,

    /// File of moves to replay. Reads stdin when omitted.
    #[arg(long)]
    moves: Option<PathBuf>,

    /// Print a JSON snapshot instead of the board.
    #[arg(long)]
    json: bool,

    /// List the bundled levels and exit.
    #[arg(long)]
    list_levels: bool,
}

fn load_map(args: &Args) -> Result<Map> {
    if let Some(path) = &args.map {
        return Ok(Map::load_from_file(path)?);
    }
    let name = match &args.level {
        Some(name) => name.clone(),
        None => levels::level_names()
            .next()
            .context("no bundled levels")?
            .to_string(),
    };
    Ok(levels::load_level(&name)?)
}

fn parse_move(line: &str) -> Option<(usize, Dir8)> {
    let mut words = line.split_whitespace();
    let rank = words.next()?.parse().ok()?;
    let dir = words.next()?.parse().ok()?;
    if words.next().is_some() {
        return None;
    }
    Some((rank, dir))
}

fn replay(map: &mut Map, moves: impl BufRead) -> Result<()> {
    for (number, line) in moves.lines().enumerate() {
        let line = line.context("failed to read moves")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((rank, dir)) = parse_move(line) else {
            log::warn!("Skipping malformed move on line {}: {line:?}", number + 1);
            continue;
        };

        let source = map
            .get_current_tile_by_rank(rank)
            .with_context(|| format!("line {}", number + 1))?
            .position();
        let destination = source + dir.delta();
        let effect = map.check_for_move_effects(source, destination);
        if effect != MoveEffect::InvalidMove {
            map.apply_move(source, destination);
        }
        println!("{rank} {dir:?}: {source} -> {destination} {effect:?}");

        if map.play_state() == PlayState::Over {
            log::info!("No rats left on the board");
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_levels {
        for name in levels::level_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut map = load_map(&args)?;
    if map.actor_count() == 0 {
        bail!("map has no rats or cats to move");
    }

    match &args.moves {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            replay(&mut map, BufReader::new(file))?;
        }
        None => replay(&mut map, io::stdin().lock())?,
    }

    if args.json {
        println!("{}", map.to_json());
    } else {
        print!("{map}");
    }
    Ok(())
}
