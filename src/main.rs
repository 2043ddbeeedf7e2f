use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{init_logging, load_fleet, run_session, simulate, Battleship};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire at a fleet by typing coordinates as "row column".
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "JSON fleet layout to play against instead of a random one")]
        fleet: Option<PathBuf>,
    },
    /// Validate a fleet layout file.
    Check {
        #[arg(long)]
        fleet: PathBuf,
    },
    /// Sink a random fleet with random shots and print the tally as JSON.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, fleet } => {
            let mut board = match fleet {
                Some(path) => Battleship::new(load_fleet(&path)?),
                None => {
                    if let Some(s) = seed {
                        println!("Using fixed seed: {} (fleet will be reproducible)", s);
                    }
                    Battleship::random(&mut make_rng(seed))?
                }
            };
            println!("Enter a target as \"row column\", \"show\" to see the board, \"quit\" to stop.");
            let stdin = io::stdin();
            let summary = run_session(&mut board, stdin.lock(), io::stdout())?;
            println!(
                "{} shots: {} hits, {} misses, {} ships sunk",
                summary.shots, summary.hits, summary.misses, summary.sunk
            );
        }
        Commands::Check { fleet } => {
            let board = Battleship::new(load_fleet(&fleet)?);
            match board.diagnostic() {
                Some(err) => println!("Fleet is invalid ({})", err),
                None => println!("Fleet is valid"),
            }
            print!("{}", board);
        }
        Commands::Sim { seed } => {
            let mut rng = make_rng(seed);
            let mut board = Battleship::random(&mut rng)?;
            let summary = simulate(&mut board, &mut rng);
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
