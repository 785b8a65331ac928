//! AI Simulator CLI - Fast in-memory Chkobba games between automated seats.
//!
//! Runs complete games without rooms or timers so AI strategies can be
//! compared over many deals.

mod metrics;
mod output;
mod simulator;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chkobba_engine::ai::Difficulty;
use chkobba_engine::domain::rules::validate_seat_count;
use clap::{Parser, ValueEnum};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Chkobba simulator for AI training")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Difficulty per seat, comma separated (2 to 4 seats)
    #[arg(long, value_delimiter = ',', default_value = "hard,hard")]
    seats: Vec<Difficulty>,

    /// Points needed to end a game
    #[arg(long, default_value = "21")]
    target: u32,

    /// Seed of the first game; game N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show run progress and the summary table
    #[arg(long)]
    show_output: bool,

    /// JSON lines file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a CSV summary to this file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Gzip the JSON lines file
    #[arg(long, requires = "output")]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "basic")]
    metrics_level: MetricsLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricsLevel {
    Basic,
    Detailed,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so JSON lines on stdout stay clean.
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    validate_seat_count(args.seats.len())?;
    if args.target == 0 {
        return Err("--target must be at least 1".into());
    }

    info!(games = args.games, seats = ?args.seats, target = args.target, "Starting AI simulator");

    let mut output_writer =
        OutputWriter::new(args.output.as_deref(), args.csv.as_deref(), args.compress)?;
    let simulator = Simulator::new(args.seats.clone(), args.target);
    let first_seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let detailed = args.metrics_level == MetricsLevel::Detailed;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = first_seed.wrapping_add(u64::from(game_num - 1));

        match simulator.simulate_game(i64::from(game_num), seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    simulator.seats(),
                    args.target,
                    &result,
                    duration_ms,
                    detailed,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game = game_num, error = %e, "Failed to write metrics");
                }
                info!(game = game_num, scores = ?result.final_scores, winners = ?result.winners, "Game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, seed, error = %e, "Game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    if let Some(path) = output_writer.jsonl_path() {
        info!("Results written to: {}", path.display());
    }
    output_writer.finish()?;

    if args.show_output {
        print_summary(&results, simulator.seats(), errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    seats: &[Difficulty],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        eprintln!("Errors: {errors}");
    }
    eprintln!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    eprintln!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let n = seats.len();
    let mut wins = vec![0u32; n];
    let mut total_scores = vec![0u64; n];
    let mut chkobbas = vec![0u64; n];
    let mut rounds = 0usize;

    for result in results {
        rounds += result.rounds.len();
        for (&seat, &score) in &result.final_scores {
            total_scores[seat as usize] += u64::from(score);
        }
        for &seat in &result.winners {
            wins[seat as usize] += 1;
        }
        for (seat, &c) in result.chkobbas.iter().enumerate() {
            chkobbas[seat] += u64::from(c);
        }
    }

    let games = results.len() as f64;
    eprintln!("Average rounds per game: {:.1}", rounds as f64 / games);
    eprintln!("\n=== Results by Seat ===");
    for (seat, difficulty) in seats.iter().enumerate() {
        eprintln!(
            "Seat {} ({}): avg={:.1}, chkobbas/game={:.2}, wins={} ({:.1}%)",
            seat,
            difficulty,
            total_scores[seat] as f64 / games,
            chkobbas[seat] as f64 / games,
            wins[seat],
            wins[seat] as f64 / games * 100.0
        );
    }
}
