//! Dice Dropper entry point
//!
//! Rolls the requested dice on a virtual table, runs the simulation until
//! everything has come to rest and prints the outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use dice_dropper::consts::DEFAULT_MAX_TICKS;
use dice_dropper::renderer::{DieSnapshot, snapshot};
use dice_dropper::{DiceSelection, DiceTable, RollSummary, Tuning};

/// Drop dice on a virtual table and report where they land
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dice notation, e.g. 2d6 d20 3d4
    #[arg(required = true)]
    dice: Vec<String>,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Table size as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    size: (f32, f32),

    /// JSON file overriding physics/launch constants
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Give up after this many ticks
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u32,

    /// Print final dice and summary as JSON
    #[arg(long)]
    json: bool,
}

/// Everything printed by `--json`
#[derive(Serialize)]
struct RollReport {
    seed: u64,
    ticks: Option<u32>,
    settled: bool,
    dice: Vec<DieSnapshot>,
    summary: RollSummary,
}

fn parse_size(s: &str) -> Result<(f32, f32), String> {
    let invalid = || format!("expected WIDTHxHEIGHT, got '{}'", s);
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w: f32 = w.trim().parse().map_err(|_| invalid())?;
    let h: f32 = h.trim().parse().map_err(|_| invalid())?;
    if w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0 {
        Ok((w, h))
    } else {
        Err(invalid())
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let selection: DiceSelection = args.dice.join(" ").parse()?;
    if selection.is_empty() {
        return Err("No dice selected".into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Rolling {} dice with seed {}", selection.total(), seed);

    let mut table = DiceTable::new(seed, tuning);
    let (width, height) = args.size;
    table.resize(width, height);
    *table.selection_mut() = selection;
    table.roll();

    let ticks = table.run_to_rest(args.max_ticks);
    let summary = table.summary();

    if args.json {
        let report = RollReport {
            seed,
            ticks,
            settled: ticks.is_some(),
            dice: snapshot(table.dice()),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &summary.entries {
        println!("{:>4}: {}", entry.label, entry.result);
    }
    println!("total: {}", summary.total);
    match ticks {
        Some(t) => println!("settled after {} ticks (seed {})", t, seed),
        None => println!("still moving after {} ticks (seed {})", args.max_ticks, seed),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
