//! Rotation Planner CLI
//!
//! Loads a roster JSON file and renders rotation schedules and play-time
//! reports for a fixed-length game.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;

use rp_core::analysis::{build_play_time_report, minute_label};
use rp_core::engine::substitutions;
use rp_core::models::{GameFormat, Roster, Schedule};
use rp_core::RotationScheduler;

#[derive(Parser)]
#[command(name = "rp_cli")]
#[command(about = "Plan play-time rotations for a fixed-length game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rotation schedule with per-slot lineups and substitutions
    Schedule {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print the per-player play-time report
    Report {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Roster JSON file path
    #[arg(long)]
    roster: PathBuf,

    /// Competitive balance: 0 = fair play, 100 = competitive
    #[arg(long, default_value = "50")]
    balance: u8,

    /// Comma-separated player ids; overrides the roster's attendance flags
    #[arg(long)]
    present: Option<String>,

    /// Game length in minutes
    #[arg(long, default_value = "40")]
    total_minutes: u32,

    /// Rotation length in minutes
    #[arg(long, default_value = "5")]
    rotation_minutes: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule { game } => {
            let (schedule, format) = generate(&game)?;
            print_schedule(&schedule, &format, game.balance);
        }
        Commands::Report { game } => {
            let (schedule, format) = generate(&game)?;
            print_report(&schedule, &format);
        }
    }

    Ok(())
}

fn generate(args: &GameArgs) -> Result<(Schedule, GameFormat)> {
    if args.balance > 100 {
        bail!("--balance must be in 0..=100, got {}", args.balance);
    }

    let raw = std::fs::read_to_string(&args.roster)
        .with_context(|| format!("Failed to read roster file: {}", args.roster.display()))?;
    let mut roster: Roster = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid roster JSON: {}", args.roster.display()))?;
    roster.validate().map_err(|e| anyhow::anyhow!(e)).context("Invalid roster")?;

    if let Some(ids) = &args.present {
        let present_ids = parse_present_ids(ids)?;
        for id in &present_ids {
            if roster.get(*id).is_none() {
                bail!("--present names unknown player id {id}");
            }
        }
        for player in &mut roster.players {
            player.present = present_ids.contains(&player.id);
        }
    }

    let format = GameFormat::new(args.total_minutes, args.rotation_minutes);
    let scheduler = RotationScheduler::new(format).context("Invalid game format")?;
    let schedule = scheduler
        .generate(&roster.present_players(), args.balance)
        .context("Schedule generation failed")?;
    Ok((schedule, format))
}

fn parse_present_ids(ids: &str) -> Result<HashSet<u32>> {
    ids.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u32>().with_context(|| format!("Invalid player id in --present: {token}"))
        })
        .collect()
}

fn print_schedule(schedule: &Schedule, format: &GameFormat, balance: u8) {
    println!("🗓  Rotation Schedule");
    println!(
        "   Game:    {} minutes, {}-minute rotations ({} slots)",
        format.total_minutes,
        format.rotation_minutes,
        schedule.slots.len()
    );
    println!("   Balance: {balance}% competitive, {}% fair play", 100 - balance);

    for (index, slot) in schedule.slots.iter().enumerate() {
        let start = slot.start_minute(format);
        let end = slot.end_minute(format);
        if start % format.quarter_minutes() == 0 {
            println!("\nQuarter {}", start / format.quarter_minutes() + 1);
        }

        let names: Vec<&str> = slot.players.iter().map(|p| p.name.as_str()).collect();
        println!(
            "  {} → {}: {}",
            minute_label(start, format),
            minute_label(end, format),
            names.join(", ")
        );

        let previous = index.checked_sub(1).map(|i| &schedule.slots[i]);
        for sub in substitutions(slot, previous) {
            println!("      {} replaces {}", sub.player_in.name, sub.player_out.name);
        }
    }
}

fn print_report(schedule: &Schedule, format: &GameFormat) {
    println!("📋 Player Game Report");

    for report in build_play_time_report(schedule) {
        println!(
            "\n{} (rank {}) — {} minutes played",
            report.player.name, report.player.rank, report.total_play_time
        );

        println!("   Field time:");
        for interval in &report.field_times {
            println!(
                "      {} - {}",
                minute_label(interval.start, format),
                minute_label(interval.end, format)
            );
        }

        println!("   Sideline time:");
        if report.sideline_times.is_empty() {
            println!("      (none)");
        }
        for interval in &report.sideline_times {
            println!(
                "      {} - {}",
                minute_label(interval.start, format),
                minute_label(interval.end, format)
            );
        }
    }
}
