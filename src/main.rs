//! Memchip Puzzle - Terminal front end
//!
//! Stands in for the canvas renderer: pointer gestures, buttons and the
//! rotate key are typed as commands, and the board is printed after each one.

use memchip_puzzle::core::error::Result;
use memchip_puzzle::core::types::{ChipId, Point};
use memchip_puzzle::core::PuzzleConfig;
use memchip_puzzle::engine::PuzzleEngine;
use memchip_puzzle::ui::{BankToggle, ChipAppearance};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Memory-chip placement puzzle
#[derive(Parser, Debug)]
#[command(name = "memchip")]
#[command(about = "Drag, rotate and snap sixteen memory chips onto their board positions")]
struct Args {
    /// TOML config file (missing keys keep their defaults)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed for reproducible layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a random layout instead of the solved board
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("memchip_puzzle=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PuzzleConfig::load(path)?,
        None => PuzzleConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.shuffle {
        config.start_with_correct_position = false;
    }

    let mut engine = PuzzleEngine::new(config)?;
    tracing::info!("Memchip puzzle ready with {} chips", engine.chips().len());

    print_help();

    loop {
        engine.tick();
        display_board(&engine);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match command {
            "quit" | "q" => break,
            "help" | "h" => print_help(),
            "place" | "restart" => {
                let warnings = engine.restart();
                for warning in warnings {
                    println!(
                        "Warning: {} overlaps after {} attempts",
                        warning.chip, warning.attempts
                    );
                }
            }
            "resolve" => engine.resolve_to_targets(),
            "rotate" | "r" => {
                let rotated = match rest.first() {
                    Some(id) => engine.rotate(&ChipId::from(*id)),
                    None => engine.rotate_selected(),
                };
                if !rotated {
                    println!("Nothing rotated (unknown chip, no selection or turn running)");
                }
            }
            "down" | "move" => match parse_point(&rest) {
                Some(point) if command == "down" => match engine.pointer_down(point) {
                    Some(id) => println!("Grabbed {}", id),
                    None => println!("No chip there"),
                },
                Some(point) => {
                    if !engine.pointer_move(point) {
                        println!("Not dragging anything");
                    }
                }
                None => println!("Usage: {} <x> <y>", command),
            },
            "up" => match engine.pointer_up() {
                Some(slot) => println!("Snapped to {}", slot),
                None => println!("Released"),
            },
            "at" => match parse_point(&rest) {
                Some(point) => match engine.chip_at(point) {
                    Some(id) => println!("{}", id),
                    None => println!("(empty)"),
                },
                None => println!("Usage: at <x> <y>"),
            },
            "ras0" | "ras1" | "cas0" | "cas2" => {
                if let Ok(toggle) = command.parse::<BankToggle>() {
                    engine.toggle_bank(toggle);
                }
            }
            "power" => {
                let feedback = engine.power_on();
                display_board(&engine);
                engine.power_off();
                match feedback.tune {
                    Some(tune) => println!("♪ {:?}", tune.shape),
                    None => println!("(speaker busy)"),
                }
            }
            "check" => {
                let report = engine.validate_all();
                if rest.first() == Some(&"--json") {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    for verdict in &report.verdicts {
                        let mark = if verdict.is_correct { "ok " } else { "BAD" };
                        println!("  {} {} {:?}", mark, verdict.chip, verdict.faults);
                    }
                    println!(
                        "{} of {} chips incorrect",
                        report.incorrect_count(),
                        report.verdicts.len()
                    );
                }
            }
            "status" | "s" => display_log(&engine),
            _ => println!("Unknown command. Type 'help' for the list."),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn parse_point(args: &[&str]) -> Option<Point> {
    match args {
        [x, y] => Some(Point::new(x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

fn print_help() {
    println!("\n=== MEMCHIP PUZZLE ===");
    println!("Place every memory chip on its board position, then power on.");
    println!();
    println!("Commands:");
    println!("  place / restart     - New game with a random layout");
    println!("  resolve             - Put every chip on its target");
    println!("  rotate [id] / r     - Turn a chip (default: selected) by 90°");
    println!("  down <x> <y>        - Press the pointer (selects and grabs)");
    println!("  move <x> <y>        - Drag the grabbed chip");
    println!("  up                  - Release (snaps onto a nearby slot)");
    println!("  at <x> <y>          - Which chip is under a point");
    println!("  ras0 ras1 cas0 cas2 - Toggle bank strobes");
    println!("  power               - Press and release the power button");
    println!("  check [--json]      - Validation report");
    println!("  status / s          - Recent events");
    println!("  quit / q            - Exit");
    println!();
}

/// One line per chip: pose and how it would be drawn
fn display_board(engine: &PuzzleEngine) {
    println!();
    let bank = &engine.ui().bank;
    println!(
        "--- RAS0 {} RAS1 {} CAS0 {} CAS2 {} ---",
        on_off(bank.ras0),
        on_off(bank.ras1),
        on_off(bank.cas0),
        on_off(bank.cas2)
    );

    for view in engine.chip_views() {
        let marker = if view.highlighted { '*' } else { ' ' };
        let look = match view.appearance {
            ChipAppearance::Normal => "",
            ChipAppearance::BankSelected => "selected",
            ChipAppearance::Correct => "CORRECT",
            ChipAppearance::Incorrect => "WRONG",
        };
        println!(
            " {}{:<8} ({:>7.1}, {:>6.1}) {:>5.1}° {}",
            marker, view.id, view.x, view.y, view.angle, look
        );
    }
    println!();
}

fn display_log(engine: &PuzzleEngine) {
    println!();
    println!("=== Recent events ===");
    for entry in engine.ui().event_log.iter().rev().take(10) {
        println!(
            "  [{:>7.2}s] {:?}: {}",
            entry.at.as_secs_f32(),
            entry.category,
            entry.message
        );
    }
    println!();
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
