//! Headless shrinkfit round runner.
//!
//! Plays rounds with a fixed frame step and prints what the player would
//! have scored.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # One unattended round
//!   cargo run --bin simulate -- --stop-at 94.68       # Stop 94.68 s in
//!   cargo run --bin simulate -- --stop-at 94 --auto   # Then one unattended round
//!   cargo run --bin simulate -- --sweep 90 95 0.5     # Score curve near the target
//!   cargo run --bin simulate -- --dt 33 --json        # 30 fps, JSON output

use shrinkfit::core::ConfigError;
use shrinkfit::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    let report = run_simulation(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn print_usage() {
    eprintln!(
        "Usage: simulate [--stop-at <secs>]... [--auto]... [--sweep <from> <to> <step>]\n\
         \x20               [--dt <ms>] [--initial-scale <f>] [--shrink-rate <f>] [--json]\n\
         \n\
         --auto queues a round that runs until the painting auto-stops.\n\
         Rounds play in the order given."
    );
}

fn parse_number(flag: &str, value: Option<&String>) -> Result<f64, ConfigError> {
    let bad = || ConfigError::BadArgument {
        flag: flag.to_string(),
        value: value.cloned().unwrap_or_default(),
    };
    value.ok_or_else(bad)?.parse().map_err(|_| bad())
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), ConfigError> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--stop-at" => {
                let seconds = parse_number(flag, args.get(i + 1))?;
                config.stop_times.push(Some(seconds));
                i += 1;
            }
            "--auto" => {
                config.stop_times.push(None);
            }
            "--sweep" => {
                let from = parse_number(flag, args.get(i + 1))?;
                let to = parse_number(flag, args.get(i + 2))?;
                let step = parse_number(flag, args.get(i + 3))?;
                config.add_sweep(from, to, step)?;
                i += 3;
            }
            "--dt" => {
                let value = args.get(i + 1);
                config.frame_ms = value
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(|| ConfigError::BadArgument {
                        flag: flag.to_string(),
                        value: value.cloned().unwrap_or_default(),
                    })?;
                i += 1;
            }
            "--initial-scale" | "--shrink-rate" => {
                let value = args.get(i + 1).map(String::as_str).unwrap_or_default();
                config.game.apply_override(flag, value)?;
                i += 1;
            }
            "--json" => {
                json = true;
            }
            other => {
                return Err(ConfigError::BadArgument {
                    flag: "argument".to_string(),
                    value: other.to_string(),
                });
            }
        }
        i += 1;
    }

    config.validate()?;
    Ok((config, json))
}
