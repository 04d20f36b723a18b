mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use shrinkfit::build_info;
use shrinkfit::core::{
    format_score, ConfigError, FrameClock, GameConfig, ScaleReadout, SessionStats, ShrinkGame,
    TextPanel,
};
use shrinkfit::input::TerminalInput;
use shrinkfit::utils::logging;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use ui::{draw_ui, TerminalGame};

#[derive(Debug, PartialEq)]
enum Command {
    Play(PlayOptions),
    InitConfig { path: Option<PathBuf> },
    Help,
    Version,
}

#[derive(Debug, Default, PartialEq)]
struct PlayOptions {
    config_path: Option<PathBuf>,
    /// (flag, value) pairs applied on top of the config file, in order.
    overrides: Vec<(String, String)>,
    log_path: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'shrinkfit --help' for usage.");
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            Ok(())
        }
        Command::InitConfig { path } => {
            if let Err(e) = init_config(path.as_deref()) {
                report(&e);
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Play(options) => play(options),
    }
}

fn print_help() {
    println!("Shrinkfit - stop the painting when it fits the frame\n");
    println!("Usage: shrinkfit [command] [options]\n");
    println!("Commands:");
    println!("  init-config            Write the default config file");
    println!("  --version              Show version information");
    println!("  --help                 Show this help message\n");
    println!("Options:");
    println!("  --config <path>        Read settings from this JSON file");
    println!("  --initial-scale <f>    Starting size of the painting");
    println!("  --shrink-rate <f>      Size lost per second");
    println!("  --frame-ms <n>         Frame interval in milliseconds");
    println!("  --log <path>           Append log lines to this file\n");
    println!("Controls:");
    println!("  Space, Enter, click    Stop the painting");
    println!("  R                      Restart after a round");
    println!("  Q, Esc                 Quit");
}

/// Print an error and every error that caused it.
fn report(err: &dyn Error) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

fn parse_args(args: &[String]) -> Result<Command, ConfigError> {
    let mut options = PlayOptions::default();
    let mut init_config = false;

    let missing = |flag: &str| ConfigError::BadArgument {
        flag: flag.to_string(),
        value: String::new(),
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "init-config" if i == 1 => init_config = true,
            "--config" | "--log" | "--initial-scale" | "--shrink-rate" | "--frame-ms" => {
                let value = args.get(i + 1).ok_or_else(|| missing(flag))?;
                match flag {
                    "--config" => options.config_path = Some(PathBuf::from(value)),
                    "--log" => options.log_path = Some(PathBuf::from(value)),
                    _ => options.overrides.push((flag.to_string(), value.clone())),
                }
                i += 1;
            }
            other => {
                return Err(ConfigError::BadArgument {
                    flag: "argument".to_string(),
                    value: other.to_string(),
                })
            }
        }
        i += 1;
    }

    if init_config {
        Ok(Command::InitConfig {
            path: options.config_path,
        })
    } else {
        Ok(Command::Play(options))
    }
}

fn load_config(options: &PlayOptions) -> Result<GameConfig, ConfigError> {
    let mut config = GameConfig::load(options.config_path.as_deref())?;
    for (flag, value) in &options.overrides {
        config.apply_override(flag, value)?;
    }
    config.validate()?;
    Ok(config)
}

fn init_config(path: Option<&Path>) -> Result<(), ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => GameConfig::default_path()?,
    };
    if path.exists() {
        println!("Config already exists at {} (left unchanged)", path.display());
        return Ok(());
    }
    GameConfig::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn play(options: PlayOptions) -> io::Result<()> {
    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        if let Err(e) = logging::init_file_logging(path) {
            eprintln!("Could not open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
    tracing::info!(
        initial_scale = config.initial_scale,
        shrink_rate = config.shrink_rate,
        frame_interval_ms = config.frame_interval_ms,
        "starting shrinkfit"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, config);

    // Cleanup terminal, even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let stats = result?;
    tracing::info!(rounds = stats.rounds(), "quit");

    if let Some(best) = stats.best() {
        println!(
            "Rounds played: {}  Best score: {} ({})",
            stats.rounds(),
            format_score(best.score),
            best.grade.message()
        );
    }
    println!("Goodbye!");

    Ok(())
}

/// Frame loop: gather input until the frame is due, tick, draw.
fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    config: GameConfig,
) -> io::Result<SessionStats> {
    let mut game: TerminalGame =
        ShrinkGame::new(config, TextPanel::default(), ScaleReadout::default());
    let mut stats = SessionStats::new();
    let mut input = TerminalInput::new();
    let mut clock = FrameClock::new();
    let frame_interval = config.frame_interval();

    loop {
        terminal.draw(|frame| draw_ui(frame, &game, &stats))?;

        let deadline = Instant::now() + frame_interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            input.handle(&event::read()?);
            if input.quit_requested() {
                return Ok(stats);
            }
        }

        if let Some(evaluation) = game.tick(&mut clock, &mut input) {
            stats.record(&evaluation);
        }
    }
}
