//! Game Menu entry point
//!
//! Boots the app once, then drives it with commands read from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use game_menu::platform::{self, FilePreferences};
use game_menu::{App, Command, Flow};

#[derive(Debug, Parser)]
#[command(name = "game-menu", version, about = "Headless game menu shell")]
struct Cli {
    /// Directory holding preferences.json and gamesave.json
    #[arg(long, env = "GAME_MENU_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Do not print the prompt (for piped input)
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let data_dir = platform::app_data_dir(cli.data_dir.as_deref());
    platform::ensure_data_dir(&data_dir)
        .with_context(|| format!("cannot prepare data directory {}", data_dir.display()))?;

    let prefs = FilePreferences::in_dir(&data_dir);
    let mut app = App::boot(&data_dir, prefs);
    log::info!("Game Menu running!");
    println!("{}", Command::help());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        if !cli.quiet {
            print!("> ");
            stdout.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line).context("failed to read stdin")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let result = line.parse::<Command>().and_then(|command| {
            let flow = app.execute(command)?;
            if command == Command::Status {
                println!("{}", app.status());
            }
            Ok(flow)
        });
        match result {
            Ok(Flow::Running) => {}
            Ok(Flow::Exit) => break,
            Err(e) => println!("{}", e),
        }
    }

    log::info!("Goodbye");
    Ok(())
}
