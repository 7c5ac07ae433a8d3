//! rxcmd - interactive demo shell for the dispatch engine.
//!
//! Registers a handful of device-style commands, then feeds stdin through
//! a [`LineBuffer`] into the [`Dispatcher`], printing each pass's outcome
//! the way a serial console would.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::error;

use cli::Cli;
use rxcmd::config::Config;
use rxcmd::engine::{help, CmdOption, Command, Dispatcher, Outcome, Param};
use rxcmd::{logging, LineBuffer};

fn main() {
    let cli = Cli::parse_args();

    if cli.log_file {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let prompt = cli.prompt.unwrap_or_else(|| config.shell.prompt.clone());
    let mut buffer = LineBuffer::new(config.buffer.capacity, config.buffer.end_of_line_char()?);
    let mut dispatcher = build_dispatcher()?;

    if !cli.execute.is_empty() {
        for line in &cli.execute {
            let outcome = dispatcher.dispatch(line);
            handle_outcome(&dispatcher, outcome);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{prompt}");
    stdout.flush()?;

    for chunk in stdin.lock().lines() {
        let mut chunk = chunk.context("reading stdin")?;
        chunk.push(buffer.end_of_line());

        for line in buffer.push_str(&chunk) {
            let outcome = dispatcher.dispatch(&line);
            let quit = matches!(&outcome, Outcome::Executed { command, .. } if command == "quit");
            handle_outcome(&dispatcher, outcome);
            if quit {
                return Ok(());
            }
        }

        print!("{prompt}");
        stdout.flush()?;
    }

    Ok(())
}

fn handle_outcome(dispatcher: &Dispatcher, outcome: Outcome) {
    match outcome {
        Outcome::NoInput => {}
        // The notification already printed a message
        Outcome::Unrecognized { .. } => {}
        Outcome::Executed { command, failed_callbacks } => {
            if command == "help" {
                print!("{}", help::registry_help(dispatcher.registry()));
            }
            if failed_callbacks > 0 {
                println!("{command}: {failed_callbacks} callback(s) reported failure");
            }
        }
    }
}

/// Registers the demo command set.
fn build_dispatcher() -> anyhow::Result<Dispatcher> {
    let mut dispatcher = Dispatcher::new();

    let mut set = Command::new("set", "Set a configuration key.").with_callback(|cmd| {
        let verbose = cmd.option_by_long("verbose").is_some_and(|o| o.is_detected());
        let key = cmd.params()[0].value().unwrap_or("(missing)");
        let value = cmd.params()[1].value().unwrap_or("(missing)");
        println!("set {key} = {value}{}", if verbose { " (verbose)" } else { "" });
        true
    });
    set.register_option(CmdOption::new('v', "verbose", "Print more detail."))?;
    set.register_option(
        CmdOption::new('o', "output", "Write the result to a file.").takes_value(true),
    )?;
    set.register_param(Param::new("Key to set."));
    set.register_param(Param::new("Value to store."));
    set.add_to_group("config");
    dispatcher.register(set)?;

    let echo = {
        let mut cmd = Command::new("echo", "Echo the first parameter back.");
        cmd.register_param(Param::new("Text to echo.").with_callback(|value| {
            println!("{value}");
            true
        }));
        cmd
    };
    dispatcher.register(echo)?;

    let status = Command::new("status", "Print engine status.").with_callback(|_| {
        println!("ok");
        true
    });
    dispatcher.register(status)?;

    // Rendering happens in handle_outcome, where the registry is visible.
    dispatcher.register(Command::new("help", "List available commands."))?;
    dispatcher.register(Command::new("quit", "Exit the shell."))?;

    dispatcher.on_unrecognized(|token| {
        println!("Unrecognized command: '{token}'. Try 'help'.");
    });

    Ok(dispatcher)
}
