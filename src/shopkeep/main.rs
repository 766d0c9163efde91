use clap::Parser;
use colored::*;
use shopkeep::config::ShopConfig;
use shopkeep::error::Result;
use shopkeep::interpreter::Interpreter;
use shopkeep::seed;
use shopkeep::store::Inventory;
use std::io::{self, BufRead, Write};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ShopConfig::load(".").unwrap_or_default();

    let mut store = Inventory::new();
    if let Some(path) = cli.seed.or(config.seed_file) {
        match seed::populate(&mut store, &path) {
            Ok(count) => {
                println!(
                    "{}",
                    format!("Loaded {} items from {}", count, path.display()).dimmed()
                );
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Warning: could not load {}: {}", path.display(), e).yellow()
                );
            }
        }
    }

    let mut interpreter = Interpreter::with_store(store);
    if !cli.no_banner {
        println!("{}", interpreter.introduction());
        println!();
    }

    // The shell owns stdin for the duration of the loop; the core
    // never sees it.
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", config.prompt.cyan());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        println!();

        let reply = interpreter.process_input(&line);
        if reply.starts_with("ERROR") {
            println!("{}", reply.red());
        } else {
            println!("{}", reply);
        }
        println!();

        if interpreter.wants_to_quit() {
            break;
        }
    }

    Ok(())
}
