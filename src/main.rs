//
//  travis-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use travis_client::cli::Cli;
use travis_client::exit_codes;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    // Execute command and exit
    match cli.command.run(&cli.global).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("TRAVIS_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
