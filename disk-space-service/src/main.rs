// SPDX-License-Identifier: GPL-3.0-only

//! disk-space - host for the `disk_space` method channel
//!
//! Answers capacity requests for the filesystem holding the application's
//! data directory, either one-shot (`call`, `report`) or as a line-oriented
//! JSON loop on stdin/stdout (`serve`).

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use disk_space_service::{
    CapacityReport, Config, DiskSpacePlugin, MethodChannel, logging, serve,
};
use disk_space_types::{CHANNEL_NAME, MethodCall};

#[derive(Debug, Parser)]
#[command(name = "disk-space")]
#[command(about = "Report disk capacity of the application data filesystem", version)]
struct Args {
    /// TOML config file (defaults to $DISK_SPACE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Application home/data directory
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Document directory searched first by the legacy free-space probe
    #[arg(long, global = true)]
    documents: Option<PathBuf>,

    /// Skip the important-usage metric and read raw free size only
    #[arg(long, global = true)]
    legacy_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dispatch one request and print its JSON response
    Call { method: String },

    /// Print total, free and used capacity
    Report {
        #[arg(long)]
        json: bool,
    },

    /// Answer newline-delimited JSON requests from stdin until EOF
    Serve,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(home) = args.home {
        config.home_dir = Some(home);
    }
    if let Some(documents) = args.documents {
        config.documents_dir = Some(documents);
    }
    if args.legacy_only {
        config.prefer_important_usage = false;
    }

    logging::init(&config);
    tracing::debug!("disk-space v{} with {:?}", env!("CARGO_PKG_VERSION"), config);

    let plugin = DiskSpacePlugin::new(config.build_query());
    let mut channel = MethodChannel::new(CHANNEL_NAME);
    plugin
        .register(&mut channel)
        .context("registering disk space handlers")?;

    match args.command {
        Command::Call { method } => {
            let value = channel.invoke(&MethodCall::new(method));
            println!("{}", serde_json::to_string(&value)?);
        }
        Command::Report { json } => {
            let report = CapacityReport::from_query(plugin.query());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Command::Serve => {
            tracing::info!(
                "Serving {} on stdin/stdout, methods: {:?}",
                channel.name(),
                channel.methods()
            );
            let answered = serve(&channel, io::stdin().lock(), io::stdout().lock())
                .context("serving method channel")?;
            tracing::info!("Input closed after {} requests", answered);
        }
    }

    Ok(())
}
