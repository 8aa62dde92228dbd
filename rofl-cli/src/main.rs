//! ROFL CLI - Command-line tool for replay metadata extraction
//!
//! This binary provides command-line interfaces for:
//! - extract: locate and decode the metadata block → canonical JSON file
//! - ls: summarize a replay's envelope and players
//! - cat: stream one stat field across all player records

use clap::{Parser, Subcommand, ValueEnum};
use rofl_codec::StatValue;
use rofl_format::field_kind;
use rofl_io::{extract, RoflFile};
use serde_json::{json, Value};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rofl")]
#[command(about = "ROFL replay metadata extraction CLI tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the embedded metadata block to a canonical JSON file
    Extract {
        /// Input replay file (.rofl)
        input: PathBuf,
        /// Output file for the canonical metadata JSON
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Summarize the envelope and player records
    ///
    /// Examples:
    ///   rofl ls replay.rofl
    ///   rofl ls replay.rofl --format json
    Ls {
        /// Input replay file (.rofl)
        input: PathBuf,
        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = LsFormat::Table)]
        format: LsFormat,
    },
    /// Stream values of one stat field across all player records
    ///
    /// Examples:
    ///   rofl cat replay.rofl --field NAME
    ///   rofl cat replay.rofl --field GOLD_EARNED --format csv
    Cat {
        /// Input replay file (.rofl)
        input: PathBuf,
        /// Stat field name to extract
        #[arg(long)]
        field: String,
        /// Output format (ndjson, csv)
        #[arg(long, value_enum, default_value_t = CatFormat::Ndjson)]
        format: CatFormat,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum LsFormat {
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CatFormat {
    Ndjson,
    Csv,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { input, output } => handle_extract(input, output),
        Commands::Ls { input, format } => handle_ls(input, format),
        Commands::Cat {
            input,
            field,
            format,
        } => handle_cat(input, field, format),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn handle_extract(input: PathBuf, output: PathBuf) -> Result<(), Box<dyn Error>> {
    let summary = extract(&input, &output)?;
    println!(
        "Extracted {} record(s) to {} ({} bytes, metadata at offset {})",
        summary.record_count,
        output.display(),
        summary.bytes_written,
        summary.metadata_offset
    );
    Ok(())
}

fn handle_ls(input: PathBuf, format: LsFormat) -> Result<(), Box<dyn Error>> {
    let file = RoflFile::open(&input)?;
    let metadata = file.metadata();

    match format {
        LsFormat::Table => {
            println!("game length:        {}", metadata.game_length.value());
            println!("last game chunk id: {}", metadata.last_game_chunk_id.value());
            println!("last key frame id:  {}", metadata.last_key_frame_id.value());
            println!("records:            {}", metadata.stats.len());
            if !metadata.stats.is_empty() {
                println!();
                println!("{:<6} {}", "TEAM", "NAME");
                for record in &metadata.stats {
                    println!(
                        "{:<6} {}",
                        record
                            .team()
                            .map(|team| team.to_string())
                            .unwrap_or_default(),
                        record.name().unwrap_or("")
                    );
                }
            }
        }
        LsFormat::Json => {
            let players: Vec<Value> = metadata
                .stats
                .iter()
                .map(|record| {
                    json!({
                        "name": record.name(),
                        "team": record.team(),
                    })
                })
                .collect();
            let summary = json!({
                "gameLength": metadata.game_length.value(),
                "lastGameChunkId": metadata.last_game_chunk_id.value(),
                "lastKeyFrameId": metadata.last_key_frame_id.value(),
                "records": metadata.stats.len(),
                "players": players,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn handle_cat(input: PathBuf, field: String, format: CatFormat) -> Result<(), Box<dyn Error>> {
    let file = RoflFile::open(&input)?;
    let metadata = file.metadata();

    let present = metadata
        .stats
        .iter()
        .any(|record| record.get(&field).is_some());
    if !present && field_kind(&field).is_none() {
        return Err(format!("unknown stat field '{field}'").into());
    }

    for record in &metadata.stats {
        let value = record
            .get(&field)
            .map(StatValue::to_value)
            .unwrap_or(Value::Null);
        match format {
            CatFormat::Ndjson => println!("{}", serde_json::to_string(&value)?),
            CatFormat::Csv => match value {
                Value::String(text) => println!("{text}"),
                Value::Null => println!(),
                other => println!("{other}"),
            },
        }
    }
    Ok(())
}
