//! filestash CLI Client
//!
//! Command-line interface for a running filestash server.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use filestash::network::{DELETE_PATH, EXTRACT_PATH, SAVE_PATH};
use filestash::protocol::{codec, DeleteRequest, ExtractRequest, OperationResult, SaveRequest};
use serde::Serialize;

/// filestash CLI
#[derive(Parser, Debug)]
#[command(name = "filestash-cli")]
#[command(about = "CLI for the filestash file store")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a local file
    Save {
        /// Local file to upload
        path: PathBuf,

        /// Name to store it under (defaults to the local file name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Download a stored file
    Extract {
        /// Stored file name
        name: String,

        /// Where to write the content (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a stored file
    Del {
        /// Stored file name
        name: String,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::new();
    let base = args.server.trim_end_matches('/');

    match args.command {
        Commands::Save { path, name } => {
            let name = match name {
                Some(n) => n,
                None => path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
                    .context("cannot derive a file name, pass --name")?,
            };
            let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let request = SaveRequest {
                file_body: codec::encode(&data),
                file_name: name.clone(),
            };
            call(&client, base, SAVE_PATH, &request)?;
            println!("saved {} ({} bytes)", name, data.len());
        }
        Commands::Extract { name, output } => {
            let request = ExtractRequest { file_name: name };
            let result = call(&client, base, EXTRACT_PATH, &request)?;
            let data = result
                .decode_body()
                .context("server response has no FileBody")?
                .context("server returned an undecodable body")?;
            match output {
                Some(path) => {
                    fs::write(&path, &data).with_context(|| format!("writing {}", path.display()))?
                }
                None => {
                    use std::io::Write;
                    std::io::stdout().write_all(&data)?;
                }
            }
        }
        Commands::Del { name } => {
            let request = DeleteRequest { file_name: name.clone() };
            call(&client, base, DELETE_PATH, &request)?;
            println!("deleted {name}");
        }
    }

    Ok(())
}

fn call<T: Serialize>(
    client: &reqwest::blocking::Client,
    base: &str,
    path: &str,
    request: &T,
) -> anyhow::Result<OperationResult> {
    let url = format!("{base}{path}");
    let response = client
        .post(&url)
        .json(request)
        .send()
        .with_context(|| format!("POST {url}"))?;
    let status = response.status();
    let result: OperationResult = response
        .json()
        .with_context(|| format!("unexpected response from {url} ({status})"))?;

    if !result.success {
        bail!("{} ({})", result.message, status);
    }
    Ok(result)
}
