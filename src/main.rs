use std::path::PathBuf;

use scaffold_ml::artifact;
use scaffold_ml::config;
use scaffold_ml::requirements;
use scaffold_ml::workspace;
use scaffold_ml::workspace::ScaffoldManifest;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "scaffold-ml",
    about = "Provision ML training workspaces from a YAML configuration",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the artifact directory tree a configuration asks for
    Init {
        /// Path to the YAML configuration
        #[arg(long, default_value = "config.yaml")]
        config: PathBuf,
        /// Dotted key holding the list of directories to create
        #[arg(long, default_value = "artifacts.directories")]
        dirs_key: String,
        /// Write a JSON manifest of the provisioned tree to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Print planned directories without creating anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// List installable requirements from a pip requirements file
    Requirements {
        /// Path to the requirements file
        #[arg(long, default_value = "requirements.txt")]
        file: PathBuf,
        /// Emit the list as a JSON array instead of one per line
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a single configuration value by dotted key
    Get {
        /// Path to the YAML configuration
        #[arg(long, default_value = "config.yaml")]
        config: PathBuf,
        /// Dotted key to look up (e.g. model.name)
        key: String,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Init {
            config,
            dirs_key,
            manifest,
            dry_run,
        } => {
            info!(?config, dirs_key, ?manifest, dry_run, "starting init");
            let doc = config::read_yaml(&config)?;
            let directories: Vec<PathBuf> = doc.deserialize_at(&dirs_key)?;
            if directories.is_empty() {
                warn!(key = dirs_key, "configuration lists no directories");
            }
            if dry_run {
                for dir in &directories {
                    info!(path = %dir.display(), "would create directory");
                }
            } else {
                workspace::create_directories(&directories, true)?;
            }
            if let Some(manifest_path) = &manifest {
                let record = ScaffoldManifest {
                    config: config.clone(),
                    directories: directories.clone(),
                };
                if dry_run {
                    info!(path = %manifest_path.display(), "would write manifest");
                } else {
                    artifact::save_json(manifest_path, &record)?;
                }
            }
            info!(created = directories.len(), dry_run, "init completed");
            if dry_run {
                info!("dry-run completed; nothing touched on disk");
            }
        }
        Commands::Requirements { file, json } => {
            info!(?file, json, "listing requirements");
            let reqs = requirements::get_requirements(&file)?;
            if json {
                let rendered = serde_json::to_string_pretty(&reqs)
                    .context("failed to render requirements as JSON")?;
                println!("{rendered}");
            } else {
                for req in &reqs {
                    println!("{req}");
                }
            }
            info!(count = reqs.len(), "requirements listed");
        }
        Commands::Get { config, key } => {
            let doc = config::read_yaml(&config)?;
            match doc.require(&key)? {
                serde_yaml::Value::String(text) => println!("{text}"),
                other => {
                    let rendered = serde_yaml::to_string(other)
                        .context("failed to render configuration value")?;
                    print!("{rendered}");
                }
            }
        }
    }

    Ok(())
}
