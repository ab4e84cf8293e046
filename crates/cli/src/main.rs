use clap::{Parser, Subcommand};
use linkmark_cli::commands::{inspect, list, load, pack, save, unpack, verify};
use linkmark_cli::telemetry;
use linkmark_persistence::StoreConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkmark")]
#[command(about = "Pack, restore and check linkmark database snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct StoreArgs {
    /// Snapshot store directory
    #[arg(long, short, env = "LINKMARK_SNAPSHOT_DIR")]
    dir: Option<PathBuf>,
}

impl StoreArgs {
    fn config(&self) -> anyhow::Result<StoreConfig> {
        let mut cfg = StoreConfig::from_env()?;
        if let Some(dir) = &self.dir {
            cfg.root = dir.clone();
        }
        Ok(cfg)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a state file and an event log file into one snapshot blob
    Pack {
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        events: PathBuf,
        #[arg(long, short)]
        out: PathBuf,
        /// Write the bare container without the integrity envelope
        #[arg(long)]
        raw: bool,
    },
    /// Split a snapshot blob back into its state and event log files
    Unpack {
        blob: PathBuf,
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        events: PathBuf,
        /// The blob is a bare container
        #[arg(long)]
        raw: bool,
    },
    /// Store a snapshot under a key
    Save {
        key: String,
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        events: PathBuf,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Restore a stored snapshot into files
    Load {
        key: String,
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        events: PathBuf,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// List stored snapshots
    List {
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Show header fields of a snapshot blob
    Inspect {
        blob: PathBuf,
        #[arg(long)]
        raw: bool,
        #[arg(long)]
        json: bool,
    },
    /// Verify the checksum and container bounds of a snapshot blob
    Verify {
        blob: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { state, events, out, raw } => {
            pack::run(&state, &events, &out, raw).map(|_| ())
        }
        Commands::Unpack { blob, state, events, raw } => unpack::run(&blob, &state, &events, raw),
        Commands::Save { key, state, events, store } => {
            save::run(&store.config()?, &key, &state, &events).map(|_| ())
        }
        Commands::Load { key, state, events, store } => load::run(&store.config()?, &key, &state, &events),
        Commands::List { store } => list::run(&store.config()?).map(|_| ()),
        Commands::Inspect { blob, raw, json } => inspect::run(&blob, raw, json),
        Commands::Verify { blob } => verify::run(&blob),
    }
}
