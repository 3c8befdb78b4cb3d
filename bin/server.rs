// TutorTrack - command server
// Serves the command pipeline over HTTP: /api/health, /api/persons, /api/command

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tutortrack::config::{Config, DEFAULT_CONFIG_FILE};
use tutortrack::logic::Logic;
use tutortrack::storage::JsonAddressBookStorage;
use tutortrack::{logging, server};

#[derive(Debug, Parser)]
#[command(name = "tutortrack-server", version, about = "TutorTrack command server")]
struct Args {
    /// Config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Data file (overrides the config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Listen address (overrides the config)
    #[arg(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (config, source) = Config::load_or_default(&args.config);
    logging::init_stderr(&config.log_level)?;
    source.report(&args.config);

    let data_file = args.data.unwrap_or(config.data_file);
    let addr = args.addr.unwrap_or(config.server_addr);
    let logic = Logic::open(JsonAddressBookStorage::new(data_file));

    println!("\n🚀 Server running on http://{addr}");
    println!("   API: http://{addr}/api/persons");
    println!("\n   Press Ctrl+C to stop\n");

    server::serve(logic, &addr).await
}
