// TutorTrack - command line entry point
//
//   tutortrack [--config PATH] [--data PATH] [ui | exec <COMMAND...> | list]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tutortrack::config::{Config, ConfigSource, DEFAULT_CONFIG_FILE};
use tutortrack::logging;
use tutortrack::storage::JsonAddressBookStorage;
use tutortrack::Logic;

#[derive(Debug, Parser)]
#[command(name = "tutortrack", version, about = "Student contact manager for private tutors")]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Data file (overrides the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Interactive terminal view (default)
    Ui,
    /// Run a single command, e.g. `exec add n/Amy p/123 e/a@b.co a/Home`
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Print every stored person
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = Config::load_or_default(&cli.config);
    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());

    match cli.mode.unwrap_or(Mode::Ui) {
        Mode::Ui => run_ui_mode(&config, &source, &cli.config, data_file),
        Mode::Exec { command } => {
            logging::init_stderr(&config.log_level)?;
            source.report(&cli.config);
            run_exec(data_file, &command.join(" "))
        }
        Mode::List => {
            logging::init_stderr(&config.log_level)?;
            source.report(&cli.config);
            run_list(data_file)
        }
    }
}

fn run_exec(data_file: PathBuf, command_text: &str) -> Result<()> {
    let mut logic = Logic::open(JsonAddressBookStorage::new(data_file));
    match logic.execute(command_text) {
        Ok(result) => {
            println!("{}", result.feedback);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}

fn run_list(data_file: PathBuf) -> Result<()> {
    let logic = Logic::open(JsonAddressBookStorage::new(data_file));
    let persons = logic.filtered_persons();
    for (i, person) in persons.iter().enumerate() {
        println!("{}. {}", i + 1, person);
    }
    println!("\n✓ {} persons in {}", persons.len(), logic.data_file_path().display());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config, source: &ConfigSource, config_path: &Path, data_file: PathBuf) -> Result<()> {
    use tutortrack::ui;

    logging::init_file(&config.log_level, &config.log_file)?;
    source.report(config_path);
    if let ConfigSource::Fallback(e) = source {
        eprintln!("⚠️  {}: {e:#}, using defaults", config_path.display());
    }
    let logic = Logic::open(JsonAddressBookStorage::new(data_file));

    let mut app = ui::App::new(logic, config.theme);
    ui::run_ui(&mut app)?;

    println!("✅ Data saved. Goodbye!");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(
    _config: &Config,
    _source: &ConfigSource,
    _config_path: &Path,
    _data_file: PathBuf,
) -> Result<()> {
    eprintln!("❌ Terminal view not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: tutortrack exec <COMMAND>");
    std::process::exit(1);
}
