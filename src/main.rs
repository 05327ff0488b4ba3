use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::domain::{ContactBook, Explorer, Network};
use crate::state::platform::AppPaths;
use crate::state::store::NotificationAction;
use crate::state::{App, AppConfig, ConfigOverrides};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// LazyNeo - Terminal UI for a NEO wallet's transaction history
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// History export to open (JSON array of transactions)
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Wallet address whose history is shown
    #[arg(long, value_name = "ADDR")]
    address: Option<String>,

    /// Network used for explorer links
    #[arg(long, value_enum)]
    network: Option<NetworkArg>,

    /// Block explorer used for "View"
    #[arg(long, value_enum)]
    explorer: Option<ExplorerArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the address book
    Contacts {
        #[command(subcommand)]
        action: ContactsCommand,
    },
}

#[derive(Subcommand)]
enum ContactsCommand {
    /// Print every saved contact
    List,
    /// Save or rename a contact
    Add { address: String, label: String },
    /// Delete a contact
    Remove { address: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NetworkArg {
    Mainnet,
    Testnet,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Mainnet => Self::MainNet,
            NetworkArg::Testnet => Self::TestNet,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExplorerArg {
    Neoscan,
    Neotracker,
}

impl From<ExplorerArg> for Explorer {
    fn from(arg: ExplorerArg) -> Self {
        match arg {
            ExplorerArg::Neoscan => Self::NeoScan,
            ExplorerArg::Neotracker => Self::NeoTracker,
        }
    }
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            network: self.network.map(Network::from),
            explorer: self.explorer.map(Explorer::from),
            address: self.address.clone(),
            history_file: self.history.clone(),
        }
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let paths = AppPaths::new();

    init_logging(&paths);

    let contacts_path = paths.contacts_file()?;

    if let Some(Commands::Contacts { action }) = &cli.command {
        let mut contacts = ContactBook::load_from(&contacts_path)?;
        return run_contacts_command(action, &mut contacts, &contacts_path);
    }

    let mut config = AppConfig::load();
    if config.apply_overrides(cli.overrides())
        && let Err(err) = config.save()
    {
        tracing::warn!("Failed to save configuration: {err}");
    }
    tracing::info!(
        network = %config.network,
        network_id = config.network.id(),
        explorer = %config.explorer,
        "starting lazyneo v{VERSION}"
    );

    let mut terminal = tui::init()?;
    let mut app = build_app(config, contacts_path);
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}

/// Sends tracing output to the log file; stdout belongs to the TUI.
///
/// Logging is skipped when the log file cannot be opened.
fn init_logging(paths: &AppPaths) {
    let Ok(log_path) = paths.log_file() else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lazyneo=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

/// Creates the TUI app with the saved address book.
///
/// A contacts file that cannot be read is logged and left untouched: the app
/// starts with an empty book that is never saved over it.
fn build_app(config: AppConfig, contacts_path: PathBuf) -> App {
    match ContactBook::load_from(&contacts_path) {
        Ok(contacts) => App::new(config, contacts).with_contacts_path(contacts_path),
        Err(err) => {
            tracing::error!(path = %contacts_path.display(), "Failed to load contacts: {err}");
            let mut app = App::new(config, ContactBook::new());
            app.store.dispatch(NotificationAction::error(format!(
                "Contacts unavailable, changes will not be saved: {err}"
            )));
            app
        }
    }
}

fn run_contacts_command(
    action: &ContactsCommand,
    contacts: &mut ContactBook,
    path: &Path,
) -> Result<()> {
    match action {
        ContactsCommand::List => {
            if contacts.is_empty() {
                println!("No contacts saved.");
            }
            for (address, label) in contacts.iter() {
                println!("{address}  {label}");
            }
            return Ok(());
        }
        ContactsCommand::Add { address, label } => {
            contacts.upsert(address.as_str(), label.as_str())?;
            println!("Saved {address} as {}", label.trim());
        }
        ContactsCommand::Remove { address } => {
            let label = contacts.remove(address)?;
            println!("Removed {label} ({address})");
        }
    }

    contacts.save_to(path)?;
    tracing::info!(path = %path.display(), count = contacts.len(), "contacts saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags_become_overrides() {
        let cli = Cli::parse_from([
            "lazyneo",
            "--history",
            "history.json",
            "--network",
            "testnet",
            "--explorer",
            "neotracker",
        ]);
        let overrides = cli.overrides();

        assert_eq!(overrides.network, Some(Network::TestNet));
        assert_eq!(overrides.explorer, Some(Explorer::NeoTracker));
        assert_eq!(overrides.history_file, Some(PathBuf::from("history.json")));
        assert_eq!(overrides.address, None);
    }

    #[test]
    fn test_contacts_subcommand_parses() {
        let cli = Cli::parse_from(["lazyneo", "contacts", "add", "AK2n", "Alice"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Contacts {
                action: ContactsCommand::Add { ref address, ref label }
            }) if address == "AK2n" && label == "Alice"
        ));
    }

    #[test]
    fn test_contacts_command_add_and_remove_persist() {
        let path = std::env::temp_dir().join(format!("lazyneo-cli-contacts-{}.json", std::process::id()));
        let mut contacts = ContactBook::new();

        let add = ContactsCommand::Add {
            address: "AK2n".to_string(),
            label: " Alice ".to_string(),
        };
        run_contacts_command(&add, &mut contacts, &path).unwrap();
        assert_eq!(ContactBook::load_from(&path).unwrap().label("AK2n"), Some("Alice"));

        let remove = ContactsCommand::Remove {
            address: "AK2n".to_string(),
        };
        run_contacts_command(&remove, &mut contacts, &path).unwrap();
        assert!(ContactBook::load_from(&path).unwrap().is_empty());

        assert!(run_contacts_command(&remove, &mut contacts, &path).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_contacts_file_starts_empty_and_is_kept() {
        let path =
            std::env::temp_dir().join(format!("lazyneo-corrupt-contacts-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let app = build_app(AppConfig::default(), path.clone());

        assert!(app.contacts.is_empty());
        assert_eq!(app.contacts_path, None);
        let latest = app.store.state().notifications.latest().unwrap();
        assert!(latest.message.starts_with("Contacts unavailable"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_readable_contacts_file_is_saved_to() {
        let path =
            std::env::temp_dir().join(format!("lazyneo-good-contacts-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"AK2n": "Alice"}"#).unwrap();

        let app = build_app(AppConfig::default(), path.clone());

        assert_eq!(app.contacts.label("AK2n"), Some("Alice"));
        assert_eq!(app.contacts_path, Some(path.clone()));

        std::fs::remove_file(&path).unwrap();
    }
}
