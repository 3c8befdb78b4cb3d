// TutorTrack - Core Library
// Student contact manager for private tutors. Shared by the CLI, the
// terminal view, and the command server.

pub mod config;
pub mod error;
pub mod logging;
pub mod logic;
pub mod model;
pub mod storage;

#[cfg(feature = "tui")]
pub mod ui;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use config::{Config, Theme};
pub use error::{CommandError, LogicError, ModelError, ParseError, ValueError};
pub use logic::commands::{Command, CommandResult, Index};
pub use logic::parser::parse_command;
pub use logic::Logic;
pub use model::{AddressBook, Model, ModelManager, PaymentInfo, Person, Tag, TagSet};
pub use storage::JsonAddressBookStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
