// ⚙️ Commands - one struct per user action, dispatched through `Command`
//
// Commands hold only parsed data. Everything that depends on current state
// (index resolution, duplicate checks, predicates) happens in `execute`.

pub mod add;
pub mod basic;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod find;
pub mod payment;
pub mod sort;
pub mod untag;

pub use add::AddCommand;
pub use basic::{ExitCommand, HelpCommand, ListCommand, PurgeCommand, ToggleThemeCommand};
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use filter::{FilterCommand, FilterDescriptor};
pub use find::FindCommand;
pub use payment::PaymentCommand;
pub use sort::SortCommand;
pub use untag::UntagCommand;

use crate::error::CommandError;
use crate::model::{Model, Person};
use std::fmt;

// ============================================================================
// SHARED MESSAGES
// ============================================================================

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_NO_PERSON_TO_SORT: &str = "There are no persons to sort.";

/// `Invalid command format! \n<detail>`, where detail is usually a command's usage.
pub fn invalid_command_format(detail: &str) -> String {
    format!("Invalid command format! \n{detail}")
}

pub fn persons_listed_overview(count: usize) -> String {
    format!("{count} persons listed!")
}

// ============================================================================
// COMMAND RESULT
// ============================================================================

/// What the view gets back after a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    pub toggle_theme: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// INDEX
// ============================================================================

/// Position in the displayed list. Stored zero-based, shown one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// `one_based` must be non-zero; the parser guarantees it.
    pub fn from_one_based(one_based: usize) -> Self {
        Index(one_based.saturating_sub(1))
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Resolves `index` against the displayed list.
pub(crate) fn person_at(model: &dyn Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_persons()
        .into_iter()
        .nth(index.zero_based())
        .ok_or_else(|| CommandError::invalid(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))
}

// ============================================================================
// COMMAND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Clear(ClearCommand),
    Purge(PurgeCommand),
    Filter(FilterCommand),
    Find(FindCommand),
    List(ListCommand),
    Sort(SortCommand),
    Untag(UntagCommand),
    Payment(PaymentCommand),
    Help(HelpCommand),
    ToggleTheme(ToggleThemeCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(cmd) => cmd.execute(model),
            Command::Edit(cmd) => cmd.execute(model),
            Command::Delete(cmd) => cmd.execute(model),
            Command::Clear(cmd) => cmd.execute(model),
            Command::Purge(cmd) => cmd.execute(model),
            Command::Filter(cmd) => cmd.execute(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::List(cmd) => cmd.execute(model),
            Command::Sort(cmd) => cmd.execute(model),
            Command::Untag(cmd) => cmd.execute(model),
            Command::Payment(cmd) => cmd.execute(model),
            Command::Help(cmd) => cmd.execute(model),
            Command::ToggleTheme(cmd) => cmd.execute(model),
            Command::Exit(cmd) => cmd.execute(model),
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Clear(_) => clear::COMMAND_WORD,
            Command::Purge(_) => basic::PURGE_COMMAND_WORD,
            Command::Filter(_) => filter::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::List(_) => basic::LIST_COMMAND_WORD,
            Command::Sort(_) => sort::COMMAND_WORD,
            Command::Untag(_) => untag::COMMAND_WORD,
            Command::Payment(_) => payment::COMMAND_WORD,
            Command::Help(_) => basic::HELP_COMMAND_WORD,
            Command::ToggleTheme(_) => basic::TOGGLE_THEME_COMMAND_WORD,
            Command::Exit(_) => basic::EXIT_COMMAND_WORD,
        }
    }
}

// ============================================================================
// TEST HELPERS
// ============================================================================
