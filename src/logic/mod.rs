// 🧠 Logic - text in, CommandResult out
//
// parse -> execute against the model -> save the book. A command that fails
// never reaches storage; a save failure is reported after the model changed.

pub mod commands;
pub mod parser;
pub mod syntax;
pub mod tokenizer;

use crate::error::LogicError;
use crate::model::{sample_address_book, AddressBook, Model, ModelManager, Person};
use crate::storage::JsonAddressBookStorage;
use commands::CommandResult;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Logic {
    model: ModelManager,
    storage: JsonAddressBookStorage,
}

impl Logic {
    pub fn new(model: ModelManager, storage: JsonAddressBookStorage) -> Self {
        Logic { model, storage }
    }

    /// Loads the book from `storage`.
    ///
    /// No file yet: start from the sample data. A file that cannot be read or
    /// holds invalid data: start empty (it is overwritten on the next save).
    pub fn open(storage: JsonAddressBookStorage) -> Self {
        let book = match storage.read() {
            Ok(Some(book)) => {
                info!(persons = book.len(), "loaded address book");
                book
            }
            Ok(None) => {
                info!(path = %storage.path().display(), "data file not found, starting with sample data");
                sample_address_book().unwrap_or_else(|e| {
                    warn!(error = %format!("{e:#}"), "sample data unusable, starting empty");
                    AddressBook::new()
                })
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "data file unusable, starting with an empty address book");
                AddressBook::new()
            }
        };
        Logic::new(ModelManager::new(book), storage)
    }

    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(command = command_text, "user command");

        let command = parser::parse_command(command_text).inspect_err(|e| {
            debug!(error = %e, "parse failed");
        })?;
        debug!(word = command.word(), "parsed");

        let result = command.execute(&mut self.model).inspect_err(|e| {
            debug!(error = %e, "command rejected");
        })?;

        self.storage
            .save(self.model.address_book())
            .map_err(LogicError::Storage)?;

        info!(feedback = %result.feedback, "command succeeded");
        Ok(result)
    }

    pub fn address_book(&self) -> &AddressBook {
        self.model.address_book()
    }

    pub fn filtered_persons(&self) -> Vec<Person> {
        self.model.filtered_persons()
    }

    pub fn data_file_path(&self) -> &Path {
        self.storage.path()
    }
}
