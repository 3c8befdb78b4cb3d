// 💰 payment - records (or clears) the latest payment of one displayed student
//
// The reply depends on how the payment changed:
//   unchanged            -> SAME
//   nothing before       -> ADD
//   nothing after        -> DELETE
//   anything else        -> UPDATE

use super::{person_at, CommandResult, Index};
use crate::error::CommandError;
use crate::model::{Model, PaymentInfo, Person};

pub const COMMAND_WORD: &str = "payment";

pub const MESSAGE_USAGE: &str = "payment: Edits the payment information of the person identified \
by the index number used in the displayed person list. \
Existing payment will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) [f/FEE] [d/PAYMENT_DATE] [s/PAYMENT_STATUS]\n\
Example: payment 1 f/900 d/13-03-2025 s/paid";

pub const MESSAGE_ADD_PAYMENT_SUCCESS: &str = "Added payment info to Person: ";
pub const MESSAGE_UPDATE_PAYMENT_SUCCESS: &str = "Updated payment info of Person: ";
pub const MESSAGE_DELETE_PAYMENT_SUCCESS: &str = "Removed payment info from Person: ";
pub const MESSAGE_SAME_PAYMENT_SUCCESS: &str = "No change to payment info of Person: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentCommand {
    index: Index,
    payment_info: PaymentInfo,
}

impl PaymentCommand {
    pub fn new(index: Index, payment_info: PaymentInfo) -> Self {
        PaymentCommand {
            index,
            payment_info,
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let to_edit = person_at(model, self.index)?;
        let edited = to_edit.with_payment_info(self.payment_info);
        let message = success_message(to_edit.payment_info(), &edited);

        model.set_person(&to_edit, edited)?;
        Ok(CommandResult::new(message))
    }
}

fn success_message(before: &PaymentInfo, edited: &Person) -> String {
    let after = edited.payment_info();
    let prefix = if before == after {
        MESSAGE_SAME_PAYMENT_SUCCESS
    } else if before.is_empty() {
        MESSAGE_ADD_PAYMENT_SUCCESS
    } else if after.is_empty() {
        MESSAGE_DELETE_PAYMENT_SUCCESS
    } else {
        MESSAGE_UPDATE_PAYMENT_SUCCESS
    };
    format!("{prefix}{edited}")
}
