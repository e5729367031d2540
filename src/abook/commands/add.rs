use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// Adds `phone` to the contact called `name`, creating the contact first if
/// needed. A rejected phone never leaves a new, empty contact behind.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if book.contains(name) {
        book.find_mut(name)?.add_phone(phone)?;
        return Ok(CmdResult::default()
            .with_message(CmdMessage::success("Contact updated."))
            .mutated());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact added."))
        .mutated())
}
