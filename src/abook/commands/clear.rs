use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("Address book is already empty."))
        );
    }

    let count = book.len();
    book.clear();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Removed {} contact(s).", count)))
        .mutated())
}
