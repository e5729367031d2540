use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let records: Vec<_> = book.all_records().into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No contacts added so far."));
    }
    Ok(result.with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let book = StoreFixture::new()
            .with_contact("Zed", &[])
            .with_contact("Ann", &["1111111111"])
            .book();

        let result = run(&book).unwrap();
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, ["Zed", "Ann"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_book_reports_no_contacts() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No contacts added so far.");
    }
}
