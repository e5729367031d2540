use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Lists the phones of one contact.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let phones = book.find_phones(name)?.to_vec();
    let mut result = CmdResult::default();
    if phones.is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no phone numbers.", name)));
    }
    Ok(result.with_phones(phones))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    book.find_mut(name)?.remove_phone(phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Phone removed."))
        .mutated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_phones_in_order() {
        let book = StoreFixture::new()
            .with_contact("Ann", &["2222222222", "1111111111"])
            .book();

        let result = show(&book, "Ann").unwrap();
        let phones: Vec<_> = result.phones.iter().map(|p| p.to_string()).collect();
        assert_eq!(phones, ["2222222222", "1111111111"]);
        assert!(result.messages.is_empty());
        assert!(!result.mutated);
    }

    #[test]
    fn show_notes_contact_without_phones() {
        let book = StoreFixture::new().with_contact("Ann", &[]).book();
        let result = show(&book, "Ann").unwrap();
        assert!(result.phones.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn show_unknown_contact() {
        let book = StoreFixture::new().book();
        assert!(matches!(
            show(&book, "Ann"),
            Err(AbookError::RecordNotFound(_))
        ));
    }

    #[test]
    fn removes_phone() {
        let mut book = StoreFixture::new()
            .with_contact("Ann", &["1111111111", "2222222222"])
            .book();

        let result = remove(&mut book, "Ann", "1111111111").unwrap();

        assert!(result.mutated);
        assert_eq!(book.find_phones("Ann").unwrap().len(), 1);
        assert!(matches!(
            remove(&mut book, "Ann", "1111111111"),
            Err(AbookError::PhoneNotFound(_))
        ));
    }
}
