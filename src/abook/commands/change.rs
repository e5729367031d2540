use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<CmdResult> {
    book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact changed."))
        .mutated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_phone() {
        let mut book = StoreFixture::new()
            .with_contact("Ann", &["1111111111", "2222222222"])
            .book();

        let result = run(&mut book, "Ann", "2222222222", "3333333333").unwrap();

        assert!(result.mutated);
        let phones: Vec<_> = book
            .find_phones("Ann")
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(phones, ["1111111111", "3333333333"]);
    }

    #[test]
    fn unknown_contact() {
        let mut book = StoreFixture::new().book();
        assert!(matches!(
            run(&mut book, "Ann", "1111111111", "2222222222"),
            Err(AbookError::RecordNotFound(_))
        ));
    }

    #[test]
    fn unknown_phone() {
        let mut book = StoreFixture::new().with_contact("Ann", &["1111111111"]).book();
        assert!(matches!(
            run(&mut book, "Ann", "9999999999", "2222222222"),
            Err(AbookError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn malformed_new_phone_wins_over_missing_old_one() {
        let mut book = StoreFixture::new().with_contact("Ann", &["1111111111"]).book();
        assert!(matches!(
            run(&mut book, "Ann", "9999999999", "abc"),
            Err(AbookError::InvalidPhoneFormat(_))
        ));
    }
}
