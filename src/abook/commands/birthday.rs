use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    book.find_mut(name)?.add_birthday(birthday)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Birthday added for {}.", name)))
        .mutated())
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("Birthday of {} is {}.", name, birthday)),
        None => CmdMessage::warning(format!("No birthday added for {}.", name)),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::AbookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn adds_and_shows_birthday() {
        let mut book = StoreFixture::new().with_contact("Ann", &[]).book();

        let result = add(&mut book, "Ann", "08.06.1990").unwrap();
        assert!(result.mutated);

        let shown = show(&book, "Ann").unwrap();
        assert_eq!(shown.messages[0].content, "Birthday of Ann is 08.06.1990.");
    }

    #[test]
    fn show_without_birthday_warns() {
        let book = StoreFixture::new().with_contact("Ann", &[]).book();
        let shown = show(&book, "Ann").unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn add_rejects_bad_date() {
        let mut book = StoreFixture::new().with_contact("Ann", &[]).book();
        assert!(matches!(
            add(&mut book, "Ann", "31.02.1990"),
            Err(AbookError::InvalidBirthdayFormat(_))
        ));
    }

    #[test]
    fn unknown_contact() {
        let mut book = StoreFixture::new().book();
        assert!(matches!(
            add(&mut book, "Ann", "08.06.1990"),
            Err(AbookError::RecordNotFound(_))
        ));
        assert!(matches!(
            show(&book, "Ann"),
            Err(AbookError::RecordNotFound(_))
        ));
    }
}
