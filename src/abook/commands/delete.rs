use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.delete(name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact deleted: {}", name)))
        .with_listed_records(vec![removed])
        .mutated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_contact() {
        let mut book = StoreFixture::new()
            .with_contact("Ann", &["1111111111"])
            .with_contact("Bob", &[])
            .book();

        let result = run(&mut book, "Ann").unwrap();

        assert!(result.mutated);
        assert_eq!(result.listed_records[0].name().as_str(), "Ann");
        assert!(!book.contains("Ann"));
        assert!(book.contains("Bob"));
    }

    #[test]
    fn unknown_contact() {
        let mut book = StoreFixture::new().book();
        assert!(matches!(
            run(&mut book, "Ann"),
            Err(AbookError::RecordNotFound(_))
        ));
    }
}
