use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

pub fn run(book: &AddressBook, today: NaiveDate, window_days: i64) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays_at(today, window_days);
    let mut result = CmdResult::default();
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info("No upcoming birthdays for now."));
    }
    Ok(result.with_upcoming(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn lists_upcoming() {
        let book = StoreFixture::new()
            .with_contact("Ann", &[])
            .with_birthday("Ann", "12.06.1990")
            .with_contact("Bob", &[])
            .with_birthday("Bob", "20.06.1985")
            .book();

        let result = run(&book, monday(), 7).unwrap();

        assert_eq!(result.upcoming.len(), 1);
        assert_eq!(result.upcoming[0].record.name().as_str(), "Ann");
        assert_eq!(result.upcoming[0].congratulation_date, "2024.06.12");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn nothing_upcoming() {
        let book = StoreFixture::new()
            .with_contact("Ann", &[])
            .with_birthday("Ann", "01.01.1990")
            .book();

        let result = run(&book, monday(), 7).unwrap();
        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, "No upcoming birthdays for now.");
    }
}
