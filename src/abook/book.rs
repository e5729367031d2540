//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`], keyed by the raw name string. Keys are
//! unique: adding a record under an existing name replaces the stored one but
//! keeps its listing position. Listing order is insertion order and survives a
//! save/load cycle, because the book serializes as an ordered list of records.
//!
//! ## Upcoming birthdays
//!
//! For every record with a birthday, the congratulation date is this year's
//! anniversary, or next year's if it already passed. A Saturday or Sunday date
//! moves to the following Monday, and only then is the record checked against
//! the window (`days until congratulation <= window`). Feb 29 anniversaries in
//! a common year are observed on Mar 1.

use crate::error::{AbookError, Result};
use crate::model::{Birthday, Phone, Record};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;
const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A record whose congratulation date falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub record: Record,
    /// Weekend-adjusted date, formatted `YYYY.MM.DD`.
    pub congratulation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookSnapshot", into = "BookSnapshot")]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// On-disk shape of the book.
#[derive(Serialize, Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<BookSnapshot> for AddressBook {
    fn from(snapshot: BookSnapshot) -> Self {
        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BookSnapshot {
    fn from(mut book: AddressBook) -> Self {
        let records = book
            .order
            .iter()
            .filter_map(|name| book.records.remove(name))
            .collect();
        BookSnapshot { records }
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| AbookError::RecordNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AbookError::RecordNotFound(name.to_string()))
    }

    /// Removes the record, handing it back to the caller.
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| AbookError::RecordNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.order.clear();
    }

    pub fn all_records(&self) -> Vec<&Record> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name))
            .collect()
    }

    pub fn find_phones(&self, name: &str) -> Result<&[Phone]> {
        Ok(self.find(name)?.phones())
    }

    /// Birthdays to celebrate within the next week, counting from today.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_at(Local::now().date_naive(), DEFAULT_UPCOMING_DAYS)
    }

    pub fn upcoming_birthdays_at(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.all_records()
            .into_iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = congratulation_date(birthday, today);
                if (date - today).num_days() > window_days {
                    return None;
                }
                Some(UpcomingBirthday {
                    record: record.clone(),
                    congratulation_date: date.format(CONGRATULATION_DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }
}

fn congratulation_date(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary(birthday, today.year());
    let date = if this_year < today {
        anniversary(birthday, today.year() + 1)
    } else {
        this_year
    };

    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

fn anniversary(birthday: &Birthday, year: i32) -> NaiveDate {
    let born = birthday.date();
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        // Only Feb 29 can be missing from a year.
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(born)
}
