//! Contact data types.
//!
//! [`Name`], [`Phone`] and [`Birthday`] are validated on construction, so a
//! [`Record`] can only ever hold well-formed values. All three serialize as
//! plain strings and run through the same validation when deserialized, which
//! means a hand-edited data file cannot smuggle in a bad phone number.

use crate::error::{AbookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const PHONE_LENGTH: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name. Never empty, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AbookError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number: exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.chars().count() != PHONE_LENGTH {
            return Err(AbookError::InvalidPhoneFormat(format!(
                "expected {} digits, got {:?}",
                PHONE_LENGTH, value
            )));
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(AbookError::InvalidPhoneFormat(format!(
                "only digits are allowed, got {:?}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birth date, written and read as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        // `%Y` alone would also take "90" or "19900".
        let year = value.rsplit('.').next().unwrap_or_default();
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AbookError::InvalidBirthdayFormat(format!(
                "{:?}: year must have four digits",
                value
            )));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|e| AbookError::InvalidBirthdayFormat(format!("{:?}: {}", value, e)))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<String> for Birthday {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// One contact: a fixed name, any number of phones and an optional birthday.
///
/// Phones keep insertion order and may repeat. Lookups by raw string compare
/// by value and always act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        let position = self.position_of(&phone)?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replaces the first occurrence of `old_raw` with `new_raw`.
    ///
    /// Both numbers are validated before the lookup, so a malformed
    /// replacement is reported even when `old_raw` is not on the record.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<()> {
        let old = Phone::new(old_raw)?;
        let new = Phone::new(new_raw)?;
        let position = self.position_of(&old)?;
        self.phones[position] = new;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    fn position_of(&self, phone: &Phone) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| AbookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        match &self.birthday {
            Some(birthday) => write!(
                f,
                "Contact name: {}, birthday: {}, phones: {}",
                self.name, birthday, phones
            ),
            None => write!(f, "Contact name: {}, phones: {}", self.name, phones),
        }
    }
}
