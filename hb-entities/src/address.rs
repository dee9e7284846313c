use std::{fmt, str::FromStr};

use thiserror::Error;

/// Free-text postal address as entered by a user.
///
/// The inner string is trimmed and guaranteed to be non-empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AddressQuery(String);

impl AddressQuery {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Case-folded representation, used as a lookup key.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

#[derive(Debug, Error)]
#[error("Empty address")]
pub struct AddressQueryParseError;

impl FromStr for AddressQuery {
    type Err = AddressQueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressQueryParseError);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl From<AddressQuery> for String {
    fn from(from: AddressQuery) -> Self {
        from.0
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
