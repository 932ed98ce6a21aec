use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn from_letter(letter: char) -> Self {
        Self(letter.to_string())
    }

    /// Station names on the generated network are single letters, A-Z or a-z.
    pub fn parse_letter(input: &str) -> Result<Self> {
        let input = input.trim();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::from_letter(c)),
            _ => bail!("invalid station {input:?}: expected a single letter A-Z or a-z"),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
