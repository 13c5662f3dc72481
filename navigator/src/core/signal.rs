//! Immutable binary control signal read through a cursor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// One decoded signal sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bit {
    No,
    Yes,
}

impl Bit {
    pub fn is_yes(self) -> bool {
        self == Bit::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bit::No => "no",
            Bit::Yes => "yes",
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finite, ordered sequence of raw samples produced upstream.
///
/// Samples are kept as raw integers so that membership in `{0, 1}` is checked
/// where a value is read (`peek`) or on demand (`validate`), never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlSignal {
    samples: Vec<i64>,
}

impl ControlSignal {
    pub fn new(samples: Vec<i64>) -> Self {
        Self { samples }
    }

    /// Build from already-decoded bits.
    pub fn from_bits(bits: &[Bit]) -> Self {
        let samples = bits
            .iter()
            .map(|bit| match bit {
                Bit::No => 0,
                Bit::Yes => 1,
            })
            .collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read the sample at `cursor` without consuming anything.
    pub fn peek(&self, cursor: usize) -> Result<Bit, NavError> {
        let Some(&value) = self.samples.get(cursor) else {
            return Err(NavError::Exhausted {
                cursor,
                len: self.samples.len(),
            });
        };
        decode(cursor, value)
    }

    /// Check every sample eagerly; returns the first offending sample.
    pub fn validate(&self) -> Result<(), NavError> {
        for (index, &value) in self.samples.iter().enumerate() {
            decode(index, value)?;
        }
        Ok(())
    }

    /// Parse samples from text.
    ///
    /// Tokens are separated by whitespace and/or commas. A token made only of
    /// `0`/`1` digits (e.g. `0110`) expands to one sample per digit; any other
    /// integer token is one sample.
    pub fn parse(text: &str) -> Result<Self, NavError> {
        let mut samples = Vec::new();
        for token in text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            if token.len() > 1 && token.chars().all(|c| c == '0' || c == '1') {
                samples.extend(token.chars().map(|c| if c == '1' { 1 } else { 0 }));
                continue;
            }
            let value: i64 = token
                .parse()
                .map_err(|_| NavError::InvalidSignalToken {
                    token: token.to_string(),
                })?;
            samples.push(value);
        }
        Ok(Self { samples })
    }
}

fn decode(index: usize, value: i64) -> Result<Bit, NavError> {
    match value {
        0 => Ok(Bit::No),
        1 => Ok(Bit::Yes),
        _ => Err(NavError::InvalidSignalValue { index, value }),
    }
}
