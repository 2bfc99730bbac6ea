use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// The state of a cell in the next generation, given whether it is alive now and how many of
    /// its neighbors are.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        // more than 8 neighbors can't happen on a square grid
        if neighbors > 8 {
            return false;
        }

        let bit = 1 << neighbors;
        let set = if alive {
            self.survivals()
        } else {
            self.births()
        };

        set & bit == bit
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule must start with 'b' or 'B'")]
    MissingBirth,

    #[error("expected 's' or 'S' after the births")]
    MissingSurvival,

    #[error("'{got}' is not a neighbor count between 0 and 8")]
    InvalidCount { got: char },
}

/// Parses rules that look like `B3/S23`. Case is ignored and the slash is optional.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        let Some(rest) = s.strip_prefix('b') else {
            return Err(RuleError::MissingBirth);
        };

        let Some((b, s)) = rest.split_once('s') else {
            return Err(RuleError::MissingSurvival);
        };

        let b = b.strip_suffix('/').unwrap_or(b);

        Ok(RuleSet::new(counts_to_bits(b)?, counts_to_bits(s)?))
    }
}

/// Convert the human readable birth/survival counts to a packed bit representation
fn counts_to_bits(counts: &str) -> Result<u16, RuleError> {
    let mut n = 0;

    for c in counts.chars() {
        match c.to_digit(10) {
            Some(d @ 0..=8) => n |= 1 << d,
            _ => return Err(RuleError::InvalidCount { got: c }),
        }
    }

    Ok(n)
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |bits: u16| -> String {
            (0..=8u8)
                .filter(|&i| bits & (1 << i) != 0)
                .map(|i| char::from(b'0' + i))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
