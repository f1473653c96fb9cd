use std::fmt;
use std::num::IntErrorKind;

pub const DEFAULT_MIN_DISTANCE: u32 = 0;
pub const DEFAULT_MAX_DISTANCE: u32 = 600;

/// Inclusive range of accepted shot distances in yards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_DISTANCE,
            max: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl DistanceRange {
    pub fn contains(&self, value: i64) -> bool {
        i64::from(self.min) <= value && value <= i64::from(self.max)
    }
}

impl fmt::Display for DistanceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceParseError {
    Empty,
    InvalidToken(String),
}

impl fmt::Display for DistanceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceParseError::Empty => write!(f, "No distances entered"),
            DistanceParseError::InvalidToken(token) => {
                write!(f, "'{}' is not a whole number", token)
            }
        }
    }
}

impl std::error::Error for DistanceParseError {}

/// Parse whitespace-separated distances.
///
/// Any token that is not an integer fails the whole batch. Integers outside
/// `range` (including ones too large to represent) are silently discarded.
pub fn parse_distances(input: &str, range: DistanceRange) -> Result<Vec<u32>, DistanceParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(DistanceParseError::Empty);
    }

    let mut distances = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.parse::<i64>() {
            Ok(value) if range.contains(value) => distances.push(value as u32),
            Ok(_) => {}
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {}
                _ => return Err(DistanceParseError::InvalidToken(token.to_string())),
            },
        }
    }

    Ok(distances)
}
