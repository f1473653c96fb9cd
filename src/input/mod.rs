pub mod parse;
pub mod prompt;

pub use parse::{
    parse_distances, DistanceParseError, DistanceRange, DEFAULT_MAX_DISTANCE,
    DEFAULT_MIN_DISTANCE,
};
pub use prompt::Prompter;
