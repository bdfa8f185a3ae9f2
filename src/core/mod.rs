// Core recommendation logic
pub mod parse;
pub mod prompt;

pub use parse::{parse_recommendations, ParseError};
pub use prompt::build_prompt;
