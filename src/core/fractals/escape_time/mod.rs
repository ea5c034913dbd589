pub mod algorithm;
pub mod errors;
pub mod evaluator;
pub mod params;

pub use algorithm::EscapeTimeAlgorithm;
pub use errors::EscapeTimeError;
pub use evaluator::{Escape, escape, evaluate};
pub use params::EscapeTimeParams;
