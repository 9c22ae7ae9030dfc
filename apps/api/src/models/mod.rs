pub mod document;
pub mod score;

pub use document::Document;
pub use score::{ScoreResult, Verdict};
