pub mod best;
pub mod ranking;


pub use best::{MaimaiScores, NEW_VERSION_LIMIT, OLD_VERSION_LIMIT};
pub use ranking::{compare_scores, distinct, rank};
