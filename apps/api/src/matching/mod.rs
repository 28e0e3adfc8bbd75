//! The matching engine: pure, stateless scoring of resumes against one job
//! description. No I/O and no store references live under this module, so
//! the whole engine is testable in isolation and safe to run concurrently
//! for independent requests.

pub mod normalize;
pub mod rank;
pub mod tfidf;
pub mod vocabulary;

pub use normalize::normalize;
pub use rank::{rank, MatchResult, ScoredDocument};
pub use tfidf::similarity;
pub use vocabulary::SkillVocabulary;
