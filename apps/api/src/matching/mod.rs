// Resume/job matching: tokenizer → overlap scorer → ranked table.
// Pure functions over the records they are given; handlers pass in the
// current store contents and nothing is cached between requests.

pub mod handlers;
pub mod lookup;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

pub use lookup::LookupError;
pub use scorer::{KeywordOverlapScorer, MatchScorer};
