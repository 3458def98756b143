//! Consumers of the matching core: offset to line/column conversion, keyword
//! scoring with whole-word filtering, and record lookup.

pub mod keywords;
pub mod position;
pub mod records;

pub use keywords::{
    is_boundary, whole_word_matches, Category, CategoryScore, KeywordTable, ScoreOptions,
};
pub use position::{locate, locate_all, Position};
pub use records::{lookup, Record};
