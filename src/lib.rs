// Retreat notes: emotion scoring and TF-IDF search over personal notes.
//
// This is the library root. Each module is one stage of the pipeline:
// text normalization, lexicon scoring, the vector space, and the reports
// built on top of them. Nothing persists between runs.

pub mod config;
pub mod corpus;
pub mod emotion;
pub mod error;
pub mod output;
pub mod scan;
pub mod search;
pub mod text;
pub mod vector;
