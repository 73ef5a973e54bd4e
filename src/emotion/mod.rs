// Lexicon-based emotion scoring — a weak heuristic, not a model.

pub mod lexicon;
pub mod scorer;
