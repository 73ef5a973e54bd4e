// Text normalization and the lexicon-path tokenizer.

pub mod normalize;
