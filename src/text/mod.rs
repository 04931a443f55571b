// Text processing — normalization, script detection and keyword tokenization.
//
// Everything here works on a single string. Aggregation across a batch of
// records happens in `analysis`.

pub mod morph;
pub mod normalize;
pub mod script;
pub mod stopwords;
pub mod tokenizer;
