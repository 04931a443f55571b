// TubeTrend: keyword trend analysis for YouTube video metadata
//
// This is the library root. Each module corresponds to a stage of the
// pipeline: fetch (youtube), clean and tokenize (text), analyze (analysis),
// render (output).

pub mod analysis;
pub mod config;
pub mod filter;
pub mod lexicon;
pub mod models;
pub mod output;
pub mod text;
pub mod youtube;
