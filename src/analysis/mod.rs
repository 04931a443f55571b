// Keyword analysis over a batch of records — ranking, co-occurrence network,
// clustering, TF-IDF and batch summaries.
//
// Every entry point is a pure function of (extractor, batch, parameters).
// Nothing is cached or shared between calls.

pub mod clusters;
pub mod extract;
pub mod frequency;
pub mod network;
pub mod params;
pub mod presence;
pub mod report;
pub mod summary;
pub mod tfidf;

pub use clusters::{cluster_keywords, KeywordCluster};
pub use extract::KeywordExtractor;
pub use frequency::{rank_keywords, FrequencyTable, KeywordCount};
pub use network::{build_cooccurrence_graph, GraphEdge, GraphNode, KeywordGraph};
pub use params::{ClusterParams, NetworkParams, PresenceMatch};
pub use report::{analyze_batch, AnalysisReport, ReportOptions};
