pub mod retrieval_config;

pub use retrieval_config::RetrievalConfig;
