pub mod assets;
pub mod embed_pipeline;
pub mod logger;
