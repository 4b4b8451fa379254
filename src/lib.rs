//! linked-label CLI
//!
//! RDF/SPARQL表示用のURIラベル解決（コア処理は linked-label-common）

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;
pub mod scanner;
