//! Linked Label Common Library
//!
//! CLIとWeb(WASM)で共有されるラベル解決エンジン
//!
//! ## 処理フロー
//! 1. URI判定（uri）
//! 2. 外部識別子の照合（identifier）
//! 3. 表示ラベルの決定（label）

pub mod types;
pub mod uri;
pub mod identifier;
pub mod unicode;
pub mod label;
pub mod provenance;
pub mod navigation;
pub mod resolver;
pub mod scan;
pub mod sparql;
pub mod html;
pub mod config;
pub mod error;

pub use types::{BaseUrlSet, CandidateText, LabelResult, Role};
pub use uri::{is_uri, parse_uri};
pub use identifier::{acronyms, match_identifier, IdentifierScheme, SCHEMES};
pub use unicode::unicode_to_char;
pub use label::{camel_case_label, format_label};
pub use provenance::{link_provenance, ProvenanceLink};
pub use navigation::entity_path;
pub use resolver::{LabelResolver, Resolution};
pub use scan::{resolve_pending, ScannedNode};
pub use sparql::{merge_identical_bindings, SparqlResults};
pub use html::escape_html;
pub use config::SiteConfig;
pub use error::{Error, Result};
