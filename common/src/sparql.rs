//! SPARQL結果（JSON形式）の表示用変換
//!
//! クエリの実行は行わない。受け取った結果文書の重複行をまとめ、
//! 各セルを表セル役割の候補として取り出す。

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::types::{CandidateText, Role};

/// SPARQL 1.1 Query Results JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResults {
    pub head: Head,
    pub results: Bindings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    #[serde(default)]
    pub bindings: Vec<BTreeMap<String, Term>>,
}

/// 結果セルの値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl SparqlResults {
    pub fn from_json(json: &str) -> Result<Self> {
        let results: Self = serde_json::from_str(json)?;
        Ok(results)
    }

    /// 各行のセルを変数の順に取り出す（未束縛はNone）
    pub fn rows(&self) -> Vec<Vec<Option<CandidateText>>> {
        self.results
            .bindings
            .iter()
            .map(|binding| {
                self.head
                    .vars
                    .iter()
                    .map(|var| {
                        binding
                            .get(var)
                            .map(|term| CandidateText::new(term.value.clone(), Role::TabularCell))
                    })
                    .collect()
            })
            .collect()
    }
}

/// 同一の行をまとめる（最初の出現順を保つ）
pub fn merge_identical_bindings(results: &SparqlResults) -> SparqlResults {
    let mut merged: Vec<BTreeMap<String, Term>> = Vec::with_capacity(results.results.bindings.len());
    for binding in &results.results.bindings {
        if !merged.contains(binding) {
            merged.push(binding.clone());
        }
    }

    SparqlResults {
        head: results.head.clone(),
        results: Bindings { bindings: merged },
    }
}
