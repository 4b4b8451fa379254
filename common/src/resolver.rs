//! ラベル解決の窓口
//!
//! 取得済みの設定からベースURL集合を1度だけ作り、
//! 以降は候補ごとに `resolve` を呼ぶ。グローバル状態は持たない。

use serde::{Deserialize, Serialize};
use crate::config::SiteConfig;
use crate::label::format_label;
use crate::provenance::{link_provenance, ProvenanceLink};
use crate::types::{BaseUrlSet, CandidateText, LabelResult, Role};

/// 候補1つ分の解決結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Resolution {
    /// 通常のラベル
    Label(LabelResult),
    /// 来歴メタデータ（URIでなければ None）
    Provenance(Option<ProvenanceLink>),
}

impl Resolution {
    pub fn label(&self) -> Option<&LabelResult> {
        match self {
            Resolution::Label(label) => Some(label),
            Resolution::Provenance(_) => None,
        }
    }
}

/// ラベル解決器
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    bases: BaseUrlSet,
}

impl LabelResolver {
    pub fn new(bases: BaseUrlSet) -> Self {
        Self { bases }
    }

    /// `/get_config` の応答から作る
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.base_url_set())
    }

    pub fn bases(&self) -> &BaseUrlSet {
        &self.bases
    }

    /// 候補を解決する（エラーにはならない）
    pub fn resolve(&self, candidate: &CandidateText) -> Resolution {
        match candidate.role {
            Role::Provenance => Resolution::Provenance(link_provenance(&candidate.raw)),
            _ => Resolution::Label(format_label(candidate, &self.bases)),
        }
    }

    /// 役割付きの文字列をまとめて解決する
    pub fn resolve_all<'a>(
        &'a self,
        candidates: &'a [CandidateText],
    ) -> impl Iterator<Item = Resolution> + 'a {
        candidates.iter().map(move |c| self.resolve(c))
    }
}
