//! 来歴メタデータのリンク化
//!
//! 責任エージェント・一次情報源の欄は、URIであればそのまま外部リンクにする。
//! ベースURLの設定とは無関係。

use serde::{Deserialize, Serialize};
use crate::uri::is_uri;

/// 来歴メタデータ用リンクのCSSクラス
pub const PROVENANCE_LINK_CLASS: &str = "provMetadataUrl";

/// 新しいタブで開く外部リンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceLink {
    pub href: String,
    pub label: String,
    pub new_tab: bool,
}

/// 来歴メタデータの文字列をリンク化する
///
/// URIでなければ None（表示はそのまま）
pub fn link_provenance(raw: &str) -> Option<ProvenanceLink> {
    if !is_uri(raw) {
        return None;
    }

    Some(ProvenanceLink {
        href: raw.to_string(),
        label: raw.to_string(),
        new_tab: true,
    })
}
