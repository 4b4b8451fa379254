//! ラベル解決の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CandidateText: ページから取り出した文字列と構造上の役割
//! - BaseUrlSet: ローカル扱いするURIプレフィックスの集合
//! - LabelResult: 解決結果（4種類のいずれか1つ）

use serde::{Deserialize, Serialize};

/// 文字列がページ上で担う構造上の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// トリプルの目的語
    #[default]
    Object,
    /// トリプルの述語
    Predicate,
    /// 主語・リソース名
    ResourceName,
    /// 来歴メタデータ（責任エージェント・一次情報源）
    Provenance,
    /// SPARQL結果などの表のセル
    TabularCell,
}

impl Role {
    /// エンティティリンク化してよい役割か
    pub fn permits_entity_link(&self) -> bool {
        matches!(self, Role::Object)
    }

    /// ベースURLの除去対象になる役割か
    pub fn permits_stripping(&self) -> bool {
        matches!(self, Role::Object | Role::ResourceName)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Object => "object",
            Role::Predicate => "predicate",
            Role::ResourceName => "resource-name",
            Role::Provenance => "provenance",
            Role::TabularCell => "tabular-cell",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "object" | "o" => Ok(Role::Object),
            "predicate" | "p" => Ok(Role::Predicate),
            "resource-name" | "subject" | "s" => Ok(Role::ResourceName),
            "provenance" | "prov" => Ok(Role::Provenance),
            "tabular-cell" | "cell" => Ok(Role::TabularCell),
            _ => Err(format!(
                "Unknown role: {}. Use object, predicate, resource-name, provenance, or tabular-cell",
                s
            )),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ページから取り出した候補文字列
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateText {
    pub raw: String,
    #[serde(default)]
    pub role: Role,
}

impl CandidateText {
    pub fn new(raw: impl Into<String>, role: Role) -> Self {
        Self { raw: raw.into(), role }
    }
}

/// ローカル扱いするベースURLの集合
///
/// 順序を保持し、重複と空文字列は構築時に取り除く。
/// 構築後は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrlSet {
    urls: Vec<String>,
}

impl BaseUrlSet {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for url in urls {
            let url = url.into();
            // 空のプレフィックスはすべての文字列に一致してしまう
            if url.is_empty() || deduped.contains(&url) {
                continue;
            }
            deduped.push(url);
        }
        Self { urls: deduped }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// `text` に含まれる最初のベースURLを返す
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.iter().find(|base| text.contains(base))
    }
}

impl<S: Into<String>> FromIterator<S> for BaseUrlSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// ラベル解決結果
///
/// 候補1つにつき必ず1つのバリアントが返る。
/// 表示文字列を短縮した場合は元の値を `title()` で取得できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LabelResult {
    /// ページ内エンティティへのリンク
    #[serde(rename_all = "camelCase")]
    LocalEntityLink { label: String, target: String },
    /// 外部識別子（ORCID, DOI）へのリンク
    #[serde(rename_all = "camelCase")]
    ExternalIdentifierLink { scheme: String, target: String },
    /// URIから作った読みやすいラベル
    #[serde(rename_all = "camelCase")]
    GenericLabel { text: String, title: String },
    /// エスケープを戻したリテラル
    #[serde(rename_all = "camelCase")]
    LiteralText { text: String },
}

impl LabelResult {
    /// 画面に表示する文字列
    pub fn display_text(&self) -> &str {
        match self {
            LabelResult::LocalEntityLink { label, .. } => label,
            LabelResult::ExternalIdentifierLink { target, .. } => target,
            LabelResult::GenericLabel { text, .. } => text,
            LabelResult::LiteralText { text } => text,
        }
    }

    /// ツールチップ（title属性）に入れる元の値
    pub fn title(&self) -> Option<&str> {
        match self {
            LabelResult::LocalEntityLink { label, target } if label != target => Some(target.as_str()),
            LabelResult::LocalEntityLink { .. } => None,
            LabelResult::ExternalIdentifierLink { .. } => None,
            LabelResult::GenericLabel { text, title } if text != title => Some(title.as_str()),
            LabelResult::GenericLabel { .. } => None,
            LabelResult::LiteralText { .. } => None,
        }
    }

    /// リンク先（リンク系のバリアントのみ）
    pub fn link_target(&self) -> Option<&str> {
        match self {
            LabelResult::LocalEntityLink { target, .. } => Some(target.as_str()),
            LabelResult::ExternalIdentifierLink { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }

    pub fn is_entity_link(&self) -> bool {
        matches!(self, LabelResult::LocalEntityLink { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LabelResult::LocalEntityLink { .. } => "localEntityLink",
            LabelResult::ExternalIdentifierLink { .. } => "externalIdentifierLink",
            LabelResult::GenericLabel { .. } => "genericLabel",
            LabelResult::LiteralText { .. } => "literalText",
        }
    }
}
