//! 走査パス
//!
//! 呼び出し側（DOMアダプタ・CLI）が集めた候補をまとめて解決する。
//! 解決済みの印が付いた要素は再処理しない（2回目以降の走査は何もしない）。

use serde::{Deserialize, Serialize};
use crate::resolver::{LabelResolver, Resolution};
use crate::types::CandidateText;

/// 走査で見つかった要素
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedNode {
    /// 呼び出し側が要素を特定するためのID（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub candidate: CandidateText,
    /// 解決済みの印（解決結果）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<Resolution>,
}

impl ScannedNode {
    pub fn new(candidate: CandidateText) -> Self {
        Self {
            id: None,
            candidate,
            resolved: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

/// 未解決の要素だけを解決する
///
/// # Returns
/// 今回新たに解決した要素数
pub fn resolve_pending(nodes: &mut [ScannedNode], resolver: &LabelResolver) -> usize {
    let mut count = 0;
    for node in nodes.iter_mut().filter(|n| !n.is_resolved()) {
        node.resolved = Some(resolver.resolve(&node.candidate));
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseUrlSet, Role};

    fn nodes() -> Vec<ScannedNode> {
        vec![
            ScannedNode::new(CandidateText::new("https://example.org/entity/1", Role::Object)),
            ScannedNode::new(CandidateText::new("https://example.org/hasAuthor", Role::Predicate)),
        ]
    }

    #[test]
    fn test_resolve_pending_all() {
        let resolver = LabelResolver::new(BaseUrlSet::new(vec!["https://example.org/"]));
        let mut nodes = nodes();
        assert_eq!(resolve_pending(&mut nodes, &resolver), 2);
        assert!(nodes.iter().all(ScannedNode::is_resolved));
    }

    #[test]
    fn test_resolve_pending_is_idempotent() {
        let resolver = LabelResolver::new(BaseUrlSet::new(vec!["https://example.org/"]));
        let mut nodes = nodes();
        resolve_pending(&mut nodes, &resolver);
        let first_pass = nodes.clone();

        assert_eq!(resolve_pending(&mut nodes, &resolver), 0);
        assert_eq!(nodes, first_pass);

        let label = nodes[0].resolved.as_ref().and_then(Resolution::label).unwrap();
        assert_eq!(label.display_text(), "entity/1");
    }

    #[test]
    fn test_scanned_node_json() {
        let json = r#"[{"id": "n1", "raw": "https://example.org/hasAuthor", "role": "predicate"}]"#;
        let nodes: Vec<ScannedNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes[0].id.as_deref(), Some("n1"));
        assert_eq!(nodes[0].candidate.role, Role::Predicate);
        assert!(!nodes[0].is_resolved());
    }
}
