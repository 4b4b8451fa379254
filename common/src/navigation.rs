//! エンティティ詳細ページへの遷移

/// エンティティ詳細ページのパスプレフィックス
pub const ENTITY_ROUTE: &str = "/entity/";

/// リンク化されたエンティティのCSSクラス
pub const ENTITY_LINK_CLASS: &str = "entity";

/// 解決済みの目的語に付けるCSSクラス
pub const RESOLVED_OBJECT_CLASS: &str = "tripleObjectRes";

/// エンティティ詳細ページのパスを作る
///
/// キーはラベル解決で得たリンク先そのまま（追加の変換はしない）。
///
/// # Examples
/// ```
/// use linked_label_common::entity_path;
///
/// assert_eq!(
///     entity_path("https://example.org/entity/1"),
///     "/entity/https://example.org/entity/1"
/// );
/// ```
pub fn entity_path(key: &str) -> String {
    format!("{}{}", ENTITY_ROUTE, key)
}
