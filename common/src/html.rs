//! トリプル文字列のHTMLエスケープ
//!
//! テンプレートに埋め込む前に、HTMLとして解釈される文字を数値文字参照にする。

/// HTMLとして解釈される文字を数値文字参照に置き換える
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&#38;"),
            '<' => escaped.push_str("&#60;"),
            '>' => escaped.push_str("&#62;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#039;"),
            '/' => escaped.push_str("&#47;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
