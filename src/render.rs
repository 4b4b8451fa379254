//! ターミナル表示
//!
//! 解決結果を1行の説明、またはSPARQL結果の表として整形する。

use linked_label_common::{entity_path, escape_html, LabelResult, Resolution};

/// 解決結果を1行で説明する
pub fn describe(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Label(label) => describe_label(label),
        Resolution::Provenance(Some(link)) => format!("[来歴リンク] {} (新しいタブ)", link.href),
        Resolution::Provenance(None) => "[来歴] リンクなし".to_string(),
    }
}

fn describe_label(label: &LabelResult) -> String {
    match label {
        LabelResult::LocalEntityLink { label, target } => {
            format!("[エンティティ] {} -> {}", label, entity_path(target))
        }
        LabelResult::ExternalIdentifierLink { scheme, target } => {
            format!("[{}] {}", scheme.to_uppercase(), target)
        }
        LabelResult::GenericLabel { text, title } => format!("[ラベル] {} ({})", text, title),
        LabelResult::LiteralText { text } => format!("[リテラル] {}", text),
    }
}

/// 表示幅（文字数）
fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, target: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(target.saturating_sub(width(text))));
    padded
}

/// ヘッダと行から表を作る
pub fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(width(cell));
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(cell, w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(header));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

/// ヘッダと行からHTMLの表を作る（セルはすべてエスケープする）
pub fn render_html_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table class=\"table\">\n<thead>\n<tr>");
    for var in header {
        html.push_str(&format!("<th>{}</th>", escape_html(var)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}
