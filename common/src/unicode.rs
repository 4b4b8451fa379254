//! Unicodeエスケープの復元
//!
//! リテラル中の `\uXXXX` / `\u{X...}` を文字に戻す。
//! サロゲートペアは2つのエスケープをまとめて1文字にする。
//! 不正なエスケープはそのまま残す。

use regex::{Captures, Regex};

/// エスケープされたコードポイントを文字に戻す
///
/// # Examples
/// ```
/// use linked_label_common::unicode_to_char;
///
/// assert_eq!(unicode_to_char(r"caf\u00e9"), "café");
/// assert_eq!(unicode_to_char("plain text"), "plain text");
/// ```
pub fn unicode_to_char(text: &str) -> String {
    if !text.contains("\\u") {
        return text.to_string();
    }

    lazy_static::lazy_static! {
        // \uXXXX または \u{X...}（1回に1つだけ）
        static ref ESCAPE_RE: Regex = Regex::new(
            r"\\u(?:([0-9a-fA-F]{4})|\{([0-9a-fA-F]{1,6})\})"
        ).unwrap();
    }

    let escapes: Vec<Captures> = ESCAPE_RE.captures_iter(text).collect();
    let mut decoded = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;

    while i < escapes.len() {
        let caps = &escapes[i];
        i += 1;
        let Some(whole) = caps.get(0) else {
            continue;
        };
        decoded.push_str(&text[last..whole.start()]);
        last = whole.end();

        if let Some(braced) = caps.get(2) {
            match decode_braced(braced.as_str()) {
                Some(c) => decoded.push(c),
                None => decoded.push_str(whole.as_str()),
            }
            continue;
        }

        let unit = caps.get(1).map(|m| parse_unit(m.as_str())).unwrap_or(0);

        // 上位サロゲートの直後に下位サロゲートが続くときだけ2つを消費する
        if is_high_surrogate(unit) {
            let paired = escapes
                .get(i)
                .and_then(|next| low_surrogate_at(next, whole.end()))
                .and_then(|(low, end)| {
                    char::decode_utf16([unit, low])
                        .next()
                        .and_then(|r| r.ok())
                        .map(|c| (c, end))
                });
            if let Some((c, end)) = paired {
                decoded.push(c);
                last = end;
                i += 1;
                continue;
            }
        }

        match decode_single(unit) {
            Some(c) => decoded.push(c),
            None => decoded.push_str(whole.as_str()),
        }
    }

    decoded.push_str(&text[last..]);
    decoded
}

/// `start` の位置から始まる `\uXXXX` が下位サロゲートなら値と終端を返す
fn low_surrogate_at(caps: &Captures, start: usize) -> Option<(u16, usize)> {
    let whole = caps.get(0)?;
    if whole.start() != start {
        return None;
    }
    let unit = parse_unit(caps.get(1)?.as_str());
    is_low_surrogate(unit).then_some((unit, whole.end()))
}

fn decode_braced(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

fn parse_unit(hex: &str) -> u16 {
    // 正規表現で4桁の16進数に限定済み
    u16::from_str_radix(hex, 16).unwrap_or(0)
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// 単独のコード単位を文字にする（対のないサロゲートはNone）
fn decode_single(unit: u16) -> Option<char> {
    char::from_u32(u32::from(unit))
}
