//! Pseudo-localization (`en-XA`).
//!
//! Every ASCII letter outside `{...}` placeholders gets a combining accent,
//! alternating between circumflex and acute, so that untranslated or
//! concatenated strings stand out in the UI.

use crate::types::{
    MessageEntry,
    StringTable,
};

/// U+0302 COMBINING CIRCUMFLEX ACCENT
const CIRCUMFLEX: char = '\u{302}';
/// U+0301 COMBINING ACUTE ACCENT
const ACUTE: char = '\u{301}';

/// Builds the pseudo-localized copy of a table.
///
/// Keys and order are unchanged; descriptions are dropped.
#[must_use]
pub fn pseudo_localize(table: &StringTable) -> StringTable {
    table
        .iter()
        .map(|(key, entry)| (key.clone(), MessageEntry::new(pseudo_localize_message(&entry.message))))
        .collect()
}

/// メッセージ 1 件を擬似ローカライズする
#[must_use]
pub fn pseudo_localize_message(message: &str) -> String {
    let mut output = String::with_capacity(message.len() * 2);
    // 閉じ括弧が多すぎる場合は負になる
    let mut brace_depth: i32 = 0;
    let mut use_circumflex = true;

    for c in message.chars() {
        output.push(c);
        match c {
            '{' => brace_depth += 1,
            '}' => brace_depth -= 1,
            c if brace_depth == 0 && c.is_ascii_alphabetic() => {
                output.push(if use_circumflex { CIRCUMFLEX } else { ACUTE });
                use_circumflex = !use_circumflex;
            }
            _ => {}
        }
    }

    output
}
