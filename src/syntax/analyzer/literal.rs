//! Static evaluation of string-valued expressions.
//!
//! `UIStrings` values are read straight from the syntax tree; the file itself is never executed.

use tree_sitter::Node;

/// Evaluates a string-valued expression node.
///
/// Supports string literals, template literals without substitutions,
/// parenthesized expressions and `+` concatenation of those.
/// Returns the kind of the first unsupported node on failure.
pub(crate) fn evaluate_string(node: Node<'_>, source: &str) -> Result<String, String> {
    let mut units = Vec::new();
    collect_units(node, source, &mut units)?;
    Ok(String::from_utf16_lossy(&units))
}

/// UTF-16 で積み上げる (`😀` のようなサロゲートペアが別々のエスケープになるため)
fn collect_units(node: Node<'_>, source: &str, units: &mut Vec<u16>) -> Result<(), String> {
    match node.kind() {
        "string" | "template_string" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "string_fragment" => units.extend(node_text(child, source).encode_utf16()),
                    "escape_sequence" => decode_escape(node_text(child, source), units),
                    "comment" => {}
                    other => return Err(other.to_string()),
                }
            }
            Ok(())
        }
        "parenthesized_expression" => {
            let inner = first_non_comment_child(node).ok_or_else(|| node.kind().to_string())?;
            collect_units(inner, source, units)
        }
        "binary_expression" => {
            let is_concat = node
                .child_by_field_name("operator")
                .is_some_and(|operator| operator.kind() == "+");
            let (Some(left), Some(right), true) =
                (node.child_by_field_name("left"), node.child_by_field_name("right"), is_concat)
            else {
                return Err(node.kind().to_string());
            };
            collect_units(left, source, units)?;
            collect_units(right, source, units)
        }
        other => Err(other.to_string()),
    }
}

fn first_non_comment_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find(|child| child.kind() != "comment")
}

fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Decodes a single JavaScript escape sequence (including the leading backslash).
pub(crate) fn decode_escape(raw: &str, units: &mut Vec<u16>) {
    let Some(body) = raw.strip_prefix('\\') else {
        units.extend(raw.encode_utf16());
        return;
    };
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return;
    };
    let rest = chars.as_str();

    let simple = match first {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        // 行継続
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => return,
        _ => None,
    };
    if let Some(c) = simple {
        push_char(c, units);
        return;
    }

    match first {
        'x' => push_code_point(u32::from_str_radix(rest, 16).ok(), raw, units),
        'u' => {
            let hex = rest.strip_prefix('{').and_then(|r| r.strip_suffix('}')).unwrap_or(rest);
            match u32::from_str_radix(hex, 16) {
                // `\uXXXX` はサロゲート単体の場合もあるのでコードユニットとして扱う
                Ok(value) if !rest.starts_with('{') => {
                    units.push(u16::try_from(value).unwrap_or(u16::MAX));
                }
                Ok(value) => push_code_point(Some(value), raw, units),
                Err(_) => units.extend(raw.encode_utf16()),
            }
        }
        '0'..='7' => push_code_point(u32::from_str_radix(body, 8).ok(), raw, units),
        // `\'`, `\"`, `\\` などはそのままの文字
        other => {
            push_char(other, units);
            units.extend(rest.encode_utf16());
        }
    }
}

fn push_char(c: char, units: &mut Vec<u16>) {
    let mut buffer = [0; 2];
    units.extend_from_slice(c.encode_utf16(&mut buffer));
}

fn push_code_point(value: Option<u32>, raw: &str, units: &mut Vec<u16>) {
    match value.and_then(char::from_u32) {
        Some(c) => push_char(c, units),
        None => units.extend(raw.encode_utf16()),
    }
}
