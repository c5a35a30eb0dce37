//! Writes a graph out in the dot language, ready for neato/dot2tex.

use super::Graph;

/// Keywords that must be quoted when used as an ID.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

impl Graph {
    /// Serialize the graph to dot.
    ///
    /// Graph attributes go in a leading `graph [...]` statement, which is left out when
    /// there are none.  Nodes are written before edges, each with its own attribute list.
    pub fn to_dot(&self) -> String {
        let strict = if self.strict { "strict " } else { "" };
        let name = match &self.name {
            Some(name) => format!("{} ", quote_id(name)),
            None => String::new(),
        };
        let mut dot = vec![format!("{strict}{} {name}{{", self.kind.keyword())];

        if !self.attributes.is_empty() {
            dot.push(format!("\tgraph [{}];", self.attributes));
        }

        for node in self.nodes_iter() {
            let name = quote_id(node.name());
            if node.attributes().is_empty() {
                dot.push(format!("\t{name};"));
            } else {
                dot.push(format!("\t{name} [{}];", node.attributes()));
            }
        }

        let edge_op = self.kind.edge_op();
        for edge in self.edges_iter() {
            let src = quote_id(self.get_node(edge.src_node).name());
            let dst = quote_id(self.get_node(edge.dst_node).name());
            if edge.attributes.is_empty() {
                dot.push(format!("\t{src} {edge_op} {dst};"));
            } else {
                dot.push(format!("\t{src} {edge_op} {dst} [{}];", edge.attributes));
            }
        }

        dot.push("}".to_string());
        dot.push(String::new());

        dot.join("\n")
    }
}

/// Quote an ID unless it is a plain identifier or a numeral.
pub(crate) fn quote_id(id: &str) -> String {
    if is_numeral(id) || (is_plain_id(id) && !is_keyword(id)) {
        id.to_string()
    } else {
        format!("\"{}\"", escape_quoted(id))
    }
}

/// Escape text for use between double quotes.
///
/// A `"` becomes `\"`.  A run of backslashes directly before a `"` or at the end of the
/// text is doubled, so it can never escape the quote that follows it.  Other
/// backslashes (`\alpha`, `\n`) are left as they are.
fn escape_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    let mut backslashes = 0;

    for ch in text.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                escaped.push_str(&"\\".repeat(2 * backslashes + 1));
                escaped.push('"');
                backslashes = 0;
            }
            _ => {
                escaped.push_str(&"\\".repeat(backslashes));
                escaped.push(ch);
                backslashes = 0;
            }
        }
    }
    escaped.push_str(&"\\".repeat(2 * backslashes));

    escaped
}

fn is_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || !ch.is_ascii()
}

fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if is_id_char(first) && !first.is_ascii_digit() => chars.all(is_id_char),
        _ => false,
    }
}

fn is_keyword(id: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(id))
}

/// Matches `-?(.[0-9]+ | [0-9]+(.[0-9]*)?)`
fn is_numeral(id: &str) -> bool {
    let unsigned = id.strip_prefix('-').unwrap_or(id);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| s.chars().all(|ch| ch.is_ascii_digit());

    match fraction {
        None => !whole.is_empty() && all_digits(whole),
        Some(fraction) => {
            all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
        }
    }
}
