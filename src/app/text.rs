//! Plain-text rendering of a view tree for the terminal session.
//!
//! Hidden elements and `<head>` are skipped, block elements start a new
//! line, inline content is joined with single spaces. Images are dropped.

use crate::app::view::{Element, Node};

const BLOCK_TAGS: &[&str] = &["html", "body", "header", "main", "div", "h1", "h2", "p"];

pub fn to_text(node: &Node) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    walk(node, &mut lines, &mut line);
    flush(&mut lines, &mut line);
    lines.join("\n")
}

fn walk(node: &Node, lines: &mut Vec<String>, line: &mut String) {
    match node {
        Node::Text(value) => push_inline(line, value.trim()),
        Node::Element(element) => {
            if element.is_hidden() || matches!(element.tag, "head" | "img") {
                return;
            }

            match element.tag {
                "input" => {
                    let value = element.get_attr("value").unwrap_or_default();
                    push_inline(line, &format!("> {}", value));
                }
                "button" => push_inline(line, &button_label(element)),
                tag if BLOCK_TAGS.contains(&tag) => {
                    flush(lines, line);
                    for child in &element.children {
                        walk(child, lines, line);
                    }
                    flush(lines, line);
                }
                _ => {
                    for child in &element.children {
                        walk(child, lines, line);
                    }
                }
            }
        }
    }
}

fn button_label(element: &Element) -> String {
    let label = element.text_content();
    if element.has_attr("disabled") {
        format!("[{} (disabled)]", label.trim())
    } else {
        format!("[{}]", label.trim())
    }
}

fn push_inline(line: &mut String, value: &str) {
    if value.is_empty() {
        return;
    }
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(value);
}

fn flush(lines: &mut Vec<String>, line: &mut String) {
    if !line.is_empty() {
        lines.push(std::mem::take(line));
    }
}
