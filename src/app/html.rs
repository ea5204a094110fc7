use crate::app::view::{Element, Node};
use std::fmt::Write;

/// 把節點序列化成 HTML；文字與屬性值一律跳脫
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// 完整文件，加上 doctype
pub fn to_document(root: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    write_node(root, &mut out);
    out.push('\n');
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(value) => out.push_str(&escape_text(value)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);

    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", escape_attr(id));
    }

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
    }

    for (name, value) in &element.attrs {
        if value.is_empty() {
            // 布林屬性，例如 disabled
            let _ = write!(out, " {}", name);
        } else {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
    }

    out.push('>');

    if element.is_void() {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }

    let _ = write!(out, "</{}>", element.tag);
}

pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_attributes_and_void_elements() {
        let node: Node = Element::new("div")
            .id("card")
            .class("flex items-center")
            .child(Element::new("img").attr("src", "https://img/1.png").attr("alt", "Bulbasaur"))
            .child(Element::new("button").attr("disabled", "").text("Search"))
            .into();

        assert_eq!(
            to_html(&node),
            "<div id=\"card\" class=\"flex items-center\">\
             <img src=\"https://img/1.png\" alt=\"Bulbasaur\">\
             <button disabled>Search</button></div>"
        );
    }

    #[test]
    fn test_escapes_external_text() {
        let node: Node = Element::new("h2")
            .attr("title", "\"><script>alert(1)</script>")
            .text("<img src=x onerror=alert(1)> & co")
            .into();

        let html = to_html(&node);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt; &amp; co"));
        assert!(html.contains("title=\"&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_document_has_doctype() {
        let doc = to_document(&Element::new("html").into());
        assert!(doc.starts_with("<!DOCTYPE html>\n<html></html>"));
    }
}
