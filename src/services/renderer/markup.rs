//! 极简 HTML 文档树
//!
//! 只覆盖答题卡需要的部分：元素、转义文本、内联样式 / 脚本原文。

/// 文档树节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// 写出时会转义的文本
    Text(String),
    /// 原样写出的内容（内联 CSS / JS）
    Raw(&'static str),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// HTML 元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// 布尔属性，例如 `readonly`
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, raw: &'static str) -> Self {
        self.children.push(Node::Raw(raw));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "input" | "meta" | "br")
    }

    // 块级元素结束后换行，方便查看源码
    fn is_block(&self) -> bool {
        matches!(
            self.tag,
            "html" | "head" | "body" | "style" | "script" | "div" | "h2" | "meta" | "title"
        )
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
        }
        out.push('>');

        if !self.is_void() {
            for child in &self.children {
                match child {
                    Node::Element(element) => element.write_to(out),
                    Node::Text(text) => out.push_str(&escape_html(text)),
                    Node::Raw(raw) => out.push_str(raw),
                }
            }
            out.push_str("</");
            out.push_str(self.tag);
            out.push('>');
        }

        if self.is_block() {
            out.push('\n');
        }
    }

    /// 作为完整文档输出（带 DOCTYPE）
    pub fn to_document(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html>\n");
        self.write_to(&mut out);
        out
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
