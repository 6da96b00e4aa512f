use crate::document::renderer::{InlineNode, ListItemNode, Mark, PresentationNode};

/// Serializes presentation nodes to HTML. Text content and attribute values
/// are escaped; code spans and blocks too, their text is verbatim but still
/// has to survive inside markup.
pub fn render_html(nodes: &[PresentationNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        push_node(&mut out, node);
    }
    out
}

fn push_node(out: &mut String, node: &PresentationNode) {
    match node {
        PresentationNode::Paragraph(inline) => {
            out.push_str("<p>");
            push_inline_seq(out, inline);
            out.push_str("</p>\n");
        }
        PresentationNode::Heading { level, inline } => {
            out.push_str(&format!("<h{}>", level));
            push_inline_seq(out, inline);
            out.push_str(&format!("</h{}>\n", level));
        }
        PresentationNode::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{}>\n", tag));
            for item in items {
                push_item(out, item);
            }
            out.push_str(&format!("</{}>\n", tag));
        }
        PresentationNode::Quote(inline) => {
            out.push_str("<blockquote>");
            push_inline_seq(out, inline);
            out.push_str("</blockquote>\n");
        }
        PresentationNode::Code(text) => {
            out.push_str("<pre><code>");
            escape_into(out, text);
            out.push_str("</code></pre>\n");
        }
        PresentationNode::Image { url, alt, caption } => {
            out.push_str("<figure><img src=\"");
            escape_into(out, url);
            out.push_str("\" alt=\"");
            escape_into(out, alt);
            out.push_str("\">");
            if let Some(caption) = caption {
                if !caption.is_empty() {
                    out.push_str("<figcaption>");
                    escape_into(out, caption);
                    out.push_str("</figcaption>");
                }
            }
            out.push_str("</figure>\n");
        }
    }
}

fn push_item(out: &mut String, item: &ListItemNode) {
    out.push_str("<li>");
    push_inline_seq(out, &item.inline);
    for nested in &item.nested {
        push_node(out, nested);
    }
    out.push_str("</li>\n");
}

fn push_inline_seq(out: &mut String, inline: &[InlineNode]) {
    for node in inline {
        push_inline(out, node);
    }
}

fn push_inline(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(text) => escape_into(out, text),
        InlineNode::Styled(mark, inner) => {
            let tag = mark_tag(*mark);
            out.push_str(&format!("<{}>", tag));
            push_inline(out, inner);
            out.push_str(&format!("</{}>", tag));
        }
        InlineNode::Link { url, children } => {
            out.push_str("<a href=\"");
            escape_into(out, url);
            out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            push_inline_seq(out, children);
            out.push_str("</a>");
        }
    }
}

fn mark_tag(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "strong",
        Mark::Italic => "em",
        Mark::Underline => "u",
        Mark::Strikethrough => "s",
        Mark::Code => "code",
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
