use spdlog::warn;

use crate::document::{Block, Document, Inline, ListChild, ListFormat};
use crate::media::{resolve_media, SizeTag};

/// One inline style mark. Wrapping order is canonical: `Code` sits innermost,
/// then `Bold`, `Italic`, `Underline`, with `Strikethrough` outermost, so a
/// span with several marks nests identically on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    Text(String),
    Styled(Mark, Box<InlineNode>),
    Link { url: String, children: Vec<InlineNode> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItemNode {
    pub inline: Vec<InlineNode>,
    pub nested: Vec<PresentationNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresentationNode {
    Paragraph(Vec<InlineNode>),
    Heading { level: u8, inline: Vec<InlineNode> },
    List { ordered: bool, items: Vec<ListItemNode> },
    Quote(Vec<InlineNode>),
    Code(String),
    Image { url: String, alt: String, caption: Option<String> },
}

/// A block that could not be rendered. Never aborts the rest of the
/// document: the offending block is dropped and rendering continues.
/// `UnknownBlockType` only ever points at a top-level block; anomalies
/// inside a list surface as `MalformedDocument` on the enclosing top-level
/// block, with the nesting named in `reason`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderIssue {
    MalformedDocument { index: usize, reason: String },
    UnknownBlockType { index: usize },
}

pub struct RenderOutput {
    pub nodes: Vec<PresentationNode>,
    pub issues: Vec<RenderIssue>,
}

/// Renders a document into presentation nodes, one per renderable top-level
/// block, in source order. Pure and stateless; `host` prefixes relative
/// image URLs.
pub fn render(document: &Document, host: &str) -> RenderOutput {
    let mut nodes = Vec::with_capacity(document.len());
    let mut issues = vec![];

    for (index, block) in document.iter().enumerate() {
        if let Some(node) = render_block(block, host, index, &mut issues) {
            nodes.push(node);
        }
    }

    for issue in issues.iter() {
        match issue {
            RenderIssue::MalformedDocument { index, reason } => {
                warn!("Skipping malformed block {}: {}", index, reason);
            }
            RenderIssue::UnknownBlockType { index } => {
                warn!("Skipping block {} of unknown type", index);
            }
        }
    }

    RenderOutput { nodes, issues }
}

fn render_block(
    block: &Block,
    host: &str,
    index: usize,
    issues: &mut Vec<RenderIssue>,
) -> Option<PresentationNode> {
    match block {
        Block::Paragraph { children } => {
            Some(PresentationNode::Paragraph(render_inline_children(children)))
        }
        Block::Heading { level, children } => {
            if !(1..=6).contains(level) {
                issues.push(RenderIssue::MalformedDocument {
                    index,
                    reason: format!("heading level {} is outside 1..=6", level),
                });
                return None;
            }
            Some(PresentationNode::Heading {
                level: *level as u8,
                inline: render_inline_children(children),
            })
        }
        Block::List { format, children } => {
            Some(render_list(*format, children, host, index, issues))
        }
        Block::ListItem { .. } => {
            issues.push(RenderIssue::MalformedDocument {
                index,
                reason: "list item outside of a list".to_string(),
            });
            None
        }
        Block::Quote { children } => {
            Some(PresentationNode::Quote(render_inline_children(children)))
        }
        Block::Code { children } => Some(PresentationNode::Code(plain_text(children))),
        Block::Image { image } => {
            let Some(asset) = image else {
                issues.push(RenderIssue::MalformedDocument {
                    index,
                    reason: "image block without an asset".to_string(),
                });
                return None;
            };
            let alt = asset.alternative_text.clone().unwrap_or_default();
            let url = resolve_media(Some(asset), host, SizeTag::Large, &alt);
            Some(PresentationNode::Image {
                url,
                alt,
                caption: asset.caption.clone(),
            })
        }
        Block::Unknown => {
            issues.push(RenderIssue::UnknownBlockType { index });
            None
        }
    }
}

fn render_list(
    format: ListFormat,
    children: &[Block],
    host: &str,
    index: usize,
    issues: &mut Vec<RenderIssue>,
) -> PresentationNode {
    let mut items: Vec<ListItemNode> = vec![];

    for child in children {
        match child {
            Block::ListItem { children } => {
                let mut inline = vec![];
                let mut nested = vec![];
                for part in children {
                    match part {
                        ListChild::Inline(span) => {
                            if let Some(node) = render_inline(span) {
                                inline.push(node);
                            }
                        }
                        ListChild::Block(block) => {
                            let mut item_issues = vec![];
                            if let Some(node) = render_block(block, host, index, &mut item_issues)
                            {
                                nested.push(node);
                            }
                            issues.extend(item_issues.into_iter().map(nested_in_item));
                        }
                    }
                }
                items.push(ListItemNode { inline, nested });
            }
            // A sub-list sitting directly under the list belongs to the item
            // rendered just before it.
            Block::List { format, children } => {
                let sublist = render_list(*format, children, host, index, issues);
                match items.last_mut() {
                    Some(prev) => prev.nested.push(sublist),
                    None => items.push(ListItemNode { inline: vec![], nested: vec![sublist] }),
                }
            }
            Block::Unknown => issues.push(RenderIssue::MalformedDocument {
                index,
                reason: "unknown block type among list children".to_string(),
            }),
            _ => issues.push(RenderIssue::MalformedDocument {
                index,
                reason: "list child is neither an item nor a sub-list".to_string(),
            }),
        }
    }

    PresentationNode::List {
        ordered: format == ListFormat::Ordered,
        items,
    }
}

fn nested_in_item(issue: RenderIssue) -> RenderIssue {
    match issue {
        RenderIssue::UnknownBlockType { index } => RenderIssue::MalformedDocument {
            index,
            reason: "unknown block type nested in a list item".to_string(),
        },
        RenderIssue::MalformedDocument { index, reason } => RenderIssue::MalformedDocument {
            index,
            reason: format!("{} (nested in a list item)", reason),
        },
    }
}

fn render_inline_children(children: &[Inline]) -> Vec<InlineNode> {
    children.iter().filter_map(render_inline).collect()
}

fn render_inline(span: &Inline) -> Option<InlineNode> {
    match span {
        Inline::Text { text, bold, italic, underline, strikethrough, code } => {
            let mut node = InlineNode::Text(text.clone());
            if *code {
                node = InlineNode::Styled(Mark::Code, Box::new(node));
            }
            if *bold {
                node = InlineNode::Styled(Mark::Bold, Box::new(node));
            }
            if *italic {
                node = InlineNode::Styled(Mark::Italic, Box::new(node));
            }
            if *underline {
                node = InlineNode::Styled(Mark::Underline, Box::new(node));
            }
            if *strikethrough {
                node = InlineNode::Styled(Mark::Strikethrough, Box::new(node));
            }
            Some(node)
        }
        Inline::Link { url, children } => Some(InlineNode::Link {
            url: url.clone(),
            children: render_inline_children(children),
        }),
        Inline::Unknown => None,
    }
}

/// Concatenated raw text of the spans, marks deliberately ignored. Used for
/// code blocks, whose content must never be reinterpreted as styled text.
fn plain_text(children: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(children, &mut out);
    out
}

fn collect_text(children: &[Inline], out: &mut String) {
    for span in children {
        match span {
            Inline::Text { text, .. } => out.push_str(text),
            Inline::Link { children, .. } => collect_text(children, out),
            Inline::Unknown => {}
        }
    }
}
