use serde::Deserialize;

use crate::model::MediaAsset;

pub mod renderer;

/// The rich-text content field of a blog: an ordered sequence of blocks.
pub type Document = Vec<Block>;

/// One structural unit of a document. The wire format tags every node with
/// `type`; tags we do not know deserialize to `Unknown` instead of failing
/// the whole payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Heading {
        #[serde(default)]
        level: i64,
        #[serde(default)]
        children: Vec<Inline>,
    },
    List {
        #[serde(default)]
        format: ListFormat,
        #[serde(default)]
        children: Vec<Block>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<ListChild>,
    },
    Quote {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Code {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Image {
        image: Option<MediaAsset>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    #[default]
    Unordered,
}

/// A list item holds inline spans, but nested lists show up as full blocks
/// among its children.
#[derive(Debug, Clone)]
pub enum ListChild {
    Inline(Inline),
    Block(Box<Block>),
}

// Hand-rolled because both `Inline` and `Block` carry a catch-all variant:
// an untagged enum would route every node into whichever side is tried
// first. The `type` tag decides instead.
impl<'de> serde::Deserialize<'de> for ListChild {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("type")
            .and_then(|t| t.as_str())
            .unwrap_or_default()
            .to_string();
        match tag.as_str() {
            "text" | "link" => Ok(ListChild::Inline(
                Inline::deserialize(value).map_err(D::Error::custom)?,
            )),
            _ => Ok(ListChild::Block(Box::new(
                Block::deserialize(value).map_err(D::Error::custom)?,
            ))),
        }
    }
}

/// A run of text with zero or more style marks, or an inline link wrapping
/// further spans. Marks are independent flags and combine freely.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Inline {
    Text {
        #[serde(default)]
        text: String,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
        #[serde(default)]
        underline: bool,
        #[serde(default)]
        strikethrough: bool,
        #[serde(default)]
        code: bool,
    },
    Link {
        #[serde(default)]
        url: String,
        #[serde(default)]
        children: Vec<Inline>,
    },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use crate::test_data::DOCUMENT_JSON;

    use super::*;

    #[test]
    fn test_parse_document() {
        let document: Document = serde_json::from_str(DOCUMENT_JSON).unwrap();
        assert_eq!(document.len(), 8);

        assert!(matches!(document[0], Block::Heading { level: 2, .. }));
        assert!(matches!(document[1], Block::Paragraph { .. }));
        assert!(matches!(document[3], Block::Quote { .. }));
        assert!(matches!(document[4], Block::Code { .. }));
        assert!(matches!(document[5], Block::Image { .. }));
        // "embed" is not a tag we know
        assert!(matches!(document[6], Block::Unknown));
    }

    #[test]
    fn test_parse_list_with_nested_list() {
        let document: Document = serde_json::from_str(DOCUMENT_JSON).unwrap();
        let Block::List { format, children } = &document[2] else {
            panic!("expected a list block");
        };
        assert_eq!(*format, ListFormat::Unordered);
        assert_eq!(children.len(), 2);

        let Block::ListItem { children } = &children[1] else {
            panic!("expected a list item");
        };
        assert!(matches!(children[0], ListChild::Inline(Inline::Text { .. })));
        assert!(matches!(children[1], ListChild::Block(_)));
    }

    #[test]
    fn test_parse_text_marks() {
        let span: Inline =
            serde_json::from_str(r#"{"type":"text","text":"hi","bold":true,"italic":true}"#).unwrap();
        let Inline::Text { text, bold, italic, underline, strikethrough, code } = span else {
            panic!("expected a text span");
        };
        assert_eq!(text, "hi");
        assert!(bold && italic);
        assert!(!underline && !strikethrough && !code);
    }

    #[test]
    fn test_unknown_inline_type_tolerated() {
        let span: Inline = serde_json::from_str(r#"{"type":"mention","user":42}"#).unwrap();
        assert!(matches!(span, Inline::Unknown));
    }
}
