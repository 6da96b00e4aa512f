use serde::Deserialize;

use crate::document::Document;
use crate::media::SizeTag;

/// Envelope every collection endpoint returns: `{ data: [...], meta: { pagination } }`.
/// `data` may be absent or null in degraded responses, so it defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    // `default = "Vec::new"` rather than plain `default`, which would make
    // the derive demand `T: Default`
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

/// A blog post as embedded in `/api/blogs?populate=*`. All relations are
/// optional: the API populates them to inconsistent depths and a blog with a
/// missing author or category still has to list and render.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub published: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub content: Document,
    pub cover: Option<MediaAsset>,
    pub author: Option<Author>,
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Used both as the full entity from `/api/authors` and as the shallow
/// reference embedded in a blog (where `avatar` is never populated).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub slug: Option<String>,
    pub avatar: Option<MediaAsset>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Image descriptor. `url` is the canonical (usually host-relative) location;
/// `formats` carries pre-scaled variants, any subset of which may be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    #[serde(default)]
    pub url: String,
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    pub formats: Option<MediaFormats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaFormats {
    pub thumbnail: Option<MediaVariant>,
    pub small: Option<MediaVariant>,
    pub medium: Option<MediaVariant>,
    pub large: Option<MediaVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaVariant {
    pub url: String,
}

impl MediaAsset {
    pub fn variant(&self, size: SizeTag) -> Option<&MediaVariant> {
        let formats = self.formats.as_ref()?;
        match size {
            SizeTag::Thumbnail => formats.thumbnail.as_ref(),
            SizeTag::Small => formats.small.as_ref(),
            SizeTag::Medium => formats.medium.as_ref(),
            SizeTag::Large => formats.large.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::BLOGS_JSON;

    use super::*;

    #[test]
    fn test_parse_blogs_payload() {
        let envelope: Envelope<Blog> = serde_json::from_str(BLOGS_JSON).unwrap();
        assert_eq!(envelope.data.len(), 5);

        let first = &envelope.data[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.document_id, "b1doc");
        assert_eq!(first.title, "Weaving Light Through Fog");
        assert_eq!(first.category.as_ref().unwrap().slug, "tech");
        assert_eq!(first.tags.len(), 2);
        assert_eq!(first.author.as_ref().unwrap().name, "Mara Quill");

        let pagination = envelope.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.total, 5);
    }

    #[test]
    fn test_missing_relations_tolerated() {
        // Strapi populates relations to inconsistent depths
        let body = r#"{"data":[{"id":9,"title":"Bare"}]}"#;
        let envelope: Envelope<Blog> = serde_json::from_str(body).unwrap();
        let blog = &envelope.data[0];
        assert!(blog.author.is_none());
        assert!(blog.category.is_none());
        assert!(blog.cover.is_none());
        assert!(blog.tags.is_empty());
        assert!(blog.content.is_empty());
        assert!(envelope.meta.is_none());
    }

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let envelope: Envelope<Blog> = serde_json::from_str(r#"{"meta":{}}"#).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_variant_lookup() {
        let asset = MediaAsset {
            url: "/uploads/cover.jpg".to_string(),
            alternative_text: None,
            caption: None,
            formats: Some(MediaFormats {
                thumbnail: Some(MediaVariant { url: "/uploads/thumbnail_cover.jpg".to_string() }),
                small: None,
                medium: None,
                large: None,
            }),
        };
        assert_eq!(asset.variant(SizeTag::Thumbnail).unwrap().url, "/uploads/thumbnail_cover.jpg");
        assert!(asset.variant(SizeTag::Large).is_none());

        let bare = MediaAsset::default();
        assert!(bare.variant(SizeTag::Small).is_none());
    }
}
