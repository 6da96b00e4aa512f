use crate::model::MediaAsset;

const PLACEHOLDER_ENDPOINT: &str = "https://ui-avatars.com/api/";
const PLACEHOLDER_BACKGROUND: &str = "ffffff";
const PLACEHOLDER_COLOR: &str = "1e293b";
const PLACEHOLDER_SIZE: &str = "256";

/// The fixed size-variant vocabulary of the media API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTag {
    Thumbnail,
    Small,
    Medium,
    Large,
}

impl SizeTag {
    /// Degrade order, largest first: the preferred size, then every smaller
    /// one. The caller falls back to the original URL after the chain.
    fn degrade_chain(self) -> &'static [SizeTag] {
        match self {
            SizeTag::Large => &[SizeTag::Large, SizeTag::Medium, SizeTag::Small, SizeTag::Thumbnail],
            SizeTag::Medium => &[SizeTag::Medium, SizeTag::Small, SizeTag::Thumbnail],
            SizeTag::Small => &[SizeTag::Small, SizeTag::Thumbnail],
            SizeTag::Thumbnail => &[SizeTag::Thumbnail],
        }
    }
}

/// Best-fit URL for an asset at the preferred size. Total function: a
/// missing or urlless asset degrades to a generated placeholder, a missing
/// variant degrades down the size chain, and the original URL is the last
/// resort. A broken image must never break a render.
pub fn resolve_media(
    asset: Option<&MediaAsset>,
    host: &str,
    preferred: SizeTag,
    fallback_name: &str,
) -> String {
    let Some(asset) = asset else {
        return placeholder_url(fallback_name);
    };
    if asset.url.is_empty() {
        return placeholder_url(fallback_name);
    }

    for size in preferred.degrade_chain() {
        if let Some(variant) = asset.variant(*size) {
            return prefix_host(host, &variant.url);
        }
    }

    prefix_host(host, &asset.url)
}

/// Deterministic avatar-service URL for a display name. Same name, same URL.
pub fn placeholder_url(name: &str) -> String {
    let query = serde_urlencoded::to_string([
        ("name", name),
        ("background", PLACEHOLDER_BACKGROUND),
        ("color", PLACEHOLDER_COLOR),
        ("size", PLACEHOLDER_SIZE),
    ])
    .unwrap_or_default();
    format!("{}?{}", PLACEHOLDER_ENDPOINT, query)
}

/// Externally hosted assets keep their absolute URL; everything else is the
/// configured host plus the API-relative path, concatenated verbatim.
fn prefix_host(host: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{}", host, url)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{MediaFormats, MediaVariant};

    use super::*;

    const HOST: &str = "http://localhost:1337";

    fn asset_with(formats: Option<MediaFormats>) -> MediaAsset {
        MediaAsset {
            url: "/uploads/cover.jpg".to_string(),
            alternative_text: None,
            caption: None,
            formats,
        }
    }

    fn variant(url: &str) -> Option<MediaVariant> {
        Some(MediaVariant { url: url.to_string() })
    }

    #[test]
    fn test_placeholder_is_pure_in_the_name() {
        let a = resolve_media(None, HOST, SizeTag::Large, "Mara Quill");
        let b = resolve_media(None, HOST, SizeTag::Large, "Mara Quill");
        assert_eq!(a, b);
        assert_eq!(
            a,
            "https://ui-avatars.com/api/?name=Mara+Quill&background=ffffff&color=1e293b&size=256"
        );
    }

    #[test]
    fn test_empty_url_degrades_to_placeholder() {
        let asset = MediaAsset::default();
        let url = resolve_media(Some(&asset), HOST, SizeTag::Small, "X");
        assert!(url.starts_with("https://ui-avatars.com/api/?name=X"));
    }

    #[test]
    fn test_preferred_size_wins() {
        let asset = asset_with(Some(MediaFormats {
            thumbnail: variant("/uploads/thumbnail_cover.jpg"),
            small: variant("/uploads/small_cover.jpg"),
            medium: None,
            large: variant("/uploads/large_cover.jpg"),
        }));
        let url = resolve_media(Some(&asset), HOST, SizeTag::Large, "X");
        assert_eq!(url, "http://localhost:1337/uploads/large_cover.jpg");
    }

    #[test]
    fn test_falls_through_chain_to_thumbnail() {
        let asset = asset_with(Some(MediaFormats {
            thumbnail: variant("/uploads/thumbnail_cover.jpg"),
            small: None,
            medium: None,
            large: None,
        }));
        let url = resolve_media(Some(&asset), HOST, SizeTag::Large, "X");
        assert_eq!(url, "http://localhost:1337/uploads/thumbnail_cover.jpg");
    }

    #[test]
    fn test_no_formats_returns_original() {
        let asset = asset_with(None);
        let url = resolve_media(Some(&asset), HOST, SizeTag::Medium, "X");
        assert_eq!(url, "http://localhost:1337/uploads/cover.jpg");
    }

    #[test]
    fn test_smaller_preferred_skips_larger_variants() {
        let asset = asset_with(Some(MediaFormats {
            thumbnail: None,
            small: None,
            medium: variant("/uploads/medium_cover.jpg"),
            large: variant("/uploads/large_cover.jpg"),
        }));
        // Small only degrades downward, so neither variant applies
        let url = resolve_media(Some(&asset), HOST, SizeTag::Small, "X");
        assert_eq!(url, "http://localhost:1337/uploads/cover.jpg");
    }

    #[test]
    fn test_absolute_urls_not_prefixed() {
        let mut asset = asset_with(None);
        asset.url = "https://cdn.example.com/pic.png".to_string();
        let url = resolve_media(Some(&asset), HOST, SizeTag::Large, "X");
        assert_eq!(url, "https://cdn.example.com/pic.png");
    }
}
