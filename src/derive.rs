use crate::model::Blog;

/// Blogs matching the category and tag selectors, in their original order.
/// An empty selector matches everything, so `("", "")` returns the full
/// collection. The tag selector matches when ANY of the blog's tags carries
/// that slug.
pub fn filter_blogs<'a>(blogs: &'a [Blog], category_slug: &str, tag_slug: &str) -> Vec<&'a Blog> {
    blogs
        .iter()
        .filter(|blog| matches_category(blog, category_slug) && matches_tag(blog, tag_slug))
        .collect()
}

/// Blogs related to `target`: same category id, or at least one shared tag
/// id. Two blogs with no category at all count as sharing one; a populated
/// category never matches a missing one. Excludes `target` itself, keeps
/// scan order, stops after `limit` matches. Deliberately unranked: the
/// first matches win, not the best.
pub fn related_blogs<'a>(target: &Blog, blogs: &'a [Blog], limit: usize) -> Vec<&'a Blog> {
    blogs
        .iter()
        .filter(|blog| blog.id != target.id && (same_category(blog, target) || shares_tag(blog, target)))
        .take(limit)
        .collect()
}

/// Blogs whose embedded author reference has exactly this id. Blogs with no
/// populated author never match.
pub fn blogs_by_author<'a>(author_id: i64, blogs: &'a [Blog]) -> Vec<&'a Blog> {
    blogs
        .iter()
        .filter(|blog| blog.author.as_ref().is_some_and(|author| author.id == author_id))
        .collect()
}

fn matches_category(blog: &Blog, slug: &str) -> bool {
    slug.is_empty() || blog.category.as_ref().is_some_and(|category| category.slug == slug)
}

fn matches_tag(blog: &Blog, slug: &str) -> bool {
    slug.is_empty() || blog.tags.iter().any(|tag| tag.slug == slug)
}

fn same_category(a: &Blog, b: &Blog) -> bool {
    match (&a.category, &b.category) {
        (Some(x), Some(y)) => x.id == y.id,
        (None, None) => true,
        _ => false,
    }
}

fn shares_tag(a: &Blog, b: &Blog) -> bool {
    a.tags.iter().any(|tag| b.tags.iter().any(|other| other.id == tag.id))
}

#[cfg(test)]
mod tests {
    use crate::model::Envelope;
    use crate::test_data::BLOGS_JSON;

    use super::*;

    fn fixture_blogs() -> Vec<Blog> {
        let envelope: Envelope<Blog> = serde_json::from_str(BLOGS_JSON).unwrap();
        envelope.data
    }

    #[test]
    fn test_empty_selectors_are_identity() {
        let blogs = fixture_blogs();
        let filtered = filter_blogs(&blogs, "", "");
        let ids: Vec<i64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_by_category_slug() {
        let blogs = fixture_blogs();
        let filtered = filter_blogs(&blogs, "tech", "");
        let ids: Vec<i64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        for blog in filtered {
            assert_eq!(blog.category.as_ref().unwrap().slug, "tech");
        }
    }

    #[test]
    fn test_filter_by_tag_matches_any_of_the_blogs_tags() {
        let blogs = fixture_blogs();
        let filtered = filter_blogs(&blogs, "", "rust");
        let ids: Vec<i64> = filtered.iter().map(|b| b.id).collect();
        // blog 3 carries several tags, rust only needs to be one of them
        assert_eq!(ids, vec![3, 5]);
    }

    #[test]
    fn test_filter_by_category_and_tag_combined() {
        let blogs = fixture_blogs();
        let filtered = filter_blogs(&blogs, "tech", "rust");
        let ids: Vec<i64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_related_excludes_target_and_keeps_scan_order() {
        let blogs = fixture_blogs();
        // blog 3 shares its category with blog 1 and a tag with blog 5
        let target = blogs.iter().find(|b| b.id == 3).unwrap();
        let related = related_blogs(target, &blogs, 3);
        let ids: Vec<i64> = related.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_related_truncates_to_limit() {
        let blogs = fixture_blogs();
        let target = blogs.iter().find(|b| b.id == 3).unwrap();
        let related = related_blogs(target, &blogs, 1);
        let ids: Vec<i64> = related.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_related_on_empty_collection() {
        let blogs = fixture_blogs();
        let target = blogs.iter().find(|b| b.id == 3).unwrap();
        assert!(related_blogs(target, &[], 3).is_empty());
    }

    #[test]
    fn test_missing_category_never_matches_a_populated_one() {
        let blogs = fixture_blogs();
        // blog 4 has no populated category and every other fixture blog
        // does, so only a shared tag can relate it
        let target = blogs.iter().find(|b| b.id == 4).unwrap();
        let related = related_blogs(target, &blogs, 3);
        let ids: Vec<i64> = related.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_uncategorized_blogs_relate_to_each_other() {
        let body = r#"{"data":[
            {"id":1,"title":"Adrift"},
            {"id":2,"title":"Anchored"}
        ]}"#;
        let envelope: Envelope<Blog> = serde_json::from_str(body).unwrap();
        let related = related_blogs(&envelope.data[0], &envelope.data, 3);
        let ids: Vec<i64> = related.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_blogs_by_author() {
        let blogs = fixture_blogs();
        let ids: Vec<i64> = blogs_by_author(10, &blogs).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(blogs_by_author(999, &blogs).is_empty());
    }
}
