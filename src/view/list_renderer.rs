use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::view::{BlogCard, HomeView};

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    cards: Vec<CardItem<'a>>,
    categories: Vec<FilterItem<'a>>,
    tags: Vec<FilterItem<'a>>,
}

#[derive(ramhorns::Content)]
pub(crate) struct CardItem<'a> {
    pub(crate) id: i64,
    pub(crate) title: &'a str,
    pub(crate) category: &'a str,
    pub(crate) description: &'a str,
    pub(crate) cover_url: &'a str,
    pub(crate) tag: &'a str,
    pub(crate) extra_tags: u64,
    pub(crate) has_extra_tags: bool,
    pub(crate) author: &'a str,
    pub(crate) avatar_url: &'a str,
    pub(crate) date: &'a str,
}

#[derive(ramhorns::Content)]
struct FilterItem<'a> {
    name: &'a str,
    slug: &'a str,
}

pub(crate) fn card_items(cards: &[BlogCard]) -> Vec<CardItem<'_>> {
    cards
        .iter()
        .map(|card| CardItem {
            id: card.id,
            title: card.title.as_str(),
            category: card.category.as_str(),
            description: card.description.as_str(),
            cover_url: card.cover_url.as_str(),
            tag: card.primary_tag.as_deref().unwrap_or(""),
            extra_tags: card.extra_tags as u64,
            has_extra_tags: card.extra_tags > 0,
            author: card.author_name.as_str(),
            avatar_url: card.avatar_url.as_str(),
            date: card.published.as_str(),
        })
        .collect()
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, view: &HomeView) -> String {
        let categories: Vec<_> = view
            .categories
            .iter()
            .map(|c| FilterItem { name: c.name.as_str(), slug: c.slug.as_str() })
            .collect();
        let tags: Vec<_> = view
            .tags
            .iter()
            .map(|t| FilterItem { name: t.name.as_str(), slug: t.slug.as_str() })
            .collect();

        self.template.render(&ListPage {
            cards: card_items(&view.cards),
            categories,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Blog, Envelope};
    use crate::test_data::BLOGS_JSON;
    use crate::view::{home_view, CARD_DESCRIPTION_CHARS};

    use super::*;

    #[test]
    fn render_list() {
        let template_src = r##"
CARDS=[{{#cards}}({{title}}|{{category}}|{{tag}}{{#has_extra_tags}}+{{extra_tags}}{{/has_extra_tags}}){{/cards}}]
CATEGORIES=[{{#categories}}({{slug}}){{/categories}}]
"##;
        let envelope: Envelope<Blog> = serde_json::from_str(BLOGS_JSON).unwrap();
        let view = home_view(&envelope.data, vec![], vec![], "http://localhost:1337", "tech", "", CARD_DESCRIPTION_CHARS);

        let list_renderer = ListRenderer::new(template_src).unwrap();
        let rendered = list_renderer.render(&view);
        assert_eq!(rendered, r##"
CARDS=[(Weaving Light...|Technology|Silk+1)(Rust for...|Technology|Rust+1)]
CATEGORIES=[]"##);
    }
}
