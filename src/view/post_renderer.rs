use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::view::list_renderer::{card_items, CardItem};
use crate::view::BlogView;

#[derive(ramhorns::Content)]
struct BlogPage<'a> {
    title: &'a str,
    description: &'a str,
    category: &'a str,
    author: &'a str,
    author_bio: &'a str,
    date: &'a str,
    cover_url: &'a str,
    tags: Vec<ViewTag<'a>>,
    // injected pre-rendered, templates use it with a triple stache
    content_html: &'a str,
    related: Vec<CardItem<'a>>,
}

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, view: &BlogView) -> String {
        let tags: Vec<ViewTag> = view.tag_names.iter().map(|t| ViewTag { tag: t.as_str() }).collect();

        self.template.render(&BlogPage {
            title: view.title.as_str(),
            description: view.description.as_str(),
            category: view.category.as_str(),
            author: view.author_name.as_str(),
            author_bio: view.author_bio.as_str(),
            date: view.published.as_str(),
            cover_url: view.cover_url.as_str(),
            tags,
            content_html: view.content_html.as_str(),
            related: card_items(&view.related),
        })
    }
}
