use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::view::list_renderer::{card_items, CardItem};
use crate::view::AuthorView;

#[derive(ramhorns::Content)]
struct AuthorPage<'a> {
    name: &'a str,
    email: &'a str,
    bio: &'a str,
    avatar_url: &'a str,
    story_count: u64,
    has_stories: bool,
    cards: Vec<CardItem<'a>>,
}

pub struct AuthorRenderer<'a> {
    pub template: Template<'a>,
}

impl AuthorRenderer<'_> {
    pub fn new(author_tpl_src: &str) -> io::Result<AuthorRenderer> {
        let template = match Template::new(author_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing author template: {}", e)));
            }
        };

        Ok(AuthorRenderer {
            template,
        })
    }

    pub fn render(&self, view: &AuthorView) -> String {
        self.template.render(&AuthorPage {
            name: view.name.as_str(),
            email: view.email.as_str(),
            bio: view.bio.as_str(),
            avatar_url: view.avatar_url.as_str(),
            story_count: view.story_count as u64,
            has_stories: view.story_count > 0,
            cards: card_items(&view.cards),
        })
    }
}
