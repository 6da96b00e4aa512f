use crate::api::ContentClient;
use crate::config::Config;
use crate::derive::{blogs_by_author, filter_blogs, related_blogs};
use crate::document::renderer::render;
use crate::media::{resolve_media, SizeTag};
use crate::model::{Author, Blog, Category, Tag};
use crate::text_utils::{
    format_published_long, format_published_short, parse_published, summarize_title, truncate,
};

pub mod author_renderer;
pub mod html;
pub mod list_renderer;
pub mod post_renderer;

/// How many related stories a blog page shows.
pub const RELATED_LIMIT: usize = 3;
/// How many characters of the description a card shows.
pub const CARD_DESCRIPTION_CHARS: usize = 25;

/// A blog presented as a card in a grid: summarized title, truncated
/// description, one tag plus a counter for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogCard {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub cover_url: String,
    pub primary_tag: Option<String>,
    pub extra_tags: usize,
    pub author_name: String,
    pub avatar_url: String,
    pub published: String,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub cards: Vec<BlogCard>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone)]
pub struct BlogView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tag_names: Vec<String>,
    pub author_name: String,
    pub author_bio: String,
    pub published: String,
    pub cover_url: String,
    pub content_html: String,
    pub related: Vec<BlogCard>,
}

#[derive(Debug, Clone)]
pub struct AuthorView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub avatar_url: String,
    pub story_count: usize,
    pub cards: Vec<BlogCard>,
}

/// Avatar with the multi-level fallback: small variant, then the original
/// upload, then the generated placeholder for the author's name.
pub fn author_avatar_url(author: &Author, host: &str) -> String {
    resolve_media(author.avatar.as_ref(), host, SizeTag::Small, &author.name)
}

pub fn blog_card(blog: &Blog, host: &str, description_chars: usize) -> BlogCard {
    let (author_name, avatar_url) = match &blog.author {
        Some(author) => (author.name.clone(), author_avatar_url(author, host)),
        None => (String::new(), resolve_media(None, host, SizeTag::Small, &blog.title)),
    };

    BlogCard {
        id: blog.id,
        title: summarize_title(&blog.title),
        category: blog.category.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
        description: truncate(&blog.description, description_chars),
        cover_url: resolve_media(blog.cover.as_ref(), host, SizeTag::Small, &blog.title),
        primary_tag: blog.tags.first().map(|t| t.name.clone()),
        extra_tags: blog.tags.len().saturating_sub(1),
        author_name,
        avatar_url,
        published: blog
            .published
            .as_deref()
            .and_then(parse_published)
            .map(|d| format_published_short(&d))
            .unwrap_or_default(),
    }
}

/// Home listing: category/tag filters applied over whatever collections have
/// loaded so far. Empty collections just mean empty sections.
pub fn home_view(
    blogs: &[Blog],
    categories: Vec<Category>,
    tags: Vec<Tag>,
    host: &str,
    category_slug: &str,
    tag_slug: &str,
    description_chars: usize,
) -> HomeView {
    let cards = filter_blogs(blogs, category_slug, tag_slug)
        .into_iter()
        .map(|blog| blog_card(blog, host, description_chars))
        .collect();
    HomeView { cards, categories, tags }
}

/// Single blog page: the blog found by id, its rendered document, and up to
/// `related_limit` related stories.
pub fn blog_view(
    blogs: &[Blog],
    host: &str,
    blog_id: i64,
    related_limit: usize,
    description_chars: usize,
) -> Option<BlogView> {
    let blog = blogs.iter().find(|b| b.id == blog_id)?;

    let related = related_blogs(blog, blogs, related_limit)
        .into_iter()
        .map(|b| blog_card(b, host, description_chars))
        .collect();

    let output = render(&blog.content, host);

    Some(BlogView {
        id: blog.id,
        title: blog.title.clone(),
        description: blog.description.clone(),
        category: blog.category.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
        tag_names: blog.tags.iter().map(|t| t.name.clone()).collect(),
        author_name: blog.author.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
        author_bio: blog
            .author
            .as_ref()
            .and_then(|a| a.bio.clone())
            .unwrap_or_default(),
        published: blog
            .published
            .as_deref()
            .and_then(parse_published)
            .map(|d| format_published_long(&d))
            .unwrap_or_default(),
        cover_url: resolve_media(blog.cover.as_ref(), host, SizeTag::Large, &blog.title),
        content_html: html::render_html(&output.nodes),
        related,
    })
}

/// Author profile: the author found by id and their published stories.
pub fn author_view(
    authors: &[Author],
    blogs: &[Blog],
    host: &str,
    author_id: i64,
    description_chars: usize,
) -> Option<AuthorView> {
    let author = authors.iter().find(|a| a.id == author_id)?;

    let cards: Vec<BlogCard> = blogs_by_author(author_id, blogs)
        .into_iter()
        .map(|b| blog_card(b, host, description_chars))
        .collect();

    Some(AuthorView {
        id: author.id,
        name: author.name.clone(),
        email: author.email.clone().unwrap_or_default(),
        bio: author.bio.clone().unwrap_or_default(),
        avatar_url: author_avatar_url(author, host),
        story_count: cards.len(),
        cards,
    })
}

/// The three fetches are independent and may resolve in any order; a failed
/// one leaves its collection empty and the page renders what it has.
pub async fn load_home(
    client: &ContentClient,
    config: &Config,
    category_slug: &str,
    tag_slug: &str,
) -> HomeView {
    let (blogs, categories, tags) = tokio::join!(
        client.fetch_blogs(),
        client.fetch_categories(),
        client.fetch_tags(),
    );
    home_view(
        &blogs,
        categories,
        tags,
        &config.media.host,
        category_slug,
        tag_slug,
        config.card_description_chars(),
    )
}

pub async fn load_blog(client: &ContentClient, config: &Config, blog_id: i64) -> Option<BlogView> {
    let blogs = client.fetch_blogs().await;
    blog_view(
        &blogs,
        &config.media.host,
        blog_id,
        config.related_limit(),
        config.card_description_chars(),
    )
}

pub async fn load_author(client: &ContentClient, config: &Config, author_id: i64) -> Option<AuthorView> {
    let (authors, blogs) = tokio::join!(client.fetch_authors(), client.fetch_blogs());
    author_view(&authors, &blogs, &config.media.host, author_id, config.card_description_chars())
}
