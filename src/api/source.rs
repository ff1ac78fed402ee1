use std::rc::Rc;

use async_trait::async_trait;

use crate::{
    api::client::BlogApi,
    error::AppError,
    models::{comment::Comment, page::Page, post::Post},
};

/// One cursor-paginated list resource.
///
/// The paginator is generic over this seam, which is what lets a single
/// implementation drive both the post feed and a post's comment list.
#[async_trait(?Send)]
pub trait PageSource {
    type Item;

    async fn fetch(&self, limit: u32, cursor: Option<&str>) -> Result<Page<Self::Item>, AppError>;
}

/// The site-wide post feed.
pub struct PostsSource {
    api: Rc<dyn BlogApi>,
}

impl PostsSource {
    pub fn new(api: Rc<dyn BlogApi>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl PageSource for PostsSource {
    type Item = Post;

    async fn fetch(&self, limit: u32, cursor: Option<&str>) -> Result<Page<Post>, AppError> {
        self.api.list_posts(limit, cursor).await
    }
}

/// The comment list of one post.
pub struct CommentsSource {
    api: Rc<dyn BlogApi>,
    slug: String,
}

impl CommentsSource {
    pub fn new(api: Rc<dyn BlogApi>, slug: impl Into<String>) -> Self {
        Self {
            api,
            slug: slug.into(),
        }
    }
}

#[async_trait(?Send)]
impl PageSource for CommentsSource {
    type Item = Comment;

    async fn fetch(&self, limit: u32, cursor: Option<&str>) -> Result<Page<Comment>, AppError> {
        self.api.list_comments(&self.slug, limit, cursor).await
    }
}
