// src/api/mod.rs

pub mod client;
pub mod source;

pub use client::{BlogApi, HttpBlogApi};
pub use source::{CommentsSource, PageSource, PostsSource};
