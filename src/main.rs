// src/main.rs

use std::rc::Rc;

use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use frontend::api::{BlogApi, HttpBlogApi};
use frontend::config::Config;
use frontend::controllers::feed_page::FeedPage;
use frontend::controllers::post_page::PostPage;
use frontend::notify::{Notice, NoticeKind, Notifier};
use frontend::utils::html::SanitizedMarkup;

/// Headless preview of the two pages: renders the feed (or, given a slug
/// argument, one post with its comments) against a live API and prints the
/// markup to stdout.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    // Markup goes to stdout, so logs go to stderr.
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    let notifier = Rc::new(Notifier::new());
    let api: Rc<dyn BlogApi> = Rc::new(HttpBlogApi::new(&config));

    match std::env::args().nth(1) {
        Some(slug) => {
            let page = PostPage::new(
                api,
                notifier.clone(),
                Box::new(SanitizedMarkup),
                &config,
                Some(slug),
            );
            page.load().await;
            println!("<!-- {} -->", page.document_title());
            println!("{}", page.article_view());
            println!("{}", page.comments_view());
        }
        None => {
            let page = FeedPage::new(api, notifier.clone(), &config);
            page.init().await;
            println!("{}", page.view());
            if page.can_load_more() {
                tracing::info!("{} posts rendered, more available", page.post_count());
            }
        }
    }

    for Notice { kind, message } in notifier.drain() {
        match kind {
            NoticeKind::Success => eprintln!("ok: {}", message),
            NoticeKind::Error => eprintln!("error: {}", message),
        }
    }
}
