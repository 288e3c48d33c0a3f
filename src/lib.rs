//! declutter: main-content extraction for news and article HTML pages.
//!
//! Takes a full page, including navigation chrome, ad slots, and related
//! stories, and returns the editorial core: body HTML, headline,
//! publication date, and standardized images.
//!
//! ```
//! let html = r#"<html>
//!   <head><title>Quiet Season | Example News</title></head>
//!   <body>
//!     <nav>Home / Weather / Sport</nav>
//!     <article>
//!       <p>The harbour town spends its winters repairing nets and
//!       repainting hulls before the tourist boats return in spring.</p>
//!     </article>
//!   </body>
//! </html>"#;
//!
//! let article = declutter::extract(html)?;
//! assert_eq!(article.title.as_deref(), Some("Quiet Season"));
//! assert!(article.body.contains("harbour town"));
//! assert!(!article.body.contains("Weather"));
//! # Ok::<(), declutter::Error>(())
//! ```

pub mod article;
pub mod config;
pub mod dom;
pub mod error;
pub mod fingerprint;
pub mod score;

mod encoding;
mod extract;
mod media;
mod merge;
mod metadata;
mod noise;
mod patterns;
mod select;
mod url_utils;

pub use article::{Article, MediaItem};
pub use config::Config;
pub use error::{Error, Result};
pub use score::CandidateScore;

/// Extract the main content from an HTML document with default settings.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input yields no usable document
/// tree, and [`Error::NoContent`] when no container clears the content
/// threshold.
pub fn extract(html: &str) -> Result<Article> {
    extract::extract_article(html, &Config::default())
}

/// Extract with explicit configuration.
///
/// # Errors
///
/// Same conditions as [`extract`].
pub fn extract_with_config(html: &str, config: &Config) -> Result<Article> {
    extract::extract_article(html, config)
}

/// Extract from raw bytes, decoding via BOM or declared charset first.
///
/// # Errors
///
/// Same conditions as [`extract`].
pub fn extract_bytes(bytes: &[u8]) -> Result<Article> {
    extract_bytes_with_config(bytes, &Config::default())
}

/// Extract from raw bytes with explicit configuration.
///
/// # Errors
///
/// Same conditions as [`extract`].
pub fn extract_bytes_with_config(bytes: &[u8], config: &Config) -> Result<Article> {
    let html = encoding::decode_html(bytes);
    extract::extract_article(&html, config)
}
