//! The extraction pipeline.
//!
//! Fixed stage order: parse, metadata, pre-clean, score and select,
//! merge and dedup, post-clean, media standardization. Each run builds
//! its own working tree from the input, so repeated extraction of the
//! same document is deterministic and the caller's input is never
//! aliased.

use crate::article::Article;
use crate::config::Config;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::noise::{self, CleanPass};
use crate::patterns::normalize_whitespace;
use crate::{media, merge, metadata, select};

pub(crate) fn extract_article(html: &str, config: &Config) -> Result<Article> {
    if html.trim().is_empty() {
        return Err(Error::Parse("empty input".to_string()));
    }

    let document = Document::from(html);
    let body = document.select("body");
    if body.nodes().first().is_none() {
        return Err(Error::Parse("document has no body".to_string()));
    }
    if body.children().is_empty() && body.text().trim().is_empty() {
        return Err(Error::Parse("document has no content nodes".to_string()));
    }

    let raw_length = html.chars().count();

    // Head metadata is read before cleaning can disturb it.
    let title = metadata::extract_title(&document);
    let published_date = metadata::extract_published_date(&document);

    noise::clean(&document, CleanPass::Pre, config);

    let Some(selected) = select::select_container(&document, config) else {
        return Err(Error::NoContent);
    };
    let merged = merge::merge(&selected, config);
    noise::clean(&merged, CleanPass::Post, config);

    let (images, warnings) = media::standardize(&merged, config);

    let container = merged.select("article");
    let body_html = dom::outer_html(&container).to_string();
    let extracted_length = normalize_whitespace(&dom::text_content(&container))
        .chars()
        .count();

    let title = title.or_else(|| {
        let h1 = normalize_whitespace(&container.select("h1").text());
        if h1.is_empty() {
            None
        } else {
            Some(h1)
        }
    });

    Ok(Article {
        title,
        published_date,
        body: body_html,
        images,
        raw_length,
        extracted_length,
        warnings,
    })
}
