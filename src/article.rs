//! Result types for extraction output.
//!
//! An [`Article`] is constructed once per `extract` call, immutable after
//! construction, and holds no reference back into the working tree.

use serde::{Deserialize, Serialize};

/// A standardized image extracted from the article body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Absolute image URL after base-URL resolution.
    pub src: String,

    /// Explicit width, reconciled to the configured maximum dimension.
    pub width: Option<u32>,

    /// Explicit height, reconciled to the configured maximum dimension.
    pub height: Option<u32>,

    /// Caption text from an associated `<figcaption>` or caption-marked
    /// sibling element.
    pub caption: Option<String>,

    /// Attribution text ("Photo:", "Credit:", "©" patterns) found near
    /// the image.
    pub attribution: Option<String>,

    /// Source-document position, the stable ordering key for output.
    pub position: usize,
}

/// Result of extracting the main editorial content from an HTML page.
///
/// Missing title, date, or images degrade to empty optional fields; an
/// `Article` is only withheld entirely on parse failure or when no
/// container clears the content threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline.
    pub title: Option<String>,

    /// Publication date, normalized to `YYYY-MM-DD` where parseable.
    pub published_date: Option<String>,

    /// Cleaned article body as HTML.
    pub body: String,

    /// Surviving images in source-document order.
    pub images: Vec<MediaItem>,

    /// Character count of the raw input document.
    pub raw_length: usize,

    /// Character count of the extracted body text.
    pub extracted_length: usize,

    /// Non-fatal conditions encountered during extraction, such as
    /// images dropped for unresolvable URLs.
    pub warnings: Vec<String>,
}
