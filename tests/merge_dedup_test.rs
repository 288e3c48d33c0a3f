//! Header/body merging and duplicate suppression, end to end.

use declutter::extract;

const SPLIT_PAGE: &str = r#"<html>
<head><title>Storm Closes the Coast Road | Coastal Times</title></head>
<body>
    <header class="article-header">
        <h1>Storm Closes the Coast Road</h1>
        <img src="https://cdn.example.com/lead.jpg">
        <p class="standfirst">Falling masonry and flooding shut the coast road
        overnight, and engineers say it will stay closed until the cliff face
        has been inspected in daylight.</p>
    </header>
    <div class="article-body">
        <p>Falling masonry and flooding shut the coast road overnight, and
        engineers say it will stay closed until the cliff face has been
        inspected in daylight.</p>
        <p>The council opened the inland diversion shortly before midnight,
        adding roughly forty minutes to the journey between the two towns
        and rerouting the first morning buses.</p>
        <p>A spokesperson said the road had survived worse storms in the
        past decade, but that the saturated ground above the carriageway
        left no safe alternative to a full inspection.</p>
    </div>
</body>
</html>"#;

#[test]
fn split_layout_merges_header_before_body() {
    match extract(SPLIT_PAGE) {
        Ok(article) => {
            let headline_at = article.body.find("Storm Closes the Coast Road");
            let body_at = article.body.find("inland diversion");
            assert!(headline_at.is_some(), "headline missing from body");
            assert!(body_at.is_some(), "body paragraphs missing");
            assert!(headline_at < body_at, "headline must precede the body");
            assert_eq!(article.images.len(), 1);
            assert_eq!(article.images[0].src, "https://cdn.example.com/lead.jpg");
        }
        Err(err) => panic!("split layout must merge, not fail: {err}"),
    }
}

#[test]
fn duplicated_standfirst_appears_once() {
    match extract(SPLIT_PAGE) {
        Ok(article) => {
            let occurrences = article.body.matches("Falling masonry and flooding").count();
            assert_eq!(occurrences, 1, "standfirst duplicated in output");
        }
        Err(err) => panic!("extraction failed: {err}"),
    }
}

#[test]
fn repeated_pull_quote_is_deduplicated() {
    let html = r#"<html><body><article>
        <p>The verdict ends a dispute that has run for the better part of a
        decade and drawn in three successive planning ministers.</p>
        <blockquote>We are relieved it is finally over.</blockquote>
        <p>Both sides said they would not appeal, citing the cost of further
        litigation and the unambiguous wording of the ruling.</p>
        <blockquote>We are relieved it is finally over.</blockquote>
    </article></body></html>"#;

    match extract(html) {
        Ok(article) => {
            let occurrences = article.body.matches("finally over").count();
            assert_eq!(occurrences, 1);
        }
        Err(err) => panic!("extraction failed: {err}"),
    }
}

#[test]
fn cache_busted_image_variants_collapse() {
    let html = r#"<html><body><article>
        <p>The gallery reopened with a retrospective spanning forty years of
        the painter's work, drawn mostly from private collections that have
        never been shown together before.</p>
        <img src="https://cdn.example.com/gallery.jpg?w=1200&v=3">
        <p>Curators spent two years tracing the loans, several of which had
        changed hands repeatedly since the artist's death.</p>
        <img src="https://cdn.example.com/gallery.jpg?w=600">
    </article></body></html>"#;

    match extract(html) {
        Ok(article) => {
            assert_eq!(article.images.len(), 1);
        }
        Err(err) => panic!("extraction failed: {err}"),
    }
}

#[test]
fn image_order_survives_extraction() {
    let html = r#"<html><body><article>
        <p>Three stages of the restoration are documented below, from the
        stripped shell photographed in January through to the finished
        interior unveiled at the weekend opening.</p>
        <img src="https://cdn.example.com/stage-1.jpg">
        <p>The middle stage took the longest, as each original panel was
        cleaned and refitted by hand.</p>
        <img src="https://cdn.example.com/stage-2.jpg">
        <img src="https://cdn.example.com/stage-3.jpg">
    </article></body></html>"#;

    match extract(html) {
        Ok(article) => {
            let srcs: Vec<&str> = article.images.iter().map(|i| i.src.as_str()).collect();
            assert_eq!(
                srcs,
                vec![
                    "https://cdn.example.com/stage-1.jpg",
                    "https://cdn.example.com/stage-2.jpg",
                    "https://cdn.example.com/stage-3.jpg"
                ]
            );
            let mut positions: Vec<usize> = article.images.iter().map(|i| i.position).collect();
            let sorted = {
                let mut s = positions.clone();
                s.sort_unstable();
                s
            };
            assert_eq!(positions, sorted);
            positions.dedup();
            assert_eq!(positions.len(), 3);
        }
        Err(err) => panic!("extraction failed: {err}"),
    }
}
