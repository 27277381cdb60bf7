use html_escape::encode_text;

use crate::deck::{Slide, SlideDeck};

/// Renders the deck into a standalone HTML page.
///
/// One `<section>` per slide, in deck order, wrapped in a fixed document
/// shell. Titles and bullets come from the model, so everything is escaped
/// before it touches the markup.
pub fn render_document(title: &str, deck: &SlideDeck) -> String {
    let body = deck
        .slides
        .iter()
        .map(render_slide)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang='en'>
<head>
    <meta charset='UTF-8'>
    <meta name='viewport' content='width=device-width, initial-scale=1.0'>
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; }}
        section {{ margin-bottom: 40px; }}
        h2 {{ background: #333; color: #fff; padding: 10px; }}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        title = encode_text(title),
        body = body,
    )
}

fn render_slide(slide: &Slide) -> String {
    let title = slide.title.as_deref().unwrap_or_default();
    let bullets = slide
        .bullet_points
        .iter()
        .map(|point| format!("<li>{}</li>", encode_text(point)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<section><h2>{}</h2><ul>{}</ul></section>",
        encode_text(title),
        bullets
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(json: &str) -> SlideDeck {
        SlideDeck::from_json(json).unwrap()
    }

    #[test]
    fn one_section_per_slide_in_order() {
        let html = render_document(
            "Topic",
            &deck(
                r#"{"slides": [
                    {"title": "First", "bullet_points": ["a"]},
                    {"title": "Second", "bullet_points": ["b"]},
                    {"title": "Third", "bullet_points": ["c"]}
                ]}"#,
            ),
        );

        assert_eq!(html.matches("<section>").count(), 3);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
        assert!(html.find("Second").unwrap() < html.find("Third").unwrap());
    }

    #[test]
    fn section_and_bullet_counts_match_input() {
        // 3 slides with 2 bullets each
        let html = render_document(
            "Topic",
            &deck(
                r#"{"slides": [
                    {"title": "A", "bullet_points": ["1", "2"]},
                    {"title": "B", "bullet_points": ["3", "4"]},
                    {"title": "C", "bullet_points": ["5", "6"]}
                ]}"#,
            ),
        );

        assert_eq!(html.matches("<h2>").count(), 3);
        assert_eq!(html.matches("<li>").count(), 6);
    }

    #[test]
    fn empty_deck_keeps_document_shell() {
        let html = render_document("Topic", &deck(r#"{"slides": []}"#));

        assert_eq!(html.matches("<section>").count(), 0);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Topic</title>"));
        assert!(html.contains("<meta charset='UTF-8'>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn slide_without_bullets_renders_empty_list() {
        let html = render_document("T", &deck(r#"{"slides": [{"title": "Solo"}]}"#));

        assert!(html.contains("<h2>Solo</h2>"));
        assert!(html.contains("<ul></ul>"));
    }

    #[test]
    fn slide_without_title_renders_empty_heading() {
        let html = render_document("T", &deck(r#"{"slides": [{"bullet_points": ["x"]}]}"#));

        assert!(html.contains("<h2></h2>"));
        assert!(html.contains("<li>x</li>"));
    }

    #[test]
    fn escapes_markup_from_the_model() {
        let html = render_document(
            "Tags & <brackets>",
            &deck(r#"{"slides": [{"title": "<script>alert(1)</script>", "bullet_points": ["a & b", "1 < 2"]}]}"#),
        );

        assert!(html.contains("<title>Tags &amp; &lt;brackets&gt;</title>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("<li>a &amp; b</li>"));
        assert!(html.contains("<li>1 &lt; 2</li>"));
        assert!(!html.contains("<script>"));
    }
}
