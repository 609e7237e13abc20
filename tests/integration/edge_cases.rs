//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and error handling.

use content_gravity::{extract, extract_with_options, Options};

const SENTENCE: &str = "This is one of the things that we have to do before it is too late for all of us.";

#[test]
fn test_extract_empty_input() {
    match extract("") {
        Ok(result) => {
            assert!(result.content_text.is_empty());
            assert!(result.content_html.is_none());
        }
        Err(err) => panic!("Empty input should not fail: {err:?}"),
    }
}

#[test]
fn test_extract_empty_body() {
    let html = "<html><body></body></html>";

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.is_empty(), "Empty body should result in empty content");
            assert!(result.top_node_score.is_none());
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_no_body() {
    let html = "<html><head><title>No Body</title></head></html>";

    // Should not panic
    let result = extract(html);
    assert!(result.is_ok(), "Should handle missing body gracefully");
}

#[test]
fn test_extract_plain_text_input() {
    // Bare text lands in an implied <body> with no paragraph to score
    match extract(SENTENCE) {
        Ok(result) => assert!(result.top_node_score.is_none()),
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_malformed_html() {
    let html = format!("<html><body><div><p>{SENTENCE}<p>{SENTENCE}<div>Nested</body>");

    match extract(&html) {
        Ok(result) => assert!(
            result.content_text.contains("before it is too late"),
            "Should extract what the parser recovers"
        ),
        Err(err) => panic!("Extraction failed on malformed HTML: {err:?}"),
    }
}

#[test]
fn test_extract_all_links_page() {
    let links: String = (0..20)
        .map(|i| format!("<p><a href='/{i}'>This is one of the links that you may want</a></p>"))
        .collect();
    let html = format!("<html><body><div>{links}</div></body></html>");

    match extract(&html) {
        Ok(result) => {
            // Every paragraph is a single link covering all of its text: density 1.0, not high
            assert!(result.top_node_score.is_some());
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_link_farm_has_no_content() {
    let links: String = (0..20)
        .map(|i| format!("<p><a href='/{i}'>one of the</a> <a href='/x{i}'>links you want</a></p>"))
        .collect();
    let html = format!("<html><body><div>{links}</div></body></html>");

    match extract(&html) {
        Ok(result) => {
            assert!(result.top_node_score.is_none(), "link-dense paragraphs are never candidates");
            assert!(result.content_text.is_empty());
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_deeply_nested_html() {
    // Create deeply nested structure
    let mut html = String::from("<html><body>");
    for i in 0..50 {
        html.push_str(&format!("<div class='level-{i}'>"));
    }
    html.push_str(&format!("<p>DEEP {SENTENCE}</p>"));
    for _ in 0..50 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    match extract(&html) {
        Ok(result) => {
            assert!(result.content_text.contains("DEEP"), "Should extract deeply nested content");
            let content_html = result.content_html.unwrap_or_default();
            assert!(content_html.starts_with("<div class=\"level-49\">"));
        }
        Err(err) => panic!("Extraction failed on nested HTML: {err:?}"),
    }
}

#[test]
fn test_extract_very_large_document() {
    // Long enough for tail decay and the +5 floor to kick in
    let paragraphs: String = (0..5000)
        .map(|i| format!("<p>Paragraph {i}: {SENTENCE}</p>"))
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!("<html><body><article>{paragraphs}</article></body></html>");

    match extract(&html) {
        Ok(result) => {
            assert!(result.content_text.contains("Paragraph 0:"));
            assert!(result.content_text.contains("Paragraph 4999:"));
            assert!(result.top_node_score.is_some_and(|s| s > 0));
        }
        Err(err) => panic!("Extraction failed on large document: {err:?}"),
    }
}

#[test]
fn test_extract_unicode_content() {
    let html = "<html lang='ru'><body><div><p>Это было так давно, что никто уже и не помнит, как всё начиналось.</p></div></body></html>";

    match extract(html) {
        Ok(result) => {
            assert_eq!(result.language, "ru");
            assert!(result.content_text.contains("никто"));
        }
        Err(err) => panic!("Extraction failed on unicode content: {err:?}"),
    }
}

#[test]
fn test_recovered_sibling_text_is_escaped() {
    let html = format!(
        "<html><body><div><p>a &lt;script&gt; tag &amp; {SENTENCE}</p></div><div><p>{SENTENCE}</p><p>{SENTENCE}</p></div></body></html>"
    );

    match extract(&html) {
        Ok(result) => {
            let content_html = result.content_html.unwrap_or_default();
            assert!(!content_html.contains("<script>"));
            assert!(content_html.contains("&lt;script&gt;"));
            assert!(result.content_text.starts_with("a <script> tag &"));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_twice_on_same_input_matches() {
    let html = format!("<html><body><div><p>{SENTENCE}</p><p>{SENTENCE}</p></div></body></html>");
    let options = Options::default();

    let first = extract_with_options(&html, &options).map(|r| r.content_html);
    let second = extract_with_options(&html, &options).map(|r| r.content_html);

    assert_eq!(first.ok(), second.ok());
}
