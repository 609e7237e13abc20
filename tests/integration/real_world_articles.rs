//! Integration tests for real-world article extraction
//!
//! Tests extraction from realistic HTML samples representing common page layouts.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use content_gravity::{extract, extract_with_options, Options};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn news_article() -> String {
    std::fs::read_to_string(fixture_path("news_article.html")).expect("Failed to read fixture")
}

#[test]
fn test_extract_news_article_body() {
    let html = news_article();

    match extract(&html) {
        Ok(result) => {
            // Main article content is present
            assert!(
                result.content_text.contains("The vote was closer than many had expected."),
                "Should contain the first body paragraph"
            );
            assert!(
                result.content_text.contains("with our own eyes"),
                "Should contain the last body paragraph"
            );

            // Boilerplate is left out
            assert!(!result.content_text.contains("Sport"), "Navigation should be excluded");
            assert!(!result.content_text.contains("Related"), "Sidebar should be excluded");
            assert!(!result.content_text.contains("Copyright"), "Footer should be excluded");
            assert!(!result.content_text.contains("Share on"), "Share links should be pruned");

            let content_html = result.content_html.expect("content html");
            assert!(content_html.starts_with(r#"<div class="article-body">"#));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_news_article_recovers_standfirst() {
    let html = news_article();

    match extract(&html) {
        Ok(result) => {
            assert!(
                result.content_text.starts_with("STANDFIRST The town council"),
                "Standfirst should be recovered ahead of the body, got: {}",
                &result.content_text[..result.content_text.len().min(80)]
            );
            let paragraphs = result.content_text.split("\n\n").count();
            assert_eq!(paragraphs, 6, "standfirst plus five body paragraphs");
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_news_article_metadata() {
    let html = news_article();
    let options = Options {
        url: Some("https://riverside-gazette.example/news/bridge-plan".to_string()),
        ..Options::default()
    };

    match extract_with_options(&html, &options) {
        Ok(result) => {
            let metadata = result.metadata;
            assert_eq!(metadata.title.as_deref(), Some("Town Council Approves New Bridge Plan"));
            assert_eq!(metadata.meta_language.as_deref(), Some("en"));
            assert_eq!(metadata.favicon.as_deref(), Some("/static/favicon.ico"));
            assert_eq!(
                metadata.meta_description.as_deref(),
                Some("After months of debate the council voted to rebuild the river crossing.")
            );
            assert_eq!(metadata.meta_keywords.as_deref(), Some("bridge, council, riverside"));
            assert_eq!(metadata.domain.as_deref(), Some("riverside-gazette.example"));
            assert_eq!(metadata.tags, ["Bridge", "Council"]);
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_legacy_table_layout() {
    let html = r#"
        <html><body>
        <table>
          <tr>
            <td class="menu"><a href="/">Home</a> <a href="/about">About</a> <a href="/links">Links</a></td>
            <td class="main">
              When we first came to the valley there was nothing here but the river and the old road,
              and it took us the best part of a year to build the house that is still standing today.
              <br><br>
              The children went to school in the next town, which was a long walk in the winter.
            </td>
          </tr>
        </table>
        </body></html>
    "#;

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.contains("When we first came to the valley"));
            assert!(result.content_text.contains("The children went to school"));
            assert!(!result.content_text.contains("Links"), "menu cell should be pruned");
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_blog_preformatted_block_scores_but_is_cleaned() {
    let html = r#"
        <html><body>
          <div id="sidebar"><p><a href="/a">Archive</a> <a href="/b">About me</a></p></div>
          <div id="post">
            <p>This is the way that I have been setting up my build for the last few years, and it has not let me down yet.</p>
            <pre>All of the steps are in this one file, and there is no need for any of the other tools that you may have heard of.</pre>
            <p>If there is something that does not work for you, let me know and I will try to have a look at it.</p>
          </div>
        </body></html>
    "#;

    // The <pre> block holds no paragraph, so post cleanup drops it
    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.contains("setting up my build"));
            assert!(result.content_text.contains("let me know"));
            assert!(!result.content_text.contains("All of the steps"));
            assert!(!result.content_text.contains("Archive"));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }

    let options = Options {
        post_clean: false,
        ..Options::default()
    };
    match extract_with_options(html, &options) {
        Ok(result) => assert!(result.content_text.contains("All of the steps")),
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}
