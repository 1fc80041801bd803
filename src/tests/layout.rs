use super::{layout_page, CodeHighlighter, LayoutOptions, PageLayout};
use crate::markdown;
use crate::page::Page;
use crate::theme::Theme;
use crate::tracker::AnchorSurface;

const SOURCE: &str = "\
# Page title

Intro paragraph that is long enough to wrap once the width drops below the
length of this sentence.

## First section

Some body text for the first section of the page.

### First detail

More text.

## Second section

```rust
let x = 1;
```
";

fn sample_page() -> Page {
    let document = markdown::parse(SOURCE).unwrap();
    Page::new("/about/what-is-depin".to_string(), "Page title".to_string(), document)
}

fn render(width: usize, scroll_margin: usize, show_hero: bool) -> PageLayout {
    let palette = Theme::Dark.palette();
    let highlighter = CodeHighlighter::new("base16-ocean.dark");
    let options = LayoutOptions {
        width,
        scroll_margin,
        palette: &palette,
        highlighter: &highlighter,
        show_hero,
    };
    layout_page(&sample_page(), &options)
}

fn text_of(layout: &PageLayout) -> String {
    layout
        .lines()
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_anchors_follow_document_order() {
    let layout = render(80, 4, false);
    let ids: Vec<&str> = layout.anchors().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["first-section", "first-detail", "second-section"]);

    let lines: Vec<usize> = layout.anchors().iter().map(|a| a.line).collect();
    assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_anchor_top_subtracts_the_scroll_margin() {
    let layout = render(80, 4, false);
    for anchor in layout.anchors() {
        assert_eq!(
            layout.anchor_top(&anchor.id),
            Some(anchor.line.saturating_sub(4))
        );
    }
}

#[test]
fn test_margin_saturates_at_the_top_of_the_document() {
    let source = "## Immediate\n\nBody.\n";
    let document = markdown::parse(source).unwrap();
    let page = Page::new("/x".to_string(), "x".to_string(), document);
    let palette = Theme::Dark.palette();
    let highlighter = CodeHighlighter::new("base16-ocean.dark");
    let options = LayoutOptions {
        width: 80,
        scroll_margin: 10,
        palette: &palette,
        highlighter: &highlighter,
        show_hero: false,
    };
    let layout = layout_page(&page, &options);
    assert_eq!(layout.anchor_top("immediate"), Some(0));
}

#[test]
fn test_unknown_anchor_resolves_to_none() {
    let layout = render(80, 4, false);
    assert_eq!(layout.anchor_top("nope"), None);
}

#[test]
fn test_narrower_width_pushes_later_headings_down() {
    let wide = render(100, 0, false);
    let narrow = render(40, 0, false);

    let wide_last = wide.anchors().last().unwrap().line;
    let narrow_last = narrow.anchors().last().unwrap().line;
    assert!(
        narrow_last > wide_last,
        "wrapping at 40 columns must lower the last heading ({narrow_last} vs {wide_last})"
    );
}

#[test]
fn test_hero_banner_shifts_every_anchor() {
    let plain = render(80, 0, false);
    let with_hero = render(80, 0, true);

    for (bare, shifted) in plain.anchors().iter().zip(with_hero.anchors()) {
        assert_eq!(bare.id, shifted.id);
        assert!(shifted.line > bare.line);
    }
}

#[test]
fn test_page_title_is_left_to_the_chrome() {
    let layout = render(80, 4, false);
    // The h1 text renders in the article header, not the body.
    assert!(!text_of(&layout).contains("Page title"));
}

#[test]
fn test_code_lines_render_verbatim() {
    let layout = render(80, 4, false);
    assert!(text_of(&layout).contains("let x = 1;"));
}

#[test]
fn test_unknown_syntax_theme_still_highlights() {
    let palette = Theme::Dark.palette();
    let highlighter = CodeHighlighter::new("no-such-theme");
    let options = LayoutOptions {
        width: 80,
        scroll_margin: 0,
        palette: &palette,
        highlighter: &highlighter,
        show_hero: false,
    };
    let layout = layout_page(&sample_page(), &options);
    assert!(layout.height() > 0);
}
