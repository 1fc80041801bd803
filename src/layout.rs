//! Document layout: blocks become styled terminal lines with anchored headings.
//!
//! The layout is the rendering surface the tracker resolves against. Every
//! block is wrapped at the content width and appended to a line buffer;
//! when a heading lands, its anchor id is recorded against the line it
//! starts on. The recorded anchors answer [`AnchorSurface`] lookups with
//! the heading's scroll margin already subtracted, so a heading tucked just
//! under the sticky header still counts as reached.
//!
//! Layouts are cheap and rebuilt whenever the page or the content width
//! changes; nothing here is cached across pages.

use crate::markdown::Block;
use crate::page::Page;
use crate::theme::Palette;
use crate::tracker::AnchorSurface;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme as SyntaxTheme, ThemeSet};
use syntect::parsing::SyntaxSet;

/// One rendered heading's position in the line buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HeadingAnchor {
    /// Anchor id shared with the outline.
    pub id: String,
    /// Line index the heading starts on.
    pub line: usize,
    /// Lines reserved under the sticky header for this heading.
    pub scroll_margin: usize,
}

/// A page rendered to styled lines at a fixed width.
#[derive(Default)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    anchors: Vec<HeadingAnchor>,
}

impl PageLayout {
    #[must_use]
    /// Rendered lines in document order.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    #[must_use]
    /// Total rendered height in lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Recorded heading anchors in document order.
    pub fn anchors(&self) -> &[HeadingAnchor] {
        &self.anchors
    }
}

impl AnchorSurface for PageLayout {
    fn anchor_top(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| anchor.line.saturating_sub(anchor.scroll_margin))
    }
}

/// Syntax highlighting for fenced code blocks.
pub struct CodeHighlighter {
    syntaxes: SyntaxSet,
    theme: SyntaxTheme,
}

impl CodeHighlighter {
    #[must_use]
    /// Loads the bundled syntax definitions and the named theme.
    ///
    /// An unknown theme name falls back to a default theme rather than
    /// failing; highlighting is presentation, not correctness.
    pub fn new(theme_name: &str) -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(theme_name).unwrap_or_default();
        Self { syntaxes, theme }
    }

    /// Highlight one code block into styled spans per line.
    fn highlight(&self, language: Option<&str>, lines: &[String]) -> Vec<Vec<Span<'static>>> {
        let syntax = language
            .and_then(|token| self.syntaxes.find_syntax_by_token(token))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        let mut state = HighlightLines::new(syntax, &self.theme);
        lines
            .iter()
            .map(|line| {
                let with_newline = format!("{line}\n");
                match state.highlight_line(&with_newline, &self.syntaxes) {
                    Ok(ranges) => ranges
                        .into_iter()
                        .map(|(style, text)| {
                            Span::styled(
                                text.trim_end_matches('\n').to_string(),
                                Style::default().fg(Color::Rgb(
                                    style.foreground.r,
                                    style.foreground.g,
                                    style.foreground.b,
                                )),
                            )
                        })
                        .collect(),
                    Err(_) => vec![Span::raw(line.clone())],
                }
            })
            .collect()
    }
}

/// Options controlling one layout pass.
pub struct LayoutOptions<'a> {
    /// Content width in columns.
    pub width: usize,
    /// Lines reserved under the sticky header for every heading.
    pub scroll_margin: usize,
    /// Active theme styles.
    pub palette: &'a Palette,
    /// Code block highlighting.
    pub highlighter: &'a CodeHighlighter,
    /// Whether to open with the hero banner (home route only).
    pub show_hero: bool,
}

#[must_use]
#[allow(clippy::too_many_lines)]
/// Renders a page's blocks into a positioned line buffer.
pub fn layout_page(page: &Page, options: &LayoutOptions<'_>) -> PageLayout {
    let width = options.width.max(16);
    let palette = options.palette;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors: Vec<HeadingAnchor> = Vec::new();

    if options.show_hero {
        push_hero(&mut lines, width, palette);
    }

    for block in &page.document.blocks {
        match block {
            Block::Heading { level: 1, .. } => {
                // The page title renders in the article header chrome.
            }
            Block::Heading { level, id, title } => {
                ensure_blank(&mut lines);
                anchors.push(HeadingAnchor {
                    id: id.clone(),
                    line: lines.len(),
                    scroll_margin: options.scroll_margin,
                });
                let style = if *level == 2 {
                    palette.heading
                } else {
                    palette.subheading
                };
                for wrapped in textwrap::wrap(title, width) {
                    lines.push(Line::from(Span::styled(wrapped.to_string(), style)));
                }
                if *level == 2 {
                    let rule_width = width.min(title.chars().count().max(8));
                    lines.push(Line::from(Span::styled(
                        "─".repeat(rule_width),
                        palette.muted,
                    )));
                }
                lines.push(Line::default());
            }
            Block::Paragraph(text) => {
                for wrapped in textwrap::wrap(text, width) {
                    lines.push(Line::from(Span::styled(wrapped.to_string(), palette.body)));
                }
                lines.push(Line::default());
            }
            Block::Bullet(text) => {
                let bullet = textwrap::Options::new(width)
                    .initial_indent("• ")
                    .subsequent_indent("  ");
                for wrapped in textwrap::wrap(text, bullet) {
                    lines.push(Line::from(Span::styled(wrapped.to_string(), palette.body)));
                }
            }
            Block::Code { language, lines: code } => {
                ensure_blank(&mut lines);
                for spans in options
                    .highlighter
                    .highlight(language.as_deref(), code)
                {
                    let mut indented = vec![Span::raw("  ")];
                    indented.extend(spans);
                    lines.push(Line::from(indented));
                }
                lines.push(Line::default());
            }
            Block::Rule => {
                ensure_blank(&mut lines);
                lines.push(Line::from(Span::styled("─".repeat(width), palette.muted)));
                lines.push(Line::default());
            }
        }
    }

    while lines.last().is_some_and(|line| line.spans.is_empty()) {
        lines.pop();
    }

    PageLayout { lines, anchors }
}

fn push_hero(lines: &mut Vec<Line<'static>>, width: usize, palette: &Palette) {
    lines.push(Line::from(Span::styled(
        "DePIN due diligence",
        palette.hero,
    )));
    for wrapped in textwrap::wrap(
        "Field data on decentralized physical infrastructure networks: \
         what the hardware costs, what it earns, and how long it takes to pay back.",
        width,
    ) {
        lines.push(Line::from(Span::styled(wrapped.to_string(), palette.body)));
    }
    lines.push(Line::from(Span::styled("─".repeat(width), palette.muted)));
    lines.push(Line::default());
}

fn ensure_blank(lines: &mut Vec<Line<'static>>) {
    if lines.last().is_some_and(|line| !line.spans.is_empty()) {
        lines.push(Line::default());
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
