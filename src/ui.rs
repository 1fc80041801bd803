//! The UI renders the application state into the documentation page shell.
//!
//! One draw pass lays out the sticky header, the sidebar navigation, the
//! article column (optionally fronted by the demo tables), the "On this
//! page" outline and the help bar. The article body is pre-rendered by the
//! layout module; drawing only clips it at the current scroll offset, so
//! the draw pass is where the app learns the content viewport size.

use crate::app_state::App;
use crate::nav::NavLink;
use crate::table::{self, Status};
use crate::theme::Palette;
use crate::toc::TocEntry;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

/// Renders the full page shell for the current application state.
pub fn draw(f: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, app, &palette, chunks[0]);
    draw_body(f, app, &palette, chunks[1]);
    draw_help(f, app, &palette, chunks[2]);
}

/// Sticky header: elevated styling once the page is scrolled.
fn draw_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (border_style, title_style) = if app.header_scrolled {
        (palette.accent, palette.heading)
    } else {
        (palette.muted, palette.subheading)
    };

    let block = Block::default().borders(Borders::ALL).style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled("DePIN DD", title_style),
        Span::raw("   "),
        Span::styled("Networks", palette.accent),
        Span::raw("  "),
        Span::styled("Showcase", palette.accent),
        Span::raw("  "),
        Span::styled("Blog", palette.accent),
    ]);
    f.render_widget(Paragraph::new(brand), halves[0]);

    let theme_tag = Line::from(Span::styled(
        format!("theme: {}", app.theme.label()),
        palette.muted,
    ))
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(theme_tag), halves[1]);
}

fn draw_body(f: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let has_outline = !app.current_page().toc.is_empty();
    let constraints = if has_outline {
        vec![
            Constraint::Length(26),
            Constraint::Min(0),
            Constraint::Length(28),
        ]
    } else {
        vec![Constraint::Length(26), Constraint::Min(0)]
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    draw_sidebar(f, app, palette, columns[0]);
    draw_article(f, app, palette, columns[1]);
    if has_outline {
        draw_outline(f, app, palette, columns[2]);
    }
}

/// Sidebar navigation: every group with its links, current route highlighted.
fn draw_sidebar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let current_route = app.current_page().route.clone();
    let active_group = app.nav.group_of(&current_route).map(|group| group.title);

    let mut items: Vec<ListItem> = Vec::new();
    for group in app.nav.groups() {
        let group_style = if Some(group.title) == active_group {
            palette.accent.add_modifier(Modifier::BOLD)
        } else {
            palette.subheading
        };
        items.push(ListItem::new(Line::from(Span::styled(
            group.title,
            group_style,
        ))));
        for link in &group.links {
            let style = if link.route == current_route {
                palette.accent.add_modifier(Modifier::REVERSED)
            } else {
                palette.body
            };
            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(link.title, style),
            ])));
        }
        items.push(ListItem::new(Line::default()));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Navigation")
            .style(palette.muted),
    );
    f.render_widget(list, area);
}

fn draw_article(f: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let mut constraints = vec![Constraint::Length(3)];
    let shows_tables = app.shows_tables();
    if shows_tables {
        constraints.push(Constraint::Length(7));
        constraints.push(Constraint::Length(9));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(4));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_article_header(f, app, palette, rows[0]);
    let mut next = 1;
    if shows_tables {
        draw_leaderboard(f, palette, rows[next]);
        draw_directory(f, app, palette, rows[next + 1]);
        next += 2;
    }
    draw_article_body(f, app, palette, rows[next]);
    draw_footer(f, app, palette, rows[next + 1]);
}

/// Eyebrow (containing group) and page title, like the article header.
fn draw_article_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let page = app.current_page();
    let eyebrow = app
        .nav
        .group_of(&page.route)
        .map(|group| group.title)
        .unwrap_or_default();

    let mut lines = Vec::new();
    if !eyebrow.is_empty() {
        lines.push(Line::from(Span::styled(eyebrow, palette.accent)));
    }
    lines.push(Line::from(Span::styled(
        page.title.clone(),
        palette.subheading.add_modifier(Modifier::BOLD),
    )));
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_article_body(f: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::NONE)
        .style(palette.body);
    let inner = block.inner(area);
    app.set_viewport(usize::from(inner.width), usize::from(inner.height));

    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let body = Paragraph::new(Text::from(app.layout().lines().to_vec()))
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(body, area);
}

/// Previous/next neighbors from the navigation map.
fn draw_footer(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (previous, next) = app.neighbors();
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    if let Some(link) = previous {
        f.render_widget(footer_widget("Previous", link, true, palette), halves[0]);
    }
    if let Some(link) = next {
        f.render_widget(
            footer_widget("Next", link, false, palette).alignment(Alignment::Right),
            halves[1],
        );
    }
}

fn footer_widget(
    label: &str,
    link: &NavLink,
    leading_arrow: bool,
    palette: &Palette,
) -> Paragraph<'static> {
    let title = if leading_arrow {
        format!("← {}", link.title)
    } else {
        format!("{} →", link.title)
    };
    Paragraph::new(vec![
        Line::from(Span::styled(label.to_string(), palette.subheading)),
        Line::from(Span::styled(title, palette.accent)),
    ])
    .block(Block::default().borders(Borders::TOP).style(palette.muted))
}

/// "On this page" outline with the active section highlighted.
fn draw_outline(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let active = app.active_section().map(ToString::to_string);
    let active_id = active.as_deref();

    let mut items: Vec<ListItem> = Vec::new();
    for entry in &app.current_page().toc {
        items.push(ListItem::new(Line::from(Span::styled(
            entry.title.clone(),
            outline_style(entry, active_id, palette),
        ))));
        for child in &entry.children {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(child.title.clone(), outline_style(child, active_id, palette)),
            ])));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("On this page")
            .style(palette.muted),
    );
    f.render_widget(list, area);
}

fn outline_style(entry: &TocEntry, active_id: Option<&str>, palette: &Palette) -> Style {
    if entry.is_active(active_id) {
        palette.accent.add_modifier(Modifier::BOLD)
    } else {
        palette.body
    }
}

/// Payback-time leaderboard table.
fn draw_leaderboard(f: &mut Frame, palette: &Palette, area: Rect) {
    let rows: Vec<Row> = table::leaderboard()
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.network),
                Cell::from(format!("{} months", row.payback_months)),
                Cell::from(format!("${}.00", row.miner_cost_usd)),
            ])
            .style(palette.body)
        })
        .collect();

    let widget = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(Row::new(vec!["DePIN network", "Payback time", "Miner cost"]).style(palette.subheading))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Miner payback time")
            .style(palette.muted),
    );
    f.render_widget(widget, area);
}

/// Team directory table with status pills and the role filter applied.
fn draw_directory(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let members = table::filtered(&app.members, app.role_filter);
    let count = members.len();
    let rows: Vec<Row> = members
        .into_iter()
        .map(|member| {
            Row::new(vec![
                Cell::from(member.name.clone()),
                Cell::from(member.title.clone()),
                Cell::from(Span::styled(
                    member.status.label(),
                    Style::default().fg(status_color(member.status)),
                )),
                Cell::from(member.age.to_string()),
                Cell::from(member.role.clone()),
            ])
            .style(palette.body)
        })
        .collect();

    let title = format!("Team directory: {} ({count} rows)", app.role_filter.label());
    let widget = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Name", "Title", "Status", "Age", "Role"]).style(palette.subheading))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(palette.muted),
    );
    f.render_widget(widget, area);
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Active => Color::Green,
        Status::Inactive => Color::Red,
        Status::Offline => Color::Yellow,
    }
}

fn draw_help(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let text = app.message.clone().unwrap_or_else(|| {
        "j/k: Scroll | Space/PgDn: Page | g/G: Top/Bottom | n/p: Next/Prev page | t: Theme | f: Filter roles | q: Quit"
            .to_string()
    });
    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL).style(palette.muted));
    f.render_widget(help, area);
}
