//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    // Title bar + page + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = vec![Span::styled(
        format!(" mcstatus v{} ", env!("CARGO_PKG_VERSION")),
        bar.add_modifier(Modifier::BOLD),
    )];
    for (i, page) in Page::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, page.title());
        let style = if *page == app.current_page {
            Styles::selected()
        } else {
            bar
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Status => pages::status::render(app, frame, inner_area),
        Page::About => pages::about::render(app, frame, inner_area),
        Page::Docs => pages::docs::render(app, frame, inner_area),
    }
}
