//! About page: FAQ accordion

use mcstatus_core::faq_entries;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let about = &app.about;

    let mut lines = vec![
        Line::from("mcstatus retrieves the status of Java and Bedrock Edition Minecraft servers."),
        Line::from(""),
    ];

    for (i, entry) in faq_entries().iter().enumerate() {
        let open = about.is_expanded(i);
        let marker = if open { "▾" } else { "▸" };
        let style = if i == about.selected {
            Styles::selected()
        } else {
            Styles::title()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", entry.title),
            style,
        )));
        if open {
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.text),
                Style::default().fg(c.fg),
            )));
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
