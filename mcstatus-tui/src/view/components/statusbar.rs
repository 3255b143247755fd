//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FormField, Page};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Alt+1-3", "Pages")];

    match app.current_page {
        Page::Status => {
            hints.push(("Tab", "Field"));
            match app.status.form.focus {
                FormField::Address => hints.push(("Enter", "Submit")),
                FormField::Bedrock => hints.push(("Space", "Toggle")),
                FormField::Submit => hints.push(("Space/Enter", "Submit")),
            }
            hints.push(("Alt+b", "Edition"));
            hints.push(("Alt+e", "Example"));
            hints.push(("Alt+d", "Debug"));
            hints.push(("Alt+u", "API"));
            if app.status.summary().is_some() {
                hints.push(("Alt+p", "Players"));
                hints.push(("Alt+m", "Mods"));
            }
        }
        Page::About => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Expand"));
        }
        Page::Docs => {}
    }

    hints.push(("Alt+q", "Quit"));
    hints
}
