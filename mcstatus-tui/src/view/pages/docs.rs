//! Docs page: API endpoints, example requests and the site map

use mcstatus_core::{canonical_url, render_sitemap, Edition};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

fn docs_lines(app: &App) -> Vec<Line<'static>> {
    let api_host = &app.api_host;
    let mut lines = vec![
        Line::from(Span::styled("Endpoints", Styles::title())),
        Line::from(format!("  GET {api_host}/status/java/<address>")),
        Line::from(format!("  GET {api_host}/status/bedrock/<address>")),
        Line::from(""),
        Line::from("  <address> is host[:port]. Without a port the edition default is used:"),
    ];
    for edition in [Edition::Java, Edition::Bedrock] {
        lines.push(Line::from(format!(
            "    {:<16} {}",
            edition.display_name(),
            edition.default_port()
        )));
    }
    lines.extend([
        Line::from(""),
        Line::from("  Responses carry X-Cache-Hit / X-Cache-Time-Remaining headers."),
        Line::from(format!(
            "  Protocol names come from {}/<pc|bedrock>/common/protocolVersions.json",
            app.protocol_data_host
        )),
        Line::from(""),
        Line::from(Span::styled("Sitemap", Styles::title())),
    ]);
    lines.extend(
        render_sitemap()
            .lines()
            .map(|path| Line::from(format!("  {}", canonical_url(path)))),
    );
    lines
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(docs_lines(app)).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn lists_endpoints_for_configured_host() {
        let app = App::new("http://localhost:3001/v2", "http://localhost:3002/data");
        let lines = text(&docs_lines(&app));
        let endpoint = "  GET http://localhost:3001/v2/status/java/<address>".to_string();
        assert!(lines.contains(&endpoint));
        assert!(lines.iter().any(|l| l.contains("19132")));
    }

    #[test]
    fn protocol_source_follows_configured_host() {
        let app = App::new("http://localhost:3001/v2", "http://localhost:3002/data");
        let lines = text(&docs_lines(&app));
        let source = lines
            .iter()
            .find(|l| l.starts_with("  Protocol names come from"))
            .unwrap();
        assert!(source.contains("http://localhost:3002/data/<pc|bedrock>/common/"));
    }

    #[test]
    fn sitemap_urls_are_absolute() {
        let lines = text(&docs_lines(&App::default()));
        assert!(lines.contains(&"  https://mcstatus.io/about".to_string()));
    }
}
