//! Status page: address form, result area and API usage panel

use mcstatus_core::{
    canonical_url, example_servers, humanize_duration, status_path, CacheStatus, Edition,
    LookupRequest, LookupResult, StatusSummary,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, FormField, StatusState};
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 18;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let usage = if app.status.show_api_usage {
        api_usage_lines(app)
    } else {
        Vec::new()
    };
    // Panel grows with the response body, up to half the page
    let api_height = if usage.is_empty() {
        0
    } else {
        let wanted = u16::try_from(usage.len() + 2).unwrap_or(u16::MAX);
        wanted.min(area.height.saturating_sub(3) / 2).max(3)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(api_height),
            Constraint::Min(1),
        ])
        .split(area);

    render_form(&app.status, frame, chunks[0]);
    if !usage.is_empty() {
        render_api_usage(usage, frame, chunks[1]);
    }
    render_result(&app.status, frame, chunks[2]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        })
}

fn render_form(status: &StatusState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &status.form;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(15),
            Constraint::Length(12),
        ])
        .split(area);

    // Address input
    let focused = form.focus == FormField::Address;
    let mut block = field_block(" Server address ", focused);
    if !form.address.is_empty() && !form.can_submit() {
        block = block.border_style(Style::default().fg(c.error));
    }
    let mut spans = if form.address.is_empty() {
        vec![Span::styled("play.hypixel.net", Styles::disabled())]
    } else {
        vec![Span::raw(form.address.clone())]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), columns[0]);

    // Bedrock checkbox
    let mark = if form.bedrock { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(format!("{mark} Bedrock"))
            .block(field_block("", form.focus == FormField::Bedrock)),
        columns[1],
    );

    // Submit, greyed out while the input is invalid
    let style = match (form.can_submit(), form.focus == FormField::Submit) {
        (false, _) => Styles::disabled(),
        (true, true) => Styles::selected(),
        (true, false) => Style::default().fg(c.success),
    };
    let label = if status.lookup.is_pending() {
        "Loading"
    } else {
        "Submit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .block(field_block("", form.focus == FormField::Submit)),
        columns[2],
    );
}

/// Request whose endpoint the usage panel documents: the lookup on display,
/// else whatever the form would submit.
fn usage_request(status: &StatusState) -> Option<LookupRequest> {
    status
        .displayed_request()
        .cloned()
        .or_else(|| status.form.request())
}

/// Endpoint and page URL, followed by the response body once a lookup
/// succeeded.
fn api_usage_lines(app: &App) -> Vec<String> {
    let mut lines = match usage_request(&app.status) {
        Some(request) => vec![
            format!("GET {}{}", app.api_host, status_path(&request)),
            format!("Page  {}", canonical_url(&status_path(&request))),
        ],
        None => vec![format!(
            "GET {}/status/{}/<address>",
            app.api_host,
            app.status.form.edition().path_segment()
        )],
    };

    if let Some(LookupResult::Success(response)) = app.status.result() {
        match serde_json::to_string_pretty(&response.payload) {
            Ok(body) => {
                lines.push(String::new());
                lines.extend(body.lines().map(str::to_string));
            }
            Err(e) => tracing::warn!("Failed to render response body: {e}"),
        }
    }
    lines
}

fn render_api_usage(usage: Vec<String>, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = usage.into_iter().map(Line::from).collect();
    let block = Block::default()
        .title(" API usage ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_result(status: &StatusState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines: Vec<Line> = match status.result() {
        None => idle_lines(),
        Some(LookupResult::Pending) => {
            let target = status
                .displayed_request()
                .map(ToString::to_string)
                .unwrap_or_default();
            vec![Line::from(Span::styled(
                format!("Retrieving status of {target}..."),
                Style::default().fg(c.warning),
            ))]
        }
        Some(LookupResult::Failure { message }) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(c.error),
        ))],
        Some(LookupResult::Success(_)) => result_rows(status)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<LABEL_WIDTH$}"), Styles::label()),
                    Span::raw(value),
                ])
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn idle_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("Enter a Java or Bedrock Edition server address and press Enter."),
        Line::from(""),
        Line::from(Span::styled("Examples (Alt+e):", Styles::label())),
    ];
    lines.extend(example_servers().iter().map(|server| {
        Line::from(format!(
            "  {:<8} {}",
            server.edition.path_segment(),
            server.address
        ))
    }));
    lines
}

fn yes_no(flag: bool) -> String {
    (if flag { "Yes" } else { "No" }).to_string()
}

fn cache_label(cache: CacheStatus) -> String {
    match (cache.hit, cache.remaining) {
        (true, Some(remaining)) => format!("Yes (expires in {})", humanize_duration(remaining)),
        (hit, _) => yes_no(hit),
    }
}

/// Label/value rows of a successful lookup. Empty for any other result.
///
/// Continuation rows (extra MOTD lines, player names, mods) have an empty
/// label.
pub fn result_rows(status: &StatusState) -> Vec<(&'static str, String)> {
    let Some(LookupResult::Success(response)) = status.result() else {
        return Vec::new();
    };
    let summary = StatusSummary::from_payload(&response.payload);
    let request = status.displayed_request();
    let edition = request.map_or(Edition::Java, LookupRequest::edition);

    let mut rows = vec![(
        "Status",
        if summary.online { "Online" } else { "Offline" }.to_string(),
    )];
    rows.push((
        "Hostname",
        summary
            .host
            .clone()
            .or_else(|| request.and_then(|r| r.address().split(':').next().map(str::to_string)))
            .unwrap_or_default(),
    ));
    rows.push((
        "Port",
        summary
            .port
            .unwrap_or_else(|| u64::from(edition.default_port()))
            .to_string(),
    ));

    if summary.online {
        online_rows(status, &summary, &mut rows);
    }

    if status.show_debug {
        rows.push(("SRV record", yes_no(summary.srv_record)));
        if let Some(protocol) = summary.protocol {
            let value = match status.protocol_label(protocol) {
                Some(name) => format!("{protocol} ({name})"),
                None => protocol.to_string(),
            };
            rows.push(("Protocol version", value));
        }
        rows.push(("Cached response", cache_label(response.cache)));
    }

    rows
}

fn online_rows(
    status: &StatusState,
    summary: &StatusSummary,
    rows: &mut Vec<(&'static str, String)>,
) {
    let mut motd = summary.motd_clean.as_deref().unwrap_or_default().lines();
    rows.push(("MOTD", motd.next().unwrap_or_default().to_string()));
    rows.extend(motd.map(|line| ("", line.to_string())));

    rows.push(("Favicon", yes_no(summary.favicon.is_some())));
    if let Some(version) = &summary.version_name {
        rows.push(("Version", version.clone()));
    }
    if let Some(edition) = &summary.edition_name {
        rows.push(("Edition", edition.clone()));
    }
    if let Some(gamemode) = &summary.gamemode {
        rows.push(("Gamemode", gamemode.clone()));
    }

    if let Some(players) = summary.players_label() {
        rows.push(("Players", players));
        if status.show_players {
            if summary.player_names.is_empty() {
                rows.push(("", "No player sample".to_string()));
            }
            rows.extend(summary.player_names.iter().map(|name| ("", name.clone())));
        }
    }

    if summary.mod_loader.is_some() || !summary.mods.is_empty() {
        let loader = summary.mod_loader.as_deref().unwrap_or("Mods");
        rows.push(("Mods", format!("{loader} ({} loaded)", summary.mods.len())));
        if status.show_mods {
            rows.extend(
                summary
                    .mods
                    .iter()
                    .map(|m| ("", format!("{} {}", m.id, m.version).trim_end().to_string())),
            );
        }
    }
}
