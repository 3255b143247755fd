//! Update layer: the only place that mutates the model.
//!
//! `update` matches every [`AppMessage`] exhaustively and delegates page
//! messages to sub-modules. It never blocks and never touches the network;
//! when a message needs a side effect it returns a [`Command`] for the main
//! loop to hand to the backend.

mod content;
mod form;
mod lookup;

use crate::message::{AppMessage, Command};
use crate::model::App;

/// Apply one message.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::SwitchPage(page) => {
            app.current_page = page;
        }

        AppMessage::NextPage => {
            app.current_page = app.current_page.next();
        }

        AppMessage::PrevPage => {
            app.current_page = app.current_page.previous();
        }

        AppMessage::Form(form_msg) => return form::update(app, form_msg),

        AppMessage::Result(result_msg) => content::update_result(app, result_msg),

        AppMessage::Faq(faq_msg) => content::update_faq(app, faq_msg),

        AppMessage::LookupFinished { token, report } => lookup::finish(app, token, report),

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::message::{FaqMessage, FormMessage, ResultMessage};
    use crate::model::Page;
    use mcstatus_core::{
        CacheStatus, LookupReport, LookupResult, ProtocolVersion, RequestToken, StatusError,
        StatusResponse,
    };
    use serde_json::json;

    fn type_address(app: &mut App, address: &str) {
        for c in address.chars() {
            update(app, AppMessage::Form(FormMessage::Input(c)));
        }
    }

    fn submit(app: &mut App) -> (RequestToken, mcstatus_core::LookupRequest) {
        match update(app, AppMessage::Form(FormMessage::Submit)) {
            Some(Command::Lookup { token, request }) => (token, request),
            None => panic!("submit produced no command"),
        }
    }

    fn ok_report(body: serde_json::Value) -> LookupReport {
        LookupReport {
            outcome: Ok(StatusResponse {
                payload: body,
                cache: CacheStatus::default(),
            }),
            protocol_versions: Some(vec![ProtocolVersion {
                minecraft_version: "1.20.4".into(),
                version: 765,
                major_version: None,
                release_type: Some("release".into()),
                uses_netty: None,
            }]),
        }
    }

    #[test]
    fn quit_and_page_switching() {
        let mut app = App::default();
        update(&mut app, AppMessage::NextPage);
        assert_eq!(app.current_page, Page::About);
        update(&mut app, AppMessage::SwitchPage(Page::Docs));
        assert_eq!(app.current_page, Page::Docs);
        update(&mut app, AppMessage::PrevPage);
        assert_eq!(app.current_page, Page::About);

        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn invalid_address_never_submits() {
        let mut app = App::default();
        assert!(update(&mut app, AppMessage::Form(FormMessage::Submit)).is_none());

        type_address(&mut app, "play..hypixel.net");
        assert!(update(&mut app, AppMessage::Form(FormMessage::Submit)).is_none());
        assert!(app.status.result().is_none());
    }

    #[test]
    fn submit_goes_pending_and_emits_lookup() {
        let mut app = App::default();
        type_address(&mut app, "Play.Hypixel.net");
        update(&mut app, AppMessage::Form(FormMessage::ToggleEdition));

        let (_, request) = submit(&mut app);
        assert_eq!(request.to_string(), "bedrock/play.hypixel.net");
        assert_eq!(app.status.result(), Some(&LookupResult::Pending));
    }

    #[test]
    fn success_report_is_applied_with_versions() {
        let mut app = App::default();
        type_address(&mut app, "play.hypixel.net");
        let (token, _) = submit(&mut app);

        let body = json!({ "online": true, "host": "play.hypixel.net", "port": 25565,
                           "version": { "protocol": 765 } });
        update(
            &mut app,
            AppMessage::LookupFinished {
                token,
                report: ok_report(body.clone()),
            },
        );

        assert_eq!(app.status.result().and_then(LookupResult::payload), Some(&body));
        assert_eq!(app.status.protocol_label(765).as_deref(), Some("1.20.4"));
        assert!(app.status.summary().unwrap().online);
    }

    #[test]
    fn failure_report_shows_message() {
        let mut app = App::default();
        type_address(&mut app, "nope.invalid");
        let (token, _) = submit(&mut app);

        update(
            &mut app,
            AppMessage::LookupFinished {
                token,
                report: LookupReport {
                    outcome: Err(StatusError::HttpError {
                        status: 404,
                        message: "Invalid address".into(),
                    }),
                    protocol_versions: None,
                },
            },
        );

        assert_eq!(
            app.status.result().and_then(LookupResult::error),
            Some("Invalid address")
        );
    }

    #[test]
    fn resubmission_resets_to_pending_and_drops_stale_report() {
        let mut app = App::default();
        type_address(&mut app, "a.example.com");
        let (first, _) = submit(&mut app);

        update(&mut app, AppMessage::Form(FormMessage::Clear));
        type_address(&mut app, "b.example.com");
        // Editing alone leaves the pending lookup untouched.
        assert_eq!(app.status.result(), Some(&LookupResult::Pending));

        let (second, request) = submit(&mut app);
        assert_eq!(request.address(), "b.example.com");
        assert_ne!(first, second);

        update(
            &mut app,
            AppMessage::LookupFinished {
                token: first,
                report: ok_report(json!({ "online": true, "host": "a.example.com" })),
            },
        );
        assert_eq!(app.status.result(), Some(&LookupResult::Pending));
        assert!(app.status.protocol_versions.is_none());

        update(
            &mut app,
            AppMessage::LookupFinished {
                token: second,
                report: ok_report(json!({ "online": true, "host": "b.example.com" })),
            },
        );
        let summary = app.status.summary().unwrap();
        assert_eq!(summary.host.as_deref(), Some("b.example.com"));
    }

    #[test]
    fn editing_after_success_keeps_displayed_result() {
        let mut app = App::default();
        type_address(&mut app, "mc.example.com");
        let (token, _) = submit(&mut app);
        update(
            &mut app,
            AppMessage::LookupFinished {
                token,
                report: ok_report(json!({ "online": false })),
            },
        );

        update(&mut app, AppMessage::Form(FormMessage::Backspace));
        update(&mut app, AppMessage::Form(FormMessage::ToggleEdition));
        assert!(matches!(app.status.result(), Some(LookupResult::Success(_))));
        assert_eq!(
            app.status.displayed_request().map(|r| r.address()),
            Some("mc.example.com")
        );
    }

    #[test]
    fn result_toggles_and_faq() {
        let mut app = App::default();
        update(&mut app, AppMessage::Result(ResultMessage::ToggleDebug));
        update(&mut app, AppMessage::Result(ResultMessage::ToggleApiUsage));
        assert!(app.status.show_debug);
        assert!(app.status.show_api_usage);

        update(&mut app, AppMessage::Faq(FaqMessage::SelectNext));
        update(&mut app, AppMessage::Faq(FaqMessage::Toggle));
        assert_eq!(app.about.expanded, Some(1));
    }
}
