//! Address form updates

use crate::message::{Command, FormMessage};
use crate::model::App;

pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    let form = &mut app.status.form;
    match msg {
        FormMessage::Input(c) => form.push_char(c),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Clear => form.clear(),
        FormMessage::NextField => form.focus = form.focus.next(),
        FormMessage::PrevField => form.focus = form.focus.previous(),
        FormMessage::ToggleEdition => form.toggle_edition(),
        FormMessage::NextExample => form.load_next_example(),
        FormMessage::Submit => return submit(app),
    }
    None
}

/// Start a lookup for the current input. Does nothing while it is invalid.
fn submit(app: &mut App) -> Option<Command> {
    let request = app.status.form.request()?;

    let token = app.status.lookup.submit(request.clone());
    app.status.reset_result_view();
    app.set_status(format!("Looking up {request}..."));
    tracing::info!("Lookup #{} started for {request}", token.value());

    Some(Command::Lookup { token, request })
}
