//! Page content updates

use crate::message::{FaqMessage, ResultMessage};
use crate::model::App;

pub fn update_result(app: &mut App, msg: ResultMessage) {
    let status = &mut app.status;
    match msg {
        ResultMessage::ToggleDebug => status.show_debug = !status.show_debug,
        ResultMessage::TogglePlayers => status.show_players = !status.show_players,
        ResultMessage::ToggleMods => status.show_mods = !status.show_mods,
        ResultMessage::ToggleApiUsage => status.show_api_usage = !status.show_api_usage,
    }
}

pub fn update_faq(app: &mut App, msg: FaqMessage) {
    match msg {
        FaqMessage::SelectPrevious => app.about.select_previous(),
        FaqMessage::SelectNext => app.about.select_next(),
        FaqMessage::Toggle => app.about.toggle_selected(),
    }
}
