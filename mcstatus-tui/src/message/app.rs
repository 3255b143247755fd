//! Top-level message enum

use mcstatus_core::{LookupReport, RequestToken};

use super::{FaqMessage, FormMessage, ResultMessage};
use crate::model::Page;

#[derive(Debug, Clone)]
pub enum AppMessage {
    Quit,

    /// Jump straight to a page
    SwitchPage(Page),

    /// Cycle to the next / previous page
    NextPage,
    PrevPage,

    Form(FormMessage),

    Result(ResultMessage),

    Faq(FaqMessage),

    /// Posted by the backend when a lookup task finishes
    LookupFinished {
        token: RequestToken,
        report: LookupReport,
    },

    ClearStatus,

    /// Ignored input
    Noop,
}
