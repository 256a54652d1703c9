use serde::Serialize;

/// Registration metadata extracted from a single calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tournament {
    /// Event summary, verbatim. Empty when the event has none.
    pub title: String,
    /// First hyperlink text from the description, or the raw first segment
    /// of the description when no hyperlink is present.
    pub registration_link: String,
    /// Start of the tournament as Unix epoch seconds.
    pub start_date: i64,
}
