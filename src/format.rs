use itertools::Itertools;

use crate::model::Tournament;

/// Message sent when no events fall inside the window.
pub const EMPTY_MESSAGE: &str = "No tournaments found!";

/// Render the announcement message, one line per tournament in input order.
///
/// Each line is a Discord blockquote bullet with an embedded timestamp token
/// and a masked link, e.g. `> - [<t:1704067200:f> Spring Open](<https://x/y>)`.
/// Discord resolves the `<t:..:f>` token to the reader's local time.
pub fn render_announcement(tournaments: &[Tournament]) -> String {
    if tournaments.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    tournaments.iter().map(tournament_line).join("\n")
}

fn tournament_line(tournament: &Tournament) -> String {
    format!(
        "> - [<t:{}:f> {}](<{}>)",
        tournament.start_date, tournament.title, tournament.registration_link
    )
}
