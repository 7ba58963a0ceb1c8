use super::leave_detail;
use crate::model::{Checkable, Leave};
use tracing::debug;

const HEADER: &str = "Hi BMs, now only left with:\n";

/// Compose la relance pour les internes encore non résolus.
///
/// Renvoie une chaîne vide quand il ne reste personne, ce qui permet à
/// l'appelant de ne rien envoyer. Les absents précèdent toujours les congés.
pub fn compose_follow_up(
    still_absent: &[Checkable<'_>],
    still_on_leave: &[Checkable<'_>],
) -> String {
    if still_absent.is_empty() && still_on_leave.is_empty() {
        return String::new();
    }
    debug!(
        absent = still_absent.len(),
        on_leave = still_on_leave.len(),
        "composing follow-up"
    );

    let absent_lines = still_absent
        .iter()
        .map(|c| format!("- {}\n", c.boarder.name));
    let leave_lines = still_on_leave.iter().map(|c| {
        format!(
            "- {} ({})\n",
            c.boarder.name,
            leave_detail(c.boarder, Leave::message_string)
        )
    });

    std::iter::once(HEADER.to_string())
        .chain(absent_lines)
        .chain(leave_lines)
        .collect()
}
