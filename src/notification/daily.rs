use super::{leave_detail, Absentees};
use crate::model::{Boarder, Leave};
use tracing::debug;

const GREETING_ALL_IN: &str =
    "Hi BMs, all boarders are in and there is no one with leaves today.\nThank you!";
const HEADER_LEAVES_ONLY: &str = "Hi BMs, all boarders are in, except for those with leaves:";
const HEADER_ABSENTEES: &str = "Hi BMs, all boarders are in except:";
const HEADER_LEAVES: &str = "And those with leaves:";
const CLOSING: &str = "Thank you!";

/// Compose le message du jour à partir des absents et des internes en congé.
///
/// La forme dépend uniquement du nombre d'absents (0, 1, plusieurs). L'ordre
/// des lignes est celui des entrées.
pub fn compose(absent: &[&Boarder], on_leave: &[&Boarder]) -> String {
    let form = Absentees::from_count(absent.len());
    debug!(?form, absent = absent.len(), on_leave = on_leave.len(), "composing BM message");
    match form {
        Absentees::None => no_absentees(on_leave),
        Absentees::Singular => with_absentees(absent, on_leave, "him"),
        Absentees::Plural => with_absentees(absent, on_leave, "them"),
    }
}

fn no_absentees(on_leave: &[&Boarder]) -> String {
    if on_leave.is_empty() {
        return GREETING_ALL_IN.to_string();
    }
    // heure de retour brute ici, phrase complète dans les autres formes
    let mut lines = Vec::with_capacity(on_leave.len() + 2);
    lines.push(HEADER_LEAVES_ONLY.to_string());
    lines.extend(on_leave.iter().map(|b| {
        format!(
            "- {} {} ({})",
            b.bed,
            b.name,
            leave_detail(b, |l: &Leave| l.return_time.clone())
        )
    }));
    lines.push(CLOSING.to_string());
    lines.join("\n")
}

fn with_absentees(absent: &[&Boarder], on_leave: &[&Boarder], pronoun: &str) -> String {
    let mut lines = Vec::with_capacity(absent.len() + on_leave.len() + 4);
    lines.push(HEADER_ABSENTEES.to_string());
    lines.extend(absent.iter().map(|b| format!("- {} {}", b.bed, b.name)));
    lines.push(format!(
        "I have asked {pronoun} to scan at level 1, will update again later."
    ));
    if !on_leave.is_empty() {
        lines.push(HEADER_LEAVES.to_string());
        lines.extend(on_leave.iter().map(|b| {
            format!(
                "- {} {} ({})",
                b.bed,
                b.name,
                leave_detail(b, Leave::message_string)
            )
        }));
    }
    lines.push(CLOSING.to_string());
    lines.join("\n")
}
