//! Rédaction des messages destinés aux BMs.
//!
//! Deux compositeurs purs : le message du jour ([`compose`]) et la relance
//! ([`compose_follow_up`]). Aucun état, aucune E/S.

mod daily;
mod follow_up;
mod types;

pub use daily::compose;
pub use follow_up::compose_follow_up;
pub use types::Absentees;

use crate::model::{Boarder, Leave, Status};
use tracing::warn;

/// Lignes de statut individuelles, une par interne absent ou en congé.
pub fn status_lines(boarders: &[Boarder]) -> Vec<String> {
    boarders
        .iter()
        .filter_map(|b| match b.status {
            Status::Absent => Some(format!("{} (Bed {}) is absent.", b.name, b.bed)),
            Status::OnLeave => Some(format!("{} (Bed {}) is on leave.", b.name, b.bed)),
            Status::Present => None,
        })
        .collect()
}

/// Détail de congé à afficher entre parenthèses. Un congé manquant est une
/// violation de contrat de l'appelant : on journalise et on rend une chaîne vide.
fn leave_detail(boarder: &Boarder, field: fn(&Leave) -> String) -> String {
    match &boarder.leave {
        Some(leave) => field(leave),
        None => {
            warn!(bed = %boarder.bed, name = %boarder.name, "boarder listed on leave without leave data");
            String::new()
        }
    }
}
