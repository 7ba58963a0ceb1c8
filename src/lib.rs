#![forbid(unsafe_code)]
//! Appel — génération du message d'appel d'un internat pour les BMs.
//!
//! - Import du roster (CSV) et stockage JSON.
//! - Classement absents / congés, ordre d'entrée conservé.
//! - Message du jour (0 / 1 / plusieurs absents) et relance.
//! - Compositeurs purs : aucune E/S, aucun état partagé.

pub mod io;
pub mod model;
pub mod notification;
pub mod storage;

pub use model::{
    select_unresolved, Boarder, Checkable, Leave, RecordError, Roster, Snapshot, Status,
};
pub use notification::{compose, compose_follow_up, status_lines, Absentees};
pub use storage::{JsonStorage, Storage};
