use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Statut d'un interne pour l'appel du jour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Present,
    Absent,
    OnLeave,
}

impl FromStr for Status {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" | "in" => Ok(Status::Present),
            "absent" | "out" => Ok(Status::Absent),
            "leave" | "on_leave" | "on leave" | "on-leave" => Ok(Status::OnLeave),
            other => Err(RecordError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Present => "present",
            Status::Absent => "absent",
            Status::OnLeave => "on_leave",
        })
    }
}

/// Congé approuvé. `return_time` est une chaîne d'affichage libre ("6pm", "Sun 8pm").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    #[serde(default)]
    pub kind: String,
    pub return_time: String,
}

impl Leave {
    pub fn new<K: Into<String>, R: Into<String>>(kind: K, return_time: R) -> Self {
        Self {
            kind: kind.into(),
            return_time: return_time.into(),
        }
    }

    /// Phrase lisible combinant le type de congé et l'heure de retour.
    pub fn message_string(&self) -> String {
        let kind = self.kind.trim();
        if kind.is_empty() {
            format!("back {}", self.return_time)
        } else {
            format!("{kind}, back {}", self.return_time)
        }
    }
}

/// Interne suivi à l'appel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boarder {
    pub name: String,
    pub bed: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave: Option<Leave>,
}

impl Boarder {
    pub fn new<N: Into<String>, B: Into<String>>(name: N, bed: B) -> Self {
        Self {
            name: name.into(),
            bed: bed.into(),
            status: Status::Present,
            leave: None,
        }
    }

    pub fn absent<N: Into<String>, B: Into<String>>(name: N, bed: B) -> Self {
        Self {
            status: Status::Absent,
            ..Self::new(name, bed)
        }
    }

    pub fn on_leave<N: Into<String>, B: Into<String>>(name: N, bed: B, leave: Leave) -> Self {
        Self {
            status: Status::OnLeave,
            leave: Some(leave),
            ..Self::new(name, bed)
        }
    }

    pub fn is_absent(&self) -> bool {
        self.status == Status::Absent
    }

    pub fn is_on_leave(&self) -> bool {
        self.status == Status::OnLeave
    }
}

/// Entrée d'une sélection de relance (case cochée par l'utilisateur).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkable<'a> {
    pub boarder: &'a Boarder,
}

impl<'a> From<&'a Boarder> for Checkable<'a> {
    fn from(boarder: &'a Boarder) -> Self {
        Self { boarder }
    }
}

/// Photo de l'appel : absents et internes en congé, dans l'ordre d'entrée.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub absent: Vec<&'a Boarder>,
    pub on_leave: Vec<&'a Boarder>,
}

impl<'a> Snapshot<'a> {
    /// Classe les internes par statut ; les présents sont ignorés.
    pub fn from_boarders(boarders: &'a [Boarder]) -> Self {
        let mut snapshot = Snapshot::default();
        for boarder in boarders {
            match boarder.status {
                Status::Absent => snapshot.absent.push(boarder),
                Status::OnLeave => snapshot.on_leave.push(boarder),
                Status::Present => {}
            }
        }
        debug!(
            absent = snapshot.absent.len(),
            on_leave = snapshot.on_leave.len(),
            "snapshot classified"
        );
        snapshot
    }

    pub fn is_all_present(&self) -> bool {
        self.absent.is_empty() && self.on_leave.is_empty()
    }

    /// Message principal pour les BMs.
    pub fn compose(&self) -> String {
        crate::notification::compose(&self.absent, &self.on_leave)
    }
}

/// Sélectionne, parmi la photo, les internes encore non résolus (par lit).
///
/// L'ordre suit celui de la photo, pas celui de `beds`. Un lit présent ou
/// inconnu est ignoré.
pub fn select_unresolved<'a, S: AsRef<str>>(
    snapshot: &Snapshot<'a>,
    beds: &[S],
) -> (Vec<Checkable<'a>>, Vec<Checkable<'a>>) {
    let wanted = |bed: &str| beds.iter().any(|w| w.as_ref().trim() == bed);
    let still_absent = snapshot
        .absent
        .iter()
        .copied()
        .filter(|b| wanted(&b.bed))
        .map(Checkable::from)
        .collect();
    let still_on_leave = snapshot
        .on_leave
        .iter()
        .copied()
        .filter(|b| wanted(&b.bed))
        .map(Checkable::from)
        .collect();
    (still_absent, still_on_leave)
}

/// Liste complète des internes, persistée par le CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Roster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_on: Option<NaiveDate>,
    pub boarders: Vec<Boarder>,
}

impl Roster {
    pub fn find_by_bed<'a>(&'a self, bed: &str) -> Option<&'a Boarder> {
        self.boarders.iter().find(|b| b.bed == bed)
    }
    pub fn find_by_bed_mut(&mut self, bed: &str) -> Option<&mut Boarder> {
        self.boarders.iter_mut().find(|b| b.bed == bed)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::from_boarders(&self.boarders)
    }

    /// Change le statut d'un lit. Un congé sans données est refusé, tout comme
    /// des données de congé fournies pour un autre statut.
    pub fn mark(
        &mut self,
        bed: &str,
        status: Status,
        leave: Option<Leave>,
    ) -> Result<(), RecordError> {
        let boarder = self
            .find_by_bed_mut(bed)
            .ok_or_else(|| RecordError::UnknownBed(bed.to_string()))?;
        match status {
            Status::OnLeave => {
                let leave = leave
                    .filter(|l| !l.return_time.trim().is_empty())
                    .ok_or_else(|| RecordError::MissingLeave(bed.to_string()))?;
                boarder.leave = Some(leave);
            }
            Status::Present | Status::Absent => {
                if leave.is_some() {
                    return Err(RecordError::UnexpectedLeave(bed.to_string()));
                }
                boarder.leave = None;
            }
        }
        boarder.status = status;
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("boarder in bed {0} is on leave but has no return time")]
    MissingLeave(String),
    #[error("leave data given for bed {0}, which is not on leave")]
    UnexpectedLeave(String),
    #[error("bed {0} appears more than once")]
    DuplicateBed(String),
    #[error("unknown bed: {0}")]
    UnknownBed(String),
}
