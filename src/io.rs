use crate::model::{Boarder, Leave, RecordError, Status};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Vrai si le fichier porte l'extension `csv` (insensible à la casse).
pub fn is_csv_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Colonnes obligatoires ; `leave_kind` et `return_time` sont facultatives.
const REQUIRED_COLUMNS: [&str; 3] = ["name", "bed", "status"];

/// Ligne brute du CSV, colonnes lues par nom.
#[derive(Debug, Deserialize)]
struct BoarderRow {
    name: String,
    bed: String,
    status: String,
    #[serde(default)]
    leave_kind: String,
    #[serde(default)]
    return_time: String,
}

/// Import d'internes depuis CSV: header `name,bed,status[,leave_kind][,return_time]`,
/// dans n'importe quel ordre.
pub fn import_boarders_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Boarder>> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_boarders_csv(file)
}

/// Variante sur un flux quelconque (upload en mémoire, stdin).
pub fn read_boarders_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<Boarder>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(column)) {
            bail!("missing column `{column}` in CSV header");
        }
    }
    let lowered: StringRecord = headers.iter().map(str::to_ascii_lowercase).collect();
    rdr.set_headers(lowered);

    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for (idx, row) in rdr.deserialize::<BoarderRow>().enumerate() {
        let line = idx + 2;
        let row = row.with_context(|| format!("row {line}"))?;
        out.push(build_boarder(row, line, &mut seen)?);
    }
    debug!(count = out.len(), "boarders imported");
    Ok(out)
}

fn build_boarder(
    row: BoarderRow,
    line: usize,
    seen: &mut HashSet<String>,
) -> anyhow::Result<Boarder> {
    if row.name.is_empty() || row.bed.is_empty() {
        bail!("invalid boarder row {line} (empty name or bed)");
    }
    let status: Status = row
        .status
        .parse()
        .with_context(|| format!("row {line}, bed {}", row.bed))?;
    if !seen.insert(row.bed.clone()) {
        return Err(RecordError::DuplicateBed(row.bed).into());
    }

    Ok(match status {
        Status::OnLeave => {
            if row.return_time.is_empty() {
                return Err(RecordError::MissingLeave(row.bed).into());
            }
            Boarder::on_leave(row.name, row.bed, Leave::new(row.leave_kind, row.return_time))
        }
        Status::Absent => Boarder::absent(row.name, row.bed),
        Status::Present => Boarder::new(row.name, row.bed),
    })
}
