use crate::model::Roster;
use anyhow::Context;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Support de persistance du roster (jamais des messages).
pub trait Storage {
    fn load(&self) -> anyhow::Result<Roster>;
    /// Écrit le roster en remplaçant l'ancien d'un seul coup.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
    fn exists(&self) -> bool;

    /// Roster vide tant que rien n'a été importé.
    fn load_or_default(&self) -> anyhow::Result<Roster> {
        if self.exists() {
            self.load()
        } else {
            Ok(Roster::default())
        }
    }
}

/// Roster sérialisé en JSON dans un seul fichier.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            anyhow::bail!("roster path {} is a directory", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Répertoire du fichier temporaire : celui du roster, ou `.` pour un nom nu.
    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let file = fs::File::open(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let roster: Roster = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parsing {}", self.path.display()))?;
        debug!(path = %self.path.display(), boarders = roster.boarders.len(), "roster loaded");
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let tmp = NamedTempFile::new_in(self.staging_dir())
            .with_context(|| format!("creating temp file next to {}", self.path.display()))?;
        let mut writer = BufWriter::new(tmp);
        serde_json::to_writer_pretty(&mut writer, roster)?;
        writer.flush()?;
        let tmp = writer.into_inner().context("flushing roster")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        debug!(path = %self.path.display(), boarders = roster.boarders.len(), "roster saved");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
