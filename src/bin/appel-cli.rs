#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use appel::{
    compose_follow_up, io,
    model::{select_unresolved, Leave, Roster, Status},
    status_lines,
    storage::{JsonStorage, Storage},
};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération du message d'appel pour les BMs
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de roster
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer les internes depuis un CSV (name,bed,status[,leave_kind][,return_time])
    Import {
        #[arg(long)]
        csv: String,
        /// Date de l'appel (YYYY-MM-DD), aujourd'hui par défaut
        #[arg(long)]
        date: Option<String>,
    },

    /// Changer le statut d'un lit
    Mark {
        #[arg(long)]
        bed: String,
        /// present | absent | leave
        #[arg(long)]
        status: String,
        #[arg(long, default_value = "")]
        leave_kind: String,
        #[arg(long)]
        return_time: Option<String>,
    },

    /// Lister les absents et les congés, un par ligne
    Status,

    /// Générer le message du jour
    Compose {
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: Option<String>,
    },

    /// Générer la relance pour les lits encore non résolus
    FollowUp {
        /// liste "lit1,lit2,..."
        #[arg(long, default_value = "")]
        beds: String,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;

    match cli.cmd {
        Commands::Import { csv, date } => {
            if !io::is_csv_path(&csv) {
                bail!("only .csv files are accepted: {csv}");
            }
            let taken_on = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                    .with_context(|| format!("invalid date: {d}"))?,
                None => Utc::now().date_naive(),
            };
            let boarders = io::import_boarders_csv(&csv)?;
            let count = boarders.len();
            let roster = Roster {
                taken_on: Some(taken_on),
                boarders,
            };
            storage.save(&roster)?;
            println!("Imported {count} boarder(s) for {taken_on}");
        }
        Commands::Mark {
            bed,
            status,
            leave_kind,
            return_time,
        } => {
            let mut roster = storage.load()?;
            let status: Status = status.parse()?;
            let leave = return_time.map(|rt| Leave::new(leave_kind, rt));
            roster.mark(&bed, status, leave)?;
            storage.save(&roster)?;
            println!("{bed} -> {status}");
        }
        Commands::Status => {
            let roster = storage.load_or_default()?;
            for line in status_lines(&roster.boarders) {
                println!("{line}");
            }
        }
        Commands::Compose { out } => {
            let roster = storage.load_or_default()?;
            let message = roster.snapshot().compose();
            emit(&message, out.as_deref())?;
        }
        Commands::FollowUp { beds, out } => {
            let roster = storage.load_or_default()?;
            let beds: Vec<&str> = beds
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            let snapshot = roster.snapshot();
            let (still_absent, still_on_leave) = select_unresolved(&snapshot, &beds);
            let message = compose_follow_up(&still_absent, &still_on_leave);
            // rien à relancer : fichier vidé, rien sur stdout
            match out.as_deref() {
                Some(path) => emit(&message, Some(path))?,
                None if message.is_empty() => {}
                None => emit(&message, None)?,
            }
        }
    }

    Ok(())
}

fn emit(message: &str, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, message).with_context(|| format!("writing {path}"))?;
        }
        None => {
            print!("{message}");
            if !message.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
