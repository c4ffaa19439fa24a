use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use budget_ledger::{
    cli::{output, render, text},
    config::{Config, ConfigManager},
    core::{paths, store::parse_date, LedgerStore},
    errors::LedgerError,
    ledger::TransactionKind,
};

#[derive(Parser)]
#[command(name = "budget_ledger_cli", version, about = "Personal budget ledger")]
struct Cli {
    /// Ledger snapshot to operate on (defaults to the configured location).
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a transaction.
    Add {
        /// Amount, a positive number.
        amount: String,
        #[arg(long, default_value = "Other")]
        category: String,
        #[arg(long, value_enum, default_value = "expense")]
        kind: KindArg,
        /// Transaction date as YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List transactions in insertion order.
    List,
    /// Show balance, totals, and the per-category expense breakdown.
    Summary,
    /// Remove transactions by row index (repeatable; unknown indices are
    /// ignored).
    Remove { indices: Vec<usize> },
    /// Delete every transaction.
    Clear,
    /// Write the ledger to a chosen path without touching the default
    /// snapshot.
    Export { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

fn main() -> ExitCode {
    budget_ledger::init();
    let cli = Cli::parse();

    let config = match ConfigManager::new().load() {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("configuration unreadable, using defaults: {err}"));
            Config::default()
        }
    };
    let labels = text::labels(&config.locale);

    let snapshot = cli
        .file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(paths::snapshot_file);
    let mut store = match LedgerStore::open(&snapshot) {
        Ok(store) => store,
        Err(err @ LedgerError::CorruptData(_)) => {
            // Corrupt snapshots are surfaced but never fatal; the session
            // continues on an empty ledger.
            output::warning(err);
            LedgerStore::empty(&snapshot)
        }
        Err(err) => {
            output::error(err);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &mut store, labels) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    store: &mut LedgerStore,
    labels: &text::Labels,
) -> Result<(), LedgerError> {
    match command {
        Command::Add {
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };
            let (index, stored) = store.add(&amount, &category, kind.into(), date, &description)?;
            output::success(format!(
                "{} #{}: {} ({}, {})",
                labels.status_added, index, stored.amount, stored.category, stored.created_at
            ));
        }
        Command::List => {
            output::section(labels.title);
            output::info(render::transaction_table(store.transactions(), labels));
        }
        Command::Summary => {
            output::section(labels.overview_title);
            output::info(render::summary(&store.aggregates(), labels));
        }
        Command::Remove { indices } => {
            let removed = store.remove_at(&indices)?;
            output::success(format!("removed {removed} transaction(s)"));
        }
        Command::Clear => {
            store.clear()?;
            output::success(labels.status_cleared);
        }
        Command::Export { path } => {
            store.export(&path)?;
            output::success(format!("ledger exported to {}", path.display()));
        }
    }
    Ok(())
}
