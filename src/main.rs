use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use passbook::audit::AuditLogger;
use passbook::config::{OverdraftPolicy, PassbookPaths, Settings};
use passbook::error::PassbookError;
use passbook::models::{AccountKind, Money};

#[derive(Parser)]
#[command(
    name = "passbook",
    version,
    about = "Terminal bank account ledger",
    long_about = "Passbook opens a checking or savings account and lets you \
                  deposit, withdraw and review the balance and history from \
                  an interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Account holder name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Account kind (checking, savings)
    #[arg(short, long)]
    kind: Option<String>,

    /// Opening balance (e.g., "10000" or "250.75")
    #[arg(short, long, allow_hyphen_values = true)]
    initial: Option<String>,

    /// Refuse withdrawals larger than the balance
    #[arg(long)]
    no_overdraft: bool,

    /// Don't write the audit log for this session
    #[arg(long)]
    no_audit: bool,

    /// Directory holding config.json and audit.log
    #[arg(long, env = "PASSBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match &cli.data_dir {
        Some(dir) => PassbookPaths::with_base_dir(dir.clone()),
        None => PassbookPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    match &cli.command {
        Some(Commands::Config) => {
            println!("Passbook Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Account kind:    {}", settings.account_kind);
            println!(
                "  Opening amount:  {}",
                settings
                    .opening_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Date format:     {}", settings.date_format);
            println!("  Overdraft:       {}", settings.overdraft);
            println!(
                "  Audit log:       {}",
                if settings.audit_enabled { "enabled" } else { "disabled" }
            );
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote settings to: {}", paths.settings_file().display());
        }
        Some(Commands::Audit { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(*limit)?;

            if entries.is_empty() {
                println!("No audit entries found in {}", logger.path().display());
            } else {
                for entry in &entries {
                    println!("{}", entry.format_human_readable());
                }
            }
        }
        None => {
            apply_overrides(&mut settings, &cli)?;

            let audit = if settings.audit_enabled && !cli.no_audit {
                paths.ensure_directories()?;
                Some(AuditLogger::new(paths.audit_log()))
            } else {
                None
            };

            passbook::cli::run_session(
                io::stdin().lock(),
                io::stdout().lock(),
                &settings,
                cli.name.clone(),
                audit,
            )?;
        }
    }

    Ok(())
}

/// Apply command-line flags on top of the loaded settings for this run
fn apply_overrides(settings: &mut Settings, cli: &Cli) -> Result<(), PassbookError> {
    if let Some(kind) = &cli.kind {
        settings.account_kind = AccountKind::parse(kind).ok_or_else(|| {
            PassbookError::Validation(format!(
                "Invalid account kind: '{}'. Valid kinds: checking, savings",
                kind
            ))
        })?;
    }

    if let Some(initial) = &cli.initial {
        settings.opening_amount = Money::parse(initial).map_err(|e| {
            PassbookError::Validation(format!(
                "Invalid opening balance: '{}'. Use format like '1000.00' or '1000'. Error: {}",
                initial, e
            ))
        })?;
    }

    if cli.no_overdraft {
        settings.overdraft = OverdraftPolicy::Reject;
    }

    Ok(())
}
