//! Command-line client for the bank-details form.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args + config file
//!        │
//!        ▼
//!   ┌──────────┐   on_field_change    ┌─────────────────┐   HTTP   ┌─────────────────┐
//!   │   main   │ ───────────────────▶ │ BankDetailsForm │ ───────▶ │ profile service │
//!   │          │   validate_ifsc      │                 │ ◀─────── │  (users API)    │
//!   │          │   submit             └────────┬────────┘          └─────────────────┘
//!   └──────────┘                               │
//!        ▲              notifications          │
//!        └─────────────────────────────────────┘
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use bank_details::config::validation::validate_config;
use bank_details::config::{load_config, AppConfig, ConfigError};
use bank_details::form::{
    BankDetailsForm, ChangeOutcome, Field, LookupOutcome, SubmitOutcome,
};
use bank_details::notify::ConsoleNotifier;
use bank_details::observability::{logging, metrics};
use bank_details::{FormContext, HttpUserService, UserService};

#[derive(Parser)]
#[command(name = "bank-details")]
#[command(about = "Manage the bank account details of a user profile", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the profile service base URL.
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Override the bearer token.
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored bank details
    Show,
    /// Look up the bank and branch of an IFSC code
    Lookup {
        /// IFSC code, e.g. HDFC0001234
        code: String,
    },
    /// Enter new bank details, validate the IFSC code and save
    Update {
        /// Account holder name
        #[arg(long)]
        holder: String,
        /// Account number
        #[arg(long)]
        account: String,
        /// IFSC code
        #[arg(long)]
        ifsc: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);
    metrics::set_enabled(config.observability.metrics_enabled);

    tracing::debug!(
        base_url = %config.service.base_url,
        request_timeout_secs = config.service.request_timeout_secs,
        "Configuration loaded"
    );

    match run(cli.command, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// File (or defaults) with command-line overrides applied, then validated.
fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.service.bearer_token = Some(token.clone());
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

async fn run(command: Commands, config: AppConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let service: Arc<dyn UserService> = Arc::new(HttpUserService::new(&config.service)?);
    let notifier = Arc::new(ConsoleNotifier::stdio());

    match command {
        Commands::Show => {
            let profile = service.get_profile().await?;
            let form = BankDetailsForm::new(FormContext::with_user(profile), service, notifier)
                .with_config(config.form);
            print!("{}", form.view());
            Ok(true)
        }
        Commands::Lookup { code } => {
            let form = BankDetailsForm::new(FormContext::default(), service, notifier)
                .with_config(config.form);
            form.on_field_change(Field::IfscCode, &code);
            let outcome = form.validate_ifsc().await;
            Ok(report_lookup(&form, outcome))
        }
        Commands::Update {
            holder,
            account,
            ifsc,
        } => {
            let profile = service.get_profile().await?;
            let form = BankDetailsForm::new(FormContext::with_user(profile), service, notifier)
                .with_config(config.form);

            if !form.is_editing() && !form.begin_edit() {
                eprintln!("Bank details are verified and can no longer be edited.");
                return Ok(false);
            }

            for (field, value) in [
                (Field::AccountHolderName, holder.as_str()),
                (Field::AccountNumber, account.as_str()),
                (Field::IfscCode, ifsc.as_str()),
            ] {
                if let ChangeOutcome::Ignored(reason) = form.on_field_change(field, value) {
                    eprintln!("Cannot change {}: {:?}", field.label(), reason);
                    return Ok(false);
                }
            }

            let lookup = form.validate_ifsc().await;
            if !report_lookup(&form, lookup) {
                return Ok(false);
            }

            let saved = match form.submit().await? {
                SubmitOutcome::Saved(_) => true,
                SubmitOutcome::Invalid(errors) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{}: {}", field.label(), message);
                    }
                    false
                }
                SubmitOutcome::Failed(_) => false,
                SubmitOutcome::Ignored(reason) => {
                    eprintln!("Submission skipped: {:?}", reason);
                    false
                }
            };
            print!("{}", form.view());
            Ok(saved)
        }
    }
}

/// Print what a lookup produced. Notifications already covered remote outcomes.
fn report_lookup(form: &BankDetailsForm, outcome: LookupOutcome) -> bool {
    match outcome {
        LookupOutcome::Validated(_) => true,
        LookupOutcome::InvalidFormat => {
            if let Some(message) = form.errors().get(Field::IfscCode) {
                eprintln!("{}: {}", Field::IfscCode.label(), message);
            }
            false
        }
        LookupOutcome::Failed(_) => false,
        LookupOutcome::Stale => {
            eprintln!("IFSC code changed during lookup; validate again.");
            false
        }
        LookupOutcome::Ignored(reason) => {
            eprintln!("Lookup skipped: {:?}", reason);
            false
        }
    }
}
