//! Civic CLI: headless access to the anonymous report wizard.
//!
//! Commands:
//! - `categories`: list the report categories (label and stored slug)
//! - `config init`: write a default config file
//! - `submit`: walk the wizard non-interactively and print the receipt as JSON

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use civic_core::{load_attachments, Field, Receipt, ReportWizard, Step, WizardConfig};

#[derive(Parser)]
#[command(
    name = "civic",
    version,
    about = "Civic CLI: anonymous corruption reporting from the command line"
)]
struct Cli {
    /// Config file. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List report categories.
    Categories {
        /// Print a JSON array instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Config file management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Fill in and submit a report in one go.
    Submit {
        /// Category label or slug (e.g. "Abuse of Power").
        #[arg(long)]
        category: String,

        /// What happened.
        #[arg(long)]
        description: String,

        /// Latitude of the incident. Defaults to the configured location.
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude of the incident.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Evidence files to attach.
        #[arg(long = "attach", value_name = "PATH")]
        attachments: Vec<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config as TOML.
    Init {
        /// Destination file.
        #[arg(long, default_value = "civic-report.toml")]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

/// Inputs for a headless submission.
struct SubmitArgs {
    category: String,
    description: String,
    location: Option<(f64, f64)>,
    attachments: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = match &cli.config {
        Some(path) => WizardConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => WizardConfig::default(),
    };

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Categories { json } => run_categories(&config, json, &mut out),
        Commands::Config { action } => match action {
            ConfigAction::Init { path, force } => run_config_init(&path, force, &mut out),
        },
        Commands::Submit {
            category,
            description,
            lat,
            lng,
            attachments,
        } => {
            let args = SubmitArgs {
                category,
                description,
                location: lat.zip(lng),
                attachments,
            };
            let receipt = run_submit(&config, args)?;
            writeln!(out, "{}", receipt.to_json()?)?;
            Ok(())
        }
    }
}

/// Compact events on stderr so stdout stays clean for JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn run_categories(config: &WizardConfig, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let entries: Vec<serde_json::Value> = config
            .categories
            .entries()
            .map(|(label, slug)| serde_json::json!({ "label": label, "slug": slug }))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    writeln!(out, "{:<24} {}", "Category", "Slug")?;
    writeln!(out, "{}", "-".repeat(48))?;
    for (label, slug) in config.categories.entries() {
        writeln!(out, "{label:<24} {slug}")?;
    }
    Ok(())
}

fn run_config_init(path: &Path, force: bool, out: &mut impl Write) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let toml = WizardConfig::default().to_toml()?;
    std::fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "default config written");
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

/// Drive the wizard through all four steps the way the form would.
fn run_submit(config: &WizardConfig, args: SubmitArgs) -> Result<Receipt> {
    let mut wizard = ReportWizard::new(config);

    // Step 1
    let category = match wizard.catalog().resolve(&args.category) {
        Some(slug) => slug,
        None => {
            let known: Vec<&str> = wizard.catalog().labels().iter().map(String::as_str).collect();
            bail!(
                "unknown category '{}'. Valid: {}",
                args.category,
                known.join(", ")
            );
        }
    };
    wizard.set_field(Field::Category, category);
    wizard.set_field(Field::Description, args.description);
    wizard.advance()?;

    // Step 2
    if let Some((lat, lng)) = args.location {
        if !(lat.is_finite() && lng.is_finite()) {
            bail!("coordinates must be finite");
        }
        wizard.select_location(lat, lng);
    }
    wizard.advance()?;

    // Step 3
    if !args.attachments.is_empty() {
        let files = load_attachments(&args.attachments, config.max_attachment_bytes)?;
        wizard.add_attachments(files);
    }
    wizard.advance()?;

    debug_assert_eq!(wizard.current_step(), Step::Review);
    let receipt = wizard.submit(Instant::now())?;
    // The process exits before any reset could matter.
    wizard.cancel_pending_reset();
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::WizardError;

    fn args(category: &str, description: &str) -> SubmitArgs {
        SubmitArgs {
            category: category.into(),
            description: description.into(),
            location: None,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn categories_table_lists_slugs() {
        let mut out = Vec::new();
        run_categories(&WizardConfig::default(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Abuse of Power"));
        assert!(text.contains("abuse of power"));
    }

    #[test]
    fn categories_json_is_parseable() {
        let mut out = Vec::new();
        run_categories(&WizardConfig::default(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 7);
        assert_eq!(value[0]["slug"], "bribery");
    }

    #[test]
    fn config_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut out = Vec::new();

        run_config_init(&path, false, &mut out).unwrap();
        let loaded = WizardConfig::from_file(&path).unwrap();
        assert_eq!(loaded, WizardConfig::default());

        assert!(run_config_init(&path, false, &mut out).is_err());
        run_config_init(&path, true, &mut out).unwrap();
    }

    #[test]
    fn submit_resolves_label_and_location() {
        let mut a = args("Abuse of Power", "permit withheld until paid");
        a.location = Some((28.2096, 83.9856));
        let receipt = run_submit(&WizardConfig::default(), a).unwrap();
        assert_eq!(receipt.category, "abuse of power");
        assert_eq!(receipt.location.lat, 28.2096);
        assert_eq!(receipt.attachment_count, 0);
        assert_eq!(receipt.reference.len(), 12);
    }

    #[test]
    fn submit_attaches_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let mut a = args("bribery", "inflated invoice");
        a.attachments = vec![path];
        let receipt = run_submit(&WizardConfig::default(), a).unwrap();
        assert_eq!(receipt.attachment_count, 1);
        assert_eq!(receipt.attachment_bytes, 8);
    }

    #[test]
    fn submit_rejects_unknown_category() {
        let err = run_submit(&WizardConfig::default(), args("theft", "x")).unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn submit_requires_description() {
        let err = run_submit(&WizardConfig::default(), args("bribery", "")).unwrap_err();
        let wizard_err = err.downcast_ref::<WizardError>().unwrap();
        assert!(matches!(wizard_err, WizardError::IncompleteStep { .. }));
    }
}
