use case_sanitiser::prelude::*;
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Reconciles a case form's dynamic lists against an event trigger
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the event trigger JSON file
    trigger_path: String,
    /// Path to the form data JSON file
    form_path: String,

    /// Optional legacy clone of the form; defaults to a copy of the form
    #[arg(short, long)]
    legacy: Option<String>,

    /// Write the sanitised form here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Wrap the result into a case event submission body
    #[arg(long)]
    submission: bool,

    /// Fail when any field could not be reconciled
    #[arg(long)]
    strict: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("case_sanitiser={},info", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let total_start = Instant::now();

    let mut trigger = CaseEventTrigger::from_file(&cli.trigger_path)?;
    trigger.initialise();
    let form = read_json(&cli.form_path)?;
    let legacy = match &cli.legacy {
        Some(path) => read_json(path)?,
        None => form.clone(),
    };
    info!(
        trigger = %trigger.id,
        fields = trigger.case_fields.len(),
        "Loaded event trigger"
    );

    let sanitiser = Sanitiser::builder().strict(cli.strict).build();
    let pass_start = Instant::now();
    let sanitised = sanitiser.sanitise_lists(&trigger.case_fields, form, legacy)?;
    let pass_duration = pass_start.elapsed();

    let remaining = sanitised.remaining_legacy_keys();
    for issue in &sanitised.issues {
        eprintln!("  -> Skipped: {}", issue);
    }

    let rendered = if cli.submission {
        serde_json::to_string_pretty(&trigger.event_data(sanitised.form))?
    } else {
        serde_json::to_string_pretty(&sanitised.form)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .map_err(|e| format!("Could not write output file '{}': {}", path, e))?;
            info!(path = %path, "Wrote sanitised form");
        }
        None => println!("{}", rendered),
    }

    eprintln!("\n--- Sanitisation Summary ---");
    eprintln!("Issues:               {}", sanitised.issues.len());
    eprintln!("Legacy keys left:     {}", remaining.len());
    for key in &remaining {
        eprintln!("  - {}", key);
    }
    eprintln!("Pass:                 {:?}", pass_duration);
    eprintln!("Total Execution:      {:?}", total_start.elapsed());

    Ok(())
}

fn read_json(path: &str) -> Result<Value> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse JSON in '{}': {}", path, e))?;
    Ok(value)
}
