use clap::{Parser, Subcommand};
use fieldsmith::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Form builder core CLI over a directory-backed store
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory of the key-value store
    #[arg(short, long, default_value = "fieldsmith-store")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a builder session, optionally load a template, and publish a share id
    Init {
        /// Template name to load before publishing (e.g. "Contact Us")
        #[arg(short, long)]
        template: Option<String>,
    },
    /// List stored template names
    Templates,
    /// Print a published form
    Show { form_id: Uuid },
    /// Fill a published form from a label-keyed answers JSON file and submit
    Fill {
        form_id: Uuid,
        answers_path: PathBuf,
    },
    /// Print submitted responses for a form
    Responses { form_id: Uuid },
    /// Delete all responses for a form
    Clear { form_id: Uuid },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = DirStore::open(&cli.store)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open store: {}", e)));

    match cli.command {
        Command::Init { template } => init(store, template),
        Command::Templates => templates(store),
        Command::Show { form_id } => show(store, form_id),
        Command::Fill {
            form_id,
            answers_path,
        } => fill(store, form_id, &answers_path),
        Command::Responses { form_id } => responses(store, form_id),
        Command::Clear { form_id } => clear(store, form_id),
    }
}

fn init(store: DirStore, template: Option<String>) {
    let mut session = BuilderSession::open(store)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open builder session: {}", e)));

    if let Some(name) = template {
        let loaded = session
            .load_template(&name)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load template: {}", e)));
        if !loaded {
            exit_with_error(&format!("No template named '{}'", name));
        }
        println!("Loaded template '{}'", name);
    }

    let form_id = session
        .publish()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to publish form: {}", e)));
    println!(
        "Published '{}' ({} fields)",
        session.document().title,
        session.document().fields.len()
    );
    println!("Share id: {}", form_id);
}

fn templates(store: DirStore) {
    let repository = FormRepository::new(store);
    repository
        .seed_default_templates()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to seed templates: {}", e)));
    let names = repository
        .template_names()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to list templates: {}", e)));
    for name in names {
        println!("{}", name);
    }
}

fn show(store: DirStore, form_id: Uuid) {
    let repository = FormRepository::new(store);
    let document = load_published(&repository, form_id);
    println!("{} (id {})", document.title, document.id);
    println!("{} step(s), {} field(s)", document.steps, document.fields.len());
    for field in &document.fields {
        let required = if field.required { " [required]" } else { "" };
        println!(
            "  step {}: {} ({}){}",
            field.step,
            field.label,
            field.field_type(),
            required
        );
    }
}

fn fill(store: DirStore, form_id: Uuid, answers_path: &PathBuf) {
    let repository = FormRepository::new(store);
    let mut filler = FillerSession::open(&repository, form_id)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open form: {}", e)));

    let raw = fs::read_to_string(answers_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read answers file: {}", e)));
    let answers: HashMap<String, Value> = serde_json::from_str(&raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse answers JSON: {}", e)));

    let fields: Vec<(Uuid, String)> = filler
        .document()
        .fields
        .iter()
        .map(|f| (f.id, f.label.clone()))
        .collect();
    for (field_id, label) in fields {
        match answers.get(&label) {
            Some(Value::String(text)) => filler.set_answer(field_id, text.as_str()),
            Some(Value::Bool(checked)) => filler.set_answer(field_id, *checked),
            Some(other) => eprintln!("Skipping '{}': unsupported value {}", label, other),
            None => {}
        }
    }

    match filler.submit(&repository, chrono::Utc::now()) {
        Ok(response) => {
            println!("Submitted at {}", response.submitted_at.to_rfc3339());
        }
        Err(FillError::ValidationFailed { violations }) => {
            println!("Submission rejected:");
            for (field_id, field_violations) in violations {
                let label = filler
                    .document()
                    .field(field_id)
                    .map(|f| f.label.clone())
                    .unwrap_or_else(|| "(unknown field)".to_string());
                for violation in field_violations {
                    println!("  -> [{}] {}", label, violation);
                }
            }
            std::process::exit(1);
        }
        Err(e) => exit_with_error(&format!("Submission failed: {}", e)),
    }
}

fn responses(store: DirStore, form_id: Uuid) {
    let repository = FormRepository::new(store);
    let document = load_published(&repository, form_id);
    let responses = repository
        .responses(form_id)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load responses: {}", e)));

    if responses.is_empty() {
        println!("No responses yet");
        return;
    }
    for response in &responses {
        let report = ResponseReport::build(&document, response);
        println!("Submitted at: {}", report.submitted_at.to_rfc3339());
        for entry in &report.entries {
            match &entry.label {
                Some(label) => println!("  {}: {}", label, entry.value),
                None => println!("  (removed field): {}", entry.value),
            }
        }
    }
}

fn clear(store: DirStore, form_id: Uuid) {
    let repository = FormRepository::new(store);
    repository
        .clear_responses(form_id)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to clear responses: {}", e)));
    println!("Cleared responses for {}", form_id);
}

fn load_published(repository: &FormRepository<DirStore>, form_id: Uuid) -> FormDocument {
    match repository.load_published(form_id) {
        Ok(Some(document)) => document,
        Ok(None) => exit_with_error(&format!("Form '{}' not found", form_id)),
        Err(e) => exit_with_error(&format!("Failed to load form: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
