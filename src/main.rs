use fieldsmith::prelude::*;
use std::env;
use std::fs;

// Demo driver: load a form definition, answer it from a label-keyed JSON
// file, validate, and record the submission into a directory store.
fn main() {
    const STORE_DIR: &str = "tmp/fieldsmith-store";

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/form.json> [path/to/answers.json]");
        std::process::exit(1);
    }

    let form_path = &args[1];
    let answers_path = args.get(2);

    println!("Loading form from: {}", form_path);
    let form_json = match fs::read_to_string(form_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read form file '{}': {}", form_path, e);
            std::process::exit(1);
        }
    };
    let document = match FormDocument::from_json(&form_json) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to parse form JSON: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Loaded '{}' ({} fields, {} step(s))",
        document.title,
        document.fields.len(),
        document.steps
    );

    // Load answers, keyed by field label
    let answers: std::collections::HashMap<String, serde_json::Value> =
        if let Some(path) = answers_path {
            println!("Loading answers from: {}", path);
            match fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|content| {
                serde_json::from_str(&content).map_err(|e| e.to_string())
            }) {
                Ok(answers) => answers,
                Err(e) => {
                    eprintln!("Failed to load answers from '{}': {}", path, e);
                    std::process::exit(1);
                }
            }
        } else {
            println!("No answers file provided. Validating an empty submission.");
            std::collections::HashMap::new()
        };

    // Fill the form
    let mut filler = FillerSession::preview(document.clone());
    for field in &document.fields {
        let Some(value) = answers.get(&field.label) else {
            continue;
        };
        match value {
            serde_json::Value::String(text) => filler.set_answer(field.id, text.as_str()),
            serde_json::Value::Bool(checked) => filler.set_answer(field.id, *checked),
            other => {
                eprintln!(
                    "Skipping answer for '{}': unsupported value {}",
                    field.label, other
                );
            }
        }
    }

    // Validation phase
    println!("\nValidating submission...");
    let violations = filler.validate_all();
    if !violations.is_empty() {
        println!("Submission rejected:");
        for (field_id, field_violations) in &violations {
            let label = document
                .field(*field_id)
                .map(|f| f.label.as_str())
                .unwrap_or("(unknown field)");
            for violation in field_violations {
                println!("  -> [{}] {}", label, violation);
            }
        }
        std::process::exit(1);
    }
    println!("All fields valid.");

    // Record the response
    let store = match DirStore::open(STORE_DIR) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open store at '{}': {}", STORE_DIR, e);
            std::process::exit(1);
        }
    };
    let repository = FormRepository::new(store);
    let response = match filler.submit(&repository, chrono::Utc::now()) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Submission failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nSubmission recorded!");
    println!("  -> Form: {}", response.form_id);
    println!("  -> At:   {}", response.submitted_at.to_rfc3339());
    match repository.responses(response.form_id) {
        Ok(responses) => println!("  -> Total responses for this form: {}", responses.len()),
        Err(e) => eprintln!("Could not re-read response log: {}", e),
    }
    println!();
}
