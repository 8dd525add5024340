use clap::{Parser, Subcommand};
use rensa::prelude::*;
use rensa::registry::FileStore;
use std::fs;

/// An agent pipeline graph engine CLI: validate, order, export and import
/// workflow files against a file-backed agent registry.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the persisted registry (custom agents + favorites)
    #[arg(short, long, default_value = "data/registry")]
    registry: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a workflow JSON file and print the report
    Validate {
        /// Path to the workflow JSON file
        workflow_path: String,
    },
    /// Print the deterministic execution order of a workflow JSON file
    Order {
        /// Path to the workflow JSON file
        workflow_path: String,
    },
    /// Export a workflow JSON file as a portable pipeline document
    Export {
        /// Path to the workflow JSON file
        workflow_path: String,
        /// Where to write the document; stdout when omitted
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Import a pipeline document and print the reconstructed workflow
    Import {
        /// Path to the pipeline document JSON file
        document_path: String,
        /// Where to write the workflow; stdout when omitted
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut registry = DefinitionRegistry::open(FileStore::new(&cli.registry))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open registry: {}", e)));

    match cli.command {
        Command::Validate { workflow_path } => {
            let workflow = load_workflow(&workflow_path);
            let report = validate(&workflow, &registry);
            print_report(&report);
            if !report.valid {
                std::process::exit(2);
            }
        }
        Command::Order { workflow_path } => {
            let workflow = load_workflow(&workflow_path);
            for (position, id) in execution_order(&workflow).iter().enumerate() {
                let agent = workflow
                    .invocation(id)
                    .map(|inv| inv.agent_type.as_str())
                    .unwrap_or("?");
                println!("{:>3}. {} ({})", position + 1, id, agent);
            }
        }
        Command::Export { workflow_path, out } => {
            let workflow = load_workflow(&workflow_path);
            let doc = to_document(&workflow, &registry);
            let json = doc
                .to_json_pretty()
                .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
            write_output(out.as_deref(), &json);
        }
        Command::Import { document_path, out } => {
            let text = fs::read_to_string(&document_path).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to read document file '{}': {}",
                    document_path, e
                ))
            });
            let doc = PipelineDocument::from_json(&text)
                .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));
            let outcome = from_document(&doc, &mut registry)
                .unwrap_or_else(|e| exit_with_error(&format!("Import failed: {}", e)));

            for warning in &outcome.warnings {
                eprintln!("Warning: {}", warning.message);
            }
            let json = serde_json::to_string_pretty(&outcome.workflow)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize: {}", e)));
            write_output(out.as_deref(), &json);
        }
    }
}

fn load_workflow(path: &str) -> Workflow {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read workflow file '{}': {}", path, e))
    });
    serde_json::from_str(&text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)))
}

fn print_report(report: &ValidationReport) {
    for finding in &report.errors {
        println!("error: {}", finding.message);
    }
    for finding in &report.warnings {
        println!("warning: {}", finding.message);
    }
    for finding in &report.info {
        println!("info: {}", finding.message);
        if let Some(details) = &finding.details {
            println!("      {}", details);
        }
    }
    println!();
    println!(
        "Workflow is {}",
        if report.valid { "valid" } else { "invalid" }
    );
}

fn write_output(out: Option<&str>, content: &str) {
    match out {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output file '{}': {}", path, e))
            });
            println!("Wrote {}", path);
        }
        None => println!("{}", content),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
