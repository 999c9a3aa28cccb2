use anyhow::Context;
use clap::{Parser, Subcommand};
use landmark_locator::utils::error::ErrorSeverity;
use landmark_locator::utils::logger;
use landmark_locator::{CsvStore, Landmark, LocatorError, LocatorService, Resolution, TimeoutStore};
use serde::Serialize;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "landmark-resolve")]
#[command(about = "Resolve a scanned building code against a landmark CSV file")]
struct Args {
    /// CSV file holding the landmark catalog
    #[arg(short, long, default_value = "data/landmarks.csv")]
    data: String,

    /// Upper bound for each store query, in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one scanned code to a model asset
    Resolve { code: String },
    /// Print the catalog, optionally filtered by name
    List {
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let store = TimeoutStore::new(CsvStore::new(&args.data), Duration::from_millis(args.timeout_ms));
    let service = LocatorService::new(store);

    let outcome = match &args.command {
        Command::Resolve { code } => service.resolve(Some(code.as_str())).await.map(|resolution| {
            if let Resolution::NoMatch = resolution {
                tracing::info!("No landmark matches '{}'", code);
            }
            Output::Resolution(resolution)
        }),
        Command::List { search } => {
            let landmarks = match search {
                Some(term) => service.search_landmarks(term).await,
                None => service.list_landmarks().await,
            };
            landmarks.map(Output::Landmarks)
        }
    };

    match outcome {
        Ok(output) => {
            println!("{}", render(&output)?);
            Ok(())
        }
        Err(e) => {
            report(&e);
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 2,
                ErrorSeverity::Medium => 3,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 4,
            };
            std::process::exit(exit_code);
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Resolution(Resolution),
    Landmarks(Vec<Landmark>),
}

fn render<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

fn report(e: &LocatorError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[test]
    fn test_render_resolution_as_json() {
        let output = Output::Resolution(Resolution::ExactMatch {
            building_code: "TM-CAT-10001".to_string(),
            glb_file: "models/metropolitan_cathedral.glb".to_string(),
        });
        let json = render(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matched_by"], "exact_match");
        assert_eq!(value["glb_file"], "models/metropolitan_cathedral.glb");
    }

    #[test]
    fn test_render_failure_is_an_error_not_empty_output() {
        let err = render(&Unserializable).unwrap_err();
        assert!(err.to_string().contains("Failed to serialize output"));
    }
}
