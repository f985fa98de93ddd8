use clap::{Parser, Subcommand};
use curio_lib::{Domain, Envelope};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "curio")]
#[command(about = "Identify an artwork, dish or building and find similar ones", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding .env.local / .env
    #[arg(long, default_value = ".", global = true)]
    env_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the subject of an image
    Analyze {
        /// artwork, food or architecture (aliases: art, building)
        #[arg(short, long)]
        domain: Domain,

        /// Image file to upload
        image: PathBuf,
    },

    /// Extract themes for a named subject
    Themes {
        #[arg(short, long)]
        domain: Domain,
        name: String,
    },

    /// Describe a named subject
    Details {
        #[arg(short, long)]
        domain: Domain,
        name: String,
    },

    /// Themes, then similar items (with map links for food and buildings)
    Suggestions {
        #[arg(short, long)]
        domain: Domain,
        name: String,

        /// City to search for restaurants in (defaults to CURIO_DEFAULT_LOCATION)
        #[arg(short, long)]
        location: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let curio = match curio_lib::run(&cli.env_dir) {
        Ok(curio) => curio,
        Err(e) => {
            eprintln!("[STARTUP] {}", e);
            return ExitCode::FAILURE;
        }
    };

    let envelope = match cli.command {
        Commands::Analyze { domain, image } => match std::fs::read(&image) {
            Ok(bytes) => curio.analyze_upload(domain, &bytes).await,
            Err(e) => Envelope::failure(
                curio_lib::commands::ANALYSIS_FAILED,
                serde_json::Value::Null,
                &e.into(),
            ),
        },
        Commands::Themes { domain, name } => curio.themes(domain, &name).await,
        Commands::Details { domain, name } => curio.details(domain, &name).await,
        Commands::Suggestions {
            domain,
            name,
            location,
        } => curio.suggestions(domain, &name, location.as_deref()).await,
    };

    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to render result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if envelope.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
