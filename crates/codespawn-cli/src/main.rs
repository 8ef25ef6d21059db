//! CLI binary for generating projects and opening them in Codespaces.

use std::time::Duration;

use clap::{Parser, Subcommand};

use codespawn_client::{FormController, HttpBackend};
use codespawn_types::{BackendConfig, Field, FormState};

#[derive(Parser)]
#[command(name = "codespawn", version, about = "Generate projects and open them in GitHub Codespaces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides CODESPAWN_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Request timeout in seconds (overrides CODESPAWN_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Generate a new project from a prompt
    Generate {
        /// Project name
        #[arg(short, long)]
        name: String,

        /// Natural-language description of the project
        #[arg(short, long, default_value = "")]
        prompt: String,
    },

    /// Open an already generated project in Codespaces
    Open {
        /// Project name
        #[arg(short, long)]
        name: String,
    },

    /// Open an existing GitHub repository in Codespaces
    OpenRepo {
        /// Repository URL, e.g. https://github.com/owner/repo
        repo_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let backend = HttpBackend::new(config)?;
    let mut form = FormController::new(backend);

    let result = match cli.command {
        Commands::Generate { name, prompt } => {
            form.set_field(Field::ProjectName, name);
            form.set_field(Field::Prompt, prompt);
            form.generate_project().await
        }
        Commands::Open { name } => {
            form.set_field(Field::ProjectName, name);
            form.open_in_codespaces().await
        }
        Commands::OpenRepo { repo_url } => {
            form.set_field(Field::RepoUrl, repo_url);
            form.open_existing_repo().await
        }
    };

    let output = render(form.state());
    if !output.is_empty() {
        println!("{output}");
    }

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

/// Environment first, then command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<BackendConfig> {
    let mut config = BackendConfig::from_env()?;
    if let Some(ref url) = cli.backend_url {
        config = BackendConfig::new(url.as_str()).with_timeout(config.timeout);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Terminal rendering of the form's output area: the status line, then the
/// link, each only when set.
fn render(state: &FormState) -> String {
    let mut lines = Vec::new();
    if let Some(message) = state.visible_message() {
        lines.push(message.to_string());
    }
    if let Some(url) = state.visible_link() {
        lines.push(format!("Open in GitHub Codespaces: {url}"));
    }
    lines.join("\n")
}
