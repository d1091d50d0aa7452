use base64::Engine;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tagfile::config::Config;
use tagfile::core::TagFileResult;
use tagfile::github::GitHubClient;
use tagfile::FileTagsService;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagfile")]
#[command(about = "Fetch a file's contents at every tag of a GitHub repository")]
#[command(version)]
struct Cli {
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// File path to resolve at each tag
    path: String,
    /// Personal access token (overrides config file and GITHUB_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long)]
    api_url: Option<String>,
    /// Config file location
    #[arg(short, long, default_value = "tagfile.yaml")]
    config: PathBuf,
}

async fn run(cli: Cli) -> TagFileResult<()> {
    let config = Config::load(&cli.config)?;
    let api_url = cli.api_url.unwrap_or_else(|| config.api_url.clone());
    let token = cli.token.or_else(|| config.resolve_token());

    let client = GitHubClient::new(&api_url, token.as_deref())?;
    let service = FileTagsService::new(Arc::new(client));

    let data = service.get_data(&cli.owner, &cli.repo, &cli.path).await?;

    // UTF-8 content prints as a string, binary content as base64, a missing
    // file as null
    let output: serde_json::Map<String, serde_json::Value> = data
        .into_iter()
        .map(|(tag, content)| {
            let value = match content {
                None => serde_json::Value::Null,
                Some(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => serde_json::Value::String(text),
                    Err(e) => serde_json::Value::String(
                        base64::engine::general_purpose::STANDARD.encode(e.into_bytes()),
                    ),
                },
            };
            (tag, value)
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
