use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use repo_metadata::commands::validators;
use repo_metadata::{commands::*, constants};
use repo_metadata_github::ClientConfig;

#[derive(Parser)]
#[command(name = "repo-metadata")]
#[command(about = "Fetch GitHub repository metadata, following repository renames")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Web host probed for repository redirects
    #[arg(long, global = true, default_value_t = constants::github::DEFAULT_WEB_BASE.to_string())]
    github_url: String,

    /// GraphQL API endpoint
    #[arg(long, global = true, default_value_t = constants::github::DEFAULT_GRAPHQL_URL.to_string())]
    graphql_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch repository metadata and print it as JSON
    Fetch {
        /// Repository paths in owner/name form
        #[arg(required = true)]
        repos: Vec<String>,

        /// GitHub token (defaults to the GITHUB_TOKEN environment variable)
        #[arg(long)]
        token: Option<String>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the current owner/name of possibly renamed repositories
    Resolve {
        /// Repository paths in owner/name form
        #[arg(required = true)]
        repos: Vec<String>,
    },

    /// Print the GraphQL query sent for a repository, without network access
    Query {
        /// Repository path in owner/name form
        repo: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    validators::validate_base_url("--github-url", &cli.github_url)?;
    validators::validate_base_url("--graphql-url", &cli.graphql_url)?;
    log::debug!(
        "Using web host {} and GraphQL endpoint {}",
        cli.github_url,
        cli.graphql_url
    );

    let client_config = |token: Option<String>| {
        ClientConfig::new(token)
            .with_web_base(cli.github_url.clone())
            .with_graphql_url(cli.graphql_url.clone())
    };

    match cli.command {
        Commands::Fetch {
            repos,
            token,
            compact,
        } => {
            validators::validate_token(&token)?;
            validators::validate_repository_paths(&repos)?;

            let context = CommandContext {
                client_config: client_config(token),
                repos,
            };
            FetchCommand { compact }.execute(&context).await?;
        }
        Commands::Resolve { repos } => {
            validators::validate_repository_paths(&repos)?;

            let context = CommandContext {
                client_config: client_config(None),
                repos,
            };
            ResolveCommand.execute(&context).await?;
        }
        Commands::Query { repo } => {
            let repos = vec![repo];
            validators::validate_repository_paths(&repos)?;

            let context = CommandContext {
                client_config: client_config(None),
                repos,
            };
            QueryCommand.execute(&context).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => constants::logging::DEFAULT_LEVEL,
        1 => constants::logging::VERBOSE_LEVEL,
        _ => constants::logging::DEBUG_LEVEL,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
