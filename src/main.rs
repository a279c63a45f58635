use anyhow::Result;
use clap::Parser;
use ghdash::commands::{self, ExportOptions, config::Config};
use ghdash::dashboard::View;
use std::path::PathBuf;

/// ghdash - organization repository dashboard
///
/// Fetches an organization's repositories and recent activity from the
/// GitHub REST API and renders them as cards.
///
/// Requests are unauthenticated; the organization comes from --org or
/// GHDASH_ORG, falling back to the built-in default.
///
/// Examples:
///   ghdash repos --search iso      # Cards for repositories matching "iso"
///   ghdash export -o index.html    # Standalone HTML dashboard
#[derive(Parser, Debug)]
#[command(author, version = env!("GHDASH_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Organization to show
    #[arg(long = "org", env = "GHDASH_ORG", value_name = "ORG", global = true)]
    pub org: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show repository cards
    Repos(ReposArgs),

    /// Show recent activity cards
    Activity,

    /// Show contributors, commits, issues and pull requests of one repository
    Details(DetailsArgs),

    /// Write a standalone HTML dashboard
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReposArgs {
    /// Only show repositories whose name or description contains this text
    #[arg(long, short = 's', value_name = "QUERY")]
    pub search: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DetailsArgs {
    /// Repository name within the organization
    #[arg(value_name = "REPO")]
    pub repo: String,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// View to export: repos or activity
    #[arg(long, default_value = "repos", value_name = "VIEW")]
    pub view: View,

    /// Search query applied to the repository list
    #[arg(long, short = 's', value_name = "QUERY")]
    pub search: Option<String>,

    /// Open the details modal of this repository in the exported page
    #[arg(long, value_name = "REPO")]
    pub details: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ghdash::runtime::RealRuntime;
    let config = Config::new(cli.org, cli.api_url);

    match cli.command {
        Commands::Repos(args) => commands::repos(runtime, config, args.search).await?,
        Commands::Activity => commands::activity(runtime, config).await?,
        Commands::Details(args) => commands::details(runtime, config, &args.repo).await?,
        Commands::Export(args) => {
            let options = ExportOptions {
                output: args.output,
                view: args.view,
                search: args.search,
                details: args.details,
            };
            commands::export(runtime, config, options).await?
        }
    }
    Ok(())
}
