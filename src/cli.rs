use clap::Parser;

#[derive(Parser)]
#[command(name = "starlist")]
#[command(about = "Lists a GitHub user's public repositories ordered by stars")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username to list repositories for
    pub username: String,

    /// Personal access token; raises the API rate limit when set
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Show a detail view for this repository above the table
    #[arg(long)]
    pub repo: Option<String>,

    /// Only list the N most recently created repositories
    #[arg(long, value_name = "N")]
    pub recent: Option<usize>,

    /// Print the sorted repository list as JSON and nothing else
    #[arg(long)]
    pub json: bool,
}
