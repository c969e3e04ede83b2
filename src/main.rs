use anyhow::Context;
use clap::Parser;
use colored::*;
use starlist::cli::Cli;
use starlist::github::GitHubClient;
use starlist::render;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let client =
        GitHubClient::new(cli.token.clone()).context("failed to build GitHub client")?;

    let repos = match client.list_repositories(&cli.username).await {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!("{} {}", "Error fetching GitHub repositories:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", render::to_json(&repos)?);
        return Ok(());
    }

    if repos.is_empty() {
        println!(
            "{}",
            format!("No public repositories found for {}", cli.username).yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} public repositories", repos.len()).green()
    );
    println!();

    if let Some(name) = &cli.repo {
        match repos.iter().find(|repo| repo.name == *name) {
            Some(repo) => {
                println!("{}", render::repo_detail(repo));
            }
            None => {
                println!(
                    "{}",
                    format!("No repository named {}. Available repositories:", name).yellow()
                );
                println!("{}", render::repo_name_list(&repos));
            }
        }
    }

    println!("{}", "All Repositories".bold());
    print!("{}", render::repo_table(&repos, cli.recent));

    Ok(())
}
