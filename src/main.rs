mod bitbucket;
mod cli;
mod config;
mod error;
mod git;
mod http;
mod logger;
mod params;
mod prompt;
mod validation;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use git::RepositoryMetadata;
use prompt::{editor::ExternalEditor, Prompter};
use std::{io, process::ExitCode};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logger::init(cli.log_level())?;

    Ok(report(run(cli).await))
}

async fn run(cli: Cli) -> Result<()> {
    let mut params = cli.parameters();
    Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?
        .apply(&mut params);

    if !cli.no_prompt {
        let metadata = RepositoryMetadata::discover(".");
        let mut prompter =
            Prompter::new(io::stdin().lock(), io::stdout(), ExternalEditor::from_env());
        prompter
            .collect(&mut params, &metadata)
            .context("Cannot read pull request parameters")?;
    }

    let response = bitbucket::open_pull_request(&params)
        .await
        .context("Cannot open the pull request")?;

    log::info!("Pull request opened");
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
