//! PlanIt CLI Application
//!
//! Command-line interface for the PlanIt goal planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planit_core::{display::OperationStatus, PlannerBuilder, ResponseFileGenerator};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    if let Some(Prompt(args)) = &command {
        println!("{}", args.request()?.prompt());
        return Ok(());
    }

    let response_file = match &command {
        Some(Generate(args)) => args.response_file.clone(),
        Some(Regenerate(args)) => args.response_file.clone(),
        _ => None,
    };

    let mut builder = PlannerBuilder::new().with_database_path(database_file);
    if let Some(path) = response_file {
        info!("Reading generated tasks from {}", path.display());
        builder = builder.with_generator(ResponseFileGenerator::new(path));
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color), json);

    let result = match command {
        Some(Generate(args)) => cli.generate(args).await,
        Some(Show(args)) => cli.show(args).await,
        Some(List) | None => cli.list().await,
        Some(Progress(args)) => cli.progress(args).await,
        Some(Regenerate(args)) => cli.regenerate(args).await,
        Some(AddTask(args)) => cli.add_task(args).await,
        Some(Prompt(_)) => Ok(()),
    };

    if let Err(e) = result {
        eprint!("{}", OperationStatus::failure(format!("{e:#}")));
        std::process::exit(1);
    }
    Ok(())
}
