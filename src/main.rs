use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ruku::app::AppContext;
use ruku::cli::{commands, Cli, Commands};
use ruku::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the passage
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(lang) = cli.lang {
        config.quiz.language = lang;
    }
    if let Some(edition) = cli.edition {
        config.api.edition = edition;
    }
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let ctx = AppContext::new(config)?;

    let result = match cli.command.unwrap_or(Commands::Random) {
        Commands::Random => commands::random(&ctx).await,
        Commands::Surah { query, all } => commands::search_surah(&ctx, &query, all).await,
        Commands::Locate { reference } => commands::locate(&ctx, &reference).await,
        Commands::Quiz { from, to } => {
            commands::quiz(&ctx, from.as_deref(), to.as_deref()).await
        }
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:?}", e);
        eprintln!("{}", e.user_message(&ctx.translations));
        std::process::exit(1);
    }

    Ok(())
}
