use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use trivia_core::config::Command;
use trivia_core::core::ConfigProvider;
use trivia_core::utils::{logger, validation::Validate};
use trivia_core::{
    ApiResponse, CliConfig, LocalStorage, Paginator, SnapshotRepository, TriviaApi, TriviaService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if settings.json_logs {
        logger::init_json_logger(&settings.log_level);
    } else {
        logger::init_cli_logger(&settings.log_level);
    }

    tracing::info!("Starting trivia CLI");
    tracing::debug!("Effective settings: {:?}", settings);

    let snapshots = SnapshotRepository::new(LocalStorage::new("."));
    let store = Arc::new(
        snapshots
            .load(settings.snapshot_path())
            .await
            .with_context(|| format!("loading snapshot {}", settings.snapshot_path()))?,
    );

    let service = TriviaService::new(
        store.clone(),
        store.clone(),
        Paginator::new(settings.questions_per_page()),
    );
    let api = TriviaApi::new(service);

    let mutates = matches!(cli.command, Command::Create { .. } | Command::Delete { .. });
    let response = dispatch(&api, cli.command).await;

    println!("{}", serde_json::to_string_pretty(&response.body)?);

    if !response.is_success() {
        tracing::warn!("Request failed with status {}", response.status);
        std::process::exit(1);
    }

    if mutates {
        snapshots
            .save(&store, settings.snapshot_path())
            .await
            .with_context(|| format!("saving snapshot {}", settings.snapshot_path()))?;
        tracing::info!("Snapshot saved to {}", settings.snapshot_path());
    }

    Ok(())
}

async fn dispatch(
    api: &TriviaApi<trivia_core::InMemoryStore, trivia_core::InMemoryStore>,
    command: Command,
) -> ApiResponse {
    match command {
        Command::Categories => api.get_categories().await,
        Command::Questions { page } => api.get_questions(page.as_deref()).await,
        Command::Search { term } => {
            api.search_questions(&serde_json::json!({ "searchTerm": term }))
                .await
        }
        Command::ByCategory { id } => api.get_category_questions(id).await,
        Command::Quiz { category, previous } => {
            api.get_quiz_question(&serde_json::json!({
                "previous_questions": previous,
                "quiz_category": { "id": category },
            }))
            .await
        }
        Command::Create {
            question,
            answer,
            difficulty,
            category,
        } => {
            api.create_question(&serde_json::json!({
                "question": question,
                "answer": answer,
                "difficulty": difficulty,
                "category": category,
            }))
            .await
        }
        Command::Delete { id } => api.delete_question(id).await,
    }
}
