use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use railclerk::config::AppConfig;
use railclerk::db;
use railclerk::errors::AppError;
use railclerk::handlers;
use railclerk::services::ai::gemini::GeminiProvider;
use railclerk::services::ai::ollama::OllamaProvider;
use railclerk::services::ai::LlmProvider;
use railclerk::services::messaging::whatsapp::WhatsAppProvider;
use railclerk::services::records::sheets::GoogleSheetsSink;
use railclerk::services::records::sqlite::SqliteSink;
use railclerk::services::records::RecordSink;
use railclerk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    // Missing keys are not fatal here; the call that needs them fails instead.
    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "gemini" => {
            if config.gemini_api_key.is_empty() {
                tracing::warn!("GEMINI_KEY is not set, model calls will fail");
            }
            tracing::info!("using Gemini LLM provider (model: {})", config.gemini_model);
            Box::new(GeminiProvider::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_url.clone(),
            ))
        }
        "ollama" => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            ))
        }
        other => {
            return Err(AppError::Config(format!("unknown LLM_PROVIDER {other:?}")).into());
        }
    };

    let records: Box<dyn RecordSink> = match config.record_sink.as_str() {
        "sheets" => {
            tracing::info!("recording bookings to spreadsheet {:?}", config.spreadsheet_name);
            Box::new(GoogleSheetsSink::new(
                config.google_credentials.clone(),
                config.spreadsheet_name.clone(),
                config.sheets_api_url.clone(),
                config.drive_api_url.clone(),
            ))
        }
        "sqlite" => {
            tracing::info!("recording bookings to {}", config.database_url);
            let conn = db::init_db(&config.database_url)?;
            Box::new(SqliteSink::new(Arc::new(Mutex::new(conn))))
        }
        other => {
            return Err(AppError::Config(format!("unknown RECORD_SINK {other:?}")).into());
        }
    };

    if config.whatsapp_token.is_empty() || config.phone_id.is_empty() {
        tracing::warn!("WHATSAPP_TOKEN or PHONE_ID is not set, replies will not be delivered");
    }
    let messaging = WhatsAppProvider::new(
        config.whatsapp_token.clone(),
        config.phone_id.clone(),
        config.whatsapp_api_url.clone(),
        config.whatsapp_api_version.clone(),
    );

    let addr = format!("0.0.0.0:{}", config.port);

    let state = Arc::new(AppState {
        config,
        llm,
        messaging: Box::new(messaging),
        records,
    });

    let app = handlers::router(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
