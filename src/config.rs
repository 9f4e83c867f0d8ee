use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub verify_token: String,
    pub llm_provider: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub whatsapp_token: String,
    pub phone_id: String,
    pub whatsapp_api_url: String,
    pub whatsapp_api_version: String,
    pub record_sink: String,
    pub google_credentials: String,
    pub spreadsheet_name: String,
    pub sheets_api_url: String,
    pub drive_api_url: String,
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
            verify_token: env::var("VERIFY_TOKEN")
                .unwrap_or_else(|_| "blue_train_secret".to_string()),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            gemini_api_key: env::var("GEMINI_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            whatsapp_token: env::var("WHATSAPP_TOKEN").unwrap_or_default(),
            phone_id: env::var("PHONE_ID").unwrap_or_default(),
            whatsapp_api_url: env::var("WHATSAPP_API_URL")
                .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
            whatsapp_api_version: env::var("WHATSAPP_API_VERSION")
                .unwrap_or_else(|_| "v17.0".to_string()),
            record_sink: env::var("RECORD_SINK").unwrap_or_else(|_| "sheets".to_string()),
            google_credentials: env::var("GOOGLE_CREDENTIALS").unwrap_or_default(),
            spreadsheet_name: env::var("SPREADSHEET_NAME")
                .unwrap_or_else(|_| "TrainBookings".to_string()),
            sheets_api_url: env::var("SHEETS_API_URL")
                .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string()),
            drive_api_url: env::var("DRIVE_API_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "railclerk.db".to_string()),
        }
    }
}
