use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::services::messaging::MessagingProvider;
use crate::services::records::RecordSink;

pub struct AppState {
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
    pub messaging: Box<dyn MessagingProvider>,
    pub records: Box<dyn RecordSink>,
}
