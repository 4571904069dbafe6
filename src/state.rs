use crate::config::AppConfig;
use crate::services::ai::TextGenerator;
use crate::services::chat::ChatTransport;
use crate::services::meetings::MeetingProvider;
use crate::sessions::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub generator: Box<dyn TextGenerator>,
    pub meetings: Box<dyn MeetingProvider>,
    pub chat: Box<dyn ChatTransport>,
    pub sessions: SessionStore,
}
