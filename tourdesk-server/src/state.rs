//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use tourdesk_agent::BookingAgent;
use tourdesk_core::config::{AgentConfig, Config};
use tourdesk_core::session::SessionCache;
use tourdesk_data::DataStore;
use tourdesk_providers::{AzureChatClient, LLMProvider};
use tourdesk_tools::ToolRegistry;

/// Cache of per-session agents; each agent is mutex-guarded so concurrent
/// requests for one session serialize into ordered turns.
pub type AgentCache = SessionCache<Mutex<BookingAgent>>;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// The injected session cache
    pub cache: Arc<AgentCache>,
}

impl AppState {
    /// Build the production state from configuration and loaded datasets
    pub fn build(config: &Config, store: Arc<DataStore>) -> Self {
        let provider: Arc<dyn LLMProvider> = Arc::new(AzureChatClient::new(&config.azure));
        let tools = Arc::new(tourdesk_tools::booking_registry(store));
        Self::with_provider(
            provider,
            tools,
            config.agent.clone(),
            Duration::from_secs(config.cache.ttl_secs),
        )
    }

    /// Build state over an arbitrary provider (tests inject a scripted one)
    pub fn with_provider(
        provider: Arc<dyn LLMProvider>,
        tools: Arc<ToolRegistry>,
        settings: AgentConfig,
        ttl: Duration,
    ) -> Self {
        let cache = Arc::new(SessionCache::new(ttl, move |_session_id: &str| {
            let provider = provider.clone();
            let tools = tools.clone();
            let settings = settings.clone();
            Box::pin(async move { Ok(Mutex::new(BookingAgent::new(provider, tools, settings))) })
        }));

        Self { cache }
    }
}
