use std::sync::Arc;
use std::time::Duration;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{Endpoints, Fetcher};
use crate::i18n::Translations;
use crate::picker::Picker;

pub struct AppContext {
    pub config: Config,
    pub picker: Picker,
    pub translations: Translations,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(
            Duration::from_secs(config.api.timeout_secs),
        )?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let endpoints = Endpoints::from_config(&config.api);
        let picker = Picker::new(fetcher, endpoints);
        let translations = Translations::embedded(config.quiz.language);

        Self {
            config,
            picker,
            translations,
        }
    }
}
