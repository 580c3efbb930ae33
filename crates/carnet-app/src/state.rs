use carnet_config::Config;
use carnet_core::{Clock, IdGenerator, SystemClock, UuidGenerator, WordStore};

use crate::file_store::JsonFileStore;

pub struct AppState {
    pub config: Config,
    pub store: Box<dyn WordStore>,
    pub ids: Box<dyn IdGenerator>,
    pub clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = JsonFileStore::new(&config.store);
        Self::with_store(config, Box::new(store))
    }

    pub fn with_store(config: Config, store: Box<dyn WordStore>) -> Self {
        Self {
            config,
            store,
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the id and time sources used for new words and attempts
    pub fn with_sources(
        mut self,
        ids: impl IdGenerator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        self.ids = Box::new(ids);
        self.clock = Box::new(clock);
        self
    }
}
