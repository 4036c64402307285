use anyhow::{Context, Result};
use tokio::sync::oneshot;

use crate::{
    catalog::{CatalogSource, CatalogStore},
    settings::{Settings, SettingsStore},
    state::ViewState,
};

use super::{options::UiOptions, runtime::App};

/// Interactive catalog browser.
///
/// The catalog is fetched on a background runtime while the terminal UI is
/// already up; the list shows a loading state until the fetch settles.
pub struct Bestiary<S> {
    source: S,
    title: Option<String>,
    settings: Settings,
    options: UiOptions,
}

impl<S: CatalogSource + 'static> Bestiary<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            title: None,
            settings: Settings::default(),
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Persist preferences in `store` instead of keeping them in memory.
    pub fn with_settings(mut self, store: Box<dyn SettingsStore>) -> Self {
        self.settings = Settings::from_boxed(store);
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<()> {
        let Bestiary {
            source,
            title,
            settings,
            options,
        } = self;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("bestiary-loader")
            .enable_all()
            .build()
            .context("failed to start the catalog loader")?;

        let (sender, receiver) = oneshot::channel();
        runtime.spawn(async move {
            let result = CatalogStore::load(&source).await;
            if sender.send(result).is_err() {
                tracing::debug!("browser closed before the catalog arrived");
            }
        });

        let mut app = App::new(ViewState::new(settings), options, title, Some(receiver));
        let outcome = app.run();
        runtime.shutdown_background();
        outcome
    }
}
