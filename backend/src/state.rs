use std::sync::Arc;

use actix_web::web;
use tokio::sync::OnceCell;

use crate::classifier::{self, ClassifierLoader, LoadError};
use crate::config::Config;
use crate::pipeline::Predictor;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Model loading was interrupted: {0}")]
    Blocking(String),
}

/// Shared by every worker. The predictor is built at most once; a failed
/// build leaves the cell empty and the next caller tries again.
pub struct AppState {
    pub config: Arc<Config>,
    predictor: OnceCell<Arc<Predictor>>,
    loader: Arc<ClassifierLoader>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_loader(config, Arc::new(classifier::load))
    }

    pub fn with_loader(config: Config, loader: Arc<ClassifierLoader>) -> Self {
        Self {
            config: Arc::new(config),
            predictor: OnceCell::new(),
            loader,
        }
    }

    pub async fn predictor(&self) -> Result<Arc<Predictor>, InitError> {
        self.predictor
            .get_or_try_init(|| async {
                let config = self.config.clone();
                let loader = self.loader.clone();
                let predictor = web::block(move || Predictor::load(&config, loader.as_ref()))
                    .await
                    .map_err(|e| InitError::Blocking(e.to_string()))??;
                Ok::<_, InitError>(Arc::new(predictor))
            })
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.predictor.initialized()
    }
}
