//! Whole-collection reads with observable loading/error state.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use entity::prelude::*;
use serde::de::DeserializeOwned;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::{Client, ClientError, LoadError};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Vec<T>,
    pub is_loading: bool,
    pub error: Option<LoadError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CollectionFetcher<T> {
    client: Client,
    collection: Collection,
    state: Arc<watch::Sender<FetchState<T>>>,
    mounted: Arc<AtomicBool>,
    lifetime: CancellationToken,
}

impl<T> CollectionFetcher<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(
        client: Client,
        collection: Collection,
        lifetime: CancellationToken,
    ) -> Self {
        let (state, _) = watch::channel(FetchState::default());

        Self {
            client,
            collection,
            state: Arc::new(state),
            mounted: Arc::new(AtomicBool::new(false)),
            lifetime,
        }
    }

    pub fn snapshot(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Vec<T> {
        self.state.borrow().data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<LoadError> {
        self.state.borrow().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Starts the first fetch in the background. Only the first call does
    /// anything; later calls return `None`.
    pub fn mount(&self) -> Option<JoinHandle<Result<(), ClientError>>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return None;
        }

        let fetcher = self.clone();
        Some(tokio::spawn(async move { fetcher.refetch().await }))
    }

    /// Reads the collection and replaces `data` with the result.
    ///
    /// On failure `data` keeps its previous value and `error` is set. When
    /// the lifetime token fires first nothing is written at all.
    pub async fn refetch(&self) -> Result<(), ClientError> {
        if self.lifetime.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
        debug!(task = "fetch collection", collection = %self.collection);

        let result = tokio::select! {
            _ = self.lifetime.cancelled() => {
                debug!(
                    task = "fetch collection",
                    collection = %self.collection,
                    "abandoned"
                );
                return Err(ClientError::Cancelled);
            }
            result = self.client.list::<T>(self.collection) => result,
        };

        match result {
            Ok(data) => {
                self.state.send_modify(|state| {
                    state.data = data;
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(e) => {
                error!(
                    task = "fetch collection",
                    collection = %self.collection,
                    err = e.to_string(),
                );
                self.state.send_modify(|state| {
                    state.error = Some(LoadError::from(&e));
                    state.is_loading = false;
                });
                Err(e)
            }
        }
    }
}
