//! Creates new collection items and keeps the server-confirmed results.

use std::sync::Arc;

use entity::prelude::*;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::{Client, ClientError};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitState<C> {
    /// Created items, newest first.
    pub items: Vec<C>,
    pub is_loading: bool,
}

impl<C> Default for SubmitState<C> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
        }
    }
}

#[derive(Clone)]
pub struct CollectionSubmitter<D: Draft> {
    client: Client,
    collection: Collection,
    state: Arc<watch::Sender<SubmitState<D::Created>>>,
    lifetime: CancellationToken,
}

impl<D> CollectionSubmitter<D>
where
    D: Draft + Send + 'static,
    D::Created: Clone + Send + Sync + 'static,
{
    pub fn new(
        client: Client,
        collection: Collection,
        lifetime: CancellationToken,
    ) -> Self {
        let (state, _) = watch::channel(SubmitState::default());

        Self {
            client,
            collection,
            state: Arc::new(state),
            lifetime,
        }
    }

    pub fn items(&self) -> Vec<D::Created> {
        self.state.borrow().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmitState<D::Created>> {
        self.state.subscribe()
    }

    /// Sends `draft` and, once the server confirms it with an id, puts the
    /// created item at the front of `items`.
    ///
    /// This does not refresh the collection itself.
    pub async fn submit(&self, draft: D) -> Result<D::Created, ClientError> {
        if self.lifetime.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        self.state.send_modify(|state| state.is_loading = true);
        debug!(task = "submit draft", collection = %self.collection);

        let result = tokio::select! {
            _ = self.lifetime.cancelled() => {
                debug!(
                    task = "submit draft",
                    collection = %self.collection,
                    "abandoned"
                );
                return Err(ClientError::Cancelled);
            }
            result = self.client.create(self.collection, draft) => result,
        };

        match result {
            Ok(created) => {
                self.state.send_modify(|state| {
                    state.items.insert(0, created.clone());
                    state.is_loading = false;
                });
                Ok(created)
            }
            Err(e) => {
                error!(
                    task = "submit draft",
                    collection = %self.collection,
                    err = e.to_string(),
                );
                self.state.send_modify(|state| state.is_loading = false);
                Err(e)
            }
        }
    }
}
