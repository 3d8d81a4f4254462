//! # Saved Order Client
//!
//! Reads and rewrites the previous-order projection of an account.
use crate::model::{PrevOrderData, SavedOrder, SavedOrderCreate, SavedOrderCriteria};
use crate::saved_orders::SavedOrderError;
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the saved-orders actor.
#[derive(Clone)]
pub struct SavedOrderClient {
    inner: ResourceClient<SavedOrder>,
}

impl SavedOrderClient {
    pub fn new(inner: ResourceClient<SavedOrder>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<SavedOrder> for SavedOrderClient {
    type Error = SavedOrderError;

    fn inner(&self) -> &ResourceClient<SavedOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SavedOrderError::from(e)
    }
}

impl SavedOrderClient {
    #[instrument(skip(self))]
    pub async fn saved_order(&self, account: &str) -> Result<Option<SavedOrder>, SavedOrderError> {
        debug!("Sending request");
        let hits = self
            .inner
            .find(SavedOrderCriteria::Account(account.to_string()))
            .await?;
        Ok(hits.into_iter().next())
    }

    /// Replaces the account's projection, creating its saved order on first use.
    #[instrument(skip(self, data))]
    pub async fn replace_prev_order_data(
        &self,
        account: &str,
        data: PrevOrderData,
    ) -> Result<SavedOrder, SavedOrderError> {
        if let Some(existing) = self.saved_order(account).await? {
            return Ok(self.inner.update(existing.id, data).await?);
        }

        let create = SavedOrderCreate {
            account: account.to_string(),
            prev_order_data: data.clone(),
        };
        match self.inner.create(create).await {
            Ok(id) => self
                .inner
                .get(id)
                .await?
                .ok_or_else(|| SavedOrderError::NotFound(id.to_string())),
            Err(FrameworkError::Conflict(key)) => {
                warn!(account, "Lost saved-order race, updating the winner");
                let winner = self
                    .saved_order(account)
                    .await?
                    .ok_or(SavedOrderError::Conflict(key))?;
                Ok(self.inner.update(winner.id, data).await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}
