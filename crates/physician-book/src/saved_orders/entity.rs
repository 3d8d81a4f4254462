//! [`ActorEntity`] implementation for [`SavedOrder`]. One record per account.

use super::error::SavedOrderError;
use crate::model::{PrevOrderData, SavedOrder, SavedOrderCreate, SavedOrderCriteria, SavedOrderId};
use actor_store::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for SavedOrder {
    type Id = SavedOrderId;
    type Create = SavedOrderCreate;
    /// The projection is replaced wholesale.
    type Update = PrevOrderData;
    type Criteria = SavedOrderCriteria;
    type Key = String;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = SavedOrderError;

    fn from_create_params(id: SavedOrderId, params: SavedOrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            account: params.account,
            prev_order_data: params.prev_order_data,
        })
    }

    fn matches(&self, criteria: &SavedOrderCriteria) -> bool {
        match criteria {
            SavedOrderCriteria::Account(account) => &self.account == account,
        }
    }

    fn identity_key(&self) -> Option<String> {
        Some(self.account.clone())
    }

    async fn on_update(
        &mut self,
        data: PrevOrderData,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.prev_order_data = data;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
