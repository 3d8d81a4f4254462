use crate::address_book::{self, AddressBookError};
use crate::clients::{AddressBookClient, SavedOrderClient};
use crate::config::Config;
use crate::model::{AddressBookEntry, Physician};
use crate::reconciler::{AddressBookReconciler, ReconcileError};
use crate::saved_orders;
use actor_store::ActorClient;
use tracing::{error, info};

/// The running address-book system: both stores and the reconciler wired to them.
///
/// # Example
///
/// ```ignore
/// let system = BookSystem::new(&Config::from_env()?);
/// system.seed(baseline).await?;
///
/// let result = system.reconciler.reconcile(&order).await?;
///
/// system.reset().await?;
/// system.shutdown().await?;
/// ```
pub struct BookSystem {
    /// Entry point for order submissions
    pub reconciler: AddressBookReconciler,

    /// Client for the address-book actor (reads, seeding, palmetto tagging)
    pub address_book: AddressBookClient,

    /// Client for the saved-orders actor
    pub saved_orders: SavedOrderClient,

    /// Task handles for both actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BookSystem {
    /// Spawns both store actors and wires the reconciler to them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (book_actor, address_book) = address_book::new(config.channel_capacity);
        let (saved_actor, saved_orders) = saved_orders::new(config.channel_capacity);

        let book_handle = tokio::spawn(book_actor.run(()));
        let saved_handle = tokio::spawn(saved_actor.run(()));

        let reconciler = AddressBookReconciler::new(
            address_book.clone(),
            saved_orders.clone(),
            config.name_casing,
        );

        Self {
            reconciler,
            address_book,
            saved_orders,
            handles: vec![book_handle, saved_handle],
        }
    }

    /// Inserts baseline entries, as they would exist before any order is submitted.
    pub async fn seed(
        &self,
        physicians: impl IntoIterator<Item = Physician>,
    ) -> Result<Vec<AddressBookEntry>, AddressBookError> {
        let mut entries = Vec::new();
        for physician in physicians {
            entries.push(self.address_book.insert(physician).await?);
        }
        info!(seeded = entries.len(), "Address book seeded");
        Ok(entries)
    }

    /// Empties both stores.
    pub async fn reset(&self) -> Result<(), ReconcileError> {
        let entries = self.address_book.delete_all().await?;
        let saved = self.saved_orders.delete_all().await?;
        info!(entries, saved, "Stores reset");
        Ok(())
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping every client closes the channels; each actor then leaves its loop. Returns
    /// an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let Self {
            reconciler,
            address_book,
            saved_orders,
            handles,
        } = self;
        drop(reconciler);
        drop(address_book);
        drop(saved_orders);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
