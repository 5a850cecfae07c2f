use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::domain::{seed_users, User};

/// Owns the running user actor.
///
/// Responsible for seeding and starting the actor, handing out its client, and
/// stopping it again.
pub struct RegistrySystem {
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Start a registry holding the seed users. Must be called inside a tokio runtime.
    #[instrument(name = "registry_system")]
    pub fn new(buffer_size: usize) -> Self {
        info!("Starting registry system");

        let seed = seed_users();
        // Ids continue after the highest seeded id and are never handed out twice.
        let mut next_user_id = seed.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        let next_id = move || {
            let id = next_user_id;
            next_user_id += 1;
            id
        };

        let (user_actor, user_resource_client) =
            ResourceActor::<User>::with_seed(buffer_size, seed, next_id);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        info!("Registry system started");
        Self {
            user_client,
            handles: vec![user_handle],
        }
    }

    /// Stop the actor after the requests already queued are answered, then wait for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down registry system");

        if let Err(e) = self.user_client.shutdown().await {
            error!(error = %e, "Failed to signal user actor");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Registry system shutdown complete");
        Ok(())
    }
}
