use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{User, UserCreate, UserPatch};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(|e| into_user_error(e, None))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner.list().await.map_err(|e| into_user_error(e, None))
    }

    /// Unlike the underlying client, a miss is reported as [`UserError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u64) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(|e| into_user_error(e, Some(id)))?
            .ok_or(UserError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: u64, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(|e| into_user_error(e, Some(id)))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u64) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| into_user_error(e, Some(id)))
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.inner.shutdown().await.map_err(|e| into_user_error(e, None))
    }
}

fn into_user_error(error: FrameworkError, id: Option<u64>) -> UserError {
    match (error, id) {
        (FrameworkError::NotFound(_), Some(id)) => UserError::NotFound(id),
        (FrameworkError::Rejected(reason), _) => UserError::ValidationError(reason),
        (other, _) => UserError::ActorCommunicationError(other.to_string()),
    }
}
