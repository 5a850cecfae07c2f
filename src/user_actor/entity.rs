use crate::actor_framework::Entity;
use crate::domain::{is_provided, provided, User, UserCreate, UserPatch};

/// Message returned when a create payload lacks a name or an email.
pub const MISSING_FIELDS: &str = "Name and email are required";

impl Entity for User {
    type Id = u64;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn validate_create(payload: &UserCreate) -> Result<(), String> {
        if is_provided(payload.name.as_deref()) && is_provided(payload.email.as_deref()) {
            Ok(())
        } else {
            Err(MISSING_FIELDS.to_string())
        }
    }

    /// Creates a new User from a payload that passed [`Entity::validate_create`].
    fn from_create(id: u64, payload: UserCreate) -> Self {
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
        }
    }

    /// Updates the user's profile information.
    ///
    /// Absent and empty fields are left untouched, so a field can never be
    /// cleared through an update.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = provided(patch.name) {
            self.name = name;
        }
        if let Some(email) = provided(patch.email) {
            self.email = email;
        }
        Ok(())
    }
}
