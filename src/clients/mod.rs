//! Typed client handles over the generic [`ResourceClient`](crate::actor_framework::ResourceClient).

mod user_client;

pub use user_client::UserClient;
