//! Host session: the player's gold, gear and potions, stored locally and
//! synced with the story backend.

pub mod client;
pub mod persistence;
pub mod types;

pub use client::ApiClient;
pub use persistence::SessionStore;
pub use types::Session;
