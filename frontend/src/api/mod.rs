mod activities;
mod auth;
pub mod client;
mod companies;
mod subscriptions;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
