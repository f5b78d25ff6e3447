//! Core domain types and utilities for the EcoCycle client.
//!
//! This crate provides the foundational ID types and error handling
//! shared by the EcoCycle recycling-rewards web application.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{
    ChallengeId, ItemId, ParseIdError, PickupId, RecyclingEntryId, RewardId, UserId,
};
