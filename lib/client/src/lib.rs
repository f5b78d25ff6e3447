//! Typed REST API client for the EcoCycle platform.
//!
//! This crate provides:
//! - `ApiClient`: a thin typed wrapper over the REST endpoints
//! - Wire payload types mirroring the server's serializers
//! - `ApiError`: the request failure taxonomy
//!
//! The authentication endpoints produce the (`Principal`, `Credential`)
//! pair the session store consumes; every other endpoint requires the
//! credential and attaches it as a bearer header.

pub mod api;
pub mod error;
pub mod types;

// Re-export main types at crate root
pub use api::ApiClient;
pub use error::ApiError;
pub use types::{
    Challenge, DashboardUser, IndividualDashboard, ItemCategory, LoginRequest, LoginResponse,
    MarketplaceFilter, MarketplaceItem, NewMarketplaceItem, Pickup, PickupStatus, RecyclingEntry,
    RegisterRequest, Reward,
};
