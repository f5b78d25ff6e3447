//! Wire types for the EcoCycle REST API.
//!
//! These mirror the server's serializers field for field. Decimal
//! quantities arrive as strings (the API serializes decimals that way)
//! and are displayed verbatim rather than parsed. Payloads carrying a
//! password or token redact it from their `Debug` output.

use chrono::{DateTime, Utc};
use ecocycle_access::{Principal, Role};
use ecocycle_core::{ChallengeId, ItemId, PickupId, RecyclingEntryId, RewardId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Payload for the login endpoint.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login response.
///
/// The server also sends a `refresh` token; this client has no refresh
/// flow, so only the access token is read.
#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user's profile.
    pub user: Principal,
    /// Bearer access token for subsequent requests.
    pub access: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("user", &self.user)
            .field("access", &"<redacted>")
            .finish()
    }
}

/// Payload for creating a new account.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account email address, also the login identifier.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Account role, serialized as the API's `user_type` discriminant.
    #[serde(rename = "user_type")]
    pub role: Role,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("role", &self.role)
            .finish()
    }
}

/// Lifecycle state of a recycling pickup.
///
/// `Pending` never appears in the scheduling form, but the API emits it
/// for pickups awaiting confirmation; both it and `Scheduled` count as
/// upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    /// Confirmed and on the calendar.
    Scheduled,
    /// Requested, awaiting confirmation.
    Pending,
    /// Collected.
    Completed,
    /// Called off.
    Cancelled,
}

impl PickupStatus {
    /// Returns true for states that count as an upcoming pickup.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Pending)
    }

    /// Human-readable label for status badges.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A scheduled or past recycling pickup.
#[derive(Debug, Clone, Deserialize)]
pub struct Pickup {
    pub id: PickupId,
    pub date: DateTime<Utc>,
    pub address: String,
    pub status: PickupStatus,
    /// Free-form material-to-quantity map as entered at scheduling.
    #[serde(default)]
    pub materials: Value,
    pub created_at: DateTime<Utc>,
}

/// A recycling challenge with target progress.
#[derive(Debug, Clone, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    /// Target count to reach, e.g. 10 pickups.
    pub target: i32,
    /// Progress so far toward the target.
    pub progress: i32,
    pub points_reward: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Returns true once progress has reached the target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }

    /// Progress toward the target as a whole percentage, clamped to
    /// 0..=100 for progress bars.
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        if self.target <= 0 {
            return 100;
        }
        let ratio = f64::from(self.progress.max(0)) / f64::from(self.target);
        (ratio * 100.0).clamp(0.0, 100.0).round() as u8
    }
}

/// A reward the user can claim with earned points.
#[derive(Debug, Clone, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub name: String,
    pub points_required: i32,
    pub description: String,
    pub is_claimed: bool,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One entry in the recycling history.
#[derive(Debug, Clone, Deserialize)]
pub struct RecyclingEntry {
    pub id: RecyclingEntryId,
    /// Material recycled: plastic, paper, metal, glass, electronics.
    pub material_type: String,
    /// Weight in kilograms, serialized by the API as a decimal string.
    pub weight_kg: String,
    pub date: DateTime<Utc>,
    /// Estimated CO2 savings in kilograms, as a decimal string.
    pub co2_saved_kg: String,
    pub created_at: DateTime<Utc>,
}

/// Marketplace item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Furniture,
    HomeDecor,
    PersonalCare,
    Electronics,
    Clothing,
    Other,
}

impl ItemCategory {
    /// All categories, in the order the marketplace filter offers them.
    pub const ALL: [ItemCategory; 6] = [
        ItemCategory::Furniture,
        ItemCategory::HomeDecor,
        ItemCategory::PersonalCare,
        ItemCategory::Electronics,
        ItemCategory::Clothing,
        ItemCategory::Other,
    ];

    /// Returns the wire name used in the `category` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Furniture => "furniture",
            Self::HomeDecor => "home_decor",
            Self::PersonalCare => "personal_care",
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label for filter menus.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Furniture => "Furniture",
            Self::HomeDecor => "Home Decor",
            Self::PersonalCare => "Personal Care",
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Other => "Other",
        }
    }
}

/// A second-hand item listed on the marketplace.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Price as a decimal string, displayed verbatim.
    pub price: String,
    pub category: ItemCategory,
    /// Uploaded image URL, if any.
    pub image: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    /// Seller's display name, composed server-side.
    pub seller_name: String,
}

/// Payload for listing a new marketplace item.
#[derive(Debug, Clone, Serialize)]
pub struct NewMarketplaceItem {
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. "25.00".
    pub price: String,
    pub category: ItemCategory,
}

/// Query filters for the marketplace listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceFilter {
    /// Restrict to one category; `None` lists every category.
    pub category: Option<ItemCategory>,
    /// Match against item names and descriptions.
    pub search: Option<String>,
}

impl MarketplaceFilter {
    /// Returns the query parameters this filter contributes.
    ///
    /// Absent or empty filters are omitted; the server treats a missing
    /// `category` as "all" and a missing `search` as no search.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(search) = &self.search
            && !search.is_empty()
        {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// The trimmed user profile embedded in the dashboard payload.
///
/// Unlike `Principal`, this carries no role; the dashboard endpoint
/// serializes only profile basics.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

/// Aggregated dashboard payload for individual and household accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct IndividualDashboard {
    pub user: DashboardUser,
    pub upcoming_pickups: Vec<Pickup>,
    pub past_pickups: Vec<Pickup>,
    pub active_challenges: Vec<Challenge>,
    pub completed_challenges: Vec<Challenge>,
    pub rewards: Vec<Reward>,
    pub recycling_history: Vec<RecyclingEntry>,
    /// Lifetime weight recycled in kilograms, as a decimal string.
    pub total_recycled_kg: String,
    /// Lifetime CO2 savings in kilograms, as a decimal string.
    pub co2_saved_total: String,
    pub challenges_completed_count: u32,
}
