//! REST API client.
//!
//! Thin typed wrapper over the platform's REST endpoints. Every
//! authenticated call attaches the bearer credential as an
//! `Authorization` header; the credential value itself is never logged.

use tracing::{debug, warn};

use ecocycle_access::{Credential, Principal};

use crate::error::ApiError;
use crate::types::{
    IndividualDashboard, LoginRequest, LoginResponse, MarketplaceFilter, MarketplaceItem,
    NewMarketplaceItem, RegisterRequest,
};

/// Typed client for the EcoCycle REST API.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given API base URL.
    ///
    /// A trailing slash on the base is tolerated; endpoint paths always
    /// begin with one.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticates with email and password.
    ///
    /// On success returns the principal and the bearer credential for
    /// the new session. On rejection the server's message comes back as
    /// [`ApiError::Rejected`] for the login view to display.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Principal, Credential), ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint("/auth/login/"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                reason: e.to_string(),
            })?;
        let response = Self::check(response).await?;

        let body: LoginResponse = response.json().await.map_err(|e| ApiError::Decode {
            reason: e.to_string(),
        })?;

        debug!(user_id = %body.user.id(), role = %body.user.role(), "login succeeded");
        Ok((body.user, Credential::new(body.access)))
    }

    /// Registers a new account.
    ///
    /// The endpoint returns a token pair, but registration establishes
    /// no session on this client; the user logs in separately afterward.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/register/"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                reason: e.to_string(),
            })?;
        Self::check(response).await?;

        debug!("registration accepted");
        Ok(())
    }

    /// Fetches the aggregated dashboard for the authenticated user.
    pub async fn individual_dashboard(
        &self,
        credential: &Credential,
    ) -> Result<IndividualDashboard, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/individual/dashboard/"))
            .header("Authorization", format!("Bearer {}", credential.as_str()))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                reason: e.to_string(),
            })?;
        let response = Self::check(response).await?;

        response.json().await.map_err(|e| ApiError::Decode {
            reason: e.to_string(),
        })
    }

    /// Lists available marketplace items matching the filter.
    pub async fn marketplace_items(
        &self,
        credential: &Credential,
        filter: &MarketplaceFilter,
    ) -> Result<Vec<MarketplaceItem>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/individual/marketplace/"))
            .query(&filter.query_pairs())
            .header("Authorization", format!("Bearer {}", credential.as_str()))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                reason: e.to_string(),
            })?;
        let response = Self::check(response).await?;

        let items: Vec<MarketplaceItem> = response.json().await.map_err(|e| ApiError::Decode {
            reason: e.to_string(),
        })?;

        debug!(count = items.len(), "marketplace items loaded");
        Ok(items)
    }

    /// Lists a new item on the marketplace.
    pub async fn create_marketplace_item(
        &self,
        credential: &Credential,
        item: &NewMarketplaceItem,
    ) -> Result<MarketplaceItem, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/individual/marketplace/create/"))
            .json(item)
            .header("Authorization", format!("Bearer {}", credential.as_str()))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                reason: e.to_string(),
            })?;
        let response = Self::check(response).await?;

        response.json().await.map_err(|e| ApiError::Decode {
            reason: e.to_string(),
        })
    }

    /// Resolves a response into itself or the error to surface.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, "API request rejected");
        Err(ApiError::from_response(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(
            client.endpoint("/auth/login/"),
            "http://localhost:8000/api/auth/login/"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.endpoint("/individual/dashboard/"),
            "http://localhost:8000/api/individual/dashboard/"
        );
    }
}
