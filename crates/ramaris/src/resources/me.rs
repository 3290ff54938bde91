//! Endpoints scoped to the authenticated user

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::RequestSpec,
    types::{ListOptions, ListResponse, Subscription, UserProfile, WatchlistStrategy},
};

/// Resource for `/me/*`: the owner of the API key.
#[derive(Debug, Clone, Copy)]
pub struct Me<'a> {
    client: &'a Client,
}

impl<'a> Me<'a> {
    /// Create a new Me resource.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List strategies in the user's watchlist.
    pub async fn watchlist(
        &self,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<WatchlistStrategy>> {
        self.client
            .get_json(RequestSpec::new("/me/strategies/watchlist").with_query(opts))
            .await
    }

    /// Get the user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.get_data(RequestSpec::new("/me/profile")).await
    }

    /// Get the user's subscription.
    pub async fn subscription(&self) -> Result<Subscription> {
        self.client
            .get_data(RequestSpec::new("/me/subscription"))
            .await
    }
}

impl Resource for Me<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}
