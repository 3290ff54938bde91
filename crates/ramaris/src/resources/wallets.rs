//! Wallets API endpoints

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::RequestSpec,
    types::{ListOptions, ListResponse, Wallet, WalletListItem},
};

/// Wallets API resource.
#[derive(Debug, Clone, Copy)]
pub struct Wallets<'a> {
    client: &'a Client,
}

impl<'a> Wallets<'a> {
    /// Create a new Wallets resource.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List tracked wallets, one page at a time.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<ListResponse<WalletListItem>> {
        self.client
            .get_json(RequestSpec::new("/wallets").with_query(opts))
            .await
    }

    /// Get a single wallet by ID.
    pub async fn get(&self, id: i64) -> Result<Wallet> {
        self.client
            .get_data(RequestSpec::new(format!("/wallets/{}", id)))
            .await
    }
}

impl Resource for Wallets<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}
