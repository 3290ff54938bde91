//! Health API endpoint

use super::Resource;
use crate::{client::Client, error::Result, http::RequestSpec, types::HealthStatus};

/// Health API resource.
///
/// A cheap authenticated round-trip, useful to verify a key before doing
/// real work.
#[derive(Debug, Clone, Copy)]
pub struct Health<'a> {
    client: &'a Client,
}

impl<'a> Health<'a> {
    /// Create a new Health resource.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Check API health. The response is a bare object, not a `data` envelope.
    pub async fn get(&self) -> Result<HealthStatus> {
        self.client.get_json(RequestSpec::new("/health")).await
    }
}

impl Resource for Health<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}
