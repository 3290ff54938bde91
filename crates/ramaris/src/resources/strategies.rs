//! Strategies API endpoints

use super::Resource;
use crate::{
    client::Client,
    error::{Error, Result},
    http::RequestSpec,
    types::{ListOptions, ListResponse, Strategy, StrategyListItem},
};

/// Strategies API resource.
#[derive(Debug, Clone, Copy)]
pub struct Strategies<'a> {
    client: &'a Client,
}

impl<'a> Strategies<'a> {
    /// Create a new Strategies resource.
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List public strategies, one page at a time.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use ramaris::{Client, ListOptions};
    /// # async fn example(client: Client) -> ramaris::Result<()> {
    /// let mut opts = ListOptions::new().page(1).page_size(50);
    /// loop {
    ///     let page = client.strategies().list(Some(&opts)).await?;
    ///     for strategy in &page.data {
    ///         println!("{} ({})", strategy.name, strategy.share_id);
    ///     }
    ///     match page.next_page_options() {
    ///         Some(next) => opts = next,
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<ListResponse<StrategyListItem>> {
        self.client
            .get_json(RequestSpec::new("/strategies").with_query(opts))
            .await
    }

    /// Get a single strategy by its share ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] without contacting the server if
    /// `share_id` is empty.
    pub async fn get(&self, share_id: &str) -> Result<Strategy> {
        if share_id.trim().is_empty() {
            return Err(Error::InvalidRequest("strategy share id is empty".to_string()));
        }

        self.client
            .get_data(RequestSpec::new(format!("/strategies/{}", share_id)))
            .await
    }
}

impl Resource for Strategies<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}
