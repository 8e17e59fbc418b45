use reqwest::blocking::Client;
use tracing::debug;

use crate::config::Config;
use crate::errors::{TechfeedError, TechfeedResult};

/// Downloads raw documents. The only component that touches the network.
#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> TechfeedResult<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.http_timeout)
                .user_agent(config.user_agent.clone())
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl FeedFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> TechfeedResult<Vec<u8>> {
        debug!(url, "fetching");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TechfeedError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        debug!(url, bytes = bytes.len(), "fetched");

        Ok(bytes.to_vec())
    }
}
