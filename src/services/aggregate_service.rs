use tracing::{info, warn};

use crate::domain::{FeedResult, SourceKind};
use crate::errors::TechfeedResult;
use crate::sources::SourceRegistry;

/// Outcome of fetching one default feed
#[derive(Debug)]
pub struct SourceOutcome {
    pub kind: SourceKind,
    pub url: String,
    pub result: TechfeedResult<FeedResult>,
}

impl SourceOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct AggregateService {
    source_registry: SourceRegistry,
}

impl AggregateService {
    pub fn new(source_registry: SourceRegistry) -> Self {
        Self { source_registry }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.source_registry
    }

    /// Fetch every default feed in catalog order. A failing feed never stops the run.
    pub fn fetch_all(&self) -> Vec<SourceOutcome> {
        self.fetch_kinds(&SourceKind::ALL)
    }

    /// Same as [`fetch_all`](Self::fetch_all), restricted to `kinds`
    pub fn fetch_kinds(&self, kinds: &[SourceKind]) -> Vec<SourceOutcome> {
        let mut outcomes = Vec::new();

        for source in self.source_registry.sources() {
            if !kinds.contains(&source.kind()) {
                continue;
            }

            for url in source.default_feed_urls() {
                let result = source.parse_feed(&url);
                if let Err(e) = &result {
                    warn!(
                        source = %source.kind(),
                        url = %url,
                        transport = e.is_transport(),
                        error = %e,
                        "feed failed"
                    );
                }

                outcomes.push(SourceOutcome {
                    kind: source.kind(),
                    url,
                    result,
                });
            }
        }

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        info!(feeds = outcomes.len(), failed, "aggregate fetch finished");

        outcomes
    }
}
