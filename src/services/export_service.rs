use opml::{Head, Outline, OPML};

use crate::errors::{TechfeedError, TechfeedResult};
use crate::sources::{anthropic, profile, SourceRegistry};

pub const OPML_TITLE: &str = "techfeed sources";

pub struct ExportService {
    source_registry: SourceRegistry,
}

impl ExportService {
    pub fn new(source_registry: SourceRegistry) -> Self {
        Self { source_registry }
    }

    /// One outline per default feed URL
    pub fn export_opml(&self) -> TechfeedResult<String> {
        let mut opml = OPML::default();
        opml.head = Some(Head {
            title: Some(OPML_TITLE.to_string()),
            ..Default::default()
        });

        for source in self.source_registry.sources() {
            let title = profile::for_kind(source.kind())
                .map(|p| p.default_title)
                .unwrap_or(anthropic::FEED_TITLE);

            for url in source.default_feed_urls() {
                opml.body.outlines.push(Outline {
                    text: title.to_string(),
                    r#type: Some("rss".to_string()),
                    xml_url: Some(url),
                    title: Some(title.to_string()),
                    ..Default::default()
                });
            }
        }

        opml.to_string()
            .map_err(|e| TechfeedError::OpmlParse(e.to_string()))
    }

    /// Feed URLs listed in an OPML document, in document order
    pub fn read_opml(content: &str) -> TechfeedResult<Vec<String>> {
        let opml = OPML::from_str(content).map_err(|e| TechfeedError::OpmlParse(e.to_string()))?;
        Ok(collect_feed_urls(&opml.body.outlines))
    }
}

fn collect_feed_urls(outlines: &[Outline]) -> Vec<String> {
    let mut urls = Vec::new();

    for outline in outlines {
        if let Some(url) = outline.xml_url.as_deref().filter(|u| !u.is_empty()) {
            urls.push(url.to_string());
        }
        urls.extend(collect_feed_urls(&outline.outlines));
    }

    urls
}
