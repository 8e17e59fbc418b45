use crate::domain::SourceKind;
use crate::feed::extract::{DateRule, HtmlField, ImageStrategy, SummaryRule, ThumbnailPick};

/// Which optional record fields a source can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub author: bool,
    pub tags: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        author: false,
        tags: false,
    };
    pub const FULL: Capabilities = Capabilities {
        author: true,
        tags: true,
    };
}

/// Per-source extraction policy, consumed by `feed::normalize`.
#[derive(Debug, Clone, Copy)]
pub struct SourceProfile {
    pub kind: SourceKind,
    pub default_title: &'static str,
    pub date_rule: DateRule,
    pub summary_rule: SummaryRule,
    pub capabilities: Capabilities,
    pub default_author: Option<&'static str>,
    pub image_strategies: &'static [ImageStrategy],
}

use ImageStrategy::*;

pub const ZENN: SourceProfile = SourceProfile {
    kind: SourceKind::Zenn,
    default_title: "Zenn",
    date_rule: DateRule::PublishedOnly,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::NONE,
    default_author: None,
    image_strategies: &[ImageLink, Enclosure],
};

pub const QIITA: SourceProfile = SourceProfile {
    kind: SourceKind::Qiita,
    default_title: "Qiita",
    date_rule: DateRule::PublishedThenUpdated,
    summary_rule: SummaryRule::SummaryThenContent,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[ImageLink, EmbeddedImg(HtmlField::Summary)],
};

pub const CLASSMETHOD: SourceProfile = SourceProfile {
    kind: SourceKind::ClassMethod,
    default_title: "ClassMethod Developers IO",
    date_rule: DateRule::PublishedOnly,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[ImageLink, EmbeddedImg(HtmlField::Content)],
};

pub const AWS: SourceProfile = SourceProfile {
    kind: SourceKind::Aws,
    default_title: "AWS Blog",
    date_rule: DateRule::PublishedThenUpdated,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[
        Thumbnail(ThumbnailPick::First),
        MediaContent,
        Enclosure,
        EmbeddedImg(HtmlField::Summary),
    ],
};

pub const GOOGLE_CLOUD: SourceProfile = SourceProfile {
    kind: SourceKind::GoogleCloud,
    default_title: "Google Cloud Blog",
    date_rule: DateRule::PublishedOnly,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[
        Thumbnail(ThumbnailPick::First),
        Enclosure,
        EmbeddedImg(HtmlField::Summary),
    ],
};

pub const HUGGING_FACE: SourceProfile = SourceProfile {
    kind: SourceKind::HuggingFace,
    default_title: "Hugging Face Blog",
    date_rule: DateRule::PublishedThenUpdated,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[Enclosure, EmbeddedImg(HtmlField::Summary)],
};

pub const OPENAI: SourceProfile = SourceProfile {
    kind: SourceKind::OpenAi,
    default_title: "OpenAI Blog",
    date_rule: DateRule::PublishedThenUpdated,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: Some("OpenAI"),
    image_strategies: &[
        Thumbnail(ThumbnailPick::First),
        Enclosure,
        EmbeddedImg(HtmlField::Summary),
    ],
};

pub const DEEPMIND: SourceProfile = SourceProfile {
    kind: SourceKind::DeepMind,
    default_title: "DeepMind Blog",
    date_rule: DateRule::PublishedThenUpdated,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: Some("DeepMind"),
    image_strategies: &[MediaContent, Enclosure, EmbeddedImg(HtmlField::Summary)],
};

pub const GGEN: SourceProfile = SourceProfile {
    kind: SourceKind::GGen,
    default_title: "G-GEN Tech Blog",
    date_rule: DateRule::PublishedOnly,
    summary_rule: SummaryRule::SummaryOnly,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[EmbeddedImg(HtmlField::Content), EmbeddedImg(HtmlField::Summary)],
};

pub const GOOGLE_AI: SourceProfile = SourceProfile {
    kind: SourceKind::GoogleAi,
    default_title: "Google AI Blog",
    date_rule: DateRule::PublishedThenUpdated,
    summary_rule: SummaryRule::LongerOfSummaryAndContent,
    capabilities: Capabilities::FULL,
    default_author: None,
    image_strategies: &[
        Thumbnail(ThumbnailPick::Largest),
        Enclosure,
        EmbeddedImgAnyCase(HtmlField::Summary),
        EmbeddedSrc(HtmlField::Summary),
    ],
};

/// Profiles of every feed-backed source, in catalog order
pub const FEED_PROFILES: [&SourceProfile; 10] = [
    &ZENN,
    &QIITA,
    &CLASSMETHOD,
    &AWS,
    &GOOGLE_CLOUD,
    &HUGGING_FACE,
    &OPENAI,
    &DEEPMIND,
    &GGEN,
    &GOOGLE_AI,
];

pub fn for_kind(kind: SourceKind) -> Option<&'static SourceProfile> {
    FEED_PROFILES.iter().copied().find(|p| p.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feed_kind_has_a_profile() {
        for kind in SourceKind::ALL {
            let found = for_kind(kind);
            if kind == SourceKind::AnthropicNews {
                assert!(found.is_none());
            } else {
                assert_eq!(found.map(|p| p.kind), Some(kind));
            }
        }
    }

    fn is_embedded(strategy: &ImageStrategy) -> bool {
        matches!(strategy, EmbeddedImg(_) | EmbeddedImgAnyCase(_) | EmbeddedSrc(_))
    }

    #[test]
    fn test_structured_strategies_precede_embedded_html() {
        for profile in FEED_PROFILES {
            let first_embedded = profile.image_strategies.iter().position(is_embedded);
            let last_structured = profile.image_strategies.iter().rposition(|s| !is_embedded(s));

            if let (Some(embedded), Some(structured)) = (first_embedded, last_structured) {
                assert!(structured < embedded, "{} orders html before structured", profile.kind);
            }
        }
    }

    #[test]
    fn test_only_zenn_lacks_capabilities() {
        assert_eq!(ZENN.capabilities, Capabilities::NONE);
        assert!(FEED_PROFILES
            .iter()
            .filter(|p| p.kind != SourceKind::Zenn)
            .all(|p| p.capabilities == Capabilities::FULL));
    }
}
