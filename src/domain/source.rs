use crate::errors::TechfeedError;

/// Feed language for sources that publish one feed per language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ja,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// Upper-case form appended to feed titles, e.g. "AWS Blog (JA)"
    pub fn suffix(&self) -> &'static str {
        match self {
            Language::Ja => "JA",
            Language::En => "EN",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = TechfeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            _ => Err(TechfeedError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Zenn,
    Qiita,
    ClassMethod,
    Aws,
    GoogleCloud,
    HuggingFace,
    OpenAi,
    DeepMind,
    GGen,
    GoogleAi,
    AnthropicNews,
}

impl SourceKind {
    pub const ALL: [SourceKind; 11] = [
        SourceKind::Zenn,
        SourceKind::Qiita,
        SourceKind::ClassMethod,
        SourceKind::Aws,
        SourceKind::GoogleCloud,
        SourceKind::HuggingFace,
        SourceKind::OpenAi,
        SourceKind::DeepMind,
        SourceKind::GGen,
        SourceKind::GoogleAi,
        SourceKind::AnthropicNews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Zenn => "zenn",
            SourceKind::Qiita => "qiita",
            SourceKind::ClassMethod => "classmethod",
            SourceKind::Aws => "aws",
            SourceKind::GoogleCloud => "googlecloud",
            SourceKind::HuggingFace => "huggingface",
            SourceKind::OpenAi => "openai",
            SourceKind::DeepMind => "deepmind",
            SourceKind::GGen => "ggen",
            SourceKind::GoogleAi => "googleai",
            SourceKind::AnthropicNews => "anthropic",
        }
    }

    /// Source identifier stamped on articles, e.g. "aws_ja"
    pub fn source_id(&self, lang: Option<Language>) -> String {
        match lang {
            Some(lang) => format!("{}_{}", self.as_str(), lang.code()),
            None => self.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = TechfeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zenn" => Ok(SourceKind::Zenn),
            "qiita" => Ok(SourceKind::Qiita),
            "classmethod" | "devio" => Ok(SourceKind::ClassMethod),
            "aws" => Ok(SourceKind::Aws),
            "googlecloud" | "gcp" => Ok(SourceKind::GoogleCloud),
            "huggingface" | "hf" => Ok(SourceKind::HuggingFace),
            "openai" => Ok(SourceKind::OpenAi),
            "deepmind" => Ok(SourceKind::DeepMind),
            "ggen" | "g-gen" => Ok(SourceKind::GGen),
            "googleai" => Ok(SourceKind::GoogleAi),
            "anthropic" => Ok(SourceKind::AnthropicNews),
            _ => Err(TechfeedError::UnsupportedSource(s.to_string())),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
