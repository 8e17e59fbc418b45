pub mod traits;
pub mod profile;
pub mod single;
pub mod zenn;
pub mod qiita;
pub mod classmethod;
pub mod aws;
pub mod googlecloud;
pub mod huggingface;
pub mod openai;
pub mod deepmind;
pub mod ggen;
pub mod googleai;
pub mod anthropic;
pub mod registry;

pub use profile::SourceProfile;
pub use registry::SourceRegistry;
pub use single::SingleFeedSource;
pub use traits::FeedSource;
