pub mod client;
pub mod document;
pub mod extract;
pub mod fetcher;
pub mod normalize;

pub use client::FeedClient;
pub use document::{FeedDocument, FeedEntry};
pub use fetcher::{FeedFetcher, HttpFetcher};
pub use normalize::normalize;
