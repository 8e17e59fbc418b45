pub mod aggregate_service;
pub mod export_service;

pub use aggregate_service::{AggregateService, SourceOutcome};
pub use export_service::ExportService;
