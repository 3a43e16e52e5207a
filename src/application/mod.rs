//! Application services: validation, aggregation, filtering, composition,
//! and the advice pipeline

pub mod advice;
pub mod browser;
pub mod composer;
pub mod summary;
pub mod validator;

pub use advice::AdviceService;
pub use browser::{filter, ImpactFilter};
pub use composer::{compose, ExportableReport};
pub use summary::{summarize, Summary};
pub use validator::validate;
