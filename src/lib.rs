pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{LocalStorage, NoopSender};
pub use crate::config::CliConfig;
pub use crate::core::fetcher::{AssetFetcher, AssetKind, SourceSpec};
pub use crate::core::renderer::{render_page, Page, PageAssets};
pub use crate::core::session::Session;
pub use crate::domain::model::{AssetResult, ContentCatalog, ResumeVariant, Section};
pub use crate::utils::error::{Result, SiteError};
