pub mod chart;
pub mod fetcher;
pub mod renderer;
pub mod resume;
pub mod session;

pub use crate::domain::model::{AssetResult, ContentCatalog, Section};
pub use crate::domain::ports::{ConfigProvider, MessageSender, Storage};
pub use crate::utils::error::Result;
