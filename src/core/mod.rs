pub mod classifier;
pub mod etl;
pub mod pipeline;
pub mod serpapi;

pub use crate::domain::model::{ContactRecord, EnrichResult, Lead, LeadSheet, SocialProfile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
