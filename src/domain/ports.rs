use crate::domain::model::{EnrichResult, LeadSheet};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn language(&self) -> &str;
    fn region(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn delay_ms(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<LeadSheet>;
    async fn transform(&self, sheet: LeadSheet) -> Result<EnrichResult>;
    async fn load(&self, result: EnrichResult) -> Result<String>;
}
