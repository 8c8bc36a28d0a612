use crate::core::serpapi::SerpApiClient;
use crate::core::{ConfigProvider, ContactRecord, EnrichResult, LeadSheet, Pipeline, Storage};
use crate::utils::error::{EnrichError, Result};
use std::time::Duration;

/// Sequential enrichment pipeline: CSV in, one SerpAPI lookup per row, CSV
/// out with the contact columns appended.
pub struct LeadPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    serpapi: SerpApiClient,
}

impl<S: Storage, C: ConfigProvider> LeadPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let serpapi = SerpApiClient::new(
            config.api_endpoint(),
            config.api_key(),
            config.language(),
            config.region(),
            config.request_timeout_secs(),
        )?;

        Ok(Self {
            storage,
            config,
            serpapi,
        })
    }

    fn render_csv(sheet: &LeadSheet, records: &[ContactRecord]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header_row: Vec<&str> = sheet.headers.iter().map(String::as_str).collect();
        header_row.extend(ContactRecord::COLUMNS);
        writer.write_record(&header_row)?;

        for (row, record) in sheet.rows.iter().zip(records) {
            let mut out: Vec<&str> = row.iter().map(String::as_str).collect();
            out.extend(record.to_row());
            writer.write_record(&out)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| EnrichError::ProcessingError {
                message: format!("Failed to flush CSV output: {}", e),
            })?;

        String::from_utf8(bytes).map_err(|e| EnrichError::ProcessingError {
            message: format!("Output CSV is not valid UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LeadPipeline<S, C> {
    async fn extract(&self) -> Result<LeadSheet> {
        let data = self.storage.read_file(self.config.input_path()).await?;

        let mut reader = csv::Reader::from_reader(data.as_slice());
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        LeadSheet::new(headers, rows)
    }

    async fn transform(&self, sheet: LeadSheet) -> Result<EnrichResult> {
        let total = sheet.len();
        let delay = Duration::from_millis(self.config.delay_ms());
        let mut records = Vec::with_capacity(total);

        for (i, row) in sheet.rows.iter().enumerate() {
            let lead = sheet.lead(row);
            println!("[{}/{}] {} ({})", i + 1, total, lead.name, lead.city);

            // 單筆失敗不可中斷整批:記錄錯誤並補上空白欄位
            let record = match self.serpapi.fetch(&lead.name, &lead.city).await {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("❌ Error: {}", e);
                    tracing::warn!("Lead {}/{} ({}) failed: {}", i + 1, total, lead.name, e);
                    ContactRecord::default()
                }
            };
            records.push(record);

            // Fixed pacing after every lead, success or failure.
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        let csv_output = Self::render_csv(&sheet, &records)?;
        Ok(EnrichResult {
            records,
            csv_output,
        })
    }

    async fn load(&self, result: EnrichResult) -> Result<String> {
        let path = self.config.output_path();
        self.storage
            .write_file(path, result.csv_output.as_bytes())
            .await?;
        Ok(path.to_string())
    }
}
