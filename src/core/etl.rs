use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EnrichEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EnrichEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting lead enrichment...");

        // Extract
        println!("Reading leads...");
        let sheet = self.pipeline.extract().await?;
        println!("Loaded {} leads", sheet.len());
        self.monitor.log_phase("extract");

        // Transform
        println!("Enriching leads...");
        let result = self.pipeline.transform(sheet).await?;
        println!("Enriched {} leads", result.records.len());
        self.monitor.log_phase("transform");

        // Load
        println!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_phase("load");

        self.monitor.log_summary();

        Ok(output_path)
    }
}
