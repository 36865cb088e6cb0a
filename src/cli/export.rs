//! Export command implementation

use crate::config::Config;
use crate::dashboard::DashboardQuery;
use crate::export::export_to_file;
use crate::snapshot::SnapshotCache;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Coin symbol to include (repeatable); all coins when omitted
    #[arg(short = 's', long = "symbol")]
    pub symbols: Vec<String>,

    /// Output file; defaults to the configured export path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Query whose selection is exported; top-N does not apply to exports
    pub fn query(&self, config: &Config) -> DashboardQuery {
        DashboardQuery {
            symbols: (!self.symbols.is_empty()).then(|| self.symbols.clone()),
            top_n: config.dashboard.top_n,
            timeframe: config.dashboard.timeframe,
            sort_values: config.dashboard.sort_values,
        }
    }

    /// Destination file
    pub fn path(&self, config: &Config) -> PathBuf {
        self.output.clone().unwrap_or_else(|| config.export.path())
    }

    pub async fn execute(
        &self,
        cache: &SnapshotCache,
        config: &Config,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        let table = cache.get_or_compute(date).await?;
        let records = self.query(config).apply(&table).selected;

        let path = self.path(config);
        export_to_file(&path, &records)?;

        println!("Wrote {} rows to {}", records.len(), path.display());
        Ok(())
    }
}
