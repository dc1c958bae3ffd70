//! Per-table CSV export.
//!
//! Writes one `<table>.csv` per entity table with a header row. Timestamps
//! serialize as RFC 3339, prices with their 2 decimal places.

use crate::error::PopulateError;
use crate::metrics::PopulateMetrics;
use mart_types::{RecordSet, Table};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// CSV exporter that writes one file per table into a directory.
pub struct CsvExporter {
    out_dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter rooted at `out_dir` (created on demand).
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Export all tables of `sets`, returning write metrics.
    pub fn export(&self, sets: &[RecordSet]) -> Result<PopulateMetrics, PopulateError> {
        let start = Instant::now();
        fs::create_dir_all(&self.out_dir)?;

        let mut bytes_written = 0u64;
        for table in Table::ALL {
            let path = self.out_dir.join(format!("{table}.csv"));
            let mut writer = ::csv::Writer::from_path(&path)?;

            for set in sets {
                match table {
                    Table::User => writer.serialize(&set.user)?,
                    Table::Address => writer.serialize(&set.address)?,
                    Table::Category => writer.serialize(&set.category)?,
                    Table::Subcategory => writer.serialize(&set.subcategory)?,
                    Table::Product => writer.serialize(&set.product)?,
                    Table::ProductsSku => writer.serialize(&set.products_sku)?,
                    Table::Wishlist => writer.serialize(&set.wishlist)?,
                    Table::Payment => writer.serialize(&set.payment)?,
                    Table::Order => writer.serialize(&set.order)?,
                    Table::OrderItem => writer.serialize(&set.order_item)?,
                    Table::Cart => writer.serialize(&set.cart)?,
                }
            }
            writer.flush()?;
            bytes_written += fs::metadata(&path)?.len();
        }

        let metrics = PopulateMetrics {
            record_sets: sets.len() as u64,
            rows_written: sets.len() as u64 * Table::ALL.len() as u64,
            write_duration: start.elapsed(),
            bytes_written,
        };
        info!(
            out_dir = %self.out_dir.display(),
            rows = metrics.rows_written,
            "exported CSV tables"
        );
        Ok(metrics)
    }
}
