pub mod bulk;
pub mod dedup;
pub mod document;
pub mod event;
pub mod pivot;

use crate::api::models::Transaksi;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run the export pipeline over an already-filtered transaction set and
/// write the basic (7-column) document as `<name>.csv` in `out_dir`.
pub async fn export_filtered(
    transaksis: &[Transaksi],
    name: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let rows = pivot::pivot_daily(&dedup::dedupe_earliest(event::normalize(transaksis)));
    let csv = document::render_csv(&rows, false);

    let path = out_dir.join(format!("{}.csv", name));
    tokio::fs::write(&path, csv).await?;

    Ok(path)
}
