use crate::api::models::Transaksi;
use crate::api::ApiClient;
use crate::config::Config;
use crate::export;
use crate::export::bulk::{export_per_user, ExportOptions};
use crate::utils::filter::{filter_by_kantor, filter_by_status, search};
use crate::utils::format::{format_kantor_tabs, format_log_listing, format_status_tabs};
use anyhow::Result;

pub async fn list(
    api: &ApiClient,
    status: Option<String>,
    kantor: Option<String>,
    term: Option<String>,
) -> Result<()> {
    let transaksis = api.get_transaksis().await?;
    let statuses = api.get_statuses().await?;
    let kantors = api.get_kantors().await?;

    // Tab counts mirror the web console: statuses over the full set,
    // offices over whatever the status filter left in place
    println!("{}", format_status_tabs(&statuses, &transaksis));
    let by_status = filter_by_status(&transaksis, status.as_deref());
    println!("{}", format_kantor_tabs(&kantors, &by_status));
    println!();

    let by_kantor = filter_by_kantor(&by_status, kantor.as_deref());
    let filtered = search(&by_kantor, term.as_deref().unwrap_or(""));
    print!("{}", format_log_listing(&filtered));

    Ok(())
}

pub async fn export(
    api: &ApiClient,
    config: &Config,
    status: Option<String>,
    kantor: Option<String>,
    term: Option<String>,
    output: String,
) -> Result<()> {
    let transaksis = api.get_transaksis().await?;
    let filtered = apply_filters(&transaksis, status.as_deref(), kantor.as_deref(), term.as_deref());

    let path = export::export_filtered(&filtered, &output, &config.export_dir).await?;
    println!("Exported {} transactions to {}", filtered.len(), path.display());

    Ok(())
}

pub async fn export_bulk(api: &ApiClient, config: &Config, base: Option<String>) -> Result<()> {
    let Some(base) = base else {
        anyhow::bail!("Bulk export aborted: no base file name given");
    };

    let users = api.get_users().await?;
    let transaksis = api.get_transaksis().await?;

    let options = ExportOptions::new(config.export_dir.clone(), config.export_delay_ms);
    let written = export_per_user(&users, &transaksis, &base, &options).await?;

    println!("Wrote {} documents to {}", written.len(), config.export_dir.display());

    Ok(())
}

fn apply_filters(
    transaksis: &[Transaksi],
    status: Option<&str>,
    kantor: Option<&str>,
    term: Option<&str>,
) -> Vec<Transaksi> {
    let by_status = filter_by_status(transaksis, status);
    let by_kantor = filter_by_kantor(&by_status, kantor);
    search(&by_kantor, term.unwrap_or(""))
}
