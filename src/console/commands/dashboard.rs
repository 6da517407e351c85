use crate::api::ApiClient;
use crate::utils::format::format_dashboard;
use crate::utils::time::current_date;
use anyhow::Result;

pub async fn run(api: &ApiClient) -> Result<()> {
    let kantors = api.get_kantors().await?;
    let users = api.get_users().await?;
    let transaksis = api.get_transaksis().await?;

    print!(
        "{}",
        format_dashboard(&kantors, &users, &transaksis, current_date())
    );

    Ok(())
}
