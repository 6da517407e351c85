use crate::api::ApiClient;
use crate::utils::format::format_role_list;
use anyhow::Result;

pub async fn list(api: &ApiClient) -> Result<()> {
    let roles = api.get_roleusers().await?;
    println!("{}", format_role_list(&roles));

    Ok(())
}
