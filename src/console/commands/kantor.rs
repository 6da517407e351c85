use crate::api::models::KantorPayload;
use crate::api::ApiClient;
use crate::utils::format::format_kantor_list;
use anyhow::Result;

pub async fn list(api: &ApiClient) -> Result<()> {
    let kantors = api.get_kantors().await?;
    println!("{}", format_kantor_list(&kantors));

    Ok(())
}

pub async fn add(api: &ApiClient, nama: &str) -> Result<()> {
    api.create_kantor(&KantorPayload {
        namakantor: nama.to_string(),
    })
    .await?;
    println!("Office {} created", nama);

    Ok(())
}

pub async fn update(api: &ApiClient, id: &str, nama: &str) -> Result<()> {
    api.update_kantor(
        id,
        &KantorPayload {
            namakantor: nama.to_string(),
        },
    )
    .await?;
    println!("Office {} updated", id);

    Ok(())
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
    api.delete_kantor(id).await?;
    println!("Office {} deleted", id);

    Ok(())
}
