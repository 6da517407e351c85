use crate::api::models::{KantorId, NewUser, RoleId, UserUpdate};
use crate::api::ApiClient;
use crate::utils::filter::{filter_users_by_kantor, search_users};
use crate::utils::format::{format_log_listing, format_user_detail, format_user_list};
use anyhow::Result;

pub struct AddUserArgs {
    pub nik: String,
    pub nama: String,
    pub email: String,
    pub password: String,
    pub tanggallahir: String,
    pub nohp: String,
    pub role: String,
    pub kantor: String,
}

pub struct UpdateUserArgs {
    pub nama: Option<String>,
    pub email: Option<String>,
    pub nohp: Option<String>,
    pub tanggallahir: Option<String>,
    pub role: Option<String>,
    pub kantor: Option<String>,
}

pub async fn list(api: &ApiClient, kantor: Option<String>, term: Option<String>) -> Result<()> {
    let users = api.get_users().await?;

    let filtered = filter_users_by_kantor(&users, kantor.as_deref());
    let filtered = search_users(&filtered, term.as_deref().unwrap_or(""));

    print!("{}", format_user_list(&filtered));

    Ok(())
}

pub async fn show(api: &ApiClient, nik: &str) -> Result<()> {
    let user = api.get_user(nik).await?;
    println!("{}", format_user_detail(&user));

    // The user's own activity, grouped the way the log view shows it
    let transaksis = api.get_transaksis().await?;
    let own: Vec<_> = transaksis
        .into_iter()
        .filter(|t| t.user.as_ref().map(|u| u.nik == nik).unwrap_or(false))
        .collect();

    print!("{}", format_log_listing(&own));

    Ok(())
}

pub async fn add(api: &ApiClient, args: AddUserArgs) -> Result<()> {
    let user = NewUser {
        nik: args.nik.clone(),
        nama: args.nama,
        email: args.email,
        password: args.password,
        tanggallahir: args.tanggallahir,
        nohp: args.nohp,
        role_user: RoleId { idrole: args.role },
        kantor: KantorId {
            idkantor: args.kantor,
        },
    };

    api.create_user(&user).await?;
    println!("User {} created", args.nik);

    Ok(())
}

pub async fn update(api: &ApiClient, nik: &str, args: UpdateUserArgs) -> Result<()> {
    // Omitted flags keep the values currently on record
    let current = api.get_user(nik).await?;

    let payload = UserUpdate {
        nik: current.nik.clone(),
        nama: args.nama.unwrap_or(current.nama),
        email: args.email.unwrap_or(current.email),
        nohp: args.nohp.unwrap_or(current.nohp),
        tanggallahir: args.tanggallahir.unwrap_or(current.tanggallahir),
        role_user: RoleId {
            idrole: args
                .role
                .or(current.role_user.map(|r| r.idrole))
                .unwrap_or_default(),
        },
        kantor: KantorId {
            idkantor: args
                .kantor
                .or(current.kantor.map(|k| k.idkantor))
                .unwrap_or_default(),
        },
    };

    api.update_user(nik, &payload).await?;
    println!("User {} updated", nik);

    Ok(())
}

pub async fn delete(api: &ApiClient, nik: &str) -> Result<()> {
    api.delete_user(nik).await?;
    println!("User {} deleted", nik);

    Ok(())
}
