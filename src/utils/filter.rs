use crate::api::models::{Transaksi, User};

/// Keep transactions whose status display name matches, case-insensitively.
/// `None` keeps everything; records without a status never match a filter.
pub fn filter_by_status(transaksis: &[Transaksi], status: Option<&str>) -> Vec<Transaksi> {
    let Some(status) = status else {
        return transaksis.to_vec();
    };
    let wanted = status.to_lowercase();

    transaksis
        .iter()
        .filter(|t| {
            t.status
                .as_ref()
                .map(|s| s.namastatus.to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Keep transactions whose user's office matches, case-insensitively.
pub fn filter_by_kantor(transaksis: &[Transaksi], kantor: Option<&str>) -> Vec<Transaksi> {
    let Some(kantor) = kantor else {
        return transaksis.to_vec();
    };
    let wanted = kantor.to_lowercase();

    transaksis
        .iter()
        .filter(|t| {
            t.user
                .as_ref()
                .and_then(|u| u.kantor.as_ref())
                .map(|k| k.namakantor.to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Substring search over the acting user's name and NIK.
pub fn search(transaksis: &[Transaksi], term: &str) -> Vec<Transaksi> {
    if term.is_empty() {
        return transaksis.to_vec();
    }
    let term = term.to_lowercase();

    transaksis
        .iter()
        .filter(|t| {
            t.user
                .as_ref()
                .map(|u| {
                    u.nama.to_lowercase().contains(&term) || u.nik.to_lowercase().contains(&term)
                })
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

pub fn filter_users_by_kantor(users: &[User], kantor: Option<&str>) -> Vec<User> {
    let Some(kantor) = kantor else {
        return users.to_vec();
    };
    let wanted = kantor.to_lowercase();

    users
        .iter()
        .filter(|u| {
            u.kantor
                .as_ref()
                .map(|k| k.namakantor.to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Substring search over name, NIK, email and phone number.
pub fn search_users(users: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return users.to_vec();
    }
    let term = term.to_lowercase();

    users
        .iter()
        .filter(|u| {
            u.nama.to_lowercase().contains(&term)
                || u.nik.to_lowercase().contains(&term)
                || u.email.to_lowercase().contains(&term)
                || u.nohp.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
