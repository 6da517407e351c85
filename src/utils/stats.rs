use crate::api::models::{Transaksi, User};
use crate::utils::time::{format_tanggal, parse_event_timestamp};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Group transactions by local calendar day, preserving first-seen date
/// order. Records with an unparseable timestamp are left out.
pub fn group_by_date(transaksis: &[Transaksi]) -> Vec<(String, Vec<Transaksi>)> {
    let mut groups: Vec<(String, Vec<Transaksi>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for transaksi in transaksis {
        let tanggal = match parse_event_timestamp(&transaksi.waktutransaksi) {
            Ok(waktu) => format_tanggal(waktu),
            Err(_) => continue,
        };

        match index.get(&tanggal) {
            Some(&at) => groups[at].1.push(transaksi.clone()),
            None => {
                index.insert(tanggal.clone(), groups.len());
                groups.push((tanggal, vec![transaksi.clone()]));
            }
        }
    }

    groups
}

/// Transaction count per status display name.
pub fn status_counts(transaksis: &[Transaksi]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for transaksi in transaksis {
        if let Some(status) = &transaksi.status {
            *counts.entry(status.namastatus.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Transaction count per office display name.
pub fn kantor_counts(transaksis: &[Transaksi]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for transaksi in transaksis {
        if let Some(kantor) = transaksi.user.as_ref().and_then(|u| u.kantor.as_ref()) {
            *counts.entry(kantor.namakantor.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Roster headcount per office id.
pub fn user_counts_by_kantor(users: &[User]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for user in users {
        if let Some(kantor) = &user.kantor {
            *counts.entry(kantor.idkantor.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Distinct users with a check-in or leave action on `today`, per office
/// id. Check-outs do not count towards presence.
pub fn today_activity_counts(transaksis: &[Transaksi], today: NaiveDate) -> HashMap<String, usize> {
    let mut present: HashMap<String, HashSet<String>> = HashMap::new();

    for transaksi in transaksis {
        let Some(user) = &transaksi.user else { continue };
        let Some(kantor) = &user.kantor else { continue };
        let Ok(waktu) = parse_event_timestamp(&transaksi.waktutransaksi) else {
            continue;
        };

        let aksi = transaksi.aksi.namaaksi.to_lowercase();
        if waktu.date() == today && (aksi == "masuk" || aksi == "izin") {
            present
                .entry(kantor.idkantor.clone())
                .or_default()
                .insert(user.nik.clone());
        }
    }

    present
        .into_iter()
        .map(|(idkantor, niks)| (idkantor, niks.len()))
        .collect()
}
