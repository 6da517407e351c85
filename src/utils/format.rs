use crate::api::models::{Kantor, RoleUser, Status, Transaksi, User};
use crate::utils::stats;
use crate::utils::time::{format_jam, parse_event_timestamp};
use chrono::NaiveDate;

pub fn format_dashboard(
    kantors: &[Kantor],
    users: &[User],
    transaksis: &[Transaksi],
    today: NaiveDate,
) -> String {
    if kantors.is_empty() {
        return "No offices found.".to_string();
    }

    let headcounts = stats::user_counts_by_kantor(users);
    let activity = stats::today_activity_counts(transaksis, today);

    let mut out = String::new();
    out.push_str(&format!("Dashboard for {}\n", today.format("%Y-%m-%d")));

    for kantor in kantors {
        out.push_str(&format!(
            "  {}: {} user, {} active today\n",
            kantor.namakantor,
            headcounts.get(&kantor.idkantor).copied().unwrap_or(0),
            activity.get(&kantor.idkantor).copied().unwrap_or(0),
        ));
    }

    out
}

/// Status tab line of the log view: the All bucket plus one count per
/// known status, mirroring the console's filter tabs.
pub fn format_status_tabs(statuses: &[Status], transaksis: &[Transaksi]) -> String {
    let counts = stats::status_counts(transaksis);

    let mut out = format!("All ({})", transaksis.len());
    for status in statuses {
        out.push_str(&format!(
            "  {} ({})",
            status.namastatus,
            counts.get(&status.namastatus).copied().unwrap_or(0)
        ));
    }

    out
}

/// Office tab line of the log view; counts reflect whatever subset the
/// status filter left in place.
pub fn format_kantor_tabs(kantors: &[Kantor], transaksis: &[Transaksi]) -> String {
    let counts = stats::kantor_counts(transaksis);

    let mut out = format!("All ({})", transaksis.len());
    for kantor in kantors {
        out.push_str(&format!(
            "  {} ({})",
            kantor.namakantor,
            counts.get(&kantor.namakantor).copied().unwrap_or(0)
        ));
    }

    out
}

pub fn format_log_listing(transaksis: &[Transaksi]) -> String {
    if transaksis.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut out = String::new();

    for (tanggal, group) in stats::group_by_date(transaksis) {
        out.push_str(&format!("{}\n", tanggal));

        for transaksi in group {
            let jam = parse_event_timestamp(&transaksi.waktutransaksi)
                .map(format_jam)
                .unwrap_or_default();
            let (nik, nama) = transaksi
                .user
                .as_ref()
                .map(|u| (u.nik.as_str(), u.nama.as_str()))
                .unwrap_or(("-", "-"));
            let status = transaksi
                .status
                .as_ref()
                .map(|s| s.namastatus.as_str())
                .unwrap_or("-");

            out.push_str(&format!(
                "  {}  {}  {}  {}  {}  {}\n",
                jam, nik, nama, transaksi.aksi.namaaksi, status, transaksi.keterangan
            ));
        }
        out.push('\n');
    }

    out
}

pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let mut out = String::new();
    for (i, user) in users.iter().enumerate() {
        let role = user
            .role_user
            .as_ref()
            .map(|r| r.namarole.as_str())
            .unwrap_or("-");
        let kantor = user
            .kantor
            .as_ref()
            .map(|k| k.namakantor.as_str())
            .unwrap_or("-");

        out.push_str(&format!(
            "{:>3}. {}  {}  {}  {}  {}  {}\n",
            i + 1,
            user.nik,
            user.nama,
            user.email,
            user.nohp,
            role,
            kantor
        ));
    }

    out
}

pub fn format_user_detail(user: &User) -> String {
    let role = user
        .role_user
        .as_ref()
        .map(|r| r.namarole.as_str())
        .unwrap_or("-");
    let kantor = user
        .kantor
        .as_ref()
        .map(|k| k.namakantor.as_str())
        .unwrap_or("-");

    format!(
        "NIK: {}\nNama: {}\nEmail: {}\nNo HP: {}\nTanggal Lahir: {}\nRole: {}\nKantor: {}\n",
        user.nik, user.nama, user.email, user.nohp, user.tanggallahir, role, kantor
    )
}

pub fn format_kantor_list(kantors: &[Kantor]) -> String {
    if kantors.is_empty() {
        return "No offices found.".to_string();
    }

    kantors
        .iter()
        .map(|k| format!("{}  {}", k.idkantor, k.namakantor))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_role_list(roles: &[RoleUser]) -> String {
    if roles.is_empty() {
        return "No roles found.".to_string();
    }

    roles
        .iter()
        .map(|r| format!("{}  {}", r.idrole, r.namarole))
        .collect::<Vec<_>>()
        .join("\n")
}
