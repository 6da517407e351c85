use crate::export::event::LogEvent;
use crate::utils::time::{format_jam, format_tanggal, work_duration};
use chrono::NaiveDate;
use std::collections::HashMap;

/// One export row: a user's attendance summary for a single day. Time
/// fields are empty strings when no event of that kind occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub nik: String,
    pub nama: String,
    pub kantor: String,
    pub tanggal: String,
    pub jam_masuk: String,
    pub jam_pulang: String,
    pub jam_izin: String,
    pub waktu_kerja: String,
}

/// Fold deduplicated events into one summary per (NIK, day). Row order
/// follows the first event seen for each pair; the first event also seeds
/// the display attributes. Actions other than masuk/pulang/izin fill no
/// slot.
pub fn pivot_daily(events: &[LogEvent]) -> Vec<DaySummary> {
    let mut rows: Vec<DaySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for event in events {
        let tanggal = format_tanggal(event.waktu);
        let key = format!("{}-{}", event.nik, tanggal);

        let at = match index.get(&key) {
            Some(&at) => at,
            None => {
                index.insert(key, rows.len());
                rows.push(DaySummary {
                    nik: event.nik.clone(),
                    nama: event.nama.clone(),
                    kantor: event.kantor.clone(),
                    tanggal,
                    ..DaySummary::default()
                });
                rows.len() - 1
            }
        };

        let jam = format_jam(event.waktu);
        match event.aksi.to_lowercase().as_str() {
            "masuk" => rows[at].jam_masuk = jam,
            "pulang" => rows[at].jam_pulang = jam,
            "izin" => rows[at].jam_izin = jam,
            _ => {}
        }
    }

    for row in &mut rows {
        if row.jam_masuk.is_empty() || row.jam_pulang.is_empty() {
            continue;
        }
        if let Ok(tanggal) = NaiveDate::parse_from_str(&row.tanggal, "%Y-%m-%d") {
            if let Some(durasi) = work_duration(tanggal, &row.jam_masuk, &row.jam_pulang) {
                row.waktu_kerja = durasi;
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::dedup::dedupe_earliest;

    fn event(nik: &str, aksi: &str, day: u32, h: u32, m: u32, s: u32) -> LogEvent {
        LogEvent {
            idtransaksi: format!("{}-{}-{}:{}:{}", nik, aksi, h, m, s),
            nik: nik.to_string(),
            nama: "Budi".to_string(),
            kantor: "Pusat".to_string(),
            aksi: aksi.to_string(),
            waktu: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap(),
            keterangan: String::new(),
            koordinat: String::new(),
            fotobukti: String::new(),
        }
    }

    #[test]
    fn fills_the_three_recognized_slots() {
        let rows = pivot_daily(&[
            event("123", "masuk", 11, 8, 0, 0),
            event("123", "pulang", 11, 17, 0, 0),
            event("123", "izin", 11, 10, 0, 0),
        ]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].jam_masuk, "08:00:00");
        assert_eq!(rows[0].jam_pulang, "17:00:00");
        assert_eq!(rows[0].jam_izin, "10:00:00");
        assert_eq!(rows[0].tanggal, "2024-03-11");
    }

    #[test]
    fn action_kinds_match_case_insensitively() {
        let rows = pivot_daily(&[event("123", "Masuk", 11, 8, 0, 0)]);
        assert_eq!(rows[0].jam_masuk, "08:00:00");
    }

    #[test]
    fn unrecognized_actions_fill_no_slot() {
        let rows = pivot_daily(&[event("123", "lembur", 11, 20, 0, 0)]);

        assert_eq!(rows.len(), 1);
        assert!(rows[0].jam_masuk.is_empty());
        assert!(rows[0].jam_pulang.is_empty());
        assert!(rows[0].jam_izin.is_empty());
        assert!(rows[0].waktu_kerja.is_empty());
    }

    #[test]
    fn earliest_check_in_wins_after_dedup() {
        let deduped = dedupe_earliest(vec![
            event("123", "masuk", 11, 9, 10, 0),
            event("123", "masuk", 11, 8, 55, 0),
        ]);
        let rows = pivot_daily(&deduped);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].jam_masuk, "08:55:00");
    }

    #[test]
    fn work_duration_needs_both_check_in_and_out() {
        let only_in = pivot_daily(&[event("123", "masuk", 11, 8, 0, 0)]);
        assert!(only_in[0].waktu_kerja.is_empty());

        let both = pivot_daily(&[
            event("123", "masuk", 11, 8, 0, 0),
            event("123", "pulang", 11, 17, 0, 0),
        ]);
        assert_eq!(both[0].waktu_kerja, "09:00");
    }

    #[test]
    fn separate_days_make_separate_rows() {
        let rows = pivot_daily(&[
            event("123", "masuk", 11, 8, 0, 0),
            event("123", "masuk", 12, 8, 5, 0),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tanggal, "2024-03-11");
        assert_eq!(rows[1].tanggal, "2024-03-12");
    }
}
