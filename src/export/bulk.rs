use crate::api::models::{Transaksi, User};
use crate::export::dedup::dedupe_earliest;
use crate::export::document::render_csv;
use crate::export::event::{normalize, LogEvent};
use crate::export::pivot::{pivot_daily, DaySummary};
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Pause between successive document writes. The browser original
    /// throttled downloads at 500 ms; the contract is kept configurable.
    pub delay: Duration,
}

impl ExportOptions {
    pub fn new(out_dir: impl Into<PathBuf>, delay_ms: u64) -> Self {
        Self {
            out_dir: out_dir.into(),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Replace everything outside `[A-Za-z0-9]` with underscores so the
/// result is a safe file name on any host.
pub fn sanitize_file_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// One export document per known user identity: the roster union'd with
/// identities that only appear in the log, roster first. Users without
/// any activity still get a document with a single placeholder row, so
/// the emitted set matches the user directory. Writes are strictly
/// sequential with the configured pause between them; a blank base name
/// aborts before anything is emitted.
pub async fn export_per_user(
    users: &[User],
    transaksis: &[Transaksi],
    base_name: &str,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    let base_name = base_name.trim();
    if base_name.is_empty() {
        anyhow::bail!("Bulk export needs a base file name");
    }

    let events = normalize(transaksis);

    let mut roster: HashMap<String, &User> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for user in users {
        if !roster.contains_key(&user.nik) {
            order.push(user.nik.clone());
            roster.insert(user.nik.clone(), user);
        }
    }

    let mut by_nik: HashMap<String, Vec<LogEvent>> = HashMap::new();
    for event in events {
        if !roster.contains_key(&event.nik) && !by_nik.contains_key(&event.nik) {
            order.push(event.nik.clone());
        }
        by_nik.entry(event.nik.clone()).or_default().push(event);
    }

    let mut written = Vec::with_capacity(order.len());

    for (i, nik) in order.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(options.delay).await;
        }

        let user_events = by_nik.remove(nik).unwrap_or_default();

        let (nama, kantor) = match roster.get(nik) {
            Some(user) => (
                user.nama.clone(),
                user.kantor
                    .as_ref()
                    .map(|k| k.namakantor.clone())
                    .unwrap_or_default(),
            ),
            None => match user_events.first() {
                Some(first) => (first.nama.clone(), first.kantor.clone()),
                None => (String::new(), String::new()),
            },
        };

        let mut rows = pivot_daily(&dedupe_earliest(user_events));
        if rows.is_empty() {
            rows.push(DaySummary {
                nik: nik.clone(),
                nama: nama.clone(),
                kantor: kantor.clone(),
                ..DaySummary::default()
            });
        }

        let document = render_csv(&rows, true);
        let file_name = format!(
            "{}.csv",
            sanitize_file_name(&format!("{}_{}_{}", base_name, nik, nama))
        );
        let path = options.out_dir.join(&file_name);
        tokio::fs::write(&path, document).await?;

        tracing::info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Aksi, Kantor, TransaksiUser};

    fn roster_user(nik: &str, nama: &str) -> User {
        User {
            nik: nik.to_string(),
            nama: nama.to_string(),
            email: String::new(),
            nohp: String::new(),
            tanggallahir: String::new(),
            fotoselfie: String::new(),
            role_user: None,
            kantor: Some(Kantor {
                idkantor: "k1".to_string(),
                namakantor: "Pusat".to_string(),
            }),
        }
    }

    fn transaksi(id: &str, nik: &str, nama: &str, aksi: &str, waktu: &str) -> Transaksi {
        Transaksi {
            idtransaksi: id.to_string(),
            keterangan: String::new(),
            waktutransaksi: waktu.to_string(),
            koordinat: String::new(),
            fotobukti: String::new(),
            aksi: Aksi {
                namaaksi: aksi.to_string(),
            },
            status: None,
            user: Some(TransaksiUser {
                nik: nik.to_string(),
                nama: nama.to_string(),
                kantor: Some(Kantor {
                    idkantor: "k2".to_string(),
                    namakantor: "Cabang".to_string(),
                }),
            }),
        }
    }

    fn temp_out_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("absenofc-bulk-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn one_document_per_identity_in_the_union() {
        let out_dir = temp_out_dir("union");
        let options = ExportOptions::new(&out_dir, 0);

        let users = vec![roster_user("123", "Budi"), roster_user("456", "Sari")];
        // 789 only appears in the log
        let transaksis = vec![
            transaksi("t1", "123", "Budi", "masuk", "2024-03-11T08:00:00"),
            transaksi("t2", "789", "Tono", "masuk", "2024-03-11T08:05:00"),
        ];

        let written = export_per_user(&users, &transaksis, "Export", &options)
            .await
            .unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(
            written[0].file_name().unwrap().to_str().unwrap(),
            "Export_123_Budi.csv"
        );
        assert_eq!(
            written[1].file_name().unwrap().to_str().unwrap(),
            "Export_456_Sari.csv"
        );
        assert_eq!(
            written[2].file_name().unwrap().to_str().unwrap(),
            "Export_789_Tono.csv"
        );

        for path in &written {
            assert!(path.exists());
        }
        std::fs::remove_dir_all(&out_dir).unwrap();
    }

    #[tokio::test]
    async fn roster_user_without_activity_gets_a_placeholder_row() {
        let out_dir = temp_out_dir("placeholder");
        let options = ExportOptions::new(&out_dir, 0);

        let users = vec![roster_user("123", "Budi")];
        let written = export_per_user(&users, &[], "Export", &options).await.unwrap();

        assert_eq!(written.len(), 1);
        let document = std::fs::read_to_string(&written[0]).unwrap();
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\"123\";\"Budi\";\"Pusat\";\"\";\"\";\"\";\"\";\"\"");

        std::fs::remove_dir_all(&out_dir).unwrap();
    }

    #[tokio::test]
    async fn log_only_identity_uses_the_embedded_attributes() {
        let out_dir = temp_out_dir("fallback");
        let options = ExportOptions::new(&out_dir, 0);

        let transaksis = vec![transaksi("t1", "789", "Tono", "masuk", "2024-03-11T08:00:00")];
        let written = export_per_user(&[], &transaksis, "Export", &options)
            .await
            .unwrap();

        let document = std::fs::read_to_string(&written[0]).unwrap();
        assert!(document.contains("\"Tono\";\"Cabang\""));

        std::fs::remove_dir_all(&out_dir).unwrap();
    }

    #[tokio::test]
    async fn blank_base_name_aborts_before_any_emission() {
        let out_dir = temp_out_dir("abort");
        let options = ExportOptions::new(&out_dir, 0);

        let users = vec![roster_user("123", "Budi")];
        assert!(export_per_user(&users, &[], "", &options).await.is_err());
        assert!(export_per_user(&users, &[], "   ", &options).await.is_err());

        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
        std::fs::remove_dir_all(&out_dir).unwrap();
    }

    #[test]
    fn file_names_are_sanitized_to_alphanumerics() {
        assert_eq!(sanitize_file_name("Export_123_Budi S."), "Export_123_Budi_S_");
        assert_eq!(sanitize_file_name("a/b\\c:d"), "a_b_c_d");
        let raw = format!("{}_{}_{}", "Export", "123", "Budi S.");
        assert_eq!(format!("{}.csv", sanitize_file_name(&raw)), "Export_123_Budi_S_.csv");
    }
}
