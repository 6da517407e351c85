use crate::api::models::Transaksi;
use crate::utils::time::parse_event_timestamp;
use chrono::NaiveDateTime;

/// One attendance action, shaped for the export pipeline. `aksi` keeps
/// its original casing; downstream comparisons are case-insensitive.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub idtransaksi: String,
    pub nik: String,
    pub nama: String,
    pub kantor: String,
    pub aksi: String,
    pub waktu: NaiveDateTime,
    pub keterangan: String,
    pub koordinat: String,
    pub fotobukti: String,
}

/// Shape raw transactions into pipeline events. Records the export cannot
/// key on (no user, unparseable timestamp) are dropped with a warning
/// rather than failing the batch; attendance data is messy in practice.
pub fn normalize(transaksis: &[Transaksi]) -> Vec<LogEvent> {
    let mut events = Vec::with_capacity(transaksis.len());

    for transaksi in transaksis {
        let Some(user) = &transaksi.user else {
            tracing::warn!(
                "Skipping transaction {} without user data",
                transaksi.idtransaksi
            );
            continue;
        };

        if user.nik.is_empty() {
            tracing::warn!("Skipping transaction {} without NIK", transaksi.idtransaksi);
            continue;
        }

        let waktu = match parse_event_timestamp(&transaksi.waktutransaksi) {
            Ok(waktu) => waktu,
            Err(e) => {
                tracing::warn!("Skipping transaction {}: {}", transaksi.idtransaksi, e);
                continue;
            }
        };

        events.push(LogEvent {
            idtransaksi: transaksi.idtransaksi.clone(),
            nik: user.nik.clone(),
            nama: user.nama.clone(),
            kantor: user
                .kantor
                .as_ref()
                .map(|k| k.namakantor.clone())
                .unwrap_or_default(),
            aksi: transaksi.aksi.namaaksi.clone(),
            waktu,
            keterangan: transaksi.keterangan.clone(),
            koordinat: transaksi.koordinat.clone(),
            fotobukti: transaksi.fotobukti.clone(),
        });
    }

    events
}
