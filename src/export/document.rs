use crate::export::pivot::DaySummary;

const BOM: char = '\u{feff}';

fn quoted_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<_>>()
        .join(";")
}

/// Render summaries as the semicolon-delimited export document: a UTF-8
/// BOM, the header row, then one row per summary, every field wrapped in
/// double quotes verbatim. Embedded quotes and delimiters are NOT escaped;
/// existing consumers parse exactly this shape. `with_duration` selects
/// the extended header with the `Waktu Kerja` column.
pub fn render_csv(rows: &[DaySummary], with_duration: bool) -> String {
    let mut header = vec![
        "nik",
        "nama",
        "kantor",
        "tanggal",
        "Jam Masuk",
        "Jam Pulang",
        "Jam Izin",
    ];
    if with_duration {
        header.push("Waktu Kerja");
    }

    let body = rows
        .iter()
        .map(|row| {
            let mut fields = vec![
                row.nik.as_str(),
                row.nama.as_str(),
                row.kantor.as_str(),
                row.tanggal.as_str(),
                row.jam_masuk.as_str(),
                row.jam_pulang.as_str(),
                row.jam_izin.as_str(),
            ];
            if with_duration {
                fields.push(row.waktu_kerja.as_str());
            }
            quoted_row(&fields)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}\n{}", BOM, quoted_row(&header), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(nik: &str, nama: &str) -> DaySummary {
        DaySummary {
            nik: nik.to_string(),
            nama: nama.to_string(),
            kantor: "Pusat".to_string(),
            tanggal: "2024-03-11".to_string(),
            jam_masuk: "08:00:00".to_string(),
            jam_pulang: "17:00:00".to_string(),
            jam_izin: String::new(),
            waktu_kerja: "09:00".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_bom_and_header_only() {
        let doc = render_csv(&[], false);
        assert_eq!(
            doc,
            "\u{feff}\"nik\";\"nama\";\"kantor\";\"tanggal\";\"Jam Masuk\";\"Jam Pulang\";\"Jam Izin\"\n"
        );
    }

    #[test]
    fn extended_header_carries_waktu_kerja() {
        let doc = render_csv(&[], true);
        assert!(doc.starts_with('\u{feff}'));
        assert!(doc.ends_with("\"Jam Izin\";\"Waktu Kerja\"\n"));
    }

    #[test]
    fn rows_are_quoted_and_semicolon_separated() {
        let doc = render_csv(&[summary("123", "Budi")], true);
        let mut lines = doc.trim_start_matches('\u{feff}').lines();
        lines.next();
        assert_eq!(
            lines.next().unwrap(),
            "\"123\";\"Budi\";\"Pusat\";\"2024-03-11\";\"08:00:00\";\"17:00:00\";\"\";\"09:00\""
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn the_basic_variant_omits_the_duration_column() {
        let doc = render_csv(&[summary("123", "Budi")], false);
        assert!(!doc.contains("09:00\""));
        assert!(doc.ends_with("\"08:00:00\";\"17:00:00\";\"\""));
    }

    #[test]
    fn field_values_pass_through_unescaped() {
        // Pinned legacy behavior: embedded quotes and semicolons are
        // written verbatim inside the surrounding quotes
        let mut row = summary("123", "Budi \"Si;Rajin\"");
        row.kantor = "Cabang;Timur".to_string();
        let doc = render_csv(&[row], false);

        assert!(doc.contains("\"Budi \"Si;Rajin\"\""));
        assert!(doc.contains("\"Cabang;Timur\""));
    }

    #[test]
    fn multiple_rows_are_newline_separated() {
        let doc = render_csv(&[summary("123", "Budi"), summary("456", "Sari")], false);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"123\""));
        assert!(lines[2].starts_with("\"456\""));
    }
}
