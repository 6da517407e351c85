use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use anyhow::Result;

pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a backend transaction timestamp. The backend emits offsetless
/// local datetimes; RFC 3339 with an offset is also accepted and mapped
/// onto the local wall clock.
pub fn parse_event_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Local).naive_local());
    }

    if let Ok(waktu) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(waktu);
    }

    if let Ok(waktu) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(waktu);
    }

    Err(anyhow::anyhow!("Invalid timestamp format: {}", raw))
}

pub fn parse_time_string(time_str: &str) -> Result<NaiveTime> {
    let time_str = time_str.trim();

    if let Ok(time) = NaiveTime::parse_from_str(time_str, "%H:%M:%S") {
        return Ok(time);
    }

    if let Ok(time) = NaiveTime::parse_from_str(time_str, "%H:%M") {
        return Ok(time);
    }

    Err(anyhow::anyhow!("Invalid time format. Use HH:MM or HH:MM:SS"))
}

pub fn format_tanggal(waktu: NaiveDateTime) -> String {
    waktu.date().format("%Y-%m-%d").to_string()
}

pub fn format_jam(waktu: NaiveDateTime) -> String {
    waktu.format("%H:%M:%S").to_string()
}

/// Elapsed time between a check-in and a check-out on the given day,
/// formatted `HH:MM`. The start instant takes its seconds component from
/// the check-out time; legacy exports are defined by that arithmetic and
/// downstream reconciliation depends on it. Spans are not clamped, so a
/// check-out earlier than the check-in yields a negative string.
pub fn work_duration(tanggal: NaiveDate, jam_masuk: &str, jam_pulang: &str) -> Option<String> {
    let masuk = parse_time_string(jam_masuk).ok()?;
    let pulang = parse_time_string(jam_pulang).ok()?;

    let start = tanggal.and_hms_opt(masuk.hour(), masuk.minute(), pulang.second())?;
    let end = tanggal.and_hms_opt(pulang.hour(), pulang.minute(), pulang.second())?;

    let minutes = end
        .signed_duration_since(start)
        .num_milliseconds()
        .div_euclid(60_000);
    let hours = minutes.div_euclid(60);
    let sisa = minutes % 60;

    Some(format!("{:02}:{:02}", hours, sisa))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsetless_backend_timestamps() {
        let waktu = parse_event_timestamp("2024-03-11T08:15:30").unwrap();
        assert_eq!(format_tanggal(waktu), "2024-03-11");
        assert_eq!(format_jam(waktu), "08:15:30");

        let with_millis = parse_event_timestamp("2024-03-11T08:15:30.250").unwrap();
        assert_eq!(format_jam(with_millis), "08:15:30");

        let with_space = parse_event_timestamp("2024-03-11 08:15:30").unwrap();
        assert_eq!(format_jam(with_space), "08:15:30");
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_event_timestamp("not-a-date").is_err());
        assert!(parse_event_timestamp("").is_err());
        assert!(parse_event_timestamp("2024-13-99T99:99:99").is_err());
    }

    #[test]
    fn full_day_duration() {
        let tanggal = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let durasi = work_duration(tanggal, "08:00:00", "17:00:00").unwrap();
        assert_eq!(durasi, "09:00");
    }

    #[test]
    fn start_seconds_come_from_the_checkout_time() {
        let tanggal = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();

        // 08:30:59 -> 17:00:00 is 8h29m wall-clock, but the start instant
        // is built as 08:30:00, so the export reads 08:30
        let durasi = work_duration(tanggal, "08:30:59", "17:00:00").unwrap();
        assert_eq!(durasi, "08:30");
    }

    #[test]
    fn checkout_before_checkin_is_not_clamped() {
        let tanggal = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let durasi = work_duration(tanggal, "17:00:00", "08:00:00").unwrap();
        assert_eq!(durasi, "-9:00");
    }

    #[test]
    fn unparseable_time_yields_no_duration() {
        let tanggal = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert!(work_duration(tanggal, "morning", "17:00:00").is_none());
    }
}
