//! ISO-8601 日期解析
//!
//! 接受 RFC 3339（含 `Z` 或显式偏移）、无偏移的本地格式（按 UTC 处理）
//! 以及纯日期（按 UTC 零点处理）。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const INVALID_MSG: &str = "Date must be in ISO format";

pub fn parse_iso_datetime(raw: &str) -> Result<DateTime<Utc>, &'static str> {
    // 带偏移：2024-05-01T10:30:00Z / 2024-05-01T10:30:00+02:00
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    // 无偏移：2024-05-01T10:30:00[.ffffff]
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    // 空格分隔的变体：2024-05-01 10:30:00
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    // 分钟精度：2024-05-01T10:30
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(naive.and_utc());
    }

    // 纯日期：2024-05-01
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }

    Err(INVALID_MSG)
}

/// 当前时间的 epoch 毫秒
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_rfc3339_with_zulu() {
        let dt = parse_iso_datetime("2024-05-01T10:30:00Z").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let dt = parse_iso_datetime("2024-05-01T12:30:00+02:00").unwrap();
        // 转换到 UTC
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_naive_datetime() {
        let dt = parse_iso_datetime("2024-05-01T10:30:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_naive_datetime_with_fraction() {
        assert!(parse_iso_datetime("2024-05-01T10:30:00.123456").is_ok());
    }

    #[test]
    fn test_minute_precision() {
        let dt = parse_iso_datetime("2024-05-01T10:30").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
        assert!(parse_iso_datetime("2024-05-01 10:30").is_ok());
    }

    #[test]
    fn test_date_only() {
        let dt = parse_iso_datetime("2024-05-01").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_iso_datetime("not-a-date").is_err());
        assert!(parse_iso_datetime("2024-13-01").is_err());
        assert!(parse_iso_datetime("").is_err());
    }
}
