use chrono::Local;

/// Format of `created_at` and note timestamps, chosen so that date prefixes such as
/// `2024-05` or `2024-05-02` select whole months or days.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Current local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
