//! Process and host facts: wall-clock timestamp, hostname, memory usage.

use chrono::{DateTime, Datelike, TimeZone};

/// Format a timestamp as `"March 3rd 2024, 14:05:09"`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} {}{} {}",
        at.format("%B"),
        at.day(),
        ordinal_suffix(at.day()),
        at.format("%Y, %H:%M:%S"),
    )
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Current local time, formatted for a log record.
pub fn now_formatted() -> String {
    format_timestamp(&chrono::Local::now())
}

/// Render a byte count as megabytes with two decimals, e.g. `"12.50 MB"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Memory held by this process, formatted with [`format_megabytes`].
pub fn memory_usage() -> String {
    format_megabytes(resident_bytes().unwrap_or(0))
}

/// Resident set size of the current process.
#[cfg(target_os = "linux")]
fn resident_bytes() -> Option<u64> {
    // statm: size resident shared text lib data dt (in pages)
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if page_size <= 0 {
        return None;
    }
    Some(pages * page_size as u64)
}

/// Peak resident set size; the closest portable figure without procfs.
#[cfg(all(unix, not(target_os = "linux")))]
fn resident_bytes() -> Option<u64> {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    if unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } != 0 {
        return None;
    }
    // macOS reports bytes, the BSDs report kilobytes.
    let max_rss = usage.ru_maxrss as u64;
    if cfg!(target_os = "macos") {
        Some(max_rss)
    } else {
        Some(max_rss * 1024)
    }
}

#[cfg(not(unix))]
fn resident_bytes() -> Option<u64> {
    None
}

/// Name of the machine this process runs on.
#[cfg(unix)]
pub fn hostname() -> String {
    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        tracing::debug!("gethostname failed");
        return String::new();
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

#[cfg(not(unix))]
pub fn hostname() -> String {
    std::env::var("COMPUTERNAME").unwrap_or_default()
}
