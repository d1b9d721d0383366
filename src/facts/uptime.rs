use crate::facts::platform::Platform;
use crate::facts::reader::EnvReader;
use crate::facts::UNAVAILABLE;

pub fn get_uptime(reader: &impl EnvReader, platform: Platform) -> String {
    if platform.has_procfs() {
        if let Some(formatted) = reader.uptime_counter().as_deref().and_then(from_counter) {
            return formatted;
        }
    }
    UNAVAILABLE.to_string()
}

/// The counter holds float seconds; only the whole-second part matters.
fn from_counter(raw: &str) -> Option<String> {
    let seconds = raw.split_whitespace().next()?.parse::<f64>().ok()? as u64;
    Some(format_uptime(seconds))
}

fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;
    format!("{days}d {hours}h {minutes}m")
}
