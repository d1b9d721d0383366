use crate::facts::platform::Platform;
use crate::facts::reader::EnvReader;
use crate::facts::UNAVAILABLE;

const KIB_PER_GIB: f64 = 1024.0 * 1024.0;

pub fn get_memory(reader: &impl EnvReader, platform: Platform) -> String {
    if platform.has_procfs() {
        if let Some(usage) = reader.mem_info().as_deref().and_then(memory_usage) {
            return usage;
        }
    }
    UNAVAILABLE.to_string()
}

pub fn get_swap(reader: &impl EnvReader, platform: Platform) -> String {
    if platform.has_procfs() {
        if let Some(info) = reader.mem_info() {
            return swap_usage(&info);
        }
    }
    UNAVAILABLE.to_string()
}

fn memory_usage(info: &str) -> Option<String> {
    let total_kib = field_kib(info, "MemTotal")?;
    let available_kib = field_kib(info, "MemAvailable")?;
    let total = total_kib as f64 / KIB_PER_GIB;
    let used = total_kib.saturating_sub(available_kib) as f64 / KIB_PER_GIB;
    let percent = if total_kib > 0 { used / total * 100.0 } else { 0.0 };
    Some(format!("{used:.2} GiB / {total:.2} GiB ({percent:.0}%)"))
}

// Swap fields may be absent entirely; they read as zero, and a zero
// capacity reports 0% instead of dividing by it.
fn swap_usage(info: &str) -> String {
    let total_kib = field_kib(info, "SwapTotal").unwrap_or(0);
    let free_kib = field_kib(info, "SwapFree").unwrap_or(0);
    let total_mib = total_kib as f64 / 1024.0;
    let used_mib = total_kib.saturating_sub(free_kib) as f64 / 1024.0;
    let percent = if total_kib > 0 { used_mib / total_mib * 100.0 } else { 0.0 };
    format!(
        "{used_mib:.2} MiB / {:.2} GiB ({percent:.0}%)",
        total_mib / 1024.0
    )
}

fn field_kib(info: &str, key: &str) -> Option<u64> {
    info.lines().find_map(|line| {
        let value = line.strip_prefix(key)?.strip_prefix(':')?;
        value.split_whitespace().next()?.parse().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fixtures::FixtureReader;

    const MEMINFO: &str = "MemTotal:       8000000 kB\n\
                           MemFree:         500000 kB\n\
                           MemAvailable:   2000000 kB\n\
                           SwapTotal:      2097152 kB\n\
                           SwapFree:       1048576 kB\n";

    #[test]
    fn memory_usage_converts_kib_to_gib() {
        assert_eq!(
            memory_usage(MEMINFO),
            Some("5.72 GiB / 7.63 GiB (75%)".to_string())
        );
    }

    #[test]
    fn memory_usage_requires_both_fields() {
        assert_eq!(memory_usage("MemTotal:       8000000 kB\n"), None);
    }

    #[test]
    fn swap_usage_reports_used_mib_against_total_gib() {
        assert_eq!(swap_usage(MEMINFO), "1024.00 MiB / 2.00 GiB (50%)");
    }

    #[test]
    fn zero_capacity_swap_reports_zero_percent() {
        let info = "SwapTotal:             0 kB\nSwapFree:              0 kB\n";
        assert_eq!(swap_usage(info), "0.00 MiB / 0.00 GiB (0%)");
    }

    #[test]
    fn absent_swap_fields_read_as_zero() {
        assert_eq!(swap_usage("MemTotal:       8000000 kB\n"), "0.00 MiB / 0.00 GiB (0%)");
    }

    #[test]
    fn field_lookup_does_not_match_prefixed_keys() {
        // "SwapCached" must not satisfy a "Swap" style prefix probe.
        let info = "SwapCached:        12345 kB\nSwapTotal:        400000 kB\n";
        assert_eq!(field_kib(info, "SwapTotal"), Some(400_000));
        assert_eq!(field_kib(info, "SwapFree"), None);
    }

    #[test]
    fn percent_stays_within_bounds_and_used_below_total() {
        for (total, available) in [(1, 0), (1_000, 999), (8_000_000, 1), (123_456, 123_456)] {
            let info = format!("MemTotal: {total} kB\nMemAvailable: {available} kB\n");
            let usage = memory_usage(&info).unwrap();
            let percent: f64 = usage
                .split('(')
                .nth(1)
                .and_then(|s| s.strip_suffix("%)"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((0.0..=100.0).contains(&percent), "bad percent in {usage}");
        }
    }

    #[test]
    fn unavailable_descriptor_degrades() {
        let reader = FixtureReader::default();
        assert_eq!(get_memory(&reader, Platform::Linux), "N/A");
        assert_eq!(get_swap(&reader, Platform::Linux), "N/A");
        assert_eq!(get_memory(&reader, Platform::Windows), "N/A");
    }
}
