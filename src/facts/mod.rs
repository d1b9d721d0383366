//! Host facts collection. One query per fact, each tolerant of missing
//! sources: a fact that cannot be determined degrades to its placeholder
//! instead of failing the report.

mod cpu;
mod disk;
mod memory;
mod os;
mod platform;
mod reader;
mod uptime;

pub use cpu::get_cpu;
pub use disk::{get_disk, get_filesystem_type};
pub use memory::{get_memory, get_swap};
pub use os::get_os_name;
pub use platform::Platform;
pub use reader::{DiskSpace, EnvReader, SystemReader};
pub use uptime::get_uptime;

use tracing::debug;

pub(crate) const UNAVAILABLE: &str = "N/A";
pub(crate) const UNKNOWN: &str = "unknown";
pub(crate) const UNKNOWN_LABEL: &str = "Unknown";

/// The facts rendered for one report. Built fresh per invocation and
/// never mutated after collection.
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    pub os_name: String,
    pub hostname: String,
    pub kernel_version: String,
    pub uptime: String,
    pub cpu: String,
    pub memory: String,
    pub swap: String,
    pub disk: String,
    pub root_mount: String,
}

pub fn collect(reader: &impl EnvReader, platform: Platform) -> HostSnapshot {
    let root_mount = platform.root_mount();
    let snapshot = HostSnapshot {
        os_name: get_os_name(reader, platform),
        hostname: reader
            .host_name()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        kernel_version: reader
            .kernel_version()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        uptime: get_uptime(reader, platform),
        cpu: get_cpu(reader, platform),
        memory: get_memory(reader, platform),
        swap: get_swap(reader, platform),
        disk: get_disk(reader, platform),
        root_mount: root_mount.display().to_string(),
    };
    debug!(?platform, "collected host snapshot");
    snapshot
}

pub fn collect_current() -> HostSnapshot {
    collect(&SystemReader, Platform::current())
}


#[cfg(test)]
mod tests {
    use super::fixtures::FixtureReader;
    use super::*;

    #[test]
    fn every_field_degrades_independently_when_sources_are_missing() {
        let reader = FixtureReader {
            platform_description: "Linux 6.1.0".to_string(),
            cpu_arch: "x86_64".to_string(),
            ..FixtureReader::default()
        };

        let snapshot = collect(&reader, Platform::Linux);

        assert_eq!(snapshot.os_name, "Linux 6.1.0");
        assert_eq!(snapshot.hostname, "Unknown");
        assert_eq!(snapshot.kernel_version, "Unknown");
        assert_eq!(snapshot.uptime, "N/A");
        assert_eq!(snapshot.cpu, "x86_64");
        assert_eq!(snapshot.memory, "N/A");
        assert_eq!(snapshot.swap, "N/A");
        assert_eq!(snapshot.disk, "N/A");
        assert_eq!(snapshot.root_mount, "/");
    }

    #[test]
    fn collect_fills_every_field_from_well_formed_sources() {
        let reader = FixtureReader {
            os_release: Some("PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n".to_string()),
            uptime: Some("93784.53 187000.12\n".to_string()),
            cpu_info: Some(
                "processor\t: 0\nmodel name\t: Example CPU @ 2.40GHz\nprocessor\t: 1\n"
                    .to_string(),
            ),
            mem_info: Some(
                "MemTotal:       8000000 kB\nMemAvailable:   2000000 kB\n\
                 SwapTotal:      2097152 kB\nSwapFree:       1048576 kB\n"
                    .to_string(),
            ),
            mounts: Some("/dev/sda1 / ext4 rw,relatime 0 0\n".to_string()),
            disk: Some((100 * 1_073_741_824, 25 * 1_073_741_824)),
            host_name: Some("testbox".to_string()),
            kernel_version: Some("6.1.0-18-amd64".to_string()),
            ..FixtureReader::default()
        };

        let snapshot = collect(&reader, Platform::Linux);

        assert_eq!(snapshot.os_name, "Debian GNU/Linux 12 (bookworm)");
        assert_eq!(snapshot.hostname, "testbox");
        assert_eq!(snapshot.kernel_version, "6.1.0-18-amd64");
        assert_eq!(snapshot.uptime, "1d 2h 3m");
        assert_eq!(snapshot.cpu, "2 x Example CPU @ 2.40GHz");
        assert_eq!(snapshot.memory, "5.72 GiB / 7.63 GiB (75%)");
        assert_eq!(snapshot.swap, "1024.00 MiB / 2.00 GiB (50%)");
        assert_eq!(snapshot.disk, "75.00 GiB / 100.00 GiB (75%) - ext4");
    }
}
