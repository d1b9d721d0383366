use std::fs;
use std::path::Path;

use sysinfo::{Disks, System};

const OS_RELEASE: &str = "/etc/os-release";
const PROC_UPTIME: &str = "/proc/uptime";
const PROC_CPUINFO: &str = "/proc/cpuinfo";
const PROC_MEMINFO: &str = "/proc/meminfo";
const PROC_MOUNTS: &str = "/proc/mounts";

pub struct DiskSpace {
    pub total: u64,
    pub free: u64,
}

/// Read-only access to the environment sources the collector consumes.
/// Each method maps to one source so tests can substitute fixtures.
pub trait EnvReader {
    fn os_release(&self) -> Option<String>;
    fn uptime_counter(&self) -> Option<String>;
    fn cpu_info(&self) -> Option<String>;
    fn mem_info(&self) -> Option<String>;
    fn mounts(&self) -> Option<String>;
    fn disk_space(&self, mount: &Path) -> Option<DiskSpace>;
    fn host_name(&self) -> Option<String>;
    fn kernel_version(&self) -> Option<String>;
    fn platform_description(&self) -> String;
    fn cpu_arch(&self) -> String;
}

/// The live environment: `/proc` and `/etc` text sources plus the
/// sysinfo accessors used for fallbacks and space queries.
pub struct SystemReader;

impl EnvReader for SystemReader {
    fn os_release(&self) -> Option<String> {
        read_text(OS_RELEASE)
    }

    fn uptime_counter(&self) -> Option<String> {
        read_text(PROC_UPTIME)
    }

    fn cpu_info(&self) -> Option<String> {
        read_text(PROC_CPUINFO)
    }

    fn mem_info(&self) -> Option<String> {
        read_text(PROC_MEMINFO)
    }

    fn mounts(&self) -> Option<String> {
        read_text(PROC_MOUNTS)
    }

    fn disk_space(&self, mount: &Path) -> Option<DiskSpace> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == mount)
            .map(|disk| DiskSpace {
                total: disk.total_space(),
                free: disk.available_space(),
            })
    }

    fn host_name(&self) -> Option<String> {
        System::host_name()
    }

    fn kernel_version(&self) -> Option<String> {
        System::kernel_version()
    }

    fn platform_description(&self) -> String {
        let name = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
        match System::kernel_version() {
            Some(release) => format!("{name} {release}"),
            None => name,
        }
    }

    fn cpu_arch(&self) -> String {
        System::cpu_arch()
    }
}

fn read_text(path: &str) -> Option<String> {
    fs::read_to_string(path).ok()
}
