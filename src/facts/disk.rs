use std::path::Path;

use crate::facts::platform::Platform;
use crate::facts::reader::EnvReader;
use crate::facts::{UNAVAILABLE, UNKNOWN};

const BYTES_PER_GIB: f64 = 1_073_741_824.0;

pub fn get_disk(reader: &impl EnvReader, platform: Platform) -> String {
    let mount = platform.root_mount();
    let Some(space) = reader.disk_space(&mount) else {
        return UNAVAILABLE.to_string();
    };
    if space.total == 0 {
        return UNAVAILABLE.to_string();
    }

    let total = space.total as f64 / BYTES_PER_GIB;
    let used = space.total.saturating_sub(space.free) as f64 / BYTES_PER_GIB;
    let percent = used / total * 100.0;
    let fs_type = get_filesystem_type(reader, platform, &mount);
    format!("{used:.2} GiB / {total:.2} GiB ({percent:.0}%) - {fs_type}")
}

/// Filesystem type of the given mount. Linux scans the mount table for
/// an exact mount-point match; the other platforms report a fixed
/// label. No fallback chaining between platforms.
pub fn get_filesystem_type(reader: &impl EnvReader, platform: Platform, mount: &Path) -> String {
    match platform {
        Platform::Linux => reader
            .mounts()
            .as_deref()
            .and_then(|table| mount_fs_type(table, mount))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        Platform::Windows => "NTFS/FAT".to_string(),
        Platform::Darwin => "APFS".to_string(),
        Platform::Generic => UNKNOWN.to_string(),
    }
}

// Mount table columns: device, mount point, type, options, ...
fn mount_fs_type(table: &str, mount: &Path) -> Option<String> {
    let target = mount.to_str()?;
    table.lines().find_map(|line| {
        let mut columns = line.split(' ');
        let _device = columns.next()?;
        let point = columns.next()?;
        let fs_type = columns.next()?;
        (point == target).then(|| fs_type.to_string())
    })
}
