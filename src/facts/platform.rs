use std::env;
use std::path::PathBuf;

/// Platform family, selected once at startup. Each fact branches on
/// this instead of repeating inline target checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    Darwin,
    Generic,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Generic
        }
    }

    /// Whether the platform exposes the `/proc`-style text sources the
    /// collector parses directly.
    pub fn has_procfs(self) -> bool {
        self == Platform::Linux
    }

    /// The mount point queried for disk usage: the system drive on
    /// Windows, the filesystem root everywhere else.
    pub fn root_mount(self) -> PathBuf {
        match self {
            Platform::Windows => {
                let drive = env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
                PathBuf::from(format!("{drive}\\"))
            }
            _ => PathBuf::from("/"),
        }
    }
}
