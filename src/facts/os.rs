use crate::facts::platform::Platform;
use crate::facts::reader::EnvReader;

/// OS identity: the `PRETTY_NAME` from the release-info file when the
/// platform has one, otherwise the generic platform name + release.
pub fn get_os_name(reader: &impl EnvReader, platform: Platform) -> String {
    if platform.has_procfs() {
        if let Some(name) = reader.os_release().as_deref().and_then(pretty_name) {
            return name;
        }
    }
    reader.platform_description()
}

fn pretty_name(release: &str) -> Option<String> {
    release.lines().find_map(|line| {
        line.strip_prefix("PRETTY_NAME=")
            .map(|value| value.trim().trim_matches('"').to_string())
    })
}
