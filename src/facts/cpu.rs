use crate::facts::platform::Platform;
use crate::facts::reader::EnvReader;
use crate::facts::UNKNOWN_LABEL;

/// Logical core count and first model name from the CPU descriptor,
/// as `<count> x <model>`. Falls back to the machine architecture when
/// the descriptor is unavailable.
pub fn get_cpu(reader: &impl EnvReader, platform: Platform) -> String {
    if platform.has_procfs() {
        if let Some(info) = reader.cpu_info() {
            return describe_cpu(&info);
        }
    }
    reader.cpu_arch()
}

fn describe_cpu(info: &str) -> String {
    let count = info.lines().filter(|line| is_processor_line(line)).count();
    let model = info
        .lines()
        .find_map(model_name)
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    format!("{count} x {model}")
}

fn is_processor_line(line: &str) -> bool {
    line.strip_prefix("processor")
        .is_some_and(|rest| rest.trim_start().starts_with(':'))
}

fn model_name(line: &str) -> Option<String> {
    let value = line.strip_prefix("model name")?.trim_start().strip_prefix(':')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
