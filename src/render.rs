use std::fmt::Write;

use crate::facts::HostSnapshot;

const BANNER: &str = r#" _                  _     __        _          _
| |__    ___   ___ | |_  / _|  ___ | |_   ___ | |__
| '_ \  / _ \ / __|| __|| |_  / _ \| __| / __|| '_ \
| | | || (_) |\__ \| |_ |  _||  __/| |_ | (__ | | | |
|_| |_| \___/ |___/ \__||_|   \___| \__| \___||_| |_|"#;

const LABEL_WIDTH: usize = 13;

fn fields(snapshot: &HostSnapshot) -> [(String, &str); 8] {
    [
        ("OS".to_string(), snapshot.os_name.as_str()),
        ("Host".to_string(), snapshot.hostname.as_str()),
        ("Kernel".to_string(), snapshot.kernel_version.as_str()),
        ("Uptime".to_string(), snapshot.uptime.as_str()),
        ("CPU".to_string(), snapshot.cpu.as_str()),
        ("Memory".to_string(), snapshot.memory.as_str()),
        ("Swap".to_string(), snapshot.swap.as_str()),
        (
            format!("Disk ({})", snapshot.root_mount),
            snapshot.disk.as_str(),
        ),
    ]
}

pub fn render_text(snapshot: &HostSnapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(BANNER);
    out.push_str("\n\n");
    for (label, value) in fields(snapshot) {
        let _ = writeln!(
            out,
            "{:<width$}{value}",
            format!("{label}:"),
            width = LABEL_WIDTH
        );
    }
    out
}

/// The same report inside one `<pre>` block of a minimal dark page.
/// Every interpolated value is escaped before embedding.
pub fn render_html(snapshot: &HostSnapshot) -> String {
    let mut block = String::with_capacity(1024);
    block.push_str(&escape_html(BANNER));
    block.push_str("\n\n");
    for (label, value) in fields(snapshot) {
        let _ = writeln!(
            block,
            "{:<width$}{}",
            format!("{}:", escape_html(&label)),
            escape_html(value),
            width = LABEL_WIDTH
        );
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>hostfetch</title>\n\
         <style>\n\
         body {{ background-color: #000; color: #0f0; font-family: \"Courier New\", monospace; padding: 20px; }}\n\
         pre {{ font-size: 16px; line-height: 1.3; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <pre>{block}</pre>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
