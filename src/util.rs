use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

/// Reads the report verbatim, keeping `\r\n` line endings intact.
pub fn read_report_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read report: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read report from standard input")?;
            Ok(text)
        }
    }
}

pub fn write_output(dest: Option<&Path>, data: &[u8]) -> Result<()> {
    let Some(path) = dest else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(data)
            .context("failed to write to standard output")?;
        return stdout.flush().context("failed to flush standard output");
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    let mut file =
        File::create(path).with_context(|| format!("failed to create file: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    Ok(())
}

pub fn write_json<T: Serialize>(dest: Option<&Path>, value: &T, pretty: bool) -> Result<()> {
    let serialized = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    let data = serialized.context("failed to serialize json")?;

    write_output(dest, &data)
}
