use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::CliError;
use crate::models::OutputFormat;

/// Serialize `value` in the requested format, newline-terminated.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    let mut text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Write rendered output to `path`, or to stdout when there is none.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), bytes = text.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_json_keeps_nulls() {
        let map = BTreeMap::from([("a", Some("#FF000000")), ("b", None)]);
        let text = render(&map, OutputFormat::Json).unwrap();
        assert_eq!(text, "{\n  \"a\": \"#FF000000\",\n  \"b\": null\n}\n");
    }

    #[test]
    fn test_render_yaml() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        assert_eq!(render(&map, OutputFormat::Yaml).unwrap(), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scheme.json");
        write_output("{}\n", Some(path.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
