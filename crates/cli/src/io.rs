use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Whole input: the file at `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Write `body` plus a trailing newline to `path` (parents created), or stdout.
pub fn write_output(path: Option<&Path>, body: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, format!("{body}\n"))
                .with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{body}").context("writing stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgis2geojson::{convert_to_string, ConvertCfg};
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn missing_input_names_the_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }

    #[test]
    fn file_round_trip_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(
            &input,
            r#"{"spatialReference": {"wkid": 4326},
                "features": [{"attributes": {"FID": 1}, "geometry": {"x": 3, "y": 4}}]}"#,
        )
        .unwrap();
        let data = read_input(Some(input.as_path())).unwrap();
        let body = convert_to_string(&data, &ConvertCfg::default(), false).unwrap();

        let out = dir.path().join("nested/out.geojson");
        write_output(Some(out.as_path()), &body).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["features"][0]["id"], 1);
        assert_eq!(parsed["features"][0]["geometry"]["type"], "Point");
    }
}
