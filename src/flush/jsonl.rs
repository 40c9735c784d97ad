use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::{PropEvent, WorldSnapshot};

/// Write serializable items to `writer` as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write, T: Serialize>(
    writer: &mut W,
    items: impl IntoIterator<Item = T>,
) -> io::Result<()> {
    for item in items {
        serde_json::to_writer(&mut *writer, &item)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn write_jsonl_file<T: Serialize>(path: &Path, items: impl IntoIterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_jsonl(&mut writer, items)?;
    writer.flush()
}

/// Flush a recorded run to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `snapshots.jsonl`: one WorldSnapshot per line, in tick order
/// - `events.jsonl`: one steal/release PropEvent per line
pub fn flush_run_to_jsonl(
    snapshots: &[WorldSnapshot],
    events: &[PropEvent],
    output_dir: &Path,
) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    write_jsonl_file(&output_dir.join("snapshots.jsonl"), snapshots)?;
    write_jsonl_file(&output_dir.join("events.jsonl"), events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropEventKind, Vec2};

    #[test]
    fn write_jsonl_one_object_per_line() {
        let events = vec![
            PropEvent {
                tick: 3,
                kind: PropEventKind::Stolen,
                prop: 1,
                position: Vec2::new(1.0, 2.0),
            },
            PropEvent {
                tick: 9,
                kind: PropEventKind::Released,
                prop: 1,
                position: Vec2::new(4.0, 5.0),
            },
        ];
        let mut buf = Vec::new();
        write_jsonl(&mut buf, &events).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["kind"], "stolen");
        assert_eq!(first["tick"], 3);
    }

    #[test]
    fn write_jsonl_empty_writes_nothing() {
        let mut buf = Vec::new();
        write_jsonl(&mut buf, Vec::<PropEvent>::new()).unwrap();
        assert!(buf.is_empty());
    }
}
