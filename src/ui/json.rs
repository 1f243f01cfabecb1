use std::io::{self, Write};

/// Write a single JSON event on its own line.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_event_per_line() {
        let mut out = Vec::new();
        write_event(&mut out, &serde_json::json!({"event": "sync", "synced": 1})).unwrap();
        write_event(&mut out, &serde_json::json!({"event": "sync", "synced": 0})).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with(r#"{"event":"sync","synced":1}"#));
    }
}
