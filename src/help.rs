//! Binding listing for `--list-bindings`

use tabview_input::translate::bindings;
use tabview_input::{Command, ResolvedKeycodes, key_label};

/// Both binding tables plus the keys discovered at startup.
pub fn get_bindings_text(resolved: &ResolvedKeycodes, term: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Terminal: {}", term));
    lines.push(String::new());

    lines.push("Keys:".to_string());
    append_bindings(&mut lines, bindings(false), "");
    lines.push(String::new());

    lines.push("Alt chords:".to_string());
    append_bindings(&mut lines, bindings(true), "M-");
    lines.push(String::new());

    lines.push("Discovered:".to_string());
    lines.push(format!(
        "  {:<12} {}",
        format!("C-Home <{}>", resolved.ctrl_home),
        Command::CursorFirstRow
    ));
    lines.push(format!(
        "  {:<12} {}",
        format!("C-End <{}>", resolved.ctrl_end),
        Command::CursorLastRow
    ));
    lines
}

fn append_bindings(lines: &mut Vec<String>, table: &[(i32, Command)], prefix: &str) {
    for (code, cmd) in table {
        let key = format!("{}{}", prefix, key_label(*code));
        lines.push(format!("  {:<12} {}", key, cmd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_binding() {
        let lines = get_bindings_text(&ResolvedKeycodes::FALLBACK, "xterm");
        assert_eq!(lines[0], "Terminal: xterm");
        assert!(lines.iter().any(|l| l.trim() == "q            Quit"));
        assert!(lines.iter().any(|l| l.trim() == "M-0          Quit"));
        assert!(lines.iter().any(|l| l.trim() == "0            ReleaseCols"));
        assert!(lines.iter().any(|l| l.contains("C-Home <538>") && l.contains("CursorFirstRow")));
        assert!(lines.iter().any(|l| l.contains("C-End <533>") && l.contains("CursorLastRow")));

        let bound = lines.iter().filter(|l| l.starts_with("  ")).count();
        assert_eq!(bound, bindings(false).len() + bindings(true).len() + 2);
    }
}
