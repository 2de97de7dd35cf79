//! Plain-text rendering of the caller screen
//!
//! Layout mirrors the mobile screen: previous and current numbers, the draw
//! button label, the called counter and a 10-column board.

use std::fmt::Write;

use crate::consts::{BOARD_COLUMNS, NUMBER_COUNT, NUMBER_MAX, NUMBER_MIN};
use crate::sim::Snapshot;

/// Unset numbers are shown as `0`
pub fn display_number(number: Option<u8>) -> String {
    number.unwrap_or(0).to_string()
}

pub fn draw_button_label(snapshot: &Snapshot) -> &'static str {
    if snapshot.current.is_none() {
        "Start"
    } else {
        "Pick Next Number"
    }
}

pub fn called_counter(snapshot: &Snapshot) -> String {
    format!(
        "Numbers Called ({}/{NUMBER_COUNT})",
        snapshot.called_count()
    )
}

/// One board cell: `[nn]` called, `<nn>` queued, ` nn ` open
fn cell(snapshot: &Snapshot, number: u8) -> String {
    if snapshot.is_called(number) {
        format!("[{number:>2}]")
    } else if snapshot.is_queued(number) {
        format!("<{number:>2}>")
    } else {
        format!(" {number:>2} ")
    }
}

pub fn render_board(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Previous: {:>2}   Current: {:>2}",
        display_number(snapshot.previous),
        display_number(snapshot.current)
    );
    let _ = writeln!(out, "[ {} ]", draw_button_label(snapshot));
    let _ = writeln!(out, "{}", called_counter(snapshot));

    let numbers: Vec<u8> = (NUMBER_MIN..=NUMBER_MAX).collect();
    for row in numbers.chunks(BOARD_COLUMNS) {
        let line: Vec<String> = row.iter().map(|&n| cell(snapshot, n)).collect();
        let _ = writeln!(out, "{}", line.join(""));
    }

    if !snapshot.queued.is_empty() {
        let queued: Vec<String> = snapshot.queued.iter().map(u8::to_string).collect();
        let _ = writeln!(out, "Queued: {}", queued.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn snapshot(history: Vec<u8>, queued: Vec<u8>) -> Snapshot {
        let current = history.last().copied();
        let previous = history.len().checked_sub(2).map(|i| history[i]);
        Snapshot {
            phase: if history.is_empty() {
                GamePhase::NotStarted
            } else {
                GamePhase::InProgress
            },
            current,
            previous,
            history,
            queued,
        }
    }

    #[test]
    fn test_fresh_screen() {
        let snap = snapshot(vec![], vec![]);
        assert_eq!(display_number(snap.current), "0");
        assert_eq!(draw_button_label(&snap), "Start");
        assert_eq!(called_counter(&snap), "Numbers Called (0/90)");
    }

    #[test]
    fn test_in_progress_screen() {
        let snap = snapshot(vec![12, 45], vec![7]);
        assert_eq!(draw_button_label(&snap), "Pick Next Number");

        let board = render_board(&snap);
        assert!(board.starts_with("Previous: 12   Current: 45\n"));
        assert!(board.contains("Numbers Called (2/90)"));
        assert!(board.contains("[12]"));
        assert!(board.contains("[45]"));
        assert!(board.contains("< 7>"));
        assert!(board.contains("Queued: 7"));
    }

    #[test]
    fn test_board_has_nine_rows() {
        let board = render_board(&snapshot(vec![], vec![]));
        let rows: Vec<&str> = board.lines().skip(3).collect();
        assert_eq!(rows.len(), 9);
        assert!(rows[0].starts_with("  1 "));
        assert!(rows[8].ends_with(" 90 "));
    }
}
