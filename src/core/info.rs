// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

use crate::core::{
    format::format_elapsed,
    laps::{LapOrder, LapRecorder},
};

/// What the presentation layer receives on every state change.
///
/// - JSON form is the stable contract for `lapwatch info --json`.
/// - `pretty_text()` is the CLI-facing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub formatted: String,
    pub running: bool,
    pub elapsed_ms: u64,
    pub laps: Vec<LapView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapView {
    pub sequence: u32,
    pub split_ms: u64,
    pub cumulative_ms: u64,
    pub split: String,
    pub cumulative: String,
    pub fastest: bool,
    pub slowest: bool,
}

impl Snapshot {
    pub fn new(running: bool, elapsed_ms: u64, laps: &LapRecorder, order: LapOrder) -> Self {
        let fastest = laps.fastest().map(|e| e.sequence);
        let slowest = laps.slowest().map(|e| e.sequence);

        let laps = laps
            .ordered(order)
            .map(|e| LapView {
                sequence: e.sequence,
                split_ms: e.split_ms,
                cumulative_ms: e.cumulative_ms,
                split: format_elapsed(e.split_ms),
                cumulative: format_elapsed(e.cumulative_ms),
                fastest: fastest == Some(e.sequence),
                slowest: slowest == Some(e.sequence),
            })
            .collect();

        Self {
            formatted: format_elapsed(elapsed_ms),
            running,
            elapsed_ms,
            laps,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.running {
            "running"
        } else if self.elapsed_ms == 0 {
            "stopped"
        } else {
            "paused"
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": e.to_string() }).to_string()
        })
    }

    pub fn pretty_text(&self) -> String {
        let mut out = format!("{}  [{}]\n", self.formatted, self.status());

        if self.laps.is_empty() {
            return out;
        }

        out.push_str("\n  Lap   Split      Total\n");
        for lap in &self.laps {
            let marker = if lap.fastest {
                "  fastest"
            } else if lap.slowest {
                "  slowest"
            } else {
                ""
            };
            out.push_str(&format!(
                "  {:>3}   {:<9}  {}{}\n",
                lap.sequence, lap.split, lap.cumulative, marker
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::RunState;

    fn laps(cumulative: &[u64]) -> LapRecorder {
        let mut rec = LapRecorder::new();
        for &c in cumulative {
            rec.record_lap(RunState::Running, c).unwrap();
        }
        rec
    }

    #[test]
    fn snapshot_formats_time_and_laps() {
        let snap = Snapshot::new(true, 4_000, &laps(&[1_000, 2_500, 4_000]), LapOrder::OldestFirst);

        assert_eq!(snap.formatted, "00:04.00");
        assert_eq!(snap.status(), "running");
        assert_eq!(snap.laps.len(), 3);
        assert_eq!(snap.laps[0].split, "00:01.00");
        assert_eq!(snap.laps[1].cumulative, "00:02.50");
    }

    #[test]
    fn snapshot_marks_fastest_and_slowest() {
        let snap = Snapshot::new(false, 3_000, &laps(&[1_000, 1_400, 3_000]), LapOrder::NewestFirst);

        // newest first: 3, 2, 1
        assert_eq!(snap.laps[0].sequence, 3);
        assert!(snap.laps[0].slowest);
        assert!(snap.laps[1].fastest);
        assert!(!snap.laps[2].fastest && !snap.laps[2].slowest);
        assert_eq!(snap.status(), "paused");
    }

    #[test]
    fn json_contract_fields() {
        let snap = Snapshot::new(false, 0, &LapRecorder::new(), LapOrder::NewestFirst);
        let value: serde_json::Value = serde_json::from_str(&snap.to_json()).unwrap();

        assert_eq!(value["formatted"], "00:00.00");
        assert_eq!(value["running"], false);
        assert_eq!(value["elapsed_ms"], 0);
        assert!(value["laps"].as_array().unwrap().is_empty());
    }

    #[test]
    fn pretty_text_lists_laps() {
        let snap = Snapshot::new(true, 2_500, &laps(&[1_000, 2_500]), LapOrder::OldestFirst);
        let text = snap.pretty_text();

        assert!(text.starts_with("00:02.50  [running]"));
        assert!(text.contains("00:01.50"));
        assert!(text.contains("slowest") || text.contains("fastest"));
    }
}
