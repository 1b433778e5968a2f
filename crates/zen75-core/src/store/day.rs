//! Per-day record persistence.
//!
//! Each calendar date owns a pair of flat files under the log directory:
//! `<date>.json` holds the machine state and `<date>.md` is a derived
//! human-readable mirror regenerated on every save. Missing or malformed
//! files load as the empty record; only real filesystem failures propagate.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::checklist::{self, CHECKLIST_ITEMS};
use crate::error::Result;
use crate::gates::{CausalityChain, DebugTrace, Insight};

/// Everything recorded for one calendar date.
///
/// This is the canonical schema across all historical field spellings;
/// the causal chain uses `attention`/`action`/`result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The ISO calendar date this record belongs to.
    pub date: NaiveDate,
    /// Completion flags, one per checklist item.
    #[serde(default = "checklist::blank_flags")]
    pub checklist: Vec<bool>,
    /// Morning state-clarity rating, 1-10.
    #[serde(default)]
    pub state: Option<u8>,
    /// Morning intention.
    #[serde(default)]
    pub focus: Option<String>,
    /// The enforced attention -> action -> result chain.
    #[serde(default)]
    pub chain: Option<CausalityChain>,
    /// Self-reported 1-10 difficulty/friction score for the day.
    #[serde(default)]
    pub edge: Option<u8>,
    /// Backward-debug answers, present when the edge score forced gate 3.
    #[serde(default)]
    pub debug_trace: Option<DebugTrace>,
    /// The day's concrete tiny change.
    #[serde(default)]
    pub insight: Option<Insight>,
    /// Tomorrow's intention.
    #[serde(default)]
    pub tomorrow: Option<String>,
}

impl DayRecord {
    /// Empty record for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            checklist: checklist::blank_flags(),
            state: None,
            focus: None,
            chain: None,
            edge: None,
            debug_trace: None,
            insight: None,
            tomorrow: None,
        }
    }

    /// Whether every checklist item is complete.
    pub fn all_complete(&self) -> bool {
        checklist::all_complete(&self.checklist)
    }

    /// Render the Markdown mirror of this record.
    pub fn to_markdown(&self) -> String {
        let mut md = format!("# 75 Zen - {}\n\n", self.date);

        for (i, (item, checked)) in CHECKLIST_ITEMS.iter().zip(&self.checklist).enumerate() {
            let mark = if *checked { "x" } else { " " };
            md.push_str(&format!(
                "{}. [{}] {} {}\n",
                i + 1,
                mark,
                item.emoji,
                item.label
            ));
        }
        md.push('\n');

        if let Some(state) = self.state {
            md.push_str(&format!("**State:** {state}/10\n"));
        }
        if let Some(focus) = &self.focus {
            md.push_str(&format!("**Focus:** {focus}\n"));
        }

        if let Some(chain) = &self.chain {
            md.push('\n');
            md.push_str(&format!("**Attention:** {}\n", chain.attention));
            md.push_str(&format!("**Action:** {}\n", chain.action));
            md.push_str(&format!("**Result:** {}\n", chain.result));
        }

        if let Some(edge) = self.edge {
            md.push_str(&format!("\n**Edge:** {edge}/10\n"));
        }

        if let Some(trace) = &self.debug_trace {
            md.push_str("\n**Backward debug:**\n");
            md.push_str(&format!("- Result: {}\n", trace.bad_result));
            md.push_str(&format!("- Action: {}\n", trace.wrong_action));
            md.push_str(&format!("- Words: {}\n", trace.wrong_words));
            md.push_str(&format!("- Attention: {}\n", trace.wrong_attention));
            md.push_str(&format!("- Root cause: {}\n", trace.root_cause_state));
        }

        if let Some(insight) = &self.insight {
            md.push_str(&format!("\n**Tiny change:** {}\n", insight.tiny_change));
        }

        if let Some(tomorrow) = &self.tomorrow {
            md.push_str(&format!("\n**Tomorrow:** {tomorrow}\n"));
        }

        md
    }
}

/// File-backed store of [`DayRecord`]s keyed by date.
pub struct DayStore {
    dir: PathBuf,
}

impl DayStore {
    /// Open the store at the default log directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Open the store at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the JSON state file for a date.
    pub fn json_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{date}.json"))
    }

    /// Path of the Markdown mirror for a date.
    pub fn markdown_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{date}.md"))
    }

    /// Load the record for a date.
    ///
    /// An absent or malformed file yields the empty record; other
    /// filesystem failures propagate.
    pub fn load(&self, date: NaiveDate) -> Result<DayRecord> {
        let content = match std::fs::read_to_string(self.json_path(date)) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DayRecord::new(date));
            }
            Err(e) => return Err(e.into()),
        };

        let mut record: DayRecord = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(_) => return Ok(DayRecord::new(date)),
        };
        // The requested date wins over whatever the file carries.
        record.date = date;
        if record.checklist.len() != CHECKLIST_ITEMS.len() {
            record.checklist.resize(CHECKLIST_ITEMS.len(), false);
        }
        Ok(record)
    }

    /// Persist the record and regenerate its Markdown mirror.
    pub fn save(&self, record: &DayRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(self.json_path(record.date), json)?;
        std::fs::write(self.markdown_path(record.date), record.to_markdown())?;
        Ok(())
    }

    /// Delete both files for a date. A following load yields the empty record.
    pub fn reset_day(&self, date: NaiveDate) -> Result<()> {
        remove_if_present(&self.json_path(date))?;
        remove_if_present(&self.markdown_path(date))?;
        Ok(())
    }

    /// Directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn empty_record_markdown_has_header_and_blank_checklist() {
        let record = DayRecord::new(date());
        let md = record.to_markdown();
        assert!(md.starts_with("# 75 Zen - 2025-03-14\n"));
        assert_eq!(md.matches("[ ]").count(), CHECKLIST_ITEMS.len());
        assert!(!md.contains("**State:**"));
    }

    #[test]
    fn markdown_renders_all_recorded_fields() {
        let mut record = DayRecord::new(date());
        record.checklist[0] = true;
        record.state = Some(7);
        record.focus = Some("ship the parser".into());
        record.chain = Some(CausalityChain {
            attention: "parser error recovery".into(),
            action: "rewrote the recovery path".into(),
            result: "fuzz suite passes".into(),
        });
        record.edge = Some(3);
        record.debug_trace = Some(DebugTrace {
            bad_result: "missed the deadline".into(),
            wrong_action: "kept polishing tests".into(),
            wrong_words: "just one more case".into(),
            wrong_attention: "edge cases over delivery".into(),
            root_cause_state: "anxious about review".into(),
        });
        record.insight = Some(Insight {
            tiny_change: "timebox polish to 30 minutes".into(),
        });
        record.tomorrow = Some("open the review first thing".into());

        let md = record.to_markdown();
        assert!(md.contains("1. [x]"));
        assert!(md.contains(indoc! {"
            **State:** 7/10
            **Focus:** ship the parser
        "}));
        assert!(md.contains("**Attention:** parser error recovery"));
        assert!(md.contains("**Edge:** 3/10"));
        assert!(md.contains("- Root cause: anxious about review"));
        assert!(md.contains("**Tiny change:** timebox polish to 30 minutes"));
        assert!(md.contains("**Tomorrow:** open the review first thing"));
    }

    #[test]
    fn load_defaults_when_file_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());
        let record = store.load(date()).unwrap();
        assert_eq!(record, DayRecord::new(date()));
    }

    #[test]
    fn load_defaults_when_file_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());
        std::fs::write(store.json_path(date()), "{not json at all").unwrap();
        let record = store.load(date()).unwrap();
        assert_eq!(record, DayRecord::new(date()));
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());

        let mut record = DayRecord::new(date());
        record.checklist[2] = true;
        record.state = Some(8);
        record.focus = Some("deep work".into());
        store.save(&record).unwrap();

        let loaded = store.load(date()).unwrap();
        assert_eq!(loaded, record);
        assert!(store.markdown_path(date()).exists());
    }

    #[test]
    fn save_regenerates_markdown_mirror() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());

        let mut record = DayRecord::new(date());
        store.save(&record).unwrap();
        let before = std::fs::read_to_string(store.markdown_path(date())).unwrap();

        record.checklist[0] = true;
        store.save(&record).unwrap();
        let after = std::fs::read_to_string(store.markdown_path(date())).unwrap();

        assert_ne!(before, after);
        assert!(after.contains("1. [x]"));
    }

    #[test]
    fn reset_day_deletes_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());

        let record = DayRecord::new(date());
        store.save(&record).unwrap();
        store.reset_day(date()).unwrap();

        assert!(!store.json_path(date()).exists());
        assert!(!store.markdown_path(date()).exists());
        assert_eq!(store.load(date()).unwrap(), DayRecord::new(date()));
    }

    #[test]
    fn reset_day_tolerates_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());
        store.reset_day(date()).unwrap();
    }

    #[test]
    fn partial_json_loads_with_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DayStore::at(tmp.path());
        std::fs::write(
            store.json_path(date()),
            r#"{"date":"2025-03-14","state":6}"#,
        )
        .unwrap();

        let record = store.load(date()).unwrap();
        assert_eq!(record.state, Some(6));
        assert_eq!(record.checklist.len(), CHECKLIST_ITEMS.len());
        assert!(record.focus.is_none());
    }
}
