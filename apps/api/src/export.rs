//! CSV export of a ranked result list.
//!
//! The layout matches the original application's download: a header row of
//! `Resume, Text Match Score, Skill Match Score, Final Score, Matched Skills`
//! with matched skills comma-joined inside one field. Scores are written with
//! the shortest round-trippable representation, so parsing the produced CSV
//! recovers every field exactly.

use anyhow::{Context, Result};

use crate::matching::MatchResult;

pub const CSV_HEADER: [&str; 5] = [
    "Resume",
    "Text Match Score",
    "Skill Match Score",
    "Final Score",
    "Matched Skills",
];

pub fn to_csv(results: &[MatchResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for r in results {
        let text_score = r.text_match_score.to_string();
        let skill_score = r.skill_match_score.to_string();
        let final_score = r.final_score.to_string();
        let skills = r.matched_skills.join(",");
        writer.write_record([
            r.resume.as_str(),
            text_score.as_str(),
            skill_score.as_str(),
            final_score.as_str(),
            skills.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

pub fn from_csv(data: &str) -> Result<Vec<MatchResult>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut results = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        let field = |i: usize| record.get(i).unwrap_or_default();
        let skills = field(4);
        results.push(MatchResult {
            resume: field(0).to_string(),
            text_match_score: field(1).parse().context("bad text match score")?,
            skill_match_score: field(2).parse().context("bad skill match score")?,
            final_score: field(3).parse().context("bad final score")?,
            matched_skills: if skills.is_empty() {
                Vec::new()
            } else {
                skills.split(',').map(str::to_string).collect()
            },
        });
    }
    Ok(results)
}
