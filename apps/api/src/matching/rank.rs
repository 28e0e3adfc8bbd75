//! Weighted final scoring and deterministic ranking.

use serde::{Deserialize, Serialize};

/// Weight of the TF-IDF lexical similarity in the final score.
pub const SIMILARITY_WEIGHT: f64 = 0.7;
/// Weight of the skill-match ratio in the final score.
pub const SKILL_WEIGHT: f64 = 0.3;

/// One resume prepared for ranking: its identifier and the vocabulary skills
/// found in its normalized text.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub id: String,
    pub skills: Vec<String>,
}

/// Final per-resume outcome. Never mutated after computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub resume: String,
    /// TF-IDF cosine similarity against the job description, in [0, 1].
    pub text_match_score: f64,
    /// Fraction of job-description skills also found in the resume, in [0, 1].
    pub skill_match_score: f64,
    /// `0.7 * text_match_score + 0.3 * skill_match_score`.
    pub final_score: f64,
    /// Matched skills in vocabulary order.
    pub matched_skills: Vec<String>,
}

/// Ranks resumes by weighted final score, descending.
///
/// `similarities` must be aligned with `resumes` (one score each, same
/// order). The sort is stable: resumes with equal final scores keep their
/// original relative order, which makes rankings reproducible.
///
/// When the job description has no recognized skills the skill ratio is 0
/// for every resume (never a division by zero) and the final score reduces
/// to `0.7 * similarity`.
pub fn rank(
    job_skills: &[String],
    resumes: &[ScoredDocument],
    similarities: &[f64],
) -> Vec<MatchResult> {
    debug_assert_eq!(resumes.len(), similarities.len());

    let mut results: Vec<MatchResult> = resumes
        .iter()
        .zip(similarities)
        .map(|(doc, &sim)| {
            let matched: Vec<String> = job_skills
                .iter()
                .filter(|&skill| doc.skills.contains(skill))
                .cloned()
                .collect();
            let skill_ratio = if job_skills.is_empty() {
                0.0
            } else {
                matched.len() as f64 / job_skills.len() as f64
            };
            MatchResult {
                resume: doc.id.clone(),
                text_match_score: sim,
                skill_match_score: skill_ratio,
                final_score: SIMILARITY_WEIGHT * sim + SKILL_WEIGHT * skill_ratio,
                matched_skills: matched,
            }
        })
        .collect();

    results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalize;
    use crate::matching::tfidf::similarity;
    use crate::matching::vocabulary::SkillVocabulary;

    fn doc(id: &str, skills: &[&str]) -> ScoredDocument {
        ScoredDocument {
            id: id.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_final_score_is_weighted_combination() {
        let job_skills = strings(&["python", "sql"]);
        let resumes = vec![doc("a.pdf", &["python"])];
        let results = rank(&job_skills, &resumes, &[0.5]);
        // 0.7*0.5 + 0.3*0.5 = 0.5
        assert!((results[0].final_score - 0.5).abs() < 1e-9);
        assert!((results[0].skill_match_score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_invariant_holds_for_every_result() {
        let job_skills = strings(&["python", "sql", "nlp"]);
        let resumes = vec![
            doc("a", &["python", "sql"]),
            doc("b", &[]),
            doc("c", &["nlp", "java"]),
        ];
        let sims = [0.31, 0.72, 0.05];
        for r in rank(&job_skills, &resumes, &sims) {
            let expected =
                SIMILARITY_WEIGHT * r.text_match_score + SKILL_WEIGHT * r.skill_match_score;
            assert!((r.final_score - expected).abs() < 1e-9);
            assert!((0.0..=1.0).contains(&r.final_score));
        }
    }

    #[test]
    fn test_sorted_descending_by_final_score() {
        let job_skills = strings(&["python"]);
        let resumes = vec![doc("low", &[]), doc("high", &["python"]), doc("mid", &[])];
        let results = rank(&job_skills, &resumes, &[0.1, 0.9, 0.5]);
        assert_eq!(results[0].resume, "high");
        assert_eq!(results[1].resume, "mid");
        assert_eq!(results[2].resume, "low");
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let job_skills = strings(&["python"]);
        let resumes = vec![
            doc("first", &["python"]),
            doc("second", &["python"]),
            doc("third", &["python"]),
        ];
        let results = rank(&job_skills, &resumes, &[0.4, 0.4, 0.4]);
        let order: Vec<&str> = results.iter().map(|r| r.resume.as_str()).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_job_skills_never_divides_by_zero() {
        let resumes = vec![doc("a", &["python", "sql"]), doc("b", &[])];
        let results = rank(&[], &resumes, &[0.6, 0.2]);
        for r in &results {
            assert_eq!(r.skill_match_score, 0.0);
            assert!(r.matched_skills.is_empty());
            assert!((r.final_score - SIMILARITY_WEIGHT * r.text_match_score).abs() < 1e-9);
        }
    }

    #[test]
    fn test_matched_skills_follow_job_skill_order() {
        let job_skills = strings(&["python", "sql", "nlp"]);
        let resumes = vec![doc("a", &["nlp", "python"])];
        let results = rank(&job_skills, &resumes, &[0.0]);
        assert_eq!(results[0].matched_skills, ["python", "nlp"]);
    }

    // End-to-end over the real pipeline pieces, per the documented scenarios.

    #[test]
    fn test_scenario_python_and_sql_job() {
        let vocab = SkillVocabulary::default();
        let jd = normalize("We need Python and SQL skills");
        let texts = vec![
            normalize("I know Python and Java"),
            normalize("I know SQL and Python"),
        ];

        let job_skills = vocab.extract_skills(&jd);
        assert_eq!(job_skills, ["python", "sql"]);

        let resumes: Vec<ScoredDocument> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| ScoredDocument {
                id: format!("resume-{i}"),
                skills: vocab.extract_skills(t),
            })
            .collect();
        let sims = similarity(&jd, &texts);
        let results = rank(&job_skills, &resumes, &sims);

        // Both resumes cover both job skills, so the skill ratio ties at 1.0
        // and lexical similarity alone decides the order.
        for r in &results {
            assert!((r.skill_match_score - 1.0).abs() < 1e-9);
        }
        assert!(results[0].text_match_score >= results[1].text_match_score);
    }

    #[test]
    fn test_scenario_empty_resume_text() {
        let vocab = SkillVocabulary::default();
        let jd = normalize("Python developer needed");
        let texts = vec![normalize("")];
        let resumes = vec![ScoredDocument {
            id: "empty.txt".to_string(),
            skills: vocab.extract_skills(&texts[0]),
        }];
        let sims = similarity(&jd, &texts);
        let results = rank(&vocab.extract_skills(&jd), &resumes, &sims);

        assert!(results[0].matched_skills.is_empty());
        assert_eq!(results[0].text_match_score, 0.0);
        assert_eq!(results[0].final_score, 0.0);
    }

    #[test]
    fn test_scenario_job_with_no_recognized_skills() {
        let vocab = SkillVocabulary::default();
        let jd = normalize("Wanted: underwater basket weaver");
        let texts = vec![normalize("python expert"), normalize("basket weaver")];
        let job_skills = vocab.extract_skills(&jd);
        assert!(job_skills.is_empty());

        let resumes: Vec<ScoredDocument> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| ScoredDocument {
                id: format!("r{i}"),
                skills: vocab.extract_skills(t),
            })
            .collect();
        let sims = similarity(&jd, &texts);
        let results = rank(&job_skills, &resumes, &sims);

        for r in &results {
            assert_eq!(r.skill_match_score, 0.0);
            assert!((r.final_score - SIMILARITY_WEIGHT * r.text_match_score).abs() < 1e-9);
        }
    }
}
