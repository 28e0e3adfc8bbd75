//! Skill vocabulary and skill extraction.
//!
//! The vocabulary is an immutable ordered set of lowercase canonical skill
//! phrases, fixed at configuration time and injected into the engine. Tests
//! substitute small fixture vocabularies the same way production injects the
//! configured one.

use serde::{Deserialize, Serialize};

/// Built-in vocabulary used when `SKILL_VOCABULARY` is not configured.
pub const DEFAULT_SKILLS: [&str; 10] = [
    "python",
    "java",
    "machine learning",
    "data analysis",
    "communication",
    "teamwork",
    "sql",
    "project management",
    "nlp",
    "deep learning",
];

/// Immutable ordered set of lowercase canonical skill phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from phrases: trimmed, lowercased, empty entries
    /// dropped, duplicates removed with first-occurrence order preserved.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills: Vec<String> = Vec::new();
        for phrase in phrases {
            let canonical = phrase.as_ref().trim().to_lowercase();
            if !canonical.is_empty() && !skills.contains(&canonical) {
                skills.push(canonical);
            }
        }
        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Returns the subset of vocabulary phrases present in `text`, in
    /// vocabulary order.
    ///
    /// Presence is plain substring containment on normalized text. That means
    /// "java" also matches inside "javascript"; the original system behaves
    /// this way and downstream scores depend on it, so it stays.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        self.skills
            .iter()
            .filter(|skill| text.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}
