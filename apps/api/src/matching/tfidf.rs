//! TF-IDF lexical similarity between a job description and a batch of resumes.
//!
//! The vector space is built over the whole corpus `{jd} ∪ resumes` with the
//! job description always first. Semantics match the classic vectorizer the
//! original system used: raw term frequency per document, smoothed inverse
//! document frequency `ln((1 + n) / (1 + df)) + 1`, L2-normalized vectors,
//! cosine similarity as the dot product. Tokens are whitespace-separated runs
//! of at least two characters; inputs are expected to be pre-normalized.

use std::collections::BTreeMap;

/// Computes one cosine-similarity score per resume, in input order.
///
/// All scores are in [0, 1]. If the corpus yields no terms at all (for
/// example every text is empty after normalization), every score is 0.0
/// rather than an error.
pub fn similarity(jd_text: &str, resume_texts: &[String]) -> Vec<f64> {
    let mut corpus: Vec<&str> = Vec::with_capacity(resume_texts.len() + 1);
    corpus.push(jd_text);
    corpus.extend(resume_texts.iter().map(String::as_str));

    // First-seen term ids; corpus order is fixed, so the layout is deterministic.
    let mut term_ids: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &corpus {
        for token in tokenize(doc) {
            let next_id = term_ids.len();
            term_ids.entry(token).or_insert(next_id);
        }
    }
    if term_ids.is_empty() {
        return vec![0.0; resume_texts.len()];
    }

    let n_terms = term_ids.len();
    let mut counts: Vec<Vec<f64>> = Vec::with_capacity(corpus.len());
    for doc in &corpus {
        let mut row = vec![0.0_f64; n_terms];
        for token in tokenize(doc) {
            row[term_ids[token]] += 1.0;
        }
        counts.push(row);
    }

    let n_docs = corpus.len() as f64;
    let mut idf = vec![0.0_f64; n_terms];
    for (t, weight) in idf.iter_mut().enumerate() {
        let df = counts.iter().filter(|row| row[t] > 0.0).count() as f64;
        *weight = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
    }

    let vectors: Vec<Vec<f64>> = counts
        .into_iter()
        .map(|row| {
            let mut v: Vec<f64> = row.iter().zip(&idf).map(|(tf, w)| tf * w).collect();
            let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm > 0.0 {
                for x in &mut v {
                    *x /= norm;
                }
            }
            v
        })
        .collect();

    let jd_vector = &vectors[0];
    vectors[1..]
        .iter()
        .map(|resume| {
            let dot: f64 = jd_vector.iter().zip(resume).map(|(a, b)| a * b).sum();
            dot.clamp(0.0, 1.0)
        })
        .collect()
}

/// Whitespace tokenizer keeping tokens of length >= 2, mirroring the original
/// vectorizer's default token pattern on already-normalized text.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|t| t.chars().count() >= 2)
}
