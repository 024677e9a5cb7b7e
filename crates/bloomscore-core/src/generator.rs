//! Seed-stable sample quiz generation.
//!
//! Stands in for assessment data the application does not persist yet. The
//! per-level question counts and target success rates are derived from the
//! character codes of the (course, student) id pair, so repeated renders for
//! the same pair agree on the shape of the data. Individual correctness
//! flags and answer times are drawn from an injectable RNG within that
//! envelope; callers that need bit-exact output pass a seeded RNG to
//! [`generate_with_rng`].

use std::collections::BTreeMap;

use rand::Rng;

use crate::error::GenerateError;
use crate::model::{LevelScore, QuizData, QuizQuestion};
use crate::taxonomy::CognitiveLevel;

/// Inclusive lower bound for question counts at any level.
const MIN_QUESTIONS: u32 = 4;
/// Seed-derived counts span `MIN_QUESTIONS..MIN_QUESTIONS + COUNT_SPREAD`.
const COUNT_SPREAD: u32 = 16;
/// Answer times are drawn uniformly from `[MIN_TIME_SECS, MAX_TIME_SECS)`.
const MIN_TIME_SECS: f64 = 20.0;
const MAX_TIME_SECS: f64 = 80.0;

/// Canned (question text, verb) pairs per level. Question slots cycle the
/// bank modulo its length, so lists shorter than the count repeat.
fn question_bank(level: CognitiveLevel) -> &'static [(&'static str, &'static str)] {
    match level {
        CognitiveLevel::Remember => &[
            ("Define the key terms introduced in this chapter", "define"),
            ("List the steps of the procedure in order", "list"),
            ("Recall the formula covered in the lecture", "recall"),
            ("Name the components shown in the diagram", "name"),
            ("Identify the correct symbol for each concept", "identify"),
        ],
        CognitiveLevel::Understand => &[
            ("Explain the main idea in your own words", "explain"),
            ("Summarize the argument of the section", "summarize"),
            ("Describe how the two concepts relate", "describe"),
            ("Classify the given examples by category", "classify"),
            ("Compare the two approaches discussed in class", "compare"),
        ],
        CognitiveLevel::Apply => &[
            ("Solve the worked example with new inputs", "solve"),
            ("Demonstrate the technique on a fresh data set", "demonstrate"),
            ("Use the formula to compute the missing value", "use"),
            ("Implement the described algorithm step by step", "implement"),
            ("Execute the procedure for the given scenario", "execute"),
        ],
        CognitiveLevel::Analyze => &[
            ("Differentiate the causes from the effects in the case", "differentiate"),
            ("Organize the evidence into supporting and opposing groups", "organize"),
            ("Attribute each outcome to its most likely cause", "attribute"),
            ("Deconstruct the argument into its premises", "deconstruct"),
            ("Examine the data set for the underlying pattern", "examine"),
        ],
        CognitiveLevel::Evaluate => &[
            ("Judge which solution best fits the constraints", "judge"),
            ("Critique the methodology of the study", "critique"),
            ("Defend your chosen approach against the alternative", "defend"),
            ("Justify the trade-off made in the design", "justify"),
            ("Appraise the reliability of the cited sources", "appraise"),
        ],
        CognitiveLevel::Create => &[
            ("Design an experiment to test the hypothesis", "design"),
            ("Construct a model that explains the observations", "construct"),
            ("Develop an improved version of the procedure", "develop"),
            ("Formulate a new problem based on the chapter", "formulate"),
            ("Compose a proposal combining both techniques", "compose"),
        ],
    }
}

/// Derive the stable integer seed for a (course, student) pair from the
/// character codes of the concatenated ids.
pub fn derive_seed(course_id: &str, student_id: Option<&str>) -> u32 {
    let combined = match student_id {
        Some(s) => format!("{course_id}:{s}"),
        None => course_id.to_string(),
    };
    combined
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// Seed-derived question count for one level, in `4..=19`.
pub fn question_count(seed: u32, level: CognitiveLevel) -> u32 {
    MIN_QUESTIONS + (seed.wrapping_add(7 * level.weight()) % COUNT_SPREAD)
}

/// Seed-derived target success rate for one level.
///
/// Base rates fall from 0.85 at Remember to 0.35 at Create in steps of 0.10,
/// perturbed by a seed-derived offset within ±15 percentage points and
/// clamped to `[0.05, 0.95]`.
pub fn target_success_rate(seed: u32, level: CognitiveLevel) -> f64 {
    let base = 0.85 - 0.10 * f64::from(level.weight() - 1);
    let offset = f64::from(seed.wrapping_add(13 * level.weight()) % 31) / 100.0 - 0.15;
    (base + offset).clamp(0.05, 0.95)
}

/// Generate sample quiz data for a course, optionally in the context of one
/// student. Correctness flags and answer times are only populated when a
/// student id is given.
pub fn generate(course_id: &str, student_id: Option<&str>) -> Result<QuizData, GenerateError> {
    generate_with_rng(course_id, student_id, &mut rand::thread_rng())
}

/// Like [`generate`], but drawing correctness and timing from the supplied
/// RNG. Pass a seeded `StdRng` for fully reproducible output.
pub fn generate_with_rng<R: Rng + ?Sized>(
    course_id: &str,
    student_id: Option<&str>,
    rng: &mut R,
) -> Result<QuizData, GenerateError> {
    if course_id.trim().is_empty() {
        return Err(GenerateError::EmptyCourseId);
    }

    let seed = derive_seed(course_id, student_id);
    let mut level_scores = BTreeMap::new();
    let mut questions = BTreeMap::new();

    for level in CognitiveLevel::ALL {
        let count = question_count(seed, level);
        let rate = target_success_rate(seed, level);
        let bank = question_bank(level);

        let mut level_questions = Vec::with_capacity(count as usize);
        let mut correct = 0u32;

        for slot in 0..count {
            let (text, verb) = bank[slot as usize % bank.len()];

            let (is_correct, time_taken_secs) = if student_id.is_some() {
                let answered_correctly = rng.gen_bool(rate);
                if answered_correctly {
                    correct += 1;
                }
                (
                    Some(answered_correctly),
                    Some(rng.gen_range(MIN_TIME_SECS..MAX_TIME_SECS)),
                )
            } else {
                (None, None)
            };

            level_questions.push(QuizQuestion {
                id: format!("{level}-{slot}"),
                text: text.to_string(),
                verb: verb.to_string(),
                level,
                is_correct,
                time_taken_secs,
            });
        }

        level_scores.insert(
            level,
            LevelScore {
                total: count,
                correct,
            },
        );
        questions.insert(level, level_questions);
    }

    Ok(QuizData {
        level_scores,
        questions,
    })
}
