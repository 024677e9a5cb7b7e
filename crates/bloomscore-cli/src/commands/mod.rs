pub mod batch;
pub mod generate;
pub mod init;
pub mod levels;
pub mod validate;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bloomscore_core::generator;
use bloomscore_core::model::QuizData;
use bloomscore_core::report::AssessmentReport;

/// Generate quiz data, using a seeded RNG when the user asked for one.
pub(crate) fn generate_quiz(
    course_id: &str,
    student_id: Option<&str>,
    seed: Option<u64>,
) -> Result<QuizData> {
    let quiz = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generator::generate_with_rng(course_id, student_id, &mut rng)?
        }
        None => generator::generate(course_id, student_id)?,
    };
    Ok(quiz)
}

/// Generate a full report for one pair.
pub(crate) fn generate_report(
    course_id: &str,
    student_id: Option<&str>,
    seed: Option<u64>,
) -> Result<AssessmentReport> {
    let quiz = generate_quiz(course_id, student_id, seed)?;
    Ok(AssessmentReport::new(course_id, student_id, quiz))
}
