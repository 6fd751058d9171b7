//! Insert and get for questions and answers.

use rusqlite::{params, Connection, OptionalExtension, Row};

use tally_core::errors::TallyResult;
use tally_core::models::{Answer, Difficulty, Question, QuestionType};
use tally_core::score::Score;

use super::{conv_err, parse_ts};
use crate::to_storage_err;

pub fn insert_question(conn: &Connection, question: &Question) -> TallyResult<()> {
    conn.execute(
        "INSERT INTO questions (id, client_id, text, question_type, difficulty, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            question.id,
            question.client_id,
            question.text,
            question.question_type.as_str(),
            question.difficulty.as_str(),
            question.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_question(conn: &Connection, id: &str) -> TallyResult<Option<Question>> {
    conn.prepare(
        "SELECT id, client_id, text, question_type, difficulty, created_at
         FROM questions WHERE id = ?1",
    )
    .map_err(|e| to_storage_err(e.to_string()))?
    .query_row(params![id], row_to_question)
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    let type_raw: String = row.get(3)?;
    let difficulty_raw: String = row.get(4)?;
    let created_raw: String = row.get(5)?;
    Ok(Question {
        id: row.get(0)?,
        client_id: row.get(1)?,
        text: row.get(2)?,
        question_type: type_raw.parse::<QuestionType>().map_err(|e| conv_err(3, e))?,
        difficulty: difficulty_raw.parse::<Difficulty>().map_err(|e| conv_err(4, e))?,
        created_at: parse_ts(5, &created_raw)?,
    })
}

pub fn insert_answer(conn: &Connection, answer: &Answer) -> TallyResult<()> {
    conn.execute(
        "INSERT INTO answers (
            id, question_id, contributor_id, answer_text,
            agreement_score, model_confidence_score, is_valid, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            answer.id,
            answer.question_id,
            answer.contributor_id,
            answer.answer_text,
            answer.agreement_score.map(|s| s.value()),
            answer.model_confidence_score.map(|s| s.value()),
            answer.is_valid.map(|v| v as i32),
            answer.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_answer(conn: &Connection, id: &str) -> TallyResult<Option<Answer>> {
    conn.prepare(
        "SELECT id, question_id, contributor_id, answer_text,
                agreement_score, model_confidence_score, is_valid, created_at
         FROM answers WHERE id = ?1",
    )
    .map_err(|e| to_storage_err(e.to_string()))?
    .query_row(params![id], row_to_answer)
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub(crate) fn row_to_answer(row: &Row<'_>) -> rusqlite::Result<Answer> {
    let created_raw: String = row.get(7)?;
    Ok(Answer {
        id: row.get(0)?,
        question_id: row.get(1)?,
        contributor_id: row.get(2)?,
        answer_text: row.get(3)?,
        agreement_score: row.get::<_, Option<f64>>(4)?.map(Score::new),
        model_confidence_score: row.get::<_, Option<f64>>(5)?.map(Score::new),
        is_valid: row.get::<_, Option<i64>>(6)?.map(|v| v != 0),
        created_at: parse_ts(7, &created_raw)?,
    })
}
