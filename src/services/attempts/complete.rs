use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttemptService;
use crate::models::attempts::entities::StudentResponse;
use crate::models::attempts::responses::{CompleteAttemptResponse, ScoreResult};
use crate::models::quizzes::responses::QuizQuestionDetail;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::quizzes::detail::load_quiz_detail;

/// 同一题多次作答时取最新一条（ID 单调递增，即插入顺序）
pub(crate) fn latest_selection(responses: &[StudentResponse], question_id: i64) -> Option<i64> {
    responses
        .iter()
        .filter(|r| r.question_id == question_id)
        .max_by_key(|r| r.id)
        .and_then(|r| r.alternative_id)
}

/// 按卷面判分
///
/// 未作答、选项不属于本题、选项不正确都计为错。卷面为空时
/// 得分为 0，不做除法。百分比四舍五入到整数（.5 进位）。
pub(crate) fn compute_score(
    questions: &[QuizQuestionDetail],
    responses: &[StudentResponse],
) -> ScoreResult {
    let total_questions = questions.len() as i32;
    let mut correct_answers = 0;

    for question in questions {
        let Some(alternative_id) = latest_selection(responses, question.question.id) else {
            continue;
        };
        if question
            .alternatives
            .iter()
            .any(|a| a.id == alternative_id && a.correct)
        {
            correct_answers += 1;
        }
    }

    let score = if total_questions == 0 {
        0
    } else {
        (f64::from(correct_answers) / f64::from(total_questions) * 100.0).round() as i32
    };

    ScoreResult {
        correct_answers,
        total_questions,
        score,
    }
}

pub async fn complete_attempt(
    service: &AttemptService,
    request: &HttpRequest,
    student_id: i64,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let quiz_detail = match load_quiz_detail(&storage, quiz_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch quiz detail: {e}"),
                )),
            );
        }
    };

    let attempt = match storage.get_student_quiz_by_ids(student_id, quiz_id).await {
        Ok(Some(attempt)) => attempt,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttemptNotFound,
                "Quiz attempt not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch quiz attempt: {e}"),
                )),
            );
        }
    };

    let responses = match storage.list_student_responses(student_id, quiz_id).await {
        Ok(responses) => responses,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch responses: {e}"),
                )),
            );
        }
    };

    let result = compute_score(&quiz_detail.questions, &responses);

    // 重复完成会重算并覆盖之前的分数
    if let Err(e) = storage
        .update_student_quiz_completion(attempt.id, result.score)
        .await
    {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark attempt complete: {e}"),
            )),
        );
    }

    info!(
        "Student {} completed quiz {}: {}/{} correct, score {}",
        student_id, quiz_id, result.correct_answers, result.total_questions, result.score
    );

    match super::detail::load_attempt_detail(&storage, student_id, quiz_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CompleteAttemptResponse {
                detail,
                correct_answers: result.correct_answers,
                total_questions: result.total_questions,
                score: result.score,
            },
            "Quiz attempt completed",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttemptNotFound,
            "Quiz attempt not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to fetch attempt detail: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{compute_score, latest_selection};
    use crate::models::attempts::entities::StudentResponse;
    use crate::models::questions::entities::{Alternative, Question};
    use crate::models::quizzes::responses::QuizQuestionDetail;

    fn question(id: i64, correct_letter: char) -> QuizQuestionDetail {
        let alternatives = ['A', 'B', 'C', 'D']
            .iter()
            .enumerate()
            .map(|(index, letter)| Alternative {
                id: id * 10 + index as i64,
                question_id: id,
                letter: letter.to_string(),
                texto: format!("Alternativa {letter}"),
                correct: *letter == correct_letter,
            })
            .collect();
        QuizQuestionDetail {
            question: Question {
                id,
                code: None,
                category: "Geral".to_string(),
                enunciado: format!("Questao {id}"),
                image_path: None,
            },
            order: id as i32,
            alternatives,
        }
    }

    fn response(id: i64, question_id: i64, alternative_id: i64) -> StudentResponse {
        StudentResponse {
            id,
            student_id: 1,
            quiz_id: 1,
            question_id,
            alternative_id: Some(alternative_id),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_one_of_two_correct_scores_fifty() {
        // Q1 正确答案 A（id 10），Q2 正确答案 B（id 21）
        let questions = vec![question(1, 'A'), question(2, 'B')];
        let responses = vec![response(1, 1, 10), response(2, 2, 22)];

        let result = compute_score(&questions, &responses);
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.total_questions, 2);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_unanswered_questions_count_as_wrong() {
        let questions = vec![
            question(1, 'A'),
            question(2, 'A'),
            question(3, 'A'),
            question(4, 'A'),
        ];
        // 只答了前两题，都答对
        let responses = vec![response(1, 1, 10), response(2, 2, 20)];

        let result = compute_score(&questions, &responses);
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.total_questions, 4);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_empty_paper_scores_zero() {
        let result = compute_score(&[], &[]);
        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_half_percent_rounds_up() {
        // 8 题对 1 题：12.5% -> 13
        let questions: Vec<_> = (1..=8).map(|id| question(id, 'A')).collect();
        let responses = vec![response(1, 1, 10)];

        let result = compute_score(&questions, &responses);
        assert_eq!(result.score, 13);
    }

    #[test]
    fn test_latest_response_wins() {
        let questions = vec![question(1, 'A')];
        // 先答对，又改成错的
        let responses = vec![response(1, 1, 10), response(2, 1, 11)];

        let result = compute_score(&questions, &responses);
        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.score, 0);
        assert_eq!(latest_selection(&responses, 1), Some(11));
    }

    #[test]
    fn test_foreign_alternative_counts_as_wrong() {
        // 所选选项不属于本题
        let questions = vec![question(1, 'A')];
        let responses = vec![response(1, 1, 999)];

        let result = compute_score(&questions, &responses);
        assert_eq!(result.correct_answers, 0);
    }
}
