use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatisticsService;
use crate::models::attempts::entities::{StudentQuiz, StudentResponse};
use crate::models::quizzes::responses::QuizQuestionDetail;
use crate::models::statistics::responses::{CategoryStats, QuizStatisticsResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::quizzes::detail::load_quiz_detail;

/// 已完成尝试的平均分，无完成记录时为 0
pub(crate) fn average_completed_score(attempts: &[StudentQuiz]) -> (i64, f64) {
    let completed: Vec<_> = attempts.iter().filter(|a| a.completed).collect();
    let total_students = completed.len() as i64;
    if total_students == 0 {
        return (0, 0.0);
    }
    let sum: i64 = completed
        .iter()
        .map(|a| i64::from(a.score.unwrap_or(0)))
        .sum();
    (total_students, sum as f64 / total_students as f64)
}

/// 按分类聚合答题统计
///
/// total 按卷面题目计数；correct 遍历该测验的全部作答记录，
/// 每条命中正确选项的记录都计一次（跨学生、含未完成尝试、
/// 含同一题的重复作答）。分类顺序按卷面上首次出现的顺序。
pub(crate) fn build_category_stats(
    questions: &[QuizQuestionDetail],
    responses: &[StudentResponse],
) -> Vec<CategoryStats> {
    let mut stats: Vec<CategoryStats> = Vec::new();

    for question in questions {
        match stats
            .iter_mut()
            .find(|s| s.category == question.question.category)
        {
            Some(entry) => entry.total += 1,
            None => stats.push(CategoryStats {
                category: question.question.category.clone(),
                correct: 0,
                total: 1,
                percentage: 0,
            }),
        }
    }

    for response in responses {
        let Some(question) = questions
            .iter()
            .find(|q| q.question.id == response.question_id)
        else {
            continue;
        };
        let hit_correct = response.alternative_id.is_some_and(|alternative_id| {
            question
                .alternatives
                .iter()
                .any(|a| a.id == alternative_id && a.correct)
        });
        if hit_correct
            && let Some(entry) = stats
                .iter_mut()
                .find(|s| s.category == question.question.category)
        {
            entry.correct += 1;
        }
    }

    for entry in &mut stats {
        entry.percentage = if entry.total > 0 {
            (entry.correct as f64 / entry.total as f64 * 100.0).round() as i32
        } else {
            0
        };
    }

    stats
}

pub async fn get_quiz_statistics(
    service: &StatisticsService,
    request: &HttpRequest,
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

    let attempts = match storage.list_student_quizzes_by_quiz(quiz_id).await {
        Ok(attempts) => attempts,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch quiz attempts: {e}"),
                )),
            );
        }
    };

    let responses = match storage.list_responses_by_quiz(quiz_id).await {
        Ok(responses) => responses,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch quiz responses: {e}"),
                )),
            );
        }
    };

    let (total_students, average_score) = average_completed_score(&attempts);
    let categories_stats = build_category_stats(&quiz_detail.questions, &responses);

    let statistics = QuizStatisticsResponse {
        id: quiz_detail.quiz.id,
        title: quiz_detail.quiz.title,
        turma: quiz_detail.quiz.turma,
        total_students,
        average_score,
        categories_stats,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        statistics,
        "Quiz statistics retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{average_completed_score, build_category_stats};
    use crate::models::attempts::entities::{StudentQuiz, StudentResponse};
    use crate::models::questions::entities::{Alternative, Question};
    use crate::models::quizzes::responses::QuizQuestionDetail;

    fn attempt(id: i64, completed: bool, score: Option<i32>) -> StudentQuiz {
        StudentQuiz {
            id,
            student_id: id,
            quiz_id: 1,
            score,
            completed,
            started_at: Utc::now(),
            completed_at: completed.then(Utc::now),
        }
    }

    fn question(id: i64, category: &str) -> QuizQuestionDetail {
        // 每题两个选项，A（id*10）为正确答案
        QuizQuestionDetail {
            question: Question {
                id,
                code: None,
                category: category.to_string(),
                enunciado: format!("Questao {id}"),
                image_path: None,
            },
            order: id as i32,
            alternatives: vec![
                Alternative {
                    id: id * 10,
                    question_id: id,
                    letter: "A".to_string(),
                    texto: "Certa".to_string(),
                    correct: true,
                },
                Alternative {
                    id: id * 10 + 1,
                    question_id: id,
                    letter: "B".to_string(),
                    texto: "Errada".to_string(),
                    correct: false,
                },
            ],
        }
    }

    fn response(id: i64, student_id: i64, question_id: i64, alternative_id: i64) -> StudentResponse {
        StudentResponse {
            id,
            student_id,
            quiz_id: 1,
            question_id,
            alternative_id: Some(alternative_id),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_ignores_incomplete_attempts() {
        let attempts = vec![
            attempt(1, true, Some(80)),
            attempt(2, true, Some(60)),
            attempt(3, false, None),
        ];
        let (total_students, average_score) = average_completed_score(&attempts);
        assert_eq!(total_students, 2);
        assert!((average_score - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_is_zero_without_completions() {
        let attempts = vec![attempt(1, false, None)];
        let (total_students, average_score) = average_completed_score(&attempts);
        assert_eq!(total_students, 0);
        assert_eq!(average_score, 0.0);
    }

    #[test]
    fn test_category_totals_follow_paper_order() {
        let questions = vec![
            question(1, "Historia"),
            question(2, "Geografia"),
            question(3, "Historia"),
        ];
        let stats = build_category_stats(&questions, &[]);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, "Historia");
        assert_eq!(stats[0].total, 2);
        assert_eq!(stats[1].category, "Geografia");
        assert_eq!(stats[1].total, 1);
        assert_eq!(stats[0].percentage, 0);
    }

    #[test]
    fn test_correct_counts_every_matching_response() {
        let questions = vec![question(1, "Historia"), question(2, "Historia")];
        // 两名学生 + 同一学生对 Q1 的重复作答都计入
        let responses = vec![
            response(1, 1, 1, 10),
            response(2, 1, 1, 10),
            response(3, 2, 2, 21),
            response(4, 2, 1, 10),
        ];
        let stats = build_category_stats(&questions, &responses);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].correct, 3);
        assert_eq!(stats[0].total, 2);
        assert_eq!(stats[0].percentage, 150);
    }

    #[test]
    fn test_responses_to_unknown_questions_are_skipped() {
        let questions = vec![question(1, "Historia")];
        let responses = vec![response(1, 1, 99, 990)];
        let stats = build_category_stats(&questions, &responses);
        assert_eq!(stats[0].correct, 0);
    }
}
