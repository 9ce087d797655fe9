use serde::Serialize;

use super::entities::StudentQuiz;
use crate::models::questions::entities::{Alternative, Question};
use crate::models::quizzes::entities::Quiz;

// 判分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub correct_answers: i32,
    pub total_questions: i32,
    // 百分制，四舍五入（.5 进位）
    pub score: i32,
}

// 带作答标记的卷面题目
#[derive(Debug, Clone, Serialize)]
pub struct AttemptQuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub order: i32,
    pub alternatives: Vec<Alternative>,
    // 学生所选选项（未作答为空；多次作答取最新一次）
    pub selected_alternative_id: Option<i64>,
}

// 附带作答标记的测验
#[derive(Debug, Clone, Serialize)]
pub struct AttemptQuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<AttemptQuestionDetail>,
}

// 作答详情：尝试记录 + 带作答标记的卷面
#[derive(Debug, Clone, Serialize)]
pub struct AttemptDetailResponse {
    #[serde(flatten)]
    pub attempt: StudentQuiz,
    pub quiz: AttemptQuizDetail,
}

// 完成测验响应：作答详情 + 判分结果
#[derive(Debug, Serialize)]
pub struct CompleteAttemptResponse {
    #[serde(flatten)]
    pub detail: AttemptDetailResponse,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub score: i32,
}
