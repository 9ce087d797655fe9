use serde::Serialize;

use super::entities::Quiz;
use crate::models::questions::entities::{Alternative, Question};

// 卷面上的一道题：题目本体 + 顺序 + 全部选项
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub order: i32,
    pub alternatives: Vec<Alternative>,
}

// 测验详情：测验本体 + 按顺序排列的卷面题目
#[derive(Debug, Clone, Serialize)]
pub struct QuizDetailResponse {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<QuizQuestionDetail>,
}
