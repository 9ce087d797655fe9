use serde::Deserialize;

// 题目列表查询参数
#[derive(Debug, Deserialize)]
pub struct QuestionQueryParams {
    pub category: Option<String>,
}

// 创建题目请求（CSV 导入与种子导入共用同一入口）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub code: Option<String>,
    pub category: String,
    pub enunciado: String,
    pub image_path: Option<String>,
}

// 创建选项请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlternativeRequest {
    pub question_id: i64,
    pub letter: String,
    pub texto: String,
    pub correct: bool,
}
