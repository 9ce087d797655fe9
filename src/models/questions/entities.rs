use serde::{Deserialize, Serialize};

// 题目实体（全局题库中的一道题）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    // 唯一 ID
    pub id: i64,
    // 题目编号（如 GEO001，可选）
    pub code: Option<String>,
    // 分类标签（自由文本）
    pub category: String,
    // 题干
    pub enunciado: String,
    // 配图路径（可选）
    pub image_path: Option<String>,
}

// 选项实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    // 唯一 ID
    pub id: i64,
    // 所属题目 ID
    pub question_id: i64,
    // 选项字母（约定 A-E）
    pub letter: String,
    // 选项内容
    pub texto: String,
    // 是否为正确答案
    pub correct: bool,
}
