use serde::{Deserialize, Serialize};

// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    // 唯一 ID
    pub id: i64,
    // 测验标题
    pub title: String,
    // 创建教师 ID
    pub instructor_id: i64,
    // 班级标签
    pub turma: String,
    // 题目数量（组卷后修正为实际分配数）
    pub question_count: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 是否开放作答
    pub active: bool,
}

// 测验与题目的关联实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    // 唯一 ID
    pub id: i64,
    // 所属测验 ID
    pub quiz_id: i64,
    // 题目 ID
    pub question_id: i64,
    // 卷面顺序（1 起始，测验内连续且唯一）
    pub order: i32,
}
