use serde::{Deserialize, Serialize};

// 学生测验记录（一次作答尝试，按 (student_id, quiz_id) 至多一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentQuiz {
    // 唯一 ID
    pub id: i64,
    // 学生 ID
    pub student_id: i64,
    // 测验 ID
    pub quiz_id: i64,
    // 百分制得分（完成前为空）
    pub score: Option<i32>,
    // 是否已完成
    pub completed: bool,
    // 开始时间
    pub started_at: chrono::DateTime<chrono::Utc>,
    // 完成时间（完成前为空）
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 学生作答记录（只追加，同一题可存在多条，判分取最新一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResponse {
    // 唯一 ID
    pub id: i64,
    // 学生 ID
    pub student_id: i64,
    // 测验 ID
    pub quiz_id: i64,
    // 题目 ID
    pub question_id: i64,
    // 所选选项 ID（可空）
    pub alternative_id: Option<i64>,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
