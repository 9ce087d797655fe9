use serde::Deserialize;

// 创建测验请求
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub title: String,
    pub instructor_id: i64,
    pub turma: String,
    // 期望题目数量；题库不足时按实际数量降级
    pub question_count: i32,
}

// 更新测验开放状态请求
#[derive(Debug, Deserialize)]
pub struct UpdateQuizStatusRequest {
    pub active: bool,
}

// 创建测验题目关联请求（仅由组卷服务内部使用）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizQuestionRequest {
    pub quiz_id: i64,
    pub question_id: i64,
    pub order: i32,
}
