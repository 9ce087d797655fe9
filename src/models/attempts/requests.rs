use serde::Deserialize;

// 提交单题作答请求（student_id 与 quiz_id 来自路径参数）
#[derive(Debug, Deserialize)]
pub struct RecordResponseRequest {
    pub question_id: i64,
    pub alternative_id: i64,
}

// 创建作答记录（存储层入参）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentResponseRequest {
    pub student_id: i64,
    pub quiz_id: i64,
    pub question_id: i64,
    pub alternative_id: Option<i64>,
}
