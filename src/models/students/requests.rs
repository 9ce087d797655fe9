use serde::Deserialize;

// 创建学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub turma: String,
}
