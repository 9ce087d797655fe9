use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // 唯一 ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 班级标签
    pub turma: String,
}
