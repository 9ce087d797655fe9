use serde::Serialize;

// 单个分类的答题统计
//
// correct 是该测验全部作答记录（跨学生、含未完成尝试）中
// 命中正确选项的总次数，不是"答对学生占比"。total 是卷面上
// 该分类的题目数，与学生数无关。
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub correct: i64,
    pub total: i64,
    pub percentage: i32,
}

// 测验统计响应
#[derive(Debug, Serialize)]
pub struct QuizStatisticsResponse {
    pub id: i64,
    pub title: String,
    pub turma: String,
    // 已完成该测验的学生数（未完成尝试不计入）
    pub total_students: i64,
    // 已完成尝试的平均分（无完成记录时为 0）
    pub average_score: f64,
    pub categories_stats: Vec<CategoryStats>,
}
