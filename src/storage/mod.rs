use std::sync::Arc;

use crate::models::{
    attempts::{
        entities::{StudentQuiz, StudentResponse},
        requests::CreateStudentResponseRequest,
    },
    questions::{
        entities::{Alternative, Question},
        requests::{CreateAlternativeRequest, CreateQuestionRequest},
    },
    quizzes::{
        entities::{Quiz, QuizQuestion},
        requests::{CreateQuizQuestionRequest, CreateQuizRequest},
    },
    students::{entities::Student, requests::CreateStudentRequest},
};

use crate::errors::Result;

pub mod memory;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 题目管理方法
    // 创建题目
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question>;
    // 通过ID获取题目
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    // 列出题库全部题目
    async fn list_questions(&self) -> Result<Vec<Question>>;
    // 按分类列出题目
    async fn list_questions_by_category(&self, category: &str) -> Result<Vec<Question>>;

    /// 选项管理方法
    // 创建选项
    async fn create_alternative(&self, alternative: CreateAlternativeRequest)
    -> Result<Alternative>;
    // 列出题目的全部选项
    async fn list_alternatives_by_question(&self, question_id: i64) -> Result<Vec<Alternative>>;

    /// 测验管理方法
    // 创建测验
    async fn create_quiz(&self, quiz: CreateQuizRequest) -> Result<Quiz>;
    // 通过ID获取测验
    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>>;
    // 列出教师创建的测验
    async fn list_quizzes_by_instructor(&self, instructor_id: i64) -> Result<Vec<Quiz>>;
    // 列出班级的测验
    async fn list_quizzes_by_turma(&self, turma: &str) -> Result<Vec<Quiz>>;
    // 更新测验开放状态
    async fn update_quiz_active(&self, id: i64, active: bool) -> Result<Option<Quiz>>;
    // 组卷降级后修正实际题目数量
    async fn update_quiz_question_count(
        &self,
        id: i64,
        question_count: i32,
    ) -> Result<Option<Quiz>>;

    /// 测验题目关联方法
    // 创建测验题目关联（校验测验与题目均存在）
    async fn create_quiz_question(
        &self,
        quiz_question: CreateQuizQuestionRequest,
    ) -> Result<QuizQuestion>;
    // 按卷面顺序列出测验题目关联
    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 按班级列出学生
    async fn list_students_by_turma(&self, turma: &str) -> Result<Vec<Student>>;

    /// 作答尝试方法
    // 创建尝试记录
    async fn create_student_quiz(&self, student_id: i64, quiz_id: i64) -> Result<StudentQuiz>;
    // 按 (student_id, quiz_id) 获取尝试记录
    async fn get_student_quiz_by_ids(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<Option<StudentQuiz>>;
    // 列出学生的全部尝试记录
    async fn list_student_quizzes_by_student(&self, student_id: i64) -> Result<Vec<StudentQuiz>>;
    // 列出测验的全部尝试记录
    async fn list_student_quizzes_by_quiz(&self, quiz_id: i64) -> Result<Vec<StudentQuiz>>;
    // 完成尝试：写入得分与完成时间（重复调用覆盖旧值）
    async fn update_student_quiz_completion(&self, id: i64, score: i32)
    -> Result<Option<StudentQuiz>>;

    /// 作答记录方法
    // 追加一条作答记录
    async fn create_student_response(
        &self,
        response: CreateStudentResponseRequest,
    ) -> Result<StudentResponse>;
    // 列出学生在某测验下的全部作答记录（按插入顺序）
    async fn list_student_responses(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<Vec<StudentResponse>>;
    // 列出测验的全部作答记录（跨学生，按插入顺序）
    async fn list_responses_by_quiz(&self, quiz_id: i64) -> Result<Vec<StudentResponse>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = memory::MemoryStorage::new();
    Ok(Arc::new(storage))
}
