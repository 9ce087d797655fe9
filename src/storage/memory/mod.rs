//! 内存存储实现
//!
//! 每类实体一张 DashMap，ID 由各自的原子计数器从 1 起单调分配。
//! 过滤操作是全表线性扫描（O(n)），对题库和课堂规模足够。
//! 进程重启后数据清空，持久化由种子导入在启动时补齐。

mod attempts;
mod questions;
mod quizzes;
mod students;

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::models::{
    attempts::entities::{StudentQuiz, StudentResponse},
    questions::entities::{Alternative, Question},
    quizzes::entities::{Quiz, QuizQuestion},
    students::entities::Student,
};

/// 内存存储实例
pub struct MemoryStorage {
    pub(crate) questions: DashMap<i64, Question>,
    pub(crate) alternatives: DashMap<i64, Alternative>,
    pub(crate) quizzes: DashMap<i64, Quiz>,
    pub(crate) quiz_questions: DashMap<i64, QuizQuestion>,
    pub(crate) students: DashMap<i64, Student>,
    pub(crate) student_quizzes: DashMap<i64, StudentQuiz>,
    pub(crate) student_responses: DashMap<i64, StudentResponse>,

    // 各实体的 ID 计数器
    question_id: AtomicI64,
    alternative_id: AtomicI64,
    quiz_id: AtomicI64,
    quiz_question_id: AtomicI64,
    student_id: AtomicI64,
    student_quiz_id: AtomicI64,
    student_response_id: AtomicI64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            questions: DashMap::new(),
            alternatives: DashMap::new(),
            quizzes: DashMap::new(),
            quiz_questions: DashMap::new(),
            students: DashMap::new(),
            student_quizzes: DashMap::new(),
            student_responses: DashMap::new(),
            question_id: AtomicI64::new(1),
            alternative_id: AtomicI64::new(1),
            quiz_id: AtomicI64::new(1),
            quiz_question_id: AtomicI64::new(1),
            student_id: AtomicI64::new(1),
            student_quiz_id: AtomicI64::new(1),
            student_response_id: AtomicI64::new(1),
        }
    }

    pub(crate) fn next_question_id(&self) -> i64 {
        self.question_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_alternative_id(&self) -> i64 {
        self.alternative_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_quiz_id(&self) -> i64 {
        self.quiz_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_quiz_question_id(&self) -> i64 {
        self.quiz_question_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_student_id(&self) -> i64 {
        self.student_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_student_quiz_id(&self) -> i64 {
        self.student_quiz_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_student_response_id(&self) -> i64 {
        self.student_response_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// Storage trait 实现
use crate::errors::Result;
use crate::models::{
    attempts::requests::CreateStudentResponseRequest,
    questions::requests::{CreateAlternativeRequest, CreateQuestionRequest},
    quizzes::requests::{CreateQuizQuestionRequest, CreateQuizRequest},
    students::requests::CreateStudentRequest,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for MemoryStorage {
    // 题目模块
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question> {
        self.create_question_impl(question).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.list_questions_impl().await
    }

    async fn list_questions_by_category(&self, category: &str) -> Result<Vec<Question>> {
        self.list_questions_by_category_impl(category).await
    }

    async fn create_alternative(
        &self,
        alternative: CreateAlternativeRequest,
    ) -> Result<Alternative> {
        self.create_alternative_impl(alternative).await
    }

    async fn list_alternatives_by_question(&self, question_id: i64) -> Result<Vec<Alternative>> {
        self.list_alternatives_by_question_impl(question_id).await
    }

    // 测验模块
    async fn create_quiz(&self, quiz: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(quiz).await
    }

    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(id).await
    }

    async fn list_quizzes_by_instructor(&self, instructor_id: i64) -> Result<Vec<Quiz>> {
        self.list_quizzes_by_instructor_impl(instructor_id).await
    }

    async fn list_quizzes_by_turma(&self, turma: &str) -> Result<Vec<Quiz>> {
        self.list_quizzes_by_turma_impl(turma).await
    }

    async fn update_quiz_active(&self, id: i64, active: bool) -> Result<Option<Quiz>> {
        self.update_quiz_active_impl(id, active).await
    }

    async fn update_quiz_question_count(
        &self,
        id: i64,
        question_count: i32,
    ) -> Result<Option<Quiz>> {
        self.update_quiz_question_count_impl(id, question_count)
            .await
    }

    async fn create_quiz_question(
        &self,
        quiz_question: CreateQuizQuestionRequest,
    ) -> Result<QuizQuestion> {
        self.create_quiz_question_impl(quiz_question).await
    }

    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        self.list_quiz_questions_impl(quiz_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_by_turma(&self, turma: &str) -> Result<Vec<Student>> {
        self.list_students_by_turma_impl(turma).await
    }

    // 作答模块
    async fn create_student_quiz(&self, student_id: i64, quiz_id: i64) -> Result<StudentQuiz> {
        self.create_student_quiz_impl(student_id, quiz_id).await
    }

    async fn get_student_quiz_by_ids(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<Option<StudentQuiz>> {
        self.get_student_quiz_by_ids_impl(student_id, quiz_id).await
    }

    async fn list_student_quizzes_by_student(&self, student_id: i64) -> Result<Vec<StudentQuiz>> {
        self.list_student_quizzes_by_student_impl(student_id).await
    }

    async fn list_student_quizzes_by_quiz(&self, quiz_id: i64) -> Result<Vec<StudentQuiz>> {
        self.list_student_quizzes_by_quiz_impl(quiz_id).await
    }

    async fn update_student_quiz_completion(
        &self,
        id: i64,
        score: i32,
    ) -> Result<Option<StudentQuiz>> {
        self.update_student_quiz_completion_impl(id, score).await
    }

    async fn create_student_response(
        &self,
        response: CreateStudentResponseRequest,
    ) -> Result<StudentResponse> {
        self.create_student_response_impl(response).await
    }

    async fn list_student_responses(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<Vec<StudentResponse>> {
        self.list_student_responses_impl(student_id, quiz_id).await
    }

    async fn list_responses_by_quiz(&self, quiz_id: i64) -> Result<Vec<StudentResponse>> {
        self.list_responses_by_quiz_impl(quiz_id).await
    }
}
