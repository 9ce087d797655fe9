//! 测验与卷面关联存储操作

use super::MemoryStorage;
use crate::errors::{QuizSystemError, Result};
use crate::models::quizzes::{
    entities::{Quiz, QuizQuestion},
    requests::{CreateQuizQuestionRequest, CreateQuizRequest},
};

impl MemoryStorage {
    /// 创建测验（初始即开放作答）
    pub(crate) async fn create_quiz_impl(&self, req: CreateQuizRequest) -> Result<Quiz> {
        let id = self.next_quiz_id();
        let quiz = Quiz {
            id,
            title: req.title,
            instructor_id: req.instructor_id,
            turma: req.turma,
            question_count: req.question_count,
            created_at: chrono::Utc::now(),
            active: true,
        };
        self.quizzes.insert(id, quiz.clone());
        Ok(quiz)
    }

    /// 通过 ID 获取测验
    pub(crate) async fn get_quiz_by_id_impl(&self, id: i64) -> Result<Option<Quiz>> {
        Ok(self.quizzes.get(&id).map(|q| q.clone()))
    }

    /// 列出教师创建的测验
    pub(crate) async fn list_quizzes_by_instructor_impl(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<Quiz>> {
        let mut quizzes: Vec<Quiz> = self
            .quizzes
            .iter()
            .filter(|e| e.value().instructor_id == instructor_id)
            .map(|e| e.value().clone())
            .collect();
        quizzes.sort_by_key(|q| q.id);
        Ok(quizzes)
    }

    /// 列出班级的测验
    pub(crate) async fn list_quizzes_by_turma_impl(&self, turma: &str) -> Result<Vec<Quiz>> {
        let mut quizzes: Vec<Quiz> = self
            .quizzes
            .iter()
            .filter(|e| e.value().turma == turma)
            .map(|e| e.value().clone())
            .collect();
        quizzes.sort_by_key(|q| q.id);
        Ok(quizzes)
    }

    /// 更新测验开放状态
    pub(crate) async fn update_quiz_active_impl(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<Quiz>> {
        match self.quizzes.get_mut(&id) {
            Some(mut entry) => {
                entry.active = active;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    /// 修正测验的实际题目数量（组卷降级时调用）
    pub(crate) async fn update_quiz_question_count_impl(
        &self,
        id: i64,
        question_count: i32,
    ) -> Result<Option<Quiz>> {
        match self.quizzes.get_mut(&id) {
            Some(mut entry) => {
                entry.question_count = question_count;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    /// 创建测验题目关联
    ///
    /// 引用完整性保护：测验与题目任一不存在即失败，避免卷面
    /// 指向悬空 ID。
    pub(crate) async fn create_quiz_question_impl(
        &self,
        req: CreateQuizQuestionRequest,
    ) -> Result<QuizQuestion> {
        if !self.quizzes.contains_key(&req.quiz_id) {
            return Err(QuizSystemError::not_found(format!(
                "Quiz with ID {} not found",
                req.quiz_id
            )));
        }
        if !self.questions.contains_key(&req.question_id) {
            return Err(QuizSystemError::not_found(format!(
                "Question with ID {} not found",
                req.question_id
            )));
        }

        let id = self.next_quiz_question_id();
        let quiz_question = QuizQuestion {
            id,
            quiz_id: req.quiz_id,
            question_id: req.question_id,
            order: req.order,
        };
        self.quiz_questions.insert(id, quiz_question.clone());
        Ok(quiz_question)
    }

    /// 按卷面顺序列出测验题目关联
    pub(crate) async fn list_quiz_questions_impl(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        let mut quiz_questions: Vec<QuizQuestion> = self
            .quiz_questions
            .iter()
            .filter(|e| e.value().quiz_id == quiz_id)
            .map(|e| e.value().clone())
            .collect();
        quiz_questions.sort_by_key(|qq| qq.order);
        Ok(quiz_questions)
    }
}
