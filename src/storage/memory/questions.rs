//! 题目与选项存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::questions::{
    entities::{Alternative, Question},
    requests::{CreateAlternativeRequest, CreateQuestionRequest},
};

impl MemoryStorage {
    /// 创建题目
    pub(crate) async fn create_question_impl(
        &self,
        req: CreateQuestionRequest,
    ) -> Result<Question> {
        let id = self.next_question_id();
        let question = Question {
            id,
            code: req.code,
            category: req.category,
            enunciado: req.enunciado,
            image_path: req.image_path,
        };
        self.questions.insert(id, question.clone());
        Ok(question)
    }

    /// 通过 ID 获取题目
    pub(crate) async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        Ok(self.questions.get(&id).map(|q| q.clone()))
    }

    /// 列出题库全部题目（按 ID 排序保证输出稳定）
    pub(crate) async fn list_questions_impl(&self) -> Result<Vec<Question>> {
        let mut questions: Vec<Question> =
            self.questions.iter().map(|e| e.value().clone()).collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    /// 按分类列出题目
    pub(crate) async fn list_questions_by_category_impl(
        &self,
        category: &str,
    ) -> Result<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .questions
            .iter()
            .filter(|e| e.value().category == category)
            .map(|e| e.value().clone())
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    /// 创建选项
    pub(crate) async fn create_alternative_impl(
        &self,
        req: CreateAlternativeRequest,
    ) -> Result<Alternative> {
        let id = self.next_alternative_id();
        let alternative = Alternative {
            id,
            question_id: req.question_id,
            letter: req.letter,
            texto: req.texto,
            correct: req.correct,
        };
        self.alternatives.insert(id, alternative.clone());
        Ok(alternative)
    }

    /// 列出题目的全部选项
    pub(crate) async fn list_alternatives_by_question_impl(
        &self,
        question_id: i64,
    ) -> Result<Vec<Alternative>> {
        let mut alternatives: Vec<Alternative> = self
            .alternatives
            .iter()
            .filter(|e| e.value().question_id == question_id)
            .map(|e| e.value().clone())
            .collect();
        alternatives.sort_by_key(|a| a.id);
        Ok(alternatives)
    }
}
