//! 作答尝试与作答记录存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::attempts::{
    entities::{StudentQuiz, StudentResponse},
    requests::CreateStudentResponseRequest,
};

impl MemoryStorage {
    /// 创建尝试记录
    ///
    /// (student_id, quiz_id) 的唯一性由调用方先查后建保证，
    /// 存储层不做约束。
    pub(crate) async fn create_student_quiz_impl(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<StudentQuiz> {
        let id = self.next_student_quiz_id();
        let student_quiz = StudentQuiz {
            id,
            student_id,
            quiz_id,
            score: None,
            completed: false,
            started_at: chrono::Utc::now(),
            completed_at: None,
        };
        self.student_quizzes.insert(id, student_quiz.clone());
        Ok(student_quiz)
    }

    /// 按 (student_id, quiz_id) 获取尝试记录
    pub(crate) async fn get_student_quiz_by_ids_impl(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<Option<StudentQuiz>> {
        Ok(self
            .student_quizzes
            .iter()
            .find(|e| e.value().student_id == student_id && e.value().quiz_id == quiz_id)
            .map(|e| e.value().clone()))
    }

    /// 列出学生的全部尝试记录
    pub(crate) async fn list_student_quizzes_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentQuiz>> {
        let mut attempts: Vec<StudentQuiz> = self
            .student_quizzes
            .iter()
            .filter(|e| e.value().student_id == student_id)
            .map(|e| e.value().clone())
            .collect();
        attempts.sort_by_key(|sq| sq.id);
        Ok(attempts)
    }

    /// 列出测验的全部尝试记录
    pub(crate) async fn list_student_quizzes_by_quiz_impl(
        &self,
        quiz_id: i64,
    ) -> Result<Vec<StudentQuiz>> {
        let mut attempts: Vec<StudentQuiz> = self
            .student_quizzes
            .iter()
            .filter(|e| e.value().quiz_id == quiz_id)
            .map(|e| e.value().clone())
            .collect();
        attempts.sort_by_key(|sq| sq.id);
        Ok(attempts)
    }

    /// 完成尝试：写入得分、完成标记与完成时间
    ///
    /// 重复调用会覆盖旧的得分与完成时间（completed 单向置真）。
    pub(crate) async fn update_student_quiz_completion_impl(
        &self,
        id: i64,
        score: i32,
    ) -> Result<Option<StudentQuiz>> {
        match self.student_quizzes.get_mut(&id) {
            Some(mut entry) => {
                entry.score = Some(score);
                entry.completed = true;
                entry.completed_at = Some(chrono::Utc::now());
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    /// 追加一条作答记录（同一题重复作答产生新行，不覆盖）
    pub(crate) async fn create_student_response_impl(
        &self,
        req: CreateStudentResponseRequest,
    ) -> Result<StudentResponse> {
        let id = self.next_student_response_id();
        let response = StudentResponse {
            id,
            student_id: req.student_id,
            quiz_id: req.quiz_id,
            question_id: req.question_id,
            alternative_id: req.alternative_id,
            submitted_at: chrono::Utc::now(),
        };
        self.student_responses.insert(id, response.clone());
        Ok(response)
    }

    /// 列出学生在某测验下的全部作答记录（ID 即插入顺序）
    pub(crate) async fn list_student_responses_impl(
        &self,
        student_id: i64,
        quiz_id: i64,
    ) -> Result<Vec<StudentResponse>> {
        let mut responses: Vec<StudentResponse> = self
            .student_responses
            .iter()
            .filter(|e| e.value().student_id == student_id && e.value().quiz_id == quiz_id)
            .map(|e| e.value().clone())
            .collect();
        responses.sort_by_key(|r| r.id);
        Ok(responses)
    }

    /// 列出测验的全部作答记录（跨学生）
    pub(crate) async fn list_responses_by_quiz_impl(
        &self,
        quiz_id: i64,
    ) -> Result<Vec<StudentResponse>> {
        let mut responses: Vec<StudentResponse> = self
            .student_responses
            .iter()
            .filter(|e| e.value().quiz_id == quiz_id)
            .map(|e| e.value().clone())
            .collect();
        responses.sort_by_key(|r| r.id);
        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::questions::requests::{CreateAlternativeRequest, CreateQuestionRequest};
    use crate::models::quizzes::requests::{CreateQuizQuestionRequest, CreateQuizRequest};
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    fn question_req(category: &str, enunciado: &str) -> CreateQuestionRequest {
        CreateQuestionRequest {
            code: None,
            category: category.to_string(),
            enunciado: enunciado.to_string(),
            image_path: None,
        }
    }

    #[tokio::test]
    async fn test_question_ids_are_monotonic() {
        let storage = MemoryStorage::new();
        let q1 = storage
            .create_question(question_req("Geografia", "Pergunta 1"))
            .await
            .unwrap();
        let q2 = storage
            .create_question(question_req("Geografia", "Pergunta 2"))
            .await
            .unwrap();
        let q3 = storage
            .create_question(question_req("História", "Pergunta 3"))
            .await
            .unwrap();

        assert_eq!(q1.id, 1);
        assert_eq!(q2.id, 2);
        assert_eq!(q3.id, 3);
    }

    #[tokio::test]
    async fn test_list_questions_by_category() {
        let storage = MemoryStorage::new();
        storage
            .create_question(question_req("Geografia", "Pergunta 1"))
            .await
            .unwrap();
        storage
            .create_question(question_req("História", "Pergunta 2"))
            .await
            .unwrap();
        storage
            .create_question(question_req("Geografia", "Pergunta 3"))
            .await
            .unwrap();

        let geo = storage
            .list_questions_by_category("Geografia")
            .await
            .unwrap();
        assert_eq!(geo.len(), 2);
        assert!(geo.iter().all(|q| q.category == "Geografia"));

        let all = storage.list_questions().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_alternatives_filtered_by_question() {
        let storage = MemoryStorage::new();
        let q1 = storage
            .create_question(question_req("Geografia", "Pergunta 1"))
            .await
            .unwrap();
        let q2 = storage
            .create_question(question_req("Geografia", "Pergunta 2"))
            .await
            .unwrap();

        for (question_id, letter, correct) in
            [(q1.id, "A", true), (q1.id, "B", false), (q2.id, "A", false)]
        {
            storage
                .create_alternative(CreateAlternativeRequest {
                    question_id,
                    letter: letter.to_string(),
                    texto: format!("Alternativa {letter}"),
                    correct,
                })
                .await
                .unwrap();
        }

        let alts = storage.list_alternatives_by_question(q1.id).await.unwrap();
        assert_eq!(alts.len(), 2);
        assert_eq!(alts.iter().filter(|a| a.correct).count(), 1);
    }

    #[tokio::test]
    async fn test_create_quiz_question_requires_existing_refs() {
        let storage = MemoryStorage::new();
        let q = storage
            .create_question(question_req("Geografia", "Pergunta 1"))
            .await
            .unwrap();
        let quiz = storage
            .create_quiz(CreateQuizRequest {
                title: "Prova 1".to_string(),
                instructor_id: 1,
                turma: "3A".to_string(),
                question_count: 1,
            })
            .await
            .unwrap();

        // 合法引用
        let qq = storage
            .create_quiz_question(CreateQuizQuestionRequest {
                quiz_id: quiz.id,
                question_id: q.id,
                order: 1,
            })
            .await
            .unwrap();
        assert_eq!(qq.order, 1);

        // 悬空测验 ID
        let err = storage
            .create_quiz_question(CreateQuizQuestionRequest {
                quiz_id: 999,
                question_id: q.id,
                order: 1,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");

        // 悬空题目 ID
        let err = storage
            .create_quiz_question(CreateQuizQuestionRequest {
                quiz_id: quiz.id,
                question_id: 999,
                order: 2,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_quiz_questions_sorted_by_order() {
        let storage = MemoryStorage::new();
        let quiz = storage
            .create_quiz(CreateQuizRequest {
                title: "Prova 1".to_string(),
                instructor_id: 1,
                turma: "3A".to_string(),
                question_count: 3,
            })
            .await
            .unwrap();

        let mut question_ids = Vec::new();
        for i in 0..3 {
            let q = storage
                .create_question(question_req("Geografia", &format!("Pergunta {i}")))
                .await
                .unwrap();
            question_ids.push(q.id);
        }

        // 乱序插入
        for (question_id, order) in [
            (question_ids[2], 3),
            (question_ids[0], 1),
            (question_ids[1], 2),
        ] {
            storage
                .create_quiz_question(CreateQuizQuestionRequest {
                    quiz_id: quiz.id,
                    question_id,
                    order,
                })
                .await
                .unwrap();
        }

        let listed = storage.list_quiz_questions(quiz.id).await.unwrap();
        let orders: Vec<i32> = listed.iter().map(|qq| qq.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_student_quiz_lifecycle() {
        let storage = MemoryStorage::new();
        let student = storage
            .create_student(CreateStudentRequest {
                name: "Maria".to_string(),
                turma: "3A".to_string(),
            })
            .await
            .unwrap();

        let attempt = storage.create_student_quiz(student.id, 7).await.unwrap();
        assert!(!attempt.completed);
        assert_eq!(attempt.score, None);
        assert_eq!(attempt.completed_at, None);

        let found = storage
            .get_student_quiz_by_ids(student.id, 7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, attempt.id);

        let completed = storage
            .update_student_quiz_completion(attempt.id, 80)
            .await
            .unwrap()
            .unwrap();
        assert!(completed.completed);
        assert_eq!(completed.score, Some(80));
        assert!(completed.completed_at.is_some());

        // 重复完成覆盖旧分数
        let recompleted = storage
            .update_student_quiz_completion(attempt.id, 60)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(recompleted.score, Some(60));
    }

    #[tokio::test]
    async fn test_responses_append_only_in_insertion_order() {
        let storage = MemoryStorage::new();
        for alternative_id in [10, 20, 30] {
            storage
                .create_student_response(
                    crate::models::attempts::requests::CreateStudentResponseRequest {
                        student_id: 1,
                        quiz_id: 2,
                        question_id: 5,
                        alternative_id: Some(alternative_id),
                    },
                )
                .await
                .unwrap();
        }

        let responses = storage.list_student_responses(1, 2).await.unwrap();
        assert_eq!(responses.len(), 3);
        let chosen: Vec<Option<i64>> = responses.iter().map(|r| r.alternative_id).collect();
        assert_eq!(chosen, vec![Some(10), Some(20), Some(30)]);
    }
}
