//! 随机组卷
//!
//! 从全局题库做无放回均匀抽样：整体洗牌后取前缀。不按分类加权，
//! 也不避免题目在多个测验间重复出现。

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::{QuizSystemError, Result};
use crate::models::quizzes::{entities::Quiz, requests::CreateQuizQuestionRequest};
use crate::storage::Storage;

/// 为测验分配题目，返回卷面顺序的题目 ID 列表
///
/// 题库为空时失败；题库小于期望数量时按实际数量降级组卷，
/// 并把测验的 question_count 修正为实际值。RNG 由调用方注入，
/// 测试可传入固定种子获得确定性结果。
///
/// 多步写入不具原子性：中途失败会留下不完整卷面，不做回滚。
pub(crate) async fn assemble_quiz(
    storage: &Arc<dyn Storage>,
    quiz: &Quiz,
    rng: &mut (impl Rng + ?Sized),
) -> Result<Vec<i64>> {
    let pool = storage.list_questions().await?;
    if pool.is_empty() {
        return Err(QuizSystemError::no_questions_available(
            "Question pool is empty, cannot assemble quiz",
        ));
    }

    let requested = quiz.question_count.max(0) as usize;
    let assigned = pool.len().min(requested);

    let mut question_ids: Vec<i64> = pool.iter().map(|q| q.id).collect();
    question_ids.shuffle(rng);
    question_ids.truncate(assigned);

    for (index, question_id) in question_ids.iter().enumerate() {
        storage
            .create_quiz_question(CreateQuizQuestionRequest {
                quiz_id: quiz.id,
                question_id: *question_id,
                order: (index + 1) as i32,
            })
            .await?;
    }

    // 降级时修正测验上记录的题目数量
    if assigned as i32 != quiz.question_count {
        storage
            .update_quiz_question_count(quiz.id, assigned as i32)
            .await?;
    }

    Ok(question_ids)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::assemble_quiz;
    use crate::models::questions::requests::CreateQuestionRequest;
    use crate::models::quizzes::{entities::Quiz, requests::CreateQuizRequest};
    use crate::storage::{Storage, memory::MemoryStorage};

    async fn storage_with_questions(count: usize) -> Arc<dyn Storage> {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        for i in 0..count {
            storage
                .create_question(CreateQuestionRequest {
                    code: Some(format!("Q{i:03}")),
                    category: "Geografia".to_string(),
                    enunciado: format!("Pergunta {i}"),
                    image_path: None,
                })
                .await
                .unwrap();
        }
        storage
    }

    async fn new_quiz(storage: &Arc<dyn Storage>, question_count: i32) -> Quiz {
        storage
            .create_quiz(CreateQuizRequest {
                title: "Prova".to_string(),
                instructor_id: 1,
                turma: "3A".to_string(),
                question_count,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_assembly_bounds_and_dense_order() {
        let storage = storage_with_questions(10).await;
        let quiz = new_quiz(&storage, 5).await;
        let mut rng = StdRng::seed_from_u64(42);

        let selected = assemble_quiz(&storage, &quiz, &mut rng).await.unwrap();
        assert_eq!(selected.len(), 5);

        // 无重复抽样
        let unique: HashSet<i64> = selected.iter().copied().collect();
        assert_eq!(unique.len(), 5);

        // 卷面顺序为 1..=5，连续无空洞
        let quiz_questions = storage.list_quiz_questions(quiz.id).await.unwrap();
        let orders: Vec<i32> = quiz_questions.iter().map(|qq| qq.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);

        // 卷面与返回值一致
        let assigned: Vec<i64> = quiz_questions.iter().map(|qq| qq.question_id).collect();
        assert_eq!(assigned, selected);
    }

    #[tokio::test]
    async fn test_degrades_when_pool_is_smaller_than_request() {
        let storage = storage_with_questions(3).await;
        let quiz = new_quiz(&storage, 10).await;
        let mut rng = StdRng::seed_from_u64(7);

        let selected = assemble_quiz(&storage, &quiz, &mut rng).await.unwrap();
        assert_eq!(selected.len(), 3);

        // question_count 被修正为实际数量
        let updated = storage.get_quiz_by_id(quiz.id).await.unwrap().unwrap();
        assert_eq!(updated.question_count, 3);
    }

    #[tokio::test]
    async fn test_exact_pool_size_keeps_requested_count() {
        let storage = storage_with_questions(4).await;
        let quiz = new_quiz(&storage, 4).await;
        let mut rng = StdRng::seed_from_u64(1);

        let selected = assemble_quiz(&storage, &quiz, &mut rng).await.unwrap();
        assert_eq!(selected.len(), 4);

        let updated = storage.get_quiz_by_id(quiz.id).await.unwrap().unwrap();
        assert_eq!(updated.question_count, 4);
    }

    #[tokio::test]
    async fn test_empty_pool_fails() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let quiz = new_quiz(&storage, 5).await;
        let mut rng = StdRng::seed_from_u64(3);

        let err = assemble_quiz(&storage, &quiz, &mut rng).await.unwrap_err();
        assert_eq!(err.code(), "E003");

        // 不留下任何卷面关联
        let quiz_questions = storage.list_quiz_questions(quiz.id).await.unwrap();
        assert!(quiz_questions.is_empty());
    }

    #[tokio::test]
    async fn test_same_seed_gives_same_paper() {
        let storage = storage_with_questions(8).await;
        let quiz_a = new_quiz(&storage, 4).await;
        let quiz_b = new_quiz(&storage, 4).await;

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let selected_a = assemble_quiz(&storage, &quiz_a, &mut rng_a).await.unwrap();
        let selected_b = assemble_quiz(&storage, &quiz_b, &mut rng_b).await.unwrap();
        assert_eq!(selected_a, selected_b);
    }
}
