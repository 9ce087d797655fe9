use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::services::questions::seed::seed_question_bank;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 从配置的 CSV 导入种子题库
///
/// 路径未配置时跳过；文件有问题只告警，服务照常启动，
/// 题库从空开始。
async fn seed_from_config(storage: &Arc<dyn Storage>) {
    let config = AppConfig::get();
    let questions_path = config.seed.questions_path.trim();
    let alternatives_path = config.seed.alternatives_path.trim();

    if questions_path.is_empty() || alternatives_path.is_empty() {
        debug!("Seed paths not configured, starting with an empty question bank");
        return;
    }

    match seed_question_bank(storage, questions_path, alternatives_path).await {
        Ok((questions, alternatives)) => {
            debug!(
                "Question bank seeded: {} questions, {} alternatives",
                questions, alternatives
            );
        }
        Err(e) => {
            warn!("Failed to seed question bank: {}, starting empty", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized");

    seed_from_config(&storage).await;

    StartupContext { storage }
}
