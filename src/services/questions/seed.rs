//! 启动期题库种子导入
//!
//! 从配置指定的一对 CSV（题目 + 选项）装载初始题库。种子文件里的
//! Id 列只用于题目与选项之间的关联，入库时走正常创建路径重新分配，
//! 再按映射表把选项挂到新 Id 上。

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{QuizSystemError, Result};
use crate::models::questions::requests::{CreateAlternativeRequest, CreateQuestionRequest};
use crate::services::questions::import::parse_correct_flag;
use crate::storage::Storage;

struct SeedQuestionRow {
    bank_id: i64,
    code: Option<String>,
    category: String,
    enunciado: String,
    image_path: Option<String>,
}

struct SeedAlternativeRow {
    row_num: usize,
    bank_question_id: i64,
    letter: String,
    texto: String,
    correct: bool,
}

/// 导入种子题库，返回 (题目数, 选项数)
///
/// 文件级错误（缺列、读不到文件）向上传播；行级问题只告警跳过，
/// 不影响服务启动。
pub async fn seed_question_bank(
    storage: &Arc<dyn Storage>,
    questions_path: &str,
    alternatives_path: &str,
) -> Result<(usize, usize)> {
    let questions_data = std::fs::read(questions_path)?;
    let alternatives_data = std::fs::read(alternatives_path)?;

    let question_rows = parse_seed_questions(&questions_data)?;
    let alternative_rows = parse_seed_alternatives(&alternatives_data)?;

    // 种子 Id -> 实际分配 Id
    let mut id_map: HashMap<i64, i64> = HashMap::new();
    let mut questions_imported = 0;

    for row in question_rows {
        if row.category.is_empty() || row.enunciado.is_empty() {
            warn!("Skipping seed question {}: empty category or enunciado", row.bank_id);
            continue;
        }
        let created = storage
            .create_question(CreateQuestionRequest {
                code: row.code,
                category: row.category,
                enunciado: row.enunciado,
                image_path: row.image_path,
            })
            .await?;
        id_map.insert(row.bank_id, created.id);
        questions_imported += 1;
    }

    let mut alternatives_imported = 0;

    for row in alternative_rows {
        let Some(&question_id) = id_map.get(&row.bank_question_id) else {
            warn!(
                "Skipping seed alternative at row {}: unknown question {}",
                row.row_num, row.bank_question_id
            );
            continue;
        };
        if row.letter.is_empty() || row.texto.is_empty() {
            warn!("Skipping seed alternative at row {}: empty letter or texto", row.row_num);
            continue;
        }
        storage
            .create_alternative(CreateAlternativeRequest {
                question_id,
                letter: row.letter,
                texto: row.texto,
                correct: row.correct,
            })
            .await?;
        alternatives_imported += 1;
    }

    info!(
        "Seeded question bank: {} questions, {} alternatives",
        questions_imported, alternatives_imported
    );

    Ok((questions_imported, alternatives_imported))
}

fn seed_header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase(), i))
        .collect()
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| QuizSystemError::seed_source(format!("missing required column: {name}")))
}

fn parse_seed_questions(data: &[u8]) -> Result<Vec<SeedQuestionRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let header_map = seed_header_map(rdr.headers()?);
    let id_idx = required_column(&header_map, "id")?;
    let categoria_idx = required_column(&header_map, "categoria")?;
    let enunciado_idx = required_column(&header_map, "enunciado")?;
    let codigo_idx = header_map.get("codigo").copied();
    let imagem_idx = header_map.get("imagempath").copied();

    let mut rows = Vec::new();
    for (row_num, result) in rdr.records().enumerate() {
        let record = result?;
        let Some(bank_id) = record.get(id_idx).and_then(|s| s.trim().parse::<i64>().ok()) else {
            warn!("Skipping seed question at row {}: invalid Id", row_num + 2);
            continue;
        };
        rows.push(SeedQuestionRow {
            bank_id,
            code: codigo_idx
                .and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            category: record.get(categoria_idx).unwrap_or("").trim().to_string(),
            enunciado: record.get(enunciado_idx).unwrap_or("").trim().to_string(),
            image_path: imagem_idx
                .and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        });
    }

    Ok(rows)
}

fn parse_seed_alternatives(data: &[u8]) -> Result<Vec<SeedAlternativeRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let header_map = seed_header_map(rdr.headers()?);
    let question_idx = required_column(&header_map, "questaoid")?;
    let letra_idx = required_column(&header_map, "letra")?;
    let texto_idx = required_column(&header_map, "texto")?;
    let correta_idx = required_column(&header_map, "correta")?;

    let mut rows = Vec::new();
    for (row_num, result) in rdr.records().enumerate() {
        let record = result?;
        let row_num = row_num + 2;
        let Some(bank_question_id) = record
            .get(question_idx)
            .and_then(|s| s.trim().parse::<i64>().ok())
        else {
            warn!("Skipping seed alternative at row {}: invalid QuestaoId", row_num);
            continue;
        };
        let correct = parse_correct_flag(record.get(correta_idx).unwrap_or(""))
            .unwrap_or(false);
        rows.push(SeedAlternativeRow {
            row_num,
            bank_question_id,
            letter: record.get(letra_idx).unwrap_or("").trim().to_string(),
            texto: record.get(texto_idx).unwrap_or("").trim().to_string(),
            correct,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::seed_question_bank;
    use crate::storage::{Storage, memory::MemoryStorage};

    #[tokio::test]
    async fn test_seed_remaps_bank_ids_through_create_path() {
        let dir = std::env::temp_dir().join("quizsystem-seed-test");
        std::fs::create_dir_all(&dir).unwrap();
        let questions_path = dir.join("questoes.csv");
        let alternatives_path = dir.join("alternativas.csv");

        // 种子里的题目 Id 从 100 起，入库后应重新从 1 分配
        std::fs::write(
            &questions_path,
            "Id,Codigo,Categoria,Enunciado,ImagemPath\n\
             100,Q1,Historia,Quem descobriu o Brasil?,\n\
             200,,Geografia,Qual a capital do Para?,mapa.png\n",
        )
        .unwrap();
        std::fs::write(
            &alternatives_path,
            "Id,QuestaoId,Letra,Texto,Correta\n\
             1,100,A,Pedro Alvares Cabral,1\n\
             2,100,B,Cristovao Colombo,0\n\
             3,999,A,Orfa,1\n",
        )
        .unwrap();

        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let (questions, alternatives) = seed_question_bank(
            &storage,
            questions_path.to_str().unwrap(),
            alternatives_path.to_str().unwrap(),
        )
        .await
        .unwrap();

        // 引用未知题目 999 的选项被跳过
        assert_eq!(questions, 2);
        assert_eq!(alternatives, 2);

        let all = storage.list_questions().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);

        let alts = storage.list_alternatives_by_question(all[0].id).await.unwrap();
        assert_eq!(alts.len(), 2);
        assert!(alts.iter().any(|a| a.correct));
    }

    #[tokio::test]
    async fn test_seed_fails_on_missing_column() {
        let dir = std::env::temp_dir().join("quizsystem-seed-test-badcol");
        std::fs::create_dir_all(&dir).unwrap();
        let questions_path = dir.join("questoes.csv");
        let alternatives_path = dir.join("alternativas.csv");
        std::fs::write(&questions_path, "Id,Enunciado\n1,Pergunta\n").unwrap();
        std::fs::write(&alternatives_path, "Id,QuestaoId,Letra,Texto,Correta\n").unwrap();

        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let result = seed_question_bank(
            &storage,
            questions_path.to_str().unwrap(),
            alternatives_path.to_str().unwrap(),
        )
        .await;
        assert!(result.is_err());
    }
}
