//! 题库 CSV 导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::StreamExt;
use std::io::Cursor;
use tracing::error;

use super::QuestionService;
use crate::models::questions::requests::{CreateAlternativeRequest, CreateQuestionRequest};
use crate::models::questions::responses::{ImportResponse, ImportRowError};
use crate::models::{ApiResponse, ErrorCode};

const MAX_IMPORT_ROWS: usize = 1000;

/// 导入解析错误
#[derive(Debug)]
pub(crate) enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
}

impl ImportParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("Missing required column: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
        }
    }
}

/// 题目导入行
#[derive(Debug, Clone)]
pub(crate) struct QuestionImportRow {
    pub row_num: usize,
    pub code: Option<String>,
    pub category: String,
    pub enunciado: String,
    pub image_path: Option<String>,
}

/// 选项导入行
#[derive(Debug, Clone)]
pub(crate) struct AlternativeImportRow {
    pub row_num: usize,
    pub question_id: String,
    pub letter: String,
    pub texto: String,
    pub correct: String,
}

pub async fn import_questions(
    service: &QuestionService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let file_bytes = match read_file_from_multipart(&mut payload).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("Failed to read upload: {e}"),
            )));
        }
    };

    let rows = match parse_questions_csv(&file_bytes) {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(e.error_code(), e.message())));
        }
    };

    if rows.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "File contains no data rows",
        )));
    }
    if rows.len() > MAX_IMPORT_ROWS {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            format!("At most {MAX_IMPORT_ROWS} rows per import"),
        )));
    }

    let total = rows.len();
    let mut imported = 0;
    let mut failed = 0;
    let mut errors: Vec<ImportRowError> = Vec::new();

    for row in rows {
        if row.category.is_empty() {
            failed += 1;
            errors.push(ImportRowError {
                row: row.row_num,
                field: "category".to_string(),
                message: "Category cannot be empty".to_string(),
            });
            continue;
        }
        if row.enunciado.is_empty() {
            failed += 1;
            errors.push(ImportRowError {
                row: row.row_num,
                field: "enunciado".to_string(),
                message: "Enunciado cannot be empty".to_string(),
            });
            continue;
        }

        let create_req = CreateQuestionRequest {
            code: row.code,
            category: row.category,
            enunciado: row.enunciado,
            image_path: row.image_path,
        };

        match storage.create_question(create_req).await {
            Ok(_) => imported += 1,
            Err(e) => {
                failed += 1;
                error!("Failed to import question row {}: {}", row.row_num, e);
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: String::new(),
                    message: format!("Create failed: {e}"),
                });
            }
        }
    }

    let response = ImportResponse {
        total,
        imported,
        failed,
        errors,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Import finished")))
}

pub async fn import_alternatives(
    service: &QuestionService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let file_bytes = match read_file_from_multipart(&mut payload).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("Failed to read upload: {e}"),
            )));
        }
    };

    let rows = match parse_alternatives_csv(&file_bytes) {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(e.error_code(), e.message())));
        }
    };

    if rows.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "File contains no data rows",
        )));
    }
    if rows.len() > MAX_IMPORT_ROWS {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            format!("At most {MAX_IMPORT_ROWS} rows per import"),
        )));
    }

    let total = rows.len();
    let mut imported = 0;
    let mut failed = 0;
    let mut errors: Vec<ImportRowError> = Vec::new();

    for row in rows {
        let question_id = match row.question_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "questionId".to_string(),
                    message: format!("Invalid question id: {}", row.question_id),
                });
                continue;
            }
        };

        // 引用不存在的题目整行跳过
        match storage.get_question_by_id(question_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "questionId".to_string(),
                    message: format!("Question {question_id} not found"),
                });
                continue;
            }
            Err(e) => {
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "questionId".to_string(),
                    message: format!("Lookup failed: {e}"),
                });
                continue;
            }
        }

        if row.letter.is_empty() {
            failed += 1;
            errors.push(ImportRowError {
                row: row.row_num,
                field: "letter".to_string(),
                message: "Letter cannot be empty".to_string(),
            });
            continue;
        }
        if row.texto.is_empty() {
            failed += 1;
            errors.push(ImportRowError {
                row: row.row_num,
                field: "texto".to_string(),
                message: "Texto cannot be empty".to_string(),
            });
            continue;
        }
        let correct = match parse_correct_flag(&row.correct) {
            Some(value) => value,
            None => {
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "correct".to_string(),
                    message: format!("Invalid correct flag: {}", row.correct),
                });
                continue;
            }
        };

        let create_req = CreateAlternativeRequest {
            question_id,
            letter: row.letter,
            texto: row.texto,
            correct,
        };

        match storage.create_alternative(create_req).await {
            Ok(_) => imported += 1,
            Err(e) => {
                failed += 1;
                error!("Failed to import alternative row {}: {}", row.row_num, e);
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: String::new(),
                    message: format!("Create failed: {e}"),
                });
            }
        }
    }

    let response = ImportResponse {
        total,
        imported,
        failed,
        errors,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Import finished")))
}

async fn read_file_from_multipart(payload: &mut Multipart) -> Result<Vec<u8>, String> {
    let mut file_bytes = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Failed to read field: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("Failed to read chunk: {e}"))?;
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("File field not found or empty".to_string());
    }

    Ok(file_bytes)
}

/// "1"/"true"/"0"/"false"，大小写不敏感
pub(crate) fn parse_correct_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_questions_csv(data: &[u8]) -> Result<Vec<QuestionImportRow>, ImportParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("Failed to read header: {e}")))?;
    let header_map: std::collections::HashMap<_, _> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase(), i))
        .collect();

    let category_idx = *header_map
        .get("category")
        .ok_or_else(|| ImportParseError::MissingColumn("category".to_string()))?;
    let enunciado_idx = *header_map
        .get("enunciado")
        .ok_or_else(|| ImportParseError::MissingColumn("enunciado".to_string()))?;
    let code_idx = header_map.get("code").copied();
    let image_path_idx = header_map
        .get("imagepath")
        .or_else(|| header_map.get("image_path"))
        .copied();

    let mut rows = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ImportParseError::ParseFailed(format!("Row {} parse failed: {e}", row_num + 2))
        })?;

        let category = record.get(category_idx).unwrap_or("").trim().to_string();
        let enunciado = record.get(enunciado_idx).unwrap_or("").trim().to_string();
        let code = code_idx
            .and_then(|i| record.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let image_path = image_path_idx
            .and_then(|i| record.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        rows.push(QuestionImportRow {
            row_num: row_num + 2, // 1-based, skip header
            code,
            category,
            enunciado,
            image_path,
        });
    }

    Ok(rows)
}

pub(crate) fn parse_alternatives_csv(
    data: &[u8],
) -> Result<Vec<AlternativeImportRow>, ImportParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("Failed to read header: {e}")))?;
    let header_map: std::collections::HashMap<_, _> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase(), i))
        .collect();

    let question_id_idx = *header_map
        .get("questionid")
        .or_else(|| header_map.get("question_id"))
        .ok_or_else(|| ImportParseError::MissingColumn("questionId".to_string()))?;
    let letter_idx = *header_map
        .get("letter")
        .ok_or_else(|| ImportParseError::MissingColumn("letter".to_string()))?;
    let texto_idx = *header_map
        .get("texto")
        .ok_or_else(|| ImportParseError::MissingColumn("texto".to_string()))?;
    let correct_idx = *header_map
        .get("correct")
        .ok_or_else(|| ImportParseError::MissingColumn("correct".to_string()))?;

    let mut rows = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ImportParseError::ParseFailed(format!("Row {} parse failed: {e}", row_num + 2))
        })?;

        rows.push(AlternativeImportRow {
            row_num: row_num + 2,
            question_id: record.get(question_id_idx).unwrap_or("").trim().to_string(),
            letter: record.get(letter_idx).unwrap_or("").trim().to_string(),
            texto: record.get(texto_idx).unwrap_or("").trim().to_string(),
            correct: record.get(correct_idx).unwrap_or("").trim().to_string(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::{parse_alternatives_csv, parse_correct_flag, parse_questions_csv};

    #[test]
    fn test_parse_questions_csv_with_optional_columns() {
        let data = b"code,category,enunciado,imagePath\n\
            Q001,Historia,Quem descobriu o Brasil?,\n\
            ,Geografia,Qual a capital do Para?,mapa.png\n";
        let rows = parse_questions_csv(data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_num, 2);
        assert_eq!(rows[0].code.as_deref(), Some("Q001"));
        assert_eq!(rows[0].category, "Historia");
        assert!(rows[0].image_path.is_none());
        assert!(rows[1].code.is_none());
        assert_eq!(rows[1].image_path.as_deref(), Some("mapa.png"));
    }

    #[test]
    fn test_parse_questions_csv_headers_are_case_insensitive() {
        let data = b"Category,Enunciado\nHistoria,Pergunta\n";
        let rows = parse_questions_csv(data).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].enunciado, "Pergunta");
    }

    #[test]
    fn test_parse_questions_csv_missing_column() {
        let data = b"code,enunciado\nQ001,Pergunta\n";
        assert!(parse_questions_csv(data).is_err());
    }

    #[test]
    fn test_parse_alternatives_csv() {
        let data = b"questionId,letter,texto,correct\n\
            1,A,Pedro Alvares Cabral,1\n\
            1,B,Cristovao Colombo,0\n";
        let rows = parse_alternatives_csv(data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].question_id, "1");
        assert_eq!(rows[0].letter, "A");
        assert_eq!(rows[1].correct, "0");
    }

    #[tokio::test]
    async fn test_imported_rows_land_in_storage() {
        use crate::models::questions::requests::CreateQuestionRequest;
        use crate::storage::{Storage, memory::MemoryStorage};

        let storage = MemoryStorage::new();
        let data = b"code,category,enunciado\n\
            Q001,Historia,Pergunta 1\n\
            Q002,Historia,Pergunta 2\n\
            Q003,Geografia,Pergunta 3\n";

        let rows = parse_questions_csv(data).unwrap();
        for row in &rows {
            storage
                .create_question(CreateQuestionRequest {
                    code: row.code.clone(),
                    category: row.category.clone(),
                    enunciado: row.enunciado.clone(),
                    image_path: row.image_path.clone(),
                })
                .await
                .unwrap();
        }

        let stored = storage.list_questions().await.unwrap();
        assert_eq!(stored.len(), rows.len());
        assert_eq!(stored[0].enunciado, "Pergunta 1");
        assert_eq!(stored[2].category, "Geografia");
        assert_eq!(stored[1].code.as_deref(), Some("Q002"));
    }

    #[test]
    fn test_parse_correct_flag() {
        assert_eq!(parse_correct_flag("1"), Some(true));
        assert_eq!(parse_correct_flag("TRUE"), Some(true));
        assert_eq!(parse_correct_flag("0"), Some(false));
        assert_eq!(parse_correct_flag("false"), Some(false));
        assert_eq!(parse_correct_flag("yes"), None);
    }
}
