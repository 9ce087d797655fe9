use serde::Serialize;

// 导入失败的行明细
#[derive(Debug, Clone, Serialize)]
pub struct ImportRowError {
    // CSV 行号（含表头，1 起始）
    pub row: usize,
    // 出错字段（整行失败时为空）
    pub field: String,
    pub message: String,
}

// 批量导入结果
//
// 行级失败不会中断批次，调用方通过 imported 与 total 的差值
// 判断部分失败。
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub total: usize,
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<ImportRowError>,
}
