//! 事件块数据模型
//!
//! 定义解析输出的各级结构：重建的结果行 `FetchRow`、单块提取结果
//! `ParsedBlock`，以及合并后暴露给消费者的最终单元 `MergedBlock`。
//! 所有结构在一次文件装载中生成后即不可变；重新装载会丢弃全部旧结构。

/// 一条重建的结果集行
///
/// 字段名到文本值的有序映射，保持插入顺序。同一行内字段名唯一；
/// 不同的行之间字段名可以重复。值是不透明文本，本库不解释字段类型。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchRow {
    fields: Vec<(String, String)>,
}

impl FetchRow {
    /// 创建空行
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// 插入字段；若字段名已存在则覆盖其值
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value.into(),
            None => self.fields.push((name, value.into())),
        }
    }

    /// 获取字段值
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// 检查字段是否存在
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// 按插入顺序返回所有字段名
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// 按插入顺序迭代（字段名, 值）对
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// 字段数量
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 单个事件块的提取结果
///
/// 由 [`parse_block`](crate::parser::parse_block) 对一个原始块做一次
/// 前向扫描得到。缺失的结构（无 SQL、无结果行、无记录数）是正常的、
/// 可表示的输出状态，不是错误。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedBlock {
    /// SQL 语句片段（原始、未格式化，按行序排列）
    pub sql_lines: Vec<String>,

    /// 重建的结果行（按出现顺序）
    pub fetch_rows: Vec<FetchRow>,

    /// 块内最后一次 `Record Count = N` 的数值
    pub record_count: Option<u32>,

    /// 块内是否出现过 `ORA-` 错误标记
    pub has_error: bool,

    /// 第一条包含 `ORA-` 的行（已去除首尾空白）
    pub error_line: Option<String>,

    /// 该块的全部原始行
    pub lines: Vec<String>,
}

impl ParsedBlock {
    /// 展示用块头：约定为块的第一行
    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(|s| s.as_str())
    }

    /// 是否为悬挂块：有 SQL 语句、无结果行，且记录数缺失或为 0。
    /// 悬挂块是与后继块合并的候选。
    pub fn is_dangling(&self) -> bool {
        !self.sql_lines.is_empty()
            && self.fetch_rows.is_empty()
            && self.record_count.is_none_or(|count| count == 0)
    }

    /// 是否有结果：有记录数时以记录数大于 0 为准，否则看是否有结果行
    pub fn has_result(&self) -> bool {
        match self.record_count {
            Some(count) => count > 0,
            None => !self.fetch_rows.is_empty(),
        }
    }
}

/// 暴露给消费者的最终单元
///
/// 与 [`ParsedBlock`] 形状相同，可能由相邻的两个块融合而成：
/// 悬挂块提供 SQL，后继块提供结果行与记录数。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergedBlock {
    /// SQL 语句片段（原始、未格式化）
    pub sql_lines: Vec<String>,

    /// 重建的结果行
    pub fetch_rows: Vec<FetchRow>,

    /// 记录数
    pub record_count: Option<u32>,

    /// 是否出现错误标记（融合时取两块的逻辑或）
    pub has_error: bool,

    /// 第一条错误行（融合时优先取前块）
    pub error_line: Option<String>,

    /// 原始行（融合时按顺序拼接两块）
    pub lines: Vec<String>,

    /// 该单元是否由两个块融合而成
    pub merged: bool,
}

impl MergedBlock {
    /// 展示用块头：约定为块的第一行
    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(|s| s.as_str())
    }

    /// 将 SQL 片段用单个空格拼接，供外部格式化层使用
    pub fn sql_text(&self) -> String {
        self.sql_lines.join(" ")
    }

    /// 是否有结果：有记录数时以记录数大于 0 为准，否则看是否有结果行。
    /// 外部渲染层据此实现"有结果/无结果"过滤，无需自行推导。
    pub fn has_result(&self) -> bool {
        match self.record_count {
            Some(count) => count > 0,
            None => !self.fetch_rows.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_row_preserves_insertion_order() {
        let mut row = FetchRow::new();
        row.insert("ID", "5");
        row.insert("NOME", "ana");
        row.insert("QUARTO", "101");

        assert_eq!(row.names(), vec!["ID", "NOME", "QUARTO"]);
        assert_eq!(row.get("NOME"), Some("ana"));
        assert_eq!(row.get("missing"), None);
        assert!(row.contains("ID"));
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn fetch_row_insert_overwrites_existing_key() {
        let mut row = FetchRow::new();
        row.insert("ID", "1");
        row.insert("ID", "2");

        assert_eq!(row.len(), 1);
        assert_eq!(row.get("ID"), Some("2"));
    }

    #[test]
    fn dangling_definition() {
        let mut block = ParsedBlock {
            sql_lines: vec!["SELECT 1".to_string()],
            ..ParsedBlock::default()
        };
        assert!(block.is_dangling());

        block.record_count = Some(0);
        assert!(block.is_dangling());

        block.record_count = Some(3);
        assert!(!block.is_dangling());

        block.record_count = None;
        block.fetch_rows.push(FetchRow::new());
        assert!(!block.is_dangling());

        let empty = ParsedBlock::default();
        assert!(!empty.is_dangling());
    }

    #[test]
    fn has_result_prefers_record_count() {
        let mut block = ParsedBlock::default();
        assert!(!block.has_result());

        // 有结果行但记录数为 0：以记录数为准
        block.fetch_rows.push(FetchRow::new());
        block.record_count = Some(0);
        assert!(!block.has_result());

        block.record_count = None;
        assert!(block.has_result());
    }

    #[test]
    fn merged_block_sql_text_joins_fragments() {
        let block = MergedBlock {
            sql_lines: vec!["SELECT *".to_string(), "FROM HOSPEDES".to_string()],
            ..MergedBlock::default()
        };
        assert_eq!(block.sql_text(), "SELECT * FROM HOSPEDES");
    }
}
