//! 核心块提取函数
//!
//! 对单个事件块做一次前向扫描，运行两态（字段提取 / SQL 捕获）状态机，
//! 提取 SQL 语句片段、结果行、记录数与错误标记。
//! 状态是块内局部的：每个新块都从字段提取模式重新开始。

use crate::block::{FetchRow, ParsedBlock};
use crate::parser::constants::*;
use crate::tools::is_header_line;
use std::mem;

/// 块内提取模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractMode {
    /// 字段提取模式（初始模式）
    Field,

    /// SQL 捕获模式（遇到语句标记后进入）
    SqlCapture,
}

/// 从行数组解析成 ParsedBlock 结构
///
/// 这是主要的提取函数。逐行应用以下规则，顺序固定：
///
/// 1. 语句标记（`Open:` / `Erro:`，取先出现者）：进入 SQL 捕获模式，
///    丢弃此前累积的 SQL，以标记后的剩余文本重新开始；本行不再参与
///    规则 2–4；
/// 2. 头行再入：切回字段提取模式（本行继续参与规则 4）；
/// 3. SQL 捕获模式下：把整行（去首尾空白）追加到 SQL 片段；
/// 4. 字段提取模式下：含 `FieldIndex=` 且带 `Name=…; Tipo=…; Value=…`
///    片段的行提取出（名, 值）；字段名在当前行中重复出现时先封闭当前
///    结果行再开新行；格式不符的片段静默忽略；
/// 5. 全程检查（每一行都生效，包括语句标记行）：`ORA-` 置错误标志并
///    记录第一条错误行；`Record Count = N` 更新记录数（后者覆盖前者）。
///
/// 本函数不会失败：缺失或畸形的数据只会得到空/缺省字段。
///
/// # 示例
///
/// ```
/// use totvs_database_parser_dblog::parse_block;
///
/// let block = parse_block(&[
///     "10/03/2025 14:22:01 - 001234 Consulta",
///     "FieldIndex=0; Name=ID; Tipo=INT; Value='5'",
///     "Record Count = 1",
/// ]);
///
/// assert_eq!(block.fetch_rows.len(), 1);
/// assert_eq!(block.fetch_rows[0].get("ID"), Some("5"));
/// assert_eq!(block.record_count, Some(1));
/// ```
pub fn parse_block(lines: &[&str]) -> ParsedBlock {
    let mut mode = ExtractMode::Field;
    let mut sql_lines: Vec<String> = Vec::new();
    let mut fetch_rows: Vec<FetchRow> = Vec::new();
    let mut current_row = FetchRow::new();
    let mut record_count: Option<u32> = None;
    let mut has_error = false;
    let mut error_line: Option<String> = None;

    for &line in lines {
        // 全程检查对每一行生效，语句标记行也不例外
        if ORA_FINDER.find(line.as_bytes()).is_some() {
            has_error = true;
            if error_line.is_none() {
                error_line = Some(line.trim().to_string());
            }
        }
        if let Some(count) = find_record_count(line) {
            record_count = Some(count);
        }

        if let Some(fragment) = statement_fragment(line) {
            // 语句标记行：丢弃已累积的 SQL，重新开始捕获
            mode = ExtractMode::SqlCapture;
            sql_lines.clear();
            sql_lines.push(fragment.trim().to_string());
            continue;
        }

        if is_header_line(line) {
            mode = ExtractMode::Field;
        }

        match mode {
            ExtractMode::SqlCapture => sql_lines.push(line.trim().to_string()),
            ExtractMode::Field => {
                if let Some((name, value)) = field_fragment(line) {
                    if current_row.contains(name) {
                        // 重复字段名封闭当前行，开启新行
                        fetch_rows.push(mem::take(&mut current_row));
                    }
                    current_row.insert(name, value);
                }
            }
        }
    }

    if !current_row.is_empty() {
        fetch_rows.push(current_row);
    }

    ParsedBlock {
        sql_lines,
        fetch_rows,
        record_count,
        has_error,
        error_line,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

/// 查找语句标记（`Open:` 或 `Erro:`，取行内先出现者），
/// 返回标记之后的剩余文本。
#[inline]
fn statement_fragment(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let open = OPEN_FINDER.find(bytes);
    let erro = ERRO_FINDER.find(bytes);

    let (pos, marker_len) = match (open, erro) {
        (Some(open_pos), Some(erro_pos)) => {
            if open_pos <= erro_pos {
                (open_pos, OPEN_MARKER.len())
            } else {
                (erro_pos, ERRO_MARKER.len())
            }
        }
        (Some(open_pos), None) => (open_pos, OPEN_MARKER.len()),
        (None, Some(erro_pos)) => (erro_pos, ERRO_MARKER.len()),
        (None, None) => return None,
    };

    Some(&line[pos + marker_len..])
}

/// 从字段行提取（字段名, 值）。
///
/// 行内必须出现 `FieldIndex=`，并带有
/// `Name=<非空名>; Tipo=<非空类型>; Value=<值>` 片段；值可以被一对
/// 单引号包裹（首尾引号各自独立剥除）。任何一步不匹配都返回 `None`。
fn field_fragment(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    FIELD_INDEX_FINDER.find(bytes)?;

    // 第一个 Name= 起若片段畸形，继续尝试后续出现位置
    let mut search_from = 0;
    while let Some(offset) = NAME_FINDER.find(&bytes[search_from..]) {
        let name_start = search_from + offset + NAME_KEY.len();
        if let Some(parsed) = parse_name_tipo_value(&line[name_start..]) {
            return Some(parsed);
        }
        search_from += offset + 1;
    }
    None
}

/// 解析 `Name=` 之后的 `<名>; Tipo=<类型>; Value=<值>` 序列
#[inline]
fn parse_name_tipo_value(rest: &str) -> Option<(&str, &str)> {
    let name_end = rest.find(';')?;
    if name_end == 0 {
        return None;
    }
    let name = &rest[..name_end];

    let after_name = rest[name_end..].strip_prefix(TIPO_SEPARATOR)?;
    let tipo_end = after_name.find(';')?;
    if tipo_end == 0 {
        return None;
    }

    let value = after_name[tipo_end..].strip_prefix(VALUE_SEPARATOR)?;
    Some((name, strip_single_quotes(value)))
}

/// 独立剥除值首尾各至多一个单引号
#[inline]
fn strip_single_quotes(value: &str) -> &str {
    let value = value.strip_prefix('\'').unwrap_or(value);
    value.strip_suffix('\'').unwrap_or(value)
}

/// 在行内查找 `Record Count` + 可选空白 + `=` + 可选空白 + 数字，
/// 返回解析出的记录数。取行内第一个完整匹配；无匹配返回 `None`。
fn find_record_count(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    let mut search_from = 0;
    while let Some(offset) = RECORD_COUNT_FINDER.find(&bytes[search_from..]) {
        let after_label = search_from + offset + RECORD_COUNT_LABEL.len();
        if let Some(count) = parse_count_suffix(&line[after_label..]) {
            return Some(count);
        }
        search_from += offset + 1;
    }
    None
}

/// 解析 `Record Count` 标签之后的 `= N` 部分
#[inline]
fn parse_count_suffix(rest: &str) -> Option<u32> {
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=')?;
    let rest = rest.trim_start();

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    // 超出 u32 的数字串按不匹配处理（尽力而为，不报错）
    rest[..digits_end].parse::<u32>().ok()
}
