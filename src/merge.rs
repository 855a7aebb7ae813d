//! 悬挂块合并
//!
//! 日志里语句和它的执行结果经常落在相邻的两个事件块中：前一块只有
//! SQL 语句（悬挂块），后一块才带结果行或记录数。本模块做一次带
//! 单块前瞻的前向归并，把这样的块对融合成一个最终单元。
//!
//! 合并是启发式且不回溯的：已融合的输出不会被再次检查，三个及以上
//! 连续悬挂块也只会按相邻块对融合一次。

use crate::block::{MergedBlock, ParsedBlock};

/// 对有序的 ParsedBlock 列表做单遍合并，产出最终的 MergedBlock 列表。
///
/// 规则（索引 i 从 0 开始，前瞻恰好一个块）：
/// - 若 block\[i\] 为悬挂块（见 [`ParsedBlock::is_dangling`]），且
///   block\[i+1\] 存在并带结果（结果行非空，或记录数存在——包括 0）：
///   输出融合块，i 前进 2；
/// - 否则原样输出 block\[i\]，i 前进 1。
///
/// 末位悬挂块（无后继）原样输出。没有任何悬挂块时输出与输入逐块等价。
///
/// # 示例
///
/// ```
/// use totvs_database_parser_dblog::{merge_blocks, parse_block};
///
/// let statement = parse_block(&["Open: SELECT 1"]);
/// let result = parse_block(&[
///     "FieldIndex=0; Name=ID; Tipo=INT; Value='5'",
///     "Record Count = 1",
/// ]);
///
/// let merged = merge_blocks(vec![statement, result]);
/// assert_eq!(merged.len(), 1);
/// assert!(merged[0].merged);
/// assert_eq!(merged[0].sql_lines, vec!["SELECT 1"]);
/// assert_eq!(merged[0].record_count, Some(1));
/// ```
pub fn merge_blocks(parsed_blocks: Vec<ParsedBlock>) -> Vec<MergedBlock> {
    let mut merged = Vec::with_capacity(parsed_blocks.len());
    let mut iter = parsed_blocks.into_iter().peekable();

    while let Some(current) = iter.next() {
        if current.is_dangling() {
            let successor =
                iter.next_if(|next| !next.fetch_rows.is_empty() || next.record_count.is_some());
            if let Some(next) = successor {
                merged.push(fuse_blocks(current, next));
                continue;
            }
        }
        merged.push(carry_block(current));
    }

    merged
}

/// 融合悬挂块与其结果块：SQL 取前块，结果行与记录数取后块，
/// 错误标志取逻辑或，错误行优先取前块，原始行按顺序拼接。
fn fuse_blocks(statement: ParsedBlock, result: ParsedBlock) -> MergedBlock {
    let mut lines = statement.lines;
    lines.extend(result.lines);

    MergedBlock {
        sql_lines: statement.sql_lines,
        fetch_rows: result.fetch_rows,
        record_count: result.record_count,
        has_error: statement.has_error || result.has_error,
        error_line: statement.error_line.or(result.error_line),
        lines,
        merged: true,
    }
}

/// 原样转换单个块
fn carry_block(block: ParsedBlock) -> MergedBlock {
    MergedBlock {
        sql_lines: block.sql_lines,
        fetch_rows: block.fetch_rows,
        record_count: block.record_count,
        has_error: block.has_error,
        error_line: block.error_line,
        lines: block.lines,
        merged: false,
    }
}
