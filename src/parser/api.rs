//! 便捷 API 函数
//!
//! 提供一组高层入口：从字符串或文件跑完整的
//! 分类 -> 切分 -> 提取 -> 合并 管线，以及流式读取原始块。

use crate::block::{MergedBlock, ParsedBlock};
use crate::error::ParseError;
use crate::merge::merge_blocks;
use crate::parser::block::Block;
use crate::parser::block_reader::BlockReader;
use crate::parser::segmenter::segment;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

/// 并行提取一批原始块。
///
/// 每个块的状态机都是块内局部的，块间互不影响，因此可以安全并行。
/// 结果按输入顺序物化，供其后顺序敏感的合并遍使用。
pub fn parse_blocks(blocks: &[Block]) -> Vec<ParsedBlock> {
    blocks.par_iter().map(|block| block.parse()).collect()
}

/// 解析一段完整的日志文本，返回最终的 MergedBlock 列表。
///
/// 跑完整管线：行分类、块切分、并行块提取、悬挂块合并。
/// 空输入得到空列表；没有任何可识别头的输入得到单个前导块。
///
/// # 示例
///
/// ```
/// use totvs_database_parser_dblog::parse_blocks_from_string;
///
/// let log = "10/03/2025 14:22:01 - 001234 Open: SELECT * FROM HOSPEDES\n\
///            10/03/2025 14:22:02 - 001235 Resultado\n\
///            FieldIndex=0; Name=ID; Tipo=INT; Value='5'\n\
///            Record Count = 1";
///
/// let blocks = parse_blocks_from_string(log);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].sql_lines, vec!["SELECT * FROM HOSPEDES"]);
/// assert_eq!(blocks[0].record_count, Some(1));
/// ```
pub fn parse_blocks_from_string(content: &str) -> Vec<MergedBlock> {
    let lines: Vec<&str> = content.lines().collect();
    let blocks = segment(&lines);
    let parsed = parse_blocks(&blocks);
    merge_blocks(parsed)
}

/// 读取日志文件并解析为最终的 MergedBlock 列表。
///
/// 文件内容先按 UTF-8 解码，失败则回退 Latin-1（原始日志常见
/// Windows 西欧编码）。
///
/// # 参数
///
/// * `path` - 日志文件路径
///
/// # 返回
///
/// * `Ok(Vec<MergedBlock>)` - 解析结果（内容缺失不是错误）
/// * `Err(ParseError)` - 仅在文件无法读取时
///
/// # 示例
///
/// ```no_run
/// use totvs_database_parser_dblog::parse_blocks_from_file;
///
/// let blocks = parse_blocks_from_file("manutencao.log")?;
/// for block in &blocks {
///     if block.has_result() {
///         println!("{}: {} linhas", block.header().unwrap_or("<preâmbulo>"), block.fetch_rows.len());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_blocks_from_file<P>(path: P) -> Result<Vec<MergedBlock>, ParseError>
where
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let bytes = fs::read(path_ref).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ParseError::FileNotFound {
            path: format!("{}: {}", path_ref.display(), e),
        },
        _ => ParseError::IoError(e.to_string()),
    })?;

    Ok(parse_blocks_from_string(&decode_log_bytes(&bytes)))
}

/// 从文件流式读取原始块（不做提取与合并）。
///
/// 适合只需要块边界、或希望自行控制提取时机的场景。流式路径假定
/// 输入是合法 UTF-8；需要编码回退时请使用 [`parse_blocks_from_file`]。
///
/// # 示例
///
/// ```no_run
/// use totvs_database_parser_dblog::iter_blocks_from_file;
///
/// for result in iter_blocks_from_file("manutencao.log")? {
///     let block = result?;
///     println!("{}", block.header());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn iter_blocks_from_file<P>(path: P) -> Result<BlockReader<File>, ParseError>
where
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| ParseError::FileNotFound {
        path: format!("{}: {}", path_ref.display(), e),
    })?;
    Ok(BlockReader::new(file))
}

/// UTF-8 优先解码，失败时按 Latin-1 逐字节回退
fn decode_log_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
