//! 批量块切分
//!
//! 在已解码的有序行序列上按头边界切分出原始事件块。
//! 噪声行被完全跳过：既不开启、也不关闭、也不进入任何块。

use crate::parser::block::Block;
use crate::tools::{classify_line, LineKind};

/// 将有序行序列切分为有序块列表。
///
/// 切分规则：
/// - 噪声行完全跳过；
/// - 头行关闭当前打开的块（若有），并以自身为首行开启新块；
/// - 内容行追加到当前打开的块；若尚无打开的块（内容先于首个头出现），
///   以该行开启一个没有头的"前导块"；
/// - 输入结束时输出最后一个非空的打开块。
///
/// 保证：输出保持原始行序；输出块的总行数等于输入中
/// 内容行与头行之和（噪声行除外）。
///
/// # 示例
///
/// ```
/// use totvs_database_parser_dblog::segment;
///
/// let lines = [
///     "Log Iniciado Por: operador",
///     "10/03/2025 14:22:01 - 001234 Open: SELECT 1",
///     "FROM DUAL",
///     "10/03/2025 14:22:02 - 001235 Record Count = 1",
/// ];
/// let blocks = segment(&lines);
///
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].len(), 2);
/// assert_eq!(blocks[1].len(), 1);
/// ```
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for line in lines {
        let line = line.as_ref();
        match classify_line(line) {
            LineKind::Noise => continue,
            LineKind::Header(_) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(Block::new(line.to_string()));
            }
            LineKind::Content => match current.as_mut() {
                Some(block) => block.push_line(line.to_string()),
                // 内容先于首个头：开启前导块
                None => current = Some(Block::new(line.to_string())),
            },
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
