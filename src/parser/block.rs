//! Block 结构定义和相关方法
//!
//! Block 表示切分后的一个原始事件块：头边界之间的一段连续日志行。
//! 文件开头在任何头之前出现的内容构成一个没有头的"前导块"。

use crate::block::ParsedBlock;
use crate::parser::block_parser;
use crate::tools::is_header_line;

/// 一个原始事件块（一组连续的日志行）
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// 块的所有行（若块有头，第一行就是头行）
    pub lines: Vec<String>,
}

impl Block {
    /// 以首行创建新块
    pub fn new(first_line: String) -> Self {
        Self {
            lines: vec![first_line],
        }
    }

    /// 追加一行
    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// 展示用块头：约定为块的第一行
    pub fn header(&self) -> &str {
        &self.lines[0]
    }

    /// 该块是否以条目头行开始（前导块返回 `false`）
    pub fn has_header(&self) -> bool {
        is_header_line(self.header())
    }

    /// 获取所有行
    pub fn all_lines(&self) -> &[String] {
        &self.lines
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 获取完整的块内容（所有行拼接）
    pub fn full_content(&self) -> String {
        self.lines.join("\n")
    }

    /// 对该块运行字段提取状态机，得到 [`ParsedBlock`]。
    ///
    /// 提取是尽力而为的：格式不符的行只会被跳过，永不失败。
    pub fn parse(&self) -> ParsedBlock {
        let lines: Vec<&str> = self.lines.iter().map(|s| s.as_str()).collect();
        block_parser::parse_block(&lines)
    }
}
