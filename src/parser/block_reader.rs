//! BlockReader - 从 Reader 流式读取并切分出 Block
//!
//! 提供一个迭代器，从任何实现了 `Read` trait 的源中逐块读取日志。
//! 切分语义与批量版 [`segment`](crate::parser::segment) 一致：
//! 噪声行跳过，头行开启新块，首个头之前的内容构成前导块。
//!
//! 流式读取假定输入是合法 UTF-8；需要 Latin-1 回退解码时请使用
//! [`parse_blocks_from_file`](crate::parser::parse_blocks_from_file)。

use crate::parser::block::Block;
use crate::tools::{classify_line, LineKind};
use std::{
    io::{self, BufRead, BufReader, Read},
    mem,
};

/// 从 Reader 中按行读取并切分成 Block 的迭代器
///
/// # 类型参数
///
/// * `R` - 实现了 `Read` trait 的类型
///
/// # 示例
///
/// ```no_run
/// use totvs_database_parser_dblog::BlockReader;
/// use std::fs::File;
///
/// let file = File::open("manutencao.log").unwrap();
/// for result in BlockReader::new(file) {
///     match result {
///         Ok(block) => println!("bloco com {} linhas", block.len()),
///         Err(e) => eprintln!("erro de leitura: {}", e),
///     }
/// }
/// ```
pub struct BlockReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    next_line: Option<String>,
    finished: bool,
}

impl<R: Read> BlockReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: String::new(),
            next_line: None,
            finished: false,
        }
    }

    /// 读取下一行（原地移除行尾换行符，复用缓冲区容量）
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;

        if bytes_read == 0 {
            Ok(None)
        } else {
            let mut len = self.buffer.len();
            while len > 0 {
                let last_byte = self.buffer.as_bytes()[len - 1];
                if last_byte == b'\n' || last_byte == b'\r' {
                    len -= 1;
                } else {
                    break;
                }
            }

            if len != self.buffer.len() {
                self.buffer.truncate(len);
            }

            Ok(Some(mem::take(&mut self.buffer)))
        }
    }

    /// 获取下一个块的首行：跳过噪声行；头行和内容行都可以开块
    /// （内容行开启的是前导块）。
    fn next_block_first_line(&mut self) -> io::Result<Option<String>> {
        // 上次读取时遇到的新头行
        if let Some(line) = self.next_line.take() {
            return Ok(Some(line));
        }

        loop {
            match self.read_line()? {
                Some(line) => match classify_line(&line) {
                    LineKind::Noise => continue,
                    LineKind::Header(_) | LineKind::Content => return Ok(Some(line)),
                },
                None => {
                    self.finished = true;
                    return Ok(None);
                }
            }
        }
    }

    /// 读取当前块的剩余行，直到遇到下一个头行或输入结束
    fn read_block_rest(&mut self, block: &mut Block) -> io::Result<()> {
        loop {
            match self.read_line()? {
                Some(line) => match classify_line(&line) {
                    LineKind::Noise => continue,
                    LineKind::Header(_) => {
                        // 下一个块的头行，缓存并结束当前块
                        self.next_line = Some(line);
                        break;
                    }
                    LineKind::Content => block.push_line(line),
                },
                None => {
                    self.finished = true;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.next_line.is_none() {
            return None;
        }

        let first_line = match self.next_block_first_line() {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };

        let mut block = Block::new(first_line);

        match self.read_block_rest(&mut block) {
            Ok(()) => Some(Ok(block)),
            Err(e) => Some(Err(e)),
        }
    }
}
