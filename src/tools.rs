//! 行分类工具
//!
//! 提供日志行的分类功能：噪声行、条目头行（两种互斥格式）和内容行。
//! 分类顺序是固定且有意义的：噪声判定永远先于头部判定。

// Modern 头格式常量（"DD/MM/YYYY HH:MM:SS - NNNNNN "）
const MODERN_MIN_LINE_LENGTH: usize = 29;
const MODERN_SEPARATOR_POSITIONS: [(usize, u8); 9] = [
    (2, b'/'),
    (5, b'/'),
    (10, b' '),
    (13, b':'),
    (16, b':'),
    (19, b' '),
    (20, b'-'),
    (21, b' '),
    (28, b' '),
];
const MODERN_DIGIT_POSITIONS: [usize; 20] = [
    0, 1, 3, 4, 6, 7, 8, 9, 11, 12, 14, 15, 17, 18, 22, 23, 24, 25, 26, 27,
];

// Legacy 头格式常量（"NNNNNN HH:MM:SS "，无日期部分）
const LEGACY_MIN_LINE_LENGTH: usize = 16;
const LEGACY_SEPARATOR_POSITIONS: [(usize, u8); 4] = [(6, b' '), (9, b':'), (12, b':'), (15, b' ')];
const LEGACY_DIGIT_POSITIONS: [usize; 12] = [0, 1, 2, 3, 4, 5, 7, 8, 10, 11, 13, 14];

/// 启动横幅标记（出现即视为噪声行）
pub const BANNER_MARKER: &str = "Log Iniciado Por:";

/// 产品安装目录片段（忽略 ASCII 大小写匹配；日志中反斜杠是成对出现的）
pub const INSTALL_DIR_FRAGMENT: &str = r"\\totvs\\hoteis\\";

/// 条目头的两种互斥格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFormat {
    /// 完整日期格式：`DD/MM/YYYY HH:MM:SS - NNNNNN <内容>`
    Modern,

    /// 旧格式：`NNNNNN HH:MM:SS <内容>`（无日期）
    Legacy,
}

/// 行分类结果
///
/// 分类是全函数：任何文本行都会得到三者之一，永不失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 启动/横幅噪声行，在切分之前被丢弃，不会出现在任何输出中
    Noise,

    /// 条目头行，标志一个新事件块的开始
    Header(HeaderFormat),

    /// 普通内容行
    Content,
}

/// 判断一行是否为噪声行。
///
/// 噪声判定规则（按原始日志格式约定）：
/// 1. 包含字面量 `"Log Iniciado Por:"`；
/// 2. 包含产品安装目录片段（忽略 ASCII 大小写），无论其后是否跟着可执行文件名。
///
/// 噪声判定优先于头部判定：即使该行同时满足头格式，也视为噪声。
pub fn is_noise_line(line: &str) -> bool {
    line.contains(BANNER_MARKER) || contains_ignore_ascii_case(line, INSTALL_DIR_FRAGMENT)
}

/// 判断一行是否为 Modern 格式条目头。
///
/// 判断标准
/// 1. 行首 19 字节符合日期时间格式 `DD/MM/YYYY HH:MM:SS`；
/// 2. 随后是 ` - ` 三个字节；
/// 3. 再随后恰好 6 位数字加一个空格，之后是任意剩余内容（可以为空）。
pub fn is_modern_header_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < MODERN_MIN_LINE_LENGTH {
        return false;
    }

    for &(pos, expected) in &MODERN_SEPARATOR_POSITIONS {
        if bytes[pos] != expected {
            return false;
        }
    }

    for &i in &MODERN_DIGIT_POSITIONS {
        if !bytes[i].is_ascii_digit() {
            return false;
        }
    }

    true
}

/// 判断一行是否为 Legacy 格式条目头。
///
/// 判断标准：行首为 6 位数字，一个空格，`HH:MM:SS`，再一个空格。
pub fn is_legacy_header_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < LEGACY_MIN_LINE_LENGTH {
        return false;
    }

    for &(pos, expected) in &LEGACY_SEPARATOR_POSITIONS {
        if bytes[pos] != expected {
            return false;
        }
    }

    for &i in &LEGACY_DIGIT_POSITIONS {
        if !bytes[i].is_ascii_digit() {
            return false;
        }
    }

    true
}

/// 判断一行是否为条目头（任一格式）。
#[inline]
pub fn is_header_line(line: &str) -> bool {
    is_modern_header_line(line) || is_legacy_header_line(line)
}

/// 对一行日志进行分类。
///
/// 判定顺序固定：噪声 -> Modern 头 -> Legacy 头 -> 内容。
/// 噪声优先级最高是一条显式规则，而不是模式顺序的偶然结果。
///
/// # 示例
///
/// ```
/// use totvs_database_parser_dblog::tools::{HeaderFormat, LineKind, classify_line};
///
/// let kind = classify_line("10/03/2025 14:22:01 - 001234 Open: SELECT 1 FROM DUAL");
/// assert_eq!(kind, LineKind::Header(HeaderFormat::Modern));
///
/// assert_eq!(classify_line("FieldIndex=0; Name=ID; Tipo=INT; Value='5'"), LineKind::Content);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    if is_noise_line(line) {
        return LineKind::Noise;
    }
    if is_modern_header_line(line) {
        return LineKind::Header(HeaderFormat::Modern);
    }
    if is_legacy_header_line(line) {
        return LineKind::Header(HeaderFormat::Legacy);
    }
    LineKind::Content
}

/// 忽略 ASCII 大小写的子串查找
#[inline]
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
