//! 解析器使用的常量定义
//!
//! 定义块内提取使用的全部标记字面量，以及预构建的 memmem 查找器，
//! 避免逐行扫描时重复构建。

use memchr::memmem::Finder;
use once_cell::sync::Lazy;

// 语句标记

/// 语句打开标记（其后是 SQL 语句文本）
pub static OPEN_MARKER: &str = "Open:";

/// 语句错误标记（其后同样是 SQL 语句文本）
pub static ERRO_MARKER: &str = "Erro:";

// 字段提取标记

/// 结果字段行标记（行内必须出现才会尝试字段提取）
pub static FIELD_INDEX_MARKER: &str = "FieldIndex=";

/// 字段名键
pub static NAME_KEY: &str = "Name=";

/// 字段名与类型之间的分隔片段
pub static TIPO_SEPARATOR: &str = "; Tipo=";

/// 类型与值之间的分隔片段
pub static VALUE_SEPARATOR: &str = "; Value=";

// 全程检查标记

/// 数据库错误标记
pub static ORA_MARKER: &str = "ORA-";

/// 记录数标签（后跟可选空白、`=`、可选空白与数字）
pub static RECORD_COUNT_LABEL: &str = "Record Count";

// 预构建的查找器（热路径逐行使用）

/// `Open:` 查找器
pub static OPEN_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(OPEN_MARKER));

/// `Erro:` 查找器
pub static ERRO_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(ERRO_MARKER));

/// `FieldIndex=` 查找器
pub static FIELD_INDEX_FINDER: Lazy<Finder<'static>> =
    Lazy::new(|| Finder::new(FIELD_INDEX_MARKER));

/// `Name=` 查找器
pub static NAME_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(NAME_KEY));

/// `ORA-` 查找器
pub static ORA_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(ORA_MARKER));

/// `Record Count` 查找器
pub static RECORD_COUNT_FINDER: Lazy<Finder<'static>> =
    Lazy::new(|| Finder::new(RECORD_COUNT_LABEL));
