//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_academic_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum AcademicError {
            $($variant(String),)*
        }

        impl AcademicError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AcademicError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AcademicError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AcademicError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AcademicError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AcademicError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_academic_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    NotEligible("E003", "Not Eligible"),
    Conflict("E004", "State Conflict"),
    InconsistentState("E005", "Inconsistent State"),
    FileOperation("E006", "File Operation Error"),
    Parse("E007", "Parse Error"),
    Config("E008", "Configuration Error"),
}

impl AcademicError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AcademicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AcademicError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for AcademicError {
    fn from(err: std::io::Error) -> Self {
        AcademicError::FileOperation(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AcademicError {
    fn from(err: std::num::ParseIntError) -> Self {
        AcademicError::Parse(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for AcademicError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AcademicError::Parse(err.to_string())
    }
}

impl From<std::str::ParseBoolError> for AcademicError {
    fn from(err: std::str::ParseBoolError) -> Self {
        AcademicError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for AcademicError {
    fn from(err: config::ConfigError) -> Self {
        AcademicError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AcademicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AcademicError::validation("test").code(), "E001");
        assert_eq!(AcademicError::not_found("test").code(), "E002");
        assert_eq!(AcademicError::conflict("test").code(), "E004");
        assert_eq!(AcademicError::inconsistent_state("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AcademicError::not_eligible("test").error_type(),
            "Not Eligible"
        );
        assert_eq!(
            AcademicError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AcademicError::validation("Score out of range");
        assert_eq!(err.message(), "Score out of range");
    }

    #[test]
    fn test_format_simple() {
        let err = AcademicError::conflict("Duplicate class code CALC1-A");
        let formatted = err.format_simple();
        assert!(formatted.contains("State Conflict"));
        assert!(formatted.contains("CALC1-A"));
    }

    #[test]
    fn test_parse_errors_convert() {
        let err: AcademicError = "x".parse::<f64>().unwrap_err().into();
        assert_eq!(err.code(), "E007");
        let err: AcademicError = "yes".parse::<bool>().unwrap_err().into();
        assert_eq!(err.error_type(), "Parse Error");
    }
}
