//! 请求参数校验
//!
//! 路径与查询参数以字符串形式到达，这里统一转换并映射错误码。

use crate::utils::{AppError, ErrorCode};

/// Parse a path or query segment as an entity id.
///
/// Rejects anything that is not a plain base-10 integer, reporting the
/// given error code.
pub fn parse_id(raw: &str, code: ErrorCode) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::with_message(code, format!("Invalid id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("42", ErrorCode::BranchIdInvalid).unwrap(), 42);
        assert_eq!(parse_id(" 7 ", ErrorCode::StudentIdInvalid).unwrap(), 7);
    }

    #[test]
    fn test_parse_id_invalid() {
        let err = parse_id("abc", ErrorCode::BranchIdInvalid).unwrap_err();
        assert_eq!(err.code, ErrorCode::BranchIdInvalid);

        let err = parse_id("12.5", ErrorCode::StudentIdInvalid).unwrap_err();
        assert_eq!(err.code, ErrorCode::StudentIdInvalid);
    }
}
