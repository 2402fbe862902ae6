//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used by every domain crate.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ライブラリ全体で使用するエラー分類を定義します。
/// フロントエンドは `is_recoverable()` を見て「入力し直せば直るエラー」か
/// 「ストアが使えない致命的なエラー」かを判断します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Validation;
/// assert!(kind.is_recoverable());
/// assert_eq!(kind.as_str(), "Validation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値が検証規則に違反している
    Validation,
    /// 一意性制約など、既存の状態と競合
    Conflict,
    /// 認証失敗（資格情報が一致しない）
    Unauthorized,
    /// リソースが見つからない
    NotFound,
    /// ストアが開けない・照会できない
    Unavailable,
    /// ライブラリ内部エラー
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Conflict.as_str(), "Conflict");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::Internal => "Internal",
        }
    }

    /// 呼び出し側が入力を修正して再試行できるエラーかどうかを判定
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Validation
                | ErrorKind::Conflict
                | ErrorKind::Unauthorized
                | ErrorKind::NotFound
        )
    }

    /// 致命的なエラーかどうかを判定
    ///
    /// `true` の場合はログに記録し、呼び出し側へそのまま伝播すべきです。
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::Validation.as_str(), "Validation");
        assert_eq!(ErrorKind::Conflict.as_str(), "Conflict");
        assert_eq!(ErrorKind::Unauthorized.as_str(), "Unauthorized");
        assert_eq!(ErrorKind::NotFound.as_str(), "Not Found");
        assert_eq!(ErrorKind::Unavailable.as_str(), "Unavailable");
        assert_eq!(ErrorKind::Internal.as_str(), "Internal");
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ErrorKind::Validation.is_recoverable());
        assert!(ErrorKind::Conflict.is_recoverable());
        assert!(ErrorKind::Unauthorized.is_recoverable());
        assert!(ErrorKind::NotFound.is_recoverable());
        assert!(!ErrorKind::Unavailable.is_recoverable());
        assert!(!ErrorKind::Internal.is_recoverable());
    }

    #[test]
    fn test_is_fatal() {
        assert!(ErrorKind::Unavailable.is_fatal());
        assert!(ErrorKind::Internal.is_fatal());
        assert!(!ErrorKind::Validation.is_fatal());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorKind::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
    }
}
