use thiserror::Error;

use crate::domain::CredentialError;

/// 認証アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum AuthError {
    /// 利用者名が既に使われている
    #[error("Username is already taken")]
    UsernameAlreadyTaken,

    /// パスワードが強度規則を満たさない
    #[error(transparent)]
    InvalidCredential(#[from] CredentialError),

    /// 利用者名が登録されていない
    #[error("The username you entered does not exist!")]
    UsernameNotFound,

    /// パスワードが一致しない
    #[error("Incorrect password")]
    WrongPassword,

    /// 有効なセッションがない
    #[error("The specified user could not be found.")]
    SessionNotFound,

    /// CustomerDirectoryのエラー
    #[error("Customer directory error")]
    CustomerDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 認証層の Result型
pub type Result<T> = std::result::Result<T, AuthError>;
