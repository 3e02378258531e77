use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{CredentialError, CustomerId};

/// パスワードの最小文字数
pub const MIN_CREDENTIAL_LENGTH: usize = 8;

/// 検証済みの資格情報（パスワード）
///
/// 生成時に強度規則を満たすことを保証し、Argon2idのPHC形式ハッシュだけを保持する。
/// 値はログや`Debug`出力に出さない。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// 強度規則を検証して生成する
    ///
    /// 規則：8文字以上、かつ大文字・小文字・数字・記号をそれぞれ1文字以上含む
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let value = value.into();
        if value.chars().count() < MIN_CREDENTIAL_LENGTH {
            return Err(CredentialError::TooShort);
        }

        let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_special = value.chars().any(|c| !c.is_alphanumeric());

        if !(has_upper && has_lower && has_digit && has_special) {
            return Err(CredentialError::MissingCharacterClasses {
                has_upper,
                has_lower,
                has_digit,
                has_special,
            });
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(value.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!("Failed to hash password: {}", e);
                CredentialError::HashingFailed
            })?;

        Ok(Self(hash.to_string()))
    }

    /// 保存済みハッシュ（PHC形式）
    pub fn phc_hash(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let parsed = match PasswordHash::new(&self.0) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!("Stored password hash is malformed: {}", e);
                return false;
            }
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// 利用者の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Customer,
}

/// 登録済みの利用者アカウント
///
/// 顧客アカウントの`user_id`は顧客集約の`CustomerId`と同じ値。
#[derive(Debug, Clone)]
pub struct UserAccount {
    user_id: CustomerId,
    username: String,
    credential: Credential,
    role: Role,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, credential: Credential, role: Role) -> Self {
        Self {
            user_id: CustomerId::new(),
            username: username.into(),
            credential,
            role,
        }
    }

    pub fn user_id(&self) -> CustomerId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn verify(&self, password: &str) -> bool {
        self.credential.matches(password)
    }
}

/// セッショントークン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// サインイン中のセッション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: CustomerId,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn open(account: &UserAccount) -> Self {
        Self {
            token: SessionToken::new(),
            user_id: account.user_id(),
            username: account.username().to_string(),
            role: account.role(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credential() {
        let credential = Credential::new("Admin123!").unwrap();
        assert!(credential.matches("Admin123!"));
        assert!(!credential.matches("admin123!"));
    }

    #[test]
    fn test_credential_stores_hash_not_plaintext() {
        // TDD: パスワードが平文ではなくArgon2idハッシュで保持されることのテスト
        let credential = Credential::new("Admin123!").unwrap();

        assert_ne!(credential.phc_hash(), "Admin123!");
        assert!(credential.phc_hash().starts_with("$argon2id$"));
        assert!(!credential.phc_hash().contains("Admin123!"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = Credential::new("Admin123!").unwrap();
        let second = Credential::new("Admin123!").unwrap();

        assert_ne!(first.phc_hash(), second.phc_hash());
        assert!(first.matches("Admin123!"));
        assert!(second.matches("Admin123!"));
    }

    #[test]
    fn test_short_credential_is_rejected() {
        assert_eq!(Credential::new("Ab1!"), Err(CredentialError::TooShort));
    }

    #[test]
    fn test_credential_missing_classes_are_reported() {
        let result = Credential::new("password");
        assert_eq!(
            result,
            Err(CredentialError::MissingCharacterClasses {
                has_upper: false,
                has_lower: true,
                has_digit: false,
                has_special: false,
            })
        );
    }

    #[test]
    fn test_credential_debug_hides_value() {
        let credential = Credential::new("Secret123!").unwrap();
        assert_eq!(format!("{:?}", credential), "Credential(***)");
    }

    #[test]
    fn test_account_verify_and_role() {
        let account = UserAccount::new(
            "admin",
            Credential::new("Admin123!").unwrap(),
            Role::Admin,
        );
        assert!(account.is_admin());
        assert!(account.verify("Admin123!"));
        assert!(!account.verify("wrong"));
    }

    #[test]
    fn test_session_copies_account_identity() {
        let account = UserAccount::new(
            "alice",
            Credential::new("Alice123!").unwrap(),
            Role::Customer,
        );
        let session = Session::open(&account);
        assert_eq!(session.user_id, account.user_id());
        assert_eq!(session.role, Role::Customer);
        assert_eq!(session.username, "alice");
    }
}
