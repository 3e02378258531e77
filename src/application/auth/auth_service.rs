use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Credential, Customer, CustomerId, Role, Session, SessionToken, UserAccount};
use crate::ports::CustomerDirectory;

use super::errors::{AuthError, Result};

/// 認証サービス
///
/// 登録済みアカウントとサインイン中のセッションを所有する。
/// `main`で1つ作成し、`Arc`で共有する。
pub struct AuthService {
    accounts: RwLock<HashMap<String, UserAccount>>,
    sessions: RwLock<HashMap<SessionToken, Session>>,
    customer_directory: Arc<dyn CustomerDirectory>,
}

impl AuthService {
    pub fn new(customer_directory: Arc<dyn CustomerDirectory>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            customer_directory,
        }
    }

    /// 管理者アカウントを登録する
    pub async fn register_admin(&self, username: &str, password: &str) -> Result<CustomerId> {
        let credential = Credential::new(password)?;
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(username) {
            return Err(AuthError::UsernameAlreadyTaken);
        }

        let account = UserAccount::new(username, credential, Role::Admin);
        let user_id = account.user_id();
        accounts.insert(username.to_string(), account);

        tracing::debug!(username, "Administrator registered");
        Ok(user_id)
    }

    /// 顧客アカウントを登録する
    ///
    /// アカウントと同じIDで顧客集約をディレクトリに作成する。
    ///
    /// # エラー
    /// - InvalidCredential: パスワードが強度規則を満たさない
    /// - UsernameAlreadyTaken: 利用者名が使用済み
    pub async fn register_customer(&self, username: &str, password: &str) -> Result<CustomerId> {
        let credential = Credential::new(password)?;
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(username) {
            return Err(AuthError::UsernameAlreadyTaken);
        }

        let account = UserAccount::new(username, credential, Role::Customer);
        let user_id = account.user_id();
        self.customer_directory
            .insert(Customer::new(user_id, username))
            .await
            .map_err(AuthError::CustomerDirectoryError)?;
        accounts.insert(username.to_string(), account);

        tracing::info!(username, "Registration successful");
        Ok(user_id)
    }

    /// サインインしてセッションを開始する
    ///
    /// 同じ利用者が複数のセッションを持つことができる。
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session> {
        let session = {
            let accounts = self.accounts.read().await;
            let account = accounts.get(username).ok_or(AuthError::UsernameNotFound)?;
            if !account.verify(password) {
                tracing::warn!(username, "Sign-in rejected: wrong password");
                return Err(AuthError::WrongPassword);
            }
            Session::open(account)
        };

        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());

        tracing::info!(username, role = ?session.role, "Successfully signed in");
        Ok(session)
    }

    /// セッションを終了する
    pub async fn sign_out(&self, token: SessionToken) -> Result<()> {
        let session = self
            .sessions
            .write()
            .await
            .remove(&token)
            .ok_or(AuthError::SessionNotFound)?;

        tracing::info!(username = %session.username, "Successfully signed out");
        Ok(())
    }

    /// トークンから有効なセッションを取得する
    pub async fn authenticate(&self, token: SessionToken) -> Result<Session> {
        self.sessions
            .read()
            .await
            .get(&token)
            .cloned()
            .ok_or(AuthError::SessionNotFound)
    }

    pub async fn active_session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::CustomerDirectory as InMemoryCustomerDirectory;
    use crate::domain::CredentialError;

    fn service() -> (AuthService, Arc<InMemoryCustomerDirectory>) {
        let directory = Arc::new(InMemoryCustomerDirectory::new());
        (AuthService::new(directory.clone()), directory)
    }

    #[tokio::test]
    async fn test_active_session_count_initially_zero() {
        let (auth, _) = service();
        assert_eq!(auth.active_session_count().await, 0);
    }

    #[tokio::test]
    async fn test_register_customer_creates_customer_with_same_id() {
        let (auth, directory) = service();

        let user_id = auth.register_customer("user1", "TestPass123!").await.unwrap();

        let customer = directory.find(user_id).await.unwrap().unwrap();
        assert_eq!(customer.lock().await.username(), "user1");
    }

    #[tokio::test]
    async fn test_register_duplicate_username_fails() {
        let (auth, _) = service();
        auth.register_customer("user1", "TestPass123!").await.unwrap();

        let result = auth.register_customer("user1", "Another123!").await;

        assert!(matches!(result, Err(AuthError::UsernameAlreadyTaken)));
    }

    #[tokio::test]
    async fn test_register_with_weak_password_fails() {
        let (auth, _) = service();

        let result = auth.register_customer("user1", "short").await;

        assert!(matches!(
            result,
            Err(AuthError::InvalidCredential(CredentialError::TooShort))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_creates_session() {
        let (auth, _) = service();
        let user_id = auth.register_customer("user1", "TestPass123!").await.unwrap();

        let session = auth.sign_in("user1", "TestPass123!").await.unwrap();

        assert_eq!(session.user_id, user_id);
        assert_eq!(session.role, Role::Customer);
        assert_eq!(auth.active_session_count().await, 1);
        assert_eq!(auth.authenticate(session.token).await.unwrap(), session);
    }

    #[tokio::test]
    async fn test_multiple_sessions_for_same_user() {
        let (auth, _) = service();
        auth.register_customer("user1", "TestPass123!").await.unwrap();

        auth.sign_in("user1", "TestPass123!").await.unwrap();
        auth.sign_in("user1", "TestPass123!").await.unwrap();

        assert_eq!(auth.active_session_count().await, 2);
    }

    #[tokio::test]
    async fn test_sign_in_errors() {
        let (auth, _) = service();
        auth.register_customer("user1", "TestPass123!").await.unwrap();

        assert!(matches!(
            auth.sign_in("nobody", "TestPass123!").await,
            Err(AuthError::UsernameNotFound)
        ));
        assert!(matches!(
            auth.sign_in("user1", "WrongPass123!").await,
            Err(AuthError::WrongPassword)
        ));
        assert_eq!(auth.active_session_count().await, 0);
    }

    #[tokio::test]
    async fn test_sign_out_terminates_only_that_session() {
        let (auth, _) = service();
        auth.register_customer("user1", "TestPass123!").await.unwrap();
        let first = auth.sign_in("user1", "TestPass123!").await.unwrap();
        let second = auth.sign_in("user1", "TestPass123!").await.unwrap();

        auth.sign_out(first.token).await.unwrap();

        assert_eq!(auth.active_session_count().await, 1);
        assert!(auth.authenticate(first.token).await.is_err());
        assert!(auth.authenticate(second.token).await.is_ok());
    }

    #[tokio::test]
    async fn test_sign_out_unknown_session_fails() {
        let (auth, _) = service();
        let result = auth.sign_out(SessionToken::new()).await;
        assert!(matches!(result, Err(AuthError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_admin_sign_in_has_admin_role() {
        let (auth, _) = service();
        auth.register_admin("admin", "Admin123!").await.unwrap();

        let session = auth.sign_in("admin", "Admin123!").await.unwrap();

        assert_eq!(session.role, Role::Admin);
    }
}
