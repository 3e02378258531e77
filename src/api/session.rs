use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Role, Session, SessionToken};

use super::{error::ApiError, handlers::AppState};

/// セッショントークンを渡すヘッダー
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// サインイン中の利用者（役割は問わない）
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// サインイン中の管理者
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

/// サインイン中の顧客
#[derive(Debug, Clone)]
pub struct CustomerSession(pub Session);

fn session_token(parts: &Parts) -> Result<SessionToken, ApiError> {
    parts
        .headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .map(SessionToken::from_uuid)
        .ok_or(ApiError::Unauthenticated)
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts)?;
        let session = state.auth_service.authenticate(token).await?;
        Ok(CurrentSession(session))
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state).await?;
        if session.role != Role::Admin {
            return Err(ApiError::Forbidden(
                "Only administrators can perform this operation.",
            ));
        }
        Ok(AdminSession(session))
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CustomerSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state).await?;
        if session.role != Role::Customer {
            return Err(ApiError::Forbidden(
                "Only customers can perform this operation.",
            ));
        }
        Ok(CustomerSession(session))
    }
}
