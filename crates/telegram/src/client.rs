//! grammers-backed MTProto transport.
//!
//! The code-request and sign-in steps go through raw TL invocations rather
//! than the high-level login helpers: the `phone_code_hash` must survive to a
//! later invocation of the process, and grammers' `LoginToken` cannot be
//! persisted.

use std::path::PathBuf;

use {
    async_trait::async_trait,
    grammers_client::{Client, Config, InitParams, InvocationError},
    grammers_session::Session,
    grammers_tl_types as tl,
    tracing::debug,
};

use crate::{
    config::TelegramConfig,
    error::{Error, Result},
    transport::{RawMessage, Transport},
};

/// The single live MTProto session for a run.
pub struct TelegramTransport {
    client: Client,
    session_file: PathBuf,
    api_id: i32,
    api_hash: String,
}

impl TelegramTransport {
    /// Connect to Telegram, reusing the stored session blob when present.
    ///
    /// Fails with `AuthFailed` when the API key pair is missing; MTProto
    /// needs it to connect even with a stored session.
    pub async fn connect(config: &TelegramConfig) -> Result<Self> {
        let (api_id, api_hash) = config.require_keys()?;

        if let Some(parent) = config.session_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let session = Session::load_file_or_create(&config.session_file)?;

        let client = Client::connect(Config {
            session,
            api_id,
            api_hash: api_hash.clone(),
            params: InitParams::default(),
        })
        .await
        .map_err(|e| Error::external("connecting to telegram", e))?;

        debug!(session_file = %config.session_file.display(), "connected");

        Ok(Self {
            client,
            session_file: config.session_file.clone(),
            api_id,
            api_hash,
        })
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn is_authorized(&self) -> Result<bool> {
        Ok(self.client.is_authorized().await?)
    }

    async fn request_login_code(&self, phone: &str) -> Result<String> {
        let request = tl::functions::auth::SendCode {
            phone_number: phone.to_string(),
            api_id: self.api_id,
            api_hash: self.api_hash.clone(),
            settings: tl::types::CodeSettings {
                allow_flashcall: false,
                current_number: false,
                allow_app_hash: false,
                allow_missed_call: false,
                allow_firebase: false,
                unknown_number: false,
                logout_tokens: None,
                token: None,
                app_sandbox: None,
            }
            .into(),
        };

        match self.client.invoke(&request).await? {
            tl::enums::auth::SentCode::Code(sent) => Ok(sent.phone_code_hash),
            _ => Err(Error::auth_failed("unexpected response to code request")),
        }
    }

    async fn sign_in(&self, phone: &str, code: &str, phone_code_hash: &str) -> Result<()> {
        let request = tl::functions::auth::SignIn {
            phone_number: phone.to_string(),
            phone_code_hash: phone_code_hash.to_string(),
            phone_code: Some(code.to_string()),
            email_verification: None,
        };

        match self.client.invoke(&request).await {
            Ok(tl::enums::auth::Authorization::Authorization(_)) => Ok(()),
            Ok(_) => Err(Error::auth_failed(
                "phone number has no account; sign-up is not supported",
            )),
            Err(InvocationError::Rpc(rpc))
                if rpc.name == "PHONE_CODE_INVALID" || rpc.name == "PHONE_CODE_EXPIRED" =>
            {
                Err(Error::auth_failed(format!(
                    "{}: run again with a fresh TELEGRAM_CODE",
                    rpc.name
                )))
            },
            Err(e) => Err(e.into()),
        }
    }

    async fn save_session(&self) -> Result<()> {
        self.client.session().save_to_file(&self.session_file)?;
        Ok(())
    }

    async fn recent_messages(&self, handle: &str, limit: usize) -> Result<Vec<RawMessage>> {
        let chat = self
            .client
            .resolve_username(handle)
            .await?
            .ok_or_else(|| Error::channel_not_found(handle))?;

        let mut iter = self.client.iter_messages(&chat).limit(limit);
        let mut messages = Vec::new();
        while let Some(message) = iter.next().await? {
            messages.push(RawMessage {
                id: message.id(),
                timestamp: message.date(),
                text: message.text().to_string(),
            });
        }

        debug!(handle, count = messages.len(), "fetched raw messages");
        Ok(messages)
    }
}
