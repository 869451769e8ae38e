use std::{future::Future, time::Duration};

pub use errors::*;
pub use models::{
    role::Role,
    user::{Identity, KNOWN_USERS},
};

pub mod errors;
pub mod models;

pub type Result<T> = std::result::Result<T, DirectoryError>;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(config::DEFAULT_DELAY_MS);

/// Looks up the role of a known identity.
///
/// Unknown identities have no role and yield `None`; this is not an error.
pub fn get_role(identity: &str) -> Option<Role> {
    let role = match identity {
        "Packy" => Some(Role::Admin),
        "Joan" => Some(Role::Reader),
        _ => None,
    };

    if role.is_none() {
        tracing::trace!(identity, "no role for identity");
    }

    role
}

/// Source of the identity list.
pub trait UserDirectory {
    fn list_users(&self) -> impl Future<Output = Result<Vec<Identity>>> + Send;
}

/// Fixed directory that answers after a delay, standing in for a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubDirectory {
    delay: Duration,
}

impl Default for StubDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl StubDirectory {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &config::Config) -> Self {
        Self::new(config.delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Always resolves to [`KNOWN_USERS`] once the delay has elapsed
    pub async fn users(&self) -> Vec<Identity> {
        tokio::time::sleep(self.delay).await;

        KNOWN_USERS.iter().map(|user| user.to_string()).collect()
    }
}

impl UserDirectory for StubDirectory {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn list_users(&self) -> Result<Vec<Identity>> {
        tracing::debug!(delay = ?self.delay, "waiting on stub directory");

        let users = self.users().await;
        tracing::debug!(count = users.len(), "stub directory resolved");

        Ok(users)
    }
}

pub async fn get_users() -> Vec<Identity> {
    StubDirectory::default().users().await
}
