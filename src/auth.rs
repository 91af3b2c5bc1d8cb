//! Identity for mutating commands.
//!
//! Commands never look up "who is running this" themselves: they receive an
//! [`Authenticator`] and ask it for a [`Session`]. The production
//! implementation reads the operator from the environment; a fixed identity
//! exists only for tests and the `demo` feature.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub const USER_ENV: &str = "CREWLEDGER_USER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub company_id: String,
}

pub trait Authenticator {
    fn authenticate(&self) -> AppResult<Session>;
}

/// Operator from `$CREWLEDGER_USER`, company from the configuration file.
pub struct EnvAuthenticator {
    company_id: String,
}

impl EnvAuthenticator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            company_id: cfg.company_id.clone(),
        }
    }

    fn session_for(&self, user: Option<String>) -> AppResult<Session> {
        let user_id = user
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::Unauthenticated(format!("set {USER_ENV} to your user id")))?;

        if self.company_id.trim().is_empty() {
            return Err(AppError::Unauthenticated(
                "company_id is empty in the configuration file".into(),
            ));
        }

        Ok(Session {
            user_id,
            company_id: self.company_id.clone(),
        })
    }
}

impl Authenticator for EnvAuthenticator {
    fn authenticate(&self) -> AppResult<Session> {
        self.session_for(std::env::var(USER_ENV).ok())
    }
}

/// Always returns the same session.
#[cfg(any(test, feature = "demo"))]
pub struct StaticAuthenticator(pub Session);

#[cfg(any(test, feature = "demo"))]
impl StaticAuthenticator {
    pub fn demo() -> Self {
        Self(Session {
            user_id: "demo-user".into(),
            company_id: "demo-company".into(),
        })
    }
}

#[cfg(any(test, feature = "demo"))]
impl Authenticator for StaticAuthenticator {
    fn authenticate(&self) -> AppResult<Session> {
        Ok(self.0.clone())
    }
}

/// The authenticator wired into the CLI for this build.
pub fn default_authenticator(cfg: &Config) -> Box<dyn Authenticator> {
    demo_fallback().unwrap_or_else(|| Box::new(EnvAuthenticator::new(cfg)))
}

#[cfg(feature = "demo")]
fn demo_fallback() -> Option<Box<dyn Authenticator>> {
    if std::env::var(USER_ENV).is_ok() {
        return None;
    }
    Some(Box::new(StaticAuthenticator::demo()))
}

#[cfg(not(feature = "demo"))]
fn demo_fallback() -> Option<Box<dyn Authenticator>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_user_and_config_company() {
        let mut cfg = Config::default();
        cfg.company_id = "acme".into();
        let auth = EnvAuthenticator::new(&cfg);

        let s = auth.session_for(Some(" foreman ".into())).unwrap();
        assert_eq!(s.user_id, "foreman");
        assert_eq!(s.company_id, "acme");
    }

    #[test]
    fn missing_user_is_rejected() {
        let auth = EnvAuthenticator::new(&Config::default());
        assert!(matches!(auth.session_for(None), Err(AppError::Unauthenticated(_))));
        assert!(matches!(
            auth.session_for(Some("   ".into())),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn empty_company_is_rejected() {
        let mut cfg = Config::default();
        cfg.company_id.clear();
        let auth = EnvAuthenticator::new(&cfg);
        assert!(auth.session_for(Some("foreman".into())).is_err());
    }

    #[test]
    fn static_authenticator_is_fixed() {
        let auth = StaticAuthenticator::demo();
        assert_eq!(auth.authenticate().unwrap().user_id, "demo-user");
    }
}
