//! Blocking client for the story backend's session endpoints.

use super::types::Session;
use crate::constants::DEFAULT_API_BASE;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::info;

const USER_AGENT: &str = concat!("math-quest/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct RewardBody {
    coins: u32,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_url(&self, session_id: &str) -> String {
        format!("{}/api/session/{}", self.base_url, session_id)
    }

    pub fn reward_url(&self, session_id: &str) -> String {
        format!("{}/reward", self.session_url(session_id))
    }

    /// `GET /api/session/{id}`
    pub fn fetch_session(&self, session_id: &str) -> Result<Session> {
        let session: Session = self
            .agent
            .get(&self.session_url(session_id))
            .set("User-Agent", USER_AGENT)
            .call()?
            .into_json()?;
        Ok(session)
    }

    /// `POST /api/session/{id}/reward` with the coins earned. Returns the
    /// session as the backend sees it afterwards.
    pub fn report_reward(&self, session_id: &str, coins: u32) -> Result<Session> {
        let session: Session = self
            .agent
            .post(&self.reward_url(session_id))
            .set("User-Agent", USER_AGENT)
            .send_json(RewardBody { coins })?
            .into_json()?;
        info!(session_id, coins, total = session.coins, "reward reported to backend");
        Ok(session)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
