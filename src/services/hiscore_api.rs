use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::hiscore::{BossStat, MinigameStat, PlayerSnapshot, SkillStat};

const USER_AGENT: &str = "clanboard/0.1 (community event hiscore tracker)";
const MAX_ATTEMPTS: u32 = 5;

/// Hiscore activities that are not boss kill counts. Everything else in
/// the activities list is treated as a boss.
const MINIGAME_ACTIVITIES: &[&str] = &[
    "League Points",
    "Deadman Points",
    "Bounty Hunter - Hunter",
    "Bounty Hunter - Rogue",
    "Bounty Hunter (Legacy) - Hunter",
    "Bounty Hunter (Legacy) - Rogue",
    "Clue Scrolls (all)",
    "Clue Scrolls (beginner)",
    "Clue Scrolls (easy)",
    "Clue Scrolls (medium)",
    "Clue Scrolls (hard)",
    "Clue Scrolls (elite)",
    "Clue Scrolls (master)",
    "LMS - Rank",
    "PvP Arena - Rank",
    "Soul Wars Zeal",
    "Rifts closed",
    "Colosseum Glory",
    "Collections Logged",
];

#[derive(Error, Debug)]
pub enum HiscoreApiError {
    #[error("hiscore base url is missing")]
    MissingBaseUrl,
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
}

#[derive(Deserialize)]
struct HiscoreResponse {
    #[serde(default)]
    skills: Vec<SkillEntry>,
    #[serde(default)]
    activities: Vec<ActivityEntry>,
}

#[derive(Deserialize)]
struct SkillEntry {
    name: String,
    #[serde(default)]
    rank: i64,
    #[serde(default)]
    level: i64,
    #[serde(default)]
    xp: i64,
}

#[derive(Deserialize)]
struct ActivityEntry {
    name: String,
    #[serde(default)]
    rank: i64,
    #[serde(default)]
    score: i64,
}

pub struct HiscoreApiClient {
    base_url: String,
    client: Client,
    retry_delay: Duration,
}

impl HiscoreApiClient {
    pub fn new(base_url: &str) -> Result<Self, HiscoreApiError> {
        if base_url.is_empty() {
            return Err(HiscoreApiError::MissingBaseUrl);
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|_| HiscoreApiError::Connection)?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
            retry_delay: Duration::from_secs(20),
        })
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Fetches one player's current stats. Transient failures retry up
    /// to five attempts with a delay in between; an unknown player is
    /// reported immediately and never retried.
    pub async fn fetch_player(&self, rsn: &str) -> Result<PlayerSnapshot, HiscoreApiError> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(rsn).await {
                Ok(snapshot) => return Ok(snapshot),
                Err(HiscoreApiError::PlayerNotFound(rsn)) => {
                    return Err(HiscoreApiError::PlayerNotFound(rsn));
                }
                Err(error) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(error);
                    }
                    attempt += 1;
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }

    async fn fetch_once(&self, rsn: &str) -> Result<PlayerSnapshot, HiscoreApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("player", rsn)])
            .send()
            .await
            .map_err(|_| HiscoreApiError::Connection)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HiscoreApiError::PlayerNotFound(rsn.to_string()));
        }
        if !status.is_success() {
            return Err(HiscoreApiError::Connection);
        }

        let parsed = response
            .json::<HiscoreResponse>()
            .await
            .map_err(|_| HiscoreApiError::Parse)?;
        Ok(snapshot_from_response(parsed))
    }
}

fn snapshot_from_response(response: HiscoreResponse) -> PlayerSnapshot {
    let mut snapshot = PlayerSnapshot::default();

    for skill in response.skills {
        snapshot.skills.insert(
            skill.name.to_lowercase(),
            SkillStat {
                rank: skill.rank,
                level: skill.level,
                xp: skill.xp,
            },
        );
    }

    for activity in response.activities {
        if MINIGAME_ACTIVITIES.contains(&activity.name.as_str()) {
            snapshot.minigames.insert(
                activity.name,
                MinigameStat {
                    rank: activity.rank,
                    score: activity.score,
                },
            );
        } else {
            snapshot.bosses.insert(
                activity.name,
                BossStat {
                    rank: activity.rank,
                    kills: activity.score,
                },
            );
        }
    }

    snapshot
}
