//! Demo proposal data and presentation helpers.
//!
//! The proposal view is a stateless renderer over a fixed, externally
//! supplied list — there is no voting engine behind it. This module holds
//! that list and the pure calculations the renderer needs.

use august_types::Timestamp;
use august_utils::format_duration;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
}

/// A governance proposal as displayed in the proposal list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    pub status: ProposalStatus,
    pub quorum: u64,
    pub deadline: Timestamp,
}

impl Proposal {
    /// Approval share in percent. An empty vote set displays as an even
    /// split rather than dividing by zero.
    pub fn approval_percent(&self) -> f64 {
        let total = self.votes_for + self.votes_against;
        if total == 0 {
            return 50.0;
        }
        self.votes_for as f64 / total as f64 * 100.0
    }

    pub fn quorum_met(&self) -> bool {
        self.votes_for + self.votes_against >= self.quorum
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.deadline.is_past(now)
    }

    /// Human-readable time remaining until the voting deadline, or None
    /// once the deadline has passed.
    pub fn time_left(&self, now: Timestamp) -> Option<String> {
        let remaining = self.deadline.until(now);
        if remaining == 0 {
            return None;
        }
        Some(format_duration(remaining))
    }
}

/// The fixed proposal set shown by the demo, with deadlines positioned
/// relative to `now`.
pub fn demo_proposals(now: Timestamp) -> Vec<Proposal> {
    let day = 86400u64;
    vec![
        Proposal {
            id: "1".to_string(),
            title: "Fund Treasury with 1000 SOL".to_string(),
            description: "Allocate 1000 SOL from the DAO community pool to the treasury."
                .to_string(),
            votes_for: 1500,
            votes_against: 50,
            status: ProposalStatus::Active,
            quorum: 1000,
            deadline: Timestamp::new(now.as_secs() + 2 * day),
        },
        Proposal {
            id: "2".to_string(),
            title: "Approve Marketing Budget".to_string(),
            description: "Approve a budget of 500 AUGUST for marketing initiatives.".to_string(),
            votes_for: 10000,
            votes_against: 1000,
            status: ProposalStatus::Passed,
            quorum: 5000,
            deadline: Timestamp::new(now.as_secs().saturating_sub(day)),
        },
        Proposal {
            id: "3".to_string(),
            title: "Elect New Community Manager".to_string(),
            description: "Vote to elect a new community manager for AugustDAO.".to_string(),
            votes_for: 200,
            votes_against: 300,
            status: ProposalStatus::Rejected,
            quorum: 1000,
            deadline: Timestamp::new(now.as_secs().saturating_sub(2 * day)),
        },
    ]
}
