//! Demo table data: the network leaderboard and the team directory.
//!
//! Leaderboard pages render two tables above the article. The leaderboard
//! rows are fixed; the team directory comes from a sample generator (or a
//! JSON file supplied on the command line) and can be narrowed by role,
//! the one interactive filter the demo carries.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// One row of the network payback leaderboard.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LeaderboardRow {
    /// Network name.
    pub network: &'static str,
    /// Months until the miner hardware pays for itself.
    pub payback_months: u32,
    /// Hardware cost in whole dollars.
    pub miner_cost_usd: u32,
}

#[must_use]
/// The payback-time leaderboard rows.
pub fn leaderboard() -> Vec<LeaderboardRow> {
    vec![
        LeaderboardRow {
            network: "Helium IoT",
            payback_months: 13,
            miner_cost_usd: 200,
        },
        LeaderboardRow {
            network: "DIMO",
            payback_months: 3,
            miner_cost_usd: 500,
        },
        LeaderboardRow {
            network: "Hivemapper",
            payback_months: 6,
            miner_cost_usd: 600,
        },
    ]
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
/// Presence state shown as a colored pill in the directory table.
pub enum Status {
    /// Currently online.
    Active,
    /// Deactivated account.
    Inactive,
    /// Temporarily away.
    Offline,
}

impl Status {
    #[must_use]
    /// Display label for the pill.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
/// One row of the team directory table.
pub struct TeamMember {
    /// Full name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Job title.
    pub title: String,
    /// Department name.
    pub department: String,
    /// Presence state.
    pub status: Status,
    /// Access role, matched by the role filter.
    pub role: String,
    /// Age in years.
    pub age: u32,
}

fn member(
    name: &str,
    email: &str,
    title: &str,
    department: &str,
    status: Status,
    role: &str,
    age: u32,
) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        email: email.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        status,
        role: role.to_string(),
        age,
    }
}

#[must_use]
/// Sample directory rows: a six-member base set repeated three times.
pub fn sample_members() -> Vec<TeamMember> {
    let base = vec![
        member(
            "Jane Cooper",
            "jane.cooper@example.com",
            "Regional Paradigm Technician",
            "Optimization",
            Status::Active,
            "Admin",
            27,
        ),
        member(
            "Cody Fisher",
            "cody.fisher@example.com",
            "Product Directives Officer",
            "Intranet",
            Status::Inactive,
            "Owner",
            43,
        ),
        member(
            "Esther Howard",
            "esther.howard@example.com",
            "Forward Response Developer",
            "Directives",
            Status::Active,
            "Member",
            32,
        ),
        member(
            "Jenny Wilson",
            "jenny.wilson@example.com",
            "Central Security Manager",
            "Program",
            Status::Offline,
            "Member",
            29,
        ),
        member(
            "Kristin Watson",
            "kristin.watson@example.com",
            "Lean Implementation Liaison",
            "Mobility",
            Status::Inactive,
            "Admin",
            36,
        ),
        member(
            "Cameron Williamson",
            "cameron.williamson@example.com",
            "Internal Applications Engineer",
            "Security",
            Status::Active,
            "Member",
            24,
        ),
    ];
    base.iter()
        .cycle()
        .take(base.len() * 3)
        .cloned()
        .collect()
}

/// Load directory rows from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode as a
/// list of members.
pub fn load_members(path: &Path) -> io::Result<Vec<TeamMember>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
/// Role filter cycled from the keyboard on table pages.
pub enum RoleFilter {
    /// No filtering.
    #[default]
    All,
    /// Administrators only.
    Admin,
    /// Owners only.
    Owner,
    /// Regular members only.
    Member,
}

impl RoleFilter {
    #[must_use]
    /// The next filter in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Admin,
            Self::Admin => Self::Owner,
            Self::Owner => Self::Member,
            Self::Member => Self::All,
        }
    }

    #[must_use]
    /// Display label for the table title.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All roles",
            Self::Admin => "Admin",
            Self::Owner => "Owner",
            Self::Member => "Member",
        }
    }

    #[must_use]
    /// Whether a member's role passes the filter.
    pub fn matches(self, role: &str) -> bool {
        match self {
            Self::All => true,
            Self::Admin => role == "Admin",
            Self::Owner => role == "Owner",
            Self::Member => role == "Member",
        }
    }
}

#[must_use]
/// Directory rows passing the role filter, in input order.
pub fn filtered<'a>(members: &'a [TeamMember], filter: RoleFilter) -> Vec<&'a TeamMember> {
    members
        .iter()
        .filter(|member| filter.matches(&member.role))
        .collect()
}

#[cfg(test)]
#[path = "tests/table.rs"]
mod tests;
