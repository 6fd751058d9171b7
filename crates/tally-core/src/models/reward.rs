use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// What form a reward entitlement takes. Redemption into the concrete
/// payout channel happens outside this pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Points,
    Airtime,
    MobileMoney,
    Voucher,
}

impl RewardType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Airtime => "airtime",
            Self::MobileMoney => "mobile_money",
            Self::Voucher => "voucher",
        }
    }
}

impl fmt::Display for RewardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewardType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Self::Points),
            "airtime" => Ok(Self::Airtime),
            "mobile_money" => Ok(Self::MobileMoney),
            "voucher" => Ok(Self::Voucher),
            _ => Err(ParseEnumError {
                kind: "reward_type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardStatus {
    Pending,
    Awarded,
    Redeemed,
}

impl RewardStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Awarded => "awarded",
            Self::Redeemed => "redeemed",
        }
    }
}

impl fmt::Display for RewardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewardStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "awarded" => Ok(Self::Awarded),
            "redeemed" => Ok(Self::Redeemed),
            _ => Err(ParseEnumError {
                kind: "reward_status",
                value: s.to_string(),
            }),
        }
    }
}

/// An entitlement granted to a contributor for a validated answer.
/// Never retroactively deleted, even if a later review reverses the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub contributor_id: String,
    pub reward_type: RewardType,
    pub value: f64,
    pub status: RewardStatus,
    pub created_at: DateTime<Utc>,
}
