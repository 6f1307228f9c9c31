//! Crowdfunding ledger
//!
//! In-memory campaigns and investments. Numeric fields arrive as form text
//! and are validated here; a rejected request never mutates the ledger.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trust::{score_description, CampaignTrustAssessment};
use crate::error::{LedgerError, ValidationError};

pub const MIN_TITLE_CHARS: usize = 3;
pub const MAX_DURATION_DAYS: u32 = 365;

/// Campaign creation request, as submitted by the form
#[derive(Debug, Clone, Deserialize)]
pub struct NewCampaign {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_amount: String,
    pub duration_days: String,
}

/// Investment request, as submitted by the form
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvestment {
    pub investor: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Investment {
    pub investor: String,
    pub amount: f64,
    pub invested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub duration_days: u32,
    pub created_at: DateTime<Utc>,
    /// Scored once at creation
    pub trust: CampaignTrustAssessment,
    pub investments: Vec<Investment>,
}

impl Campaign {
    pub fn raised(&self) -> f64 {
        self.investments.iter().map(|i| i.amount).sum()
    }

    /// Share of the target raised, 0-100
    pub fn funded_percent(&self) -> u8 {
        if self.target_amount <= 0.0 {
            return 0;
        }
        (self.raised() / self.target_amount * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    }
}

/// Parse a strictly positive, finite amount
fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_duration(text: &str) -> Option<u32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|d| (1..=MAX_DURATION_DAYS).contains(d))
}

#[derive(Debug, Default)]
struct LedgerInner {
    campaigns: Vec<Campaign>,
    next_id: u64,
}

/// Shared campaign store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct CampaignLedger {
    inner: Arc<RwLock<LedgerInner>>,
}

impl CampaignLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored: every write is a single push.
    fn read(&self) -> RwLockReadGuard<'_, LedgerInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Validate and store a campaign, scoring its description
    pub fn create(&self, request: NewCampaign) -> Result<Campaign, ValidationError> {
        let title = request.title.trim();
        if title.chars().count() < MIN_TITLE_CHARS {
            return Err(ValidationError::TitleTooShort);
        }
        let target_amount =
            parse_amount(&request.target_amount).ok_or(ValidationError::InvalidTargetAmount)?;
        let duration_days =
            parse_duration(&request.duration_days).ok_or(ValidationError::InvalidDuration)?;

        let description = request.description.trim().to_string();
        let trust = score_description(&description);

        let mut inner = self.write();
        inner.next_id += 1;
        let campaign = Campaign {
            id: inner.next_id,
            title: title.to_string(),
            description,
            target_amount,
            duration_days,
            created_at: Utc::now(),
            trust,
            investments: Vec::new(),
        };
        inner.campaigns.push(campaign.clone());

        tracing::info!(
            id = campaign.id,
            risk_score = campaign.trust.risk_score,
            "Campaign created"
        );
        Ok(campaign)
    }

    /// Record an investment against an existing campaign
    pub fn invest(&self, campaign_id: u64, request: NewInvestment) -> Result<Campaign, LedgerError> {
        let investor = request.investor.trim();
        if investor.is_empty() {
            return Err(ValidationError::MissingInvestor.into());
        }
        let amount = parse_amount(&request.amount).ok_or(ValidationError::InvalidInvestmentAmount)?;

        let mut inner = self.write();
        let campaign = inner
            .campaigns
            .iter_mut()
            .find(|c| c.id == campaign_id)
            .ok_or(LedgerError::NotFound)?;

        campaign.investments.push(Investment {
            investor: investor.to_string(),
            amount,
            invested_at: Utc::now(),
        });

        tracing::info!(campaign_id, amount, "Investment recorded");
        Ok(campaign.clone())
    }

    pub fn get(&self, campaign_id: u64) -> Option<Campaign> {
        self.read().campaigns.iter().find(|c| c.id == campaign_id).cloned()
    }

    /// All campaigns, newest first
    pub fn list(&self) -> Vec<Campaign> {
        self.read().campaigns.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::trust::TrustLabel;
    use approx::assert_relative_eq;

    fn new_campaign(title: &str, description: &str, target: &str, days: &str) -> NewCampaign {
        NewCampaign {
            title: title.to_string(),
            description: description.to_string(),
            target_amount: target.to_string(),
            duration_days: days.to_string(),
        }
    }

    fn invest(investor: &str, amount: &str) -> NewInvestment {
        NewInvestment {
            investor: investor.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_create_scores_once() {
        let ledger = CampaignLedger::new();
        let c = ledger
            .create(new_campaign("Tomato greenhouse", "Guaranteed 100% profit, risk free", "50000", "90"))
            .unwrap();

        assert_eq!(c.id, 1);
        assert_eq!(c.trust.risk_score, 75);
        assert_eq!(c.trust.label, TrustLabel::HighRisk);
        assert_relative_eq!(c.target_amount, 50000.0);
    }

    #[test]
    fn test_create_validation() {
        let ledger = CampaignLedger::new();
        let cases = [
            (new_campaign("ab", "", "100", "30"), ValidationError::TitleTooShort),
            (new_campaign("Seeds", "", "", "30"), ValidationError::InvalidTargetAmount),
            (new_campaign("Seeds", "", "abc", "30"), ValidationError::InvalidTargetAmount),
            (new_campaign("Seeds", "", "-5", "30"), ValidationError::InvalidTargetAmount),
            (new_campaign("Seeds", "", "NaN", "30"), ValidationError::InvalidTargetAmount),
            (new_campaign("Seeds", "", "100", "0"), ValidationError::InvalidDuration),
            (new_campaign("Seeds", "", "100", "366"), ValidationError::InvalidDuration),
            (new_campaign("Seeds", "", "100", "ten"), ValidationError::InvalidDuration),
        ];
        for (request, expected) in cases {
            assert_eq!(ledger.create(request).unwrap_err(), expected);
        }
        assert!(ledger.list().is_empty());
    }

    #[test]
    fn test_invest_and_progress() {
        let ledger = CampaignLedger::new();
        let c = ledger.create(new_campaign("Goat shed", "", "1000", "30")).unwrap();

        ledger.invest(c.id, invest("Sita", "250")).unwrap();
        let updated = ledger.invest(c.id, invest("Ram", " 500.5 ")).unwrap();

        assert_eq!(updated.investments.len(), 2);
        assert_relative_eq!(updated.raised(), 750.5);
        assert_eq!(updated.funded_percent(), 75);
        // trust is not recomputed
        assert_eq!(updated.trust, c.trust);
    }

    #[test]
    fn test_overfunded_clamps() {
        let ledger = CampaignLedger::new();
        let c = ledger.create(new_campaign("Seeds", "", "100", "10")).unwrap();
        let updated = ledger.invest(c.id, invest("Hari", "400")).unwrap();
        assert_eq!(updated.funded_percent(), 100);
    }

    #[test]
    fn test_invest_validation_leaves_ledger_unchanged() {
        let ledger = CampaignLedger::new();
        let c = ledger.create(new_campaign("Seeds", "", "100", "10")).unwrap();

        let rejected = [
            (invest("Hari", "0"), ValidationError::InvalidInvestmentAmount),
            (invest("Hari", "lots"), ValidationError::InvalidInvestmentAmount),
            (invest("  ", "10"), ValidationError::MissingInvestor),
        ];
        for (request, expected) in rejected {
            assert_eq!(ledger.invest(c.id, request).unwrap_err(), LedgerError::Invalid(expected));
        }

        assert!(ledger.get(c.id).unwrap().investments.is_empty());
    }

    #[test]
    fn test_invest_unknown_campaign() {
        let ledger = CampaignLedger::new();
        let err = ledger.invest(99, invest("Hari", "10")).unwrap_err();
        assert_eq!(err, LedgerError::NotFound);
        assert_eq!(err.to_string(), "Campaign not found.");

        // bad input is reported even when the id is also unknown
        let err = ledger.invest(99, invest("Hari", "-1")).unwrap_err();
        assert_eq!(err, LedgerError::Invalid(ValidationError::InvalidInvestmentAmount));
    }

    #[test]
    fn test_list_newest_first() {
        let ledger = CampaignLedger::new();
        ledger.create(new_campaign("First", "", "10", "1")).unwrap();
        ledger.create(new_campaign("Second", "", "10", "1")).unwrap();
        let titles: Vec<String> = ledger.list().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }
}
