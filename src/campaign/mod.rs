//! Crowdfunding campaigns and their trust scores

pub mod trust;
pub mod ledger;

pub use trust::{score_description, CampaignTrustAssessment, TrustLabel};
pub use ledger::{Campaign, CampaignLedger, Investment, NewCampaign, NewInvestment};
