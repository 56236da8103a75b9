//! Wire data model for the indicator dataset.
//!
//! The API returns one record per survey year wrapped in a `{ "data": [...] }`
//! envelope. Field names on the wire are camelCase (`umurengeSACCO` is its
//! own exception and is renamed explicitly).

use serde::{Deserialize, Serialize};

/// Top-level JSON wrapper returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Vec<FinancialRecord>,
}

/// One survey year of financial-inclusion indicator rates.
///
/// Three indicators were not measured in every survey round and arrive as
/// `null` (or are absent) for those years.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub year: i32,
    pub formally_served: f64,
    pub banked: f64,
    pub other_formal: f64,
    pub informally_served: f64,
    pub excluded: f64,
    #[serde(default)]
    pub saving_group_member: Option<f64>,
    pub mfi_saccos: f64,
    #[serde(default, rename = "umurengeSACCO")]
    pub umurenge_sacco: Option<f64>,
    pub borrowing_credit: f64,
    pub insurance_risk_mitigation: f64,
    #[serde(default)]
    pub mobile_money_penetration: Option<f64>,
    pub savings_investments: f64,
}

impl FinancialRecord {
    /// Indicator values in field order. Unmeasured indicators are `None`.
    pub fn indicators(&self) -> [Option<f64>; 12] {
        Indicator::ALL.map(|indicator| indicator.value(self))
    }
}

/// The twelve indicators, in data-model field order.
///
/// The order is load-bearing: table columns and chart series both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    FormallyServed,
    Banked,
    OtherFormal,
    InformallyServed,
    Excluded,
    SavingGroupMember,
    MfiSaccos,
    UmurengeSacco,
    BorrowingCredit,
    InsuranceRiskMitigation,
    MobileMoneyPenetration,
    SavingsInvestments,
}

/// Table columns: Year plus the twelve indicators.
pub const COLUMN_COUNT: usize = Indicator::ALL.len() + 1;

impl Indicator {
    pub const ALL: [Indicator; 12] = [
        Indicator::FormallyServed,
        Indicator::Banked,
        Indicator::OtherFormal,
        Indicator::InformallyServed,
        Indicator::Excluded,
        Indicator::SavingGroupMember,
        Indicator::MfiSaccos,
        Indicator::UmurengeSacco,
        Indicator::BorrowingCredit,
        Indicator::InsuranceRiskMitigation,
        Indicator::MobileMoneyPenetration,
        Indicator::SavingsInvestments,
    ];

    /// Human-readable column/series label.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::FormallyServed => "Formally Served",
            Indicator::Banked => "Banked",
            Indicator::OtherFormal => "Other Formal",
            Indicator::InformallyServed => "Informally Served",
            Indicator::Excluded => "Excluded",
            Indicator::SavingGroupMember => "Saving Group Member",
            Indicator::MfiSaccos => "MFI/SACCOs",
            Indicator::UmurengeSacco => "Umurenge SACCO",
            Indicator::BorrowingCredit => "Borrowing and Credit",
            Indicator::InsuranceRiskMitigation => "Insurance and Risk Mitigation",
            Indicator::MobileMoneyPenetration => "Mobile Money Penetration",
            Indicator::SavingsInvestments => "Savings and Investments",
        }
    }

    /// Extracts this indicator's value from a record.
    pub fn value(self, record: &FinancialRecord) -> Option<f64> {
        match self {
            Indicator::FormallyServed => Some(record.formally_served),
            Indicator::Banked => Some(record.banked),
            Indicator::OtherFormal => Some(record.other_formal),
            Indicator::InformallyServed => Some(record.informally_served),
            Indicator::Excluded => Some(record.excluded),
            Indicator::SavingGroupMember => record.saving_group_member,
            Indicator::MfiSaccos => Some(record.mfi_saccos),
            Indicator::UmurengeSacco => record.umurenge_sacco,
            Indicator::BorrowingCredit => Some(record.borrowing_credit),
            Indicator::InsuranceRiskMitigation => Some(record.insurance_risk_mitigation),
            Indicator::MobileMoneyPenetration => record.mobile_money_penetration,
            Indicator::SavingsInvestments => Some(record.savings_investments),
        }
    }
}
