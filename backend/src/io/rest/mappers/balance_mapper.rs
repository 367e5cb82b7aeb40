use crate::domain::balance_service::{BalanceScope, BalanceStatus, BalanceSummary};
use shared::{
    BalanceFilterType, BalanceResponse, BalanceStatus as SharedBalanceStatus,
};

pub struct BalanceMapper;

impl BalanceMapper {
    pub fn to_dto(summary: BalanceSummary) -> BalanceResponse {
        BalanceResponse {
            filter_type: match summary.scope {
                BalanceScope::Today => BalanceFilterType::Today,
                BalanceScope::Lifetime => BalanceFilterType::Lifetime,
            },
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            balance: summary.balance,
            status: match summary.status {
                BalanceStatus::Profit => SharedBalanceStatus::Profit,
                BalanceStatus::Loss => SharedBalanceStatus::Loss,
            },
        }
    }
}
