use crate::domain::commands::transactions::{
    AddTodayIncomeCommand, CreateTransactionCommand, UpdateTransactionCommand,
};
use crate::domain::models::transaction::{
    Transaction as DomainTransaction, TransactionKind as DomainTransactionKind,
};
use shared::{
    CreateTransactionRequest, IncomeTodayRequest, Transaction as SharedTransaction,
    TransactionKind as SharedTransactionKind, UpdateTransactionRequest,
};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            amount: domain.amount,
            description: domain.description,
            category: domain.category,
            kind: Self::to_dto_kind(domain.kind),
            date: domain.date,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }

    pub fn to_create_command(dto: CreateTransactionRequest) -> CreateTransactionCommand {
        CreateTransactionCommand {
            amount: dto.amount,
            description: dto.description,
            category: dto.category,
            kind: dto.kind.map(Self::to_domain_kind),
            date: dto.date,
        }
    }

    pub fn to_update_command(dto: UpdateTransactionRequest) -> UpdateTransactionCommand {
        UpdateTransactionCommand {
            amount: dto.amount,
            description: dto.description,
            category: dto.category,
            kind: dto.kind.map(Self::to_domain_kind),
            date: dto.date,
        }
    }

    pub fn to_income_command(dto: IncomeTodayRequest) -> AddTodayIncomeCommand {
        AddTodayIncomeCommand {
            amount: dto.amount,
            description: dto.description,
            category: dto.category,
        }
    }

    fn to_domain_kind(dto_kind: SharedTransactionKind) -> DomainTransactionKind {
        match dto_kind {
            SharedTransactionKind::Income => DomainTransactionKind::Income,
            SharedTransactionKind::Expense => DomainTransactionKind::Expense,
        }
    }

    fn to_dto_kind(domain_kind: DomainTransactionKind) -> SharedTransactionKind {
        match domain_kind {
            DomainTransactionKind::Income => SharedTransactionKind::Income,
            DomainTransactionKind::Expense => SharedTransactionKind::Expense,
        }
    }
}
