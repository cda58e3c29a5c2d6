use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Declaration, Expense, Income, NewDeclaration, NewExpense, NewIncome, NewTaxType, NewUser,
    TaxType, User,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid data from store: {0}")]
    InvalidData(String),
}

/// Access to the external declaration data store.
///
/// The store is plain CRUD over flat collections; every business rule
/// lives in [`crate::calculations`], which operates on slices fetched
/// through this trait.
#[async_trait]
pub trait FiscalStore: Send + Sync {
    // Users
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn get_user(&self, id: i64) -> Result<User, StoreError>;
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn update_user(&self, user: &User) -> Result<(), StoreError>;
    async fn delete_user(&self, id: i64) -> Result<(), StoreError>;

    // Incomes
    async fn list_incomes(&self) -> Result<Vec<Income>, StoreError>;
    async fn create_income(&self, income: NewIncome) -> Result<Income, StoreError>;
    async fn update_income(&self, income: &Income) -> Result<(), StoreError>;
    async fn delete_income(&self, id: i64) -> Result<(), StoreError>;

    // Expenses
    async fn list_expenses(&self) -> Result<Vec<Expense>, StoreError>;
    async fn create_expense(&self, expense: NewExpense) -> Result<Expense, StoreError>;
    async fn update_expense(&self, expense: &Expense) -> Result<(), StoreError>;
    async fn delete_expense(&self, id: i64) -> Result<(), StoreError>;

    // Declarations
    async fn list_declarations(&self) -> Result<Vec<Declaration>, StoreError>;
    async fn get_declaration(&self, id: i64) -> Result<Declaration, StoreError>;
    async fn create_declaration(
        &self,
        declaration: NewDeclaration,
    ) -> Result<Declaration, StoreError>;
    async fn update_declaration(&self, declaration: &Declaration) -> Result<(), StoreError>;
    async fn delete_declaration(&self, id: i64) -> Result<(), StoreError>;

    // Tax types
    async fn list_tax_types(&self) -> Result<Vec<TaxType>, StoreError>;
    async fn create_tax_type(&self, tax_type: NewTaxType) -> Result<TaxType, StoreError>;
    async fn update_tax_type(&self, tax_type: &TaxType) -> Result<(), StoreError>;
    async fn delete_tax_type(&self, id: i64) -> Result<(), StoreError>;
}
