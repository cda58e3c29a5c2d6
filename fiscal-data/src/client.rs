//! REST client for the external declaration data store.
//!
//! The store is a flat-collection CRUD server (`/users`, `/incomes`,
//! `/expenses`, `/declarations`, `/taxTypes`); it holds no business
//! rules. Every response body goes through the strict model types in
//! `fiscal_core`, so malformed records surface as
//! [`StoreError::InvalidData`] instead of leaking downstream.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use async_trait::async_trait;
use fiscal_core::models::{
    Declaration, Expense, Income, NewDeclaration, NewExpense, NewIncome, NewTaxType, NewUser,
    TaxType, User,
};
use fiscal_core::store::{FiscalStore, StoreError};

/// [`FiscalStore`] backed by an HTTP CRUD server.
#[derive(Debug, Clone)]
pub struct RestStore {
    base_url: String,
    client: reqwest::Client,
}

impl RestStore {
    /// Creates a store client for `base_url` (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        debug!(path, "store get");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response)?).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        debug!(path, "store post");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response)?).await
    }

    async fn put_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), StoreError> {
        debug!(path, "store put");
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StoreError> {
        debug!(path, "store delete");
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(StoreError::NotFound),
        status if status.is_success() => Ok(response),
        status => Err(StoreError::Transport(format!(
            "unexpected status {status} from store"
        ))),
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
    let bytes = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::InvalidData(e.to_string()))
}

#[async_trait]
impl FiscalStore for RestStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.get_json("users").await
    }

    async fn get_user(&self, id: i64) -> Result<User, StoreError> {
        self.get_json(&format!("users/{id}")).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.post_json("users", &user).await
    }

    async fn update_user(&self, user: &User) -> Result<(), StoreError> {
        self.put_json(&format!("users/{}", user.id), user).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("users/{id}")).await
    }

    async fn list_incomes(&self) -> Result<Vec<Income>, StoreError> {
        self.get_json("incomes").await
    }

    async fn create_income(&self, income: NewIncome) -> Result<Income, StoreError> {
        self.post_json("incomes", &income).await
    }

    async fn update_income(&self, income: &Income) -> Result<(), StoreError> {
        self.put_json(&format!("incomes/{}", income.id), income).await
    }

    async fn delete_income(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("incomes/{id}")).await
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, StoreError> {
        self.get_json("expenses").await
    }

    async fn create_expense(&self, expense: NewExpense) -> Result<Expense, StoreError> {
        self.post_json("expenses", &expense).await
    }

    async fn update_expense(&self, expense: &Expense) -> Result<(), StoreError> {
        self.put_json(&format!("expenses/{}", expense.id), expense).await
    }

    async fn delete_expense(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("expenses/{id}")).await
    }

    async fn list_declarations(&self) -> Result<Vec<Declaration>, StoreError> {
        self.get_json("declarations").await
    }

    async fn get_declaration(&self, id: i64) -> Result<Declaration, StoreError> {
        self.get_json(&format!("declarations/{id}")).await
    }

    async fn create_declaration(
        &self,
        declaration: NewDeclaration,
    ) -> Result<Declaration, StoreError> {
        self.post_json("declarations", &declaration).await
    }

    async fn update_declaration(&self, declaration: &Declaration) -> Result<(), StoreError> {
        self.put_json(&format!("declarations/{}", declaration.id), declaration)
            .await
    }

    async fn delete_declaration(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("declarations/{id}")).await
    }

    async fn list_tax_types(&self) -> Result<Vec<TaxType>, StoreError> {
        self.get_json("taxTypes").await
    }

    async fn create_tax_type(&self, tax_type: NewTaxType) -> Result<TaxType, StoreError> {
        self.post_json("taxTypes", &tax_type).await
    }

    async fn update_tax_type(&self, tax_type: &TaxType) -> Result<(), StoreError> {
        self.put_json(&format!("taxTypes/{}", tax_type.id), tax_type)
            .await
    }

    async fn delete_tax_type(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("taxTypes/{id}")).await
    }
}
