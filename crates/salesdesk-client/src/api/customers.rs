//! Customers (`/customers`).

use reqwest::header::HeaderMap;
use reqwest::Method;
use salesdesk_core::{Customer, NewCustomer};
use serde_json::Value;
use tracing::info;

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct CustomersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CustomersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, customer: &NewCustomer) -> ClientResult<Value> {
        let created = self
            .client
            .request(Method::POST, "/customers", Some(customer), &HeaderMap::new())
            .await?;
        info!(name = %customer.name, "Customer created");
        Ok(created)
    }

    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        self.client.get("/customers").await
    }

    pub async fn update(&self, id: &str, customer: &Customer) -> ClientResult<()> {
        self.client
            .execute(Method::PUT, &format!("/customers/{}", id), Some(customer))
            .await?;
        info!(id = %id, "Customer updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/customers/{}", id), None::<&()>)
            .await?;
        info!(id = %id, "Customer deleted");
        Ok(())
    }
}
