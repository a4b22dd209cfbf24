//! Invoices (`/invoices`).
//!
//! ## Creating An Invoice With Lines
//! ```text
//! POST /invoices          ──► "new-invoice-id"   (bare JSON string)
//! POST /invoice-line  ×N  ──► one per SaleItem, invoiceId filled in
//! ```
//! The two steps are not atomic. A failed line leaves the invoice behind on
//! the server; its id is logged and the error is returned.

use reqwest::header::HeaderMap;
use reqwest::Method;
use salesdesk_core::{InvoicePage, Sale, SaleDto, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use serde_json::Value;
use tracing::{info, warn};
use url::form_urlencoded;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

// =============================================================================
// Query
// =============================================================================

/// Paging and filters for `GET /invoices`.
///
/// `pageNumber` and `pageSize` are always sent. Filters are sent only when
/// present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub user_id: Option<String>,
    pub customer_id: Option<String>,
    pub invoice_number: Option<String>,
}

impl Default for InvoiceQuery {
    fn default() -> Self {
        InvoiceQuery {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            user_id: None,
            customer_id: None,
            invoice_number: None,
        }
    }
}

impl InvoiceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = Some(invoice_number.into());
        self
    }

    /// Encodes the query, e.g. `pageNumber=1&pageSize=10&CustomerId=C1`.
    pub fn to_query_string(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("pageNumber", &self.page_number.to_string());
        params.append_pair("pageSize", &self.page_size.to_string());

        let filters = [
            ("UserId", &self.user_id),
            ("CustomerId", &self.customer_id),
            ("InvoiceNumber", &self.invoice_number),
        ];
        for (name, value) in filters {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                params.append_pair(name, v);
            }
        }
        params.finish()
    }
}

// =============================================================================
// Invoices API
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct InvoicesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InvoicesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &InvoiceQuery) -> ClientResult<InvoicePage> {
        self.client
            .get(&format!("/invoices?{}", query.to_query_string()))
            .await
    }

    /// Creates the invoice header and returns the new invoice id.
    ///
    /// Lines are not sent. The server must answer with a bare JSON string.
    pub async fn create(&self, sale: &Sale) -> ClientResult<String> {
        let response = self
            .client
            .request(
                Method::POST,
                "/invoices",
                Some(&sale.to_new_invoice()),
                &HeaderMap::new(),
            )
            .await?;

        match response {
            Value::String(id) => {
                info!(invoice_id = %id, invoice_number = %sale.invoice_number, "Invoice created");
                Ok(id)
            }
            other => Err(ClientError::Format(format!(
                "Invoice creation failed: expected the new id as a string, got {}",
                other
            ))),
        }
    }

    pub async fn get(&self, id: &str) -> ClientResult<SaleDto> {
        self.client.get(&format!("/invoices/{}", id)).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/invoices/{}", id), None::<&()>)
            .await?;
        info!(invoice_id = %id, "Invoice deleted");
        Ok(())
    }

    /// Creates the invoice, then one line per item, in order.
    ///
    /// Stops at the first failing line. Lines already posted and the invoice
    /// itself stay on the server.
    pub async fn create_with_lines(&self, sale: &Sale) -> ClientResult<String> {
        let invoice_id = self.create(sale).await?;
        let lines = self.client.invoice_lines();

        for (posted, item) in sale.items.iter().enumerate() {
            if let Err(e) = lines.create(&invoice_id, item).await {
                warn!(
                    invoice_id = %invoice_id,
                    item_id = %item.item_id,
                    lines_posted = posted,
                    lines_total = sale.items.len(),
                    "Invoice line failed; invoice left incomplete"
                );
                return Err(e);
            }
        }

        Ok(invoice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use salesdesk_core::{Money, SaleItem};
    use salesdesk_store::{MemoryStore, SessionStore};
    use serde_json::json;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::with_base_url(&server.url(), SessionStore::new(MemoryStore::new())).unwrap()
    }

    fn sale() -> Sale {
        Sale {
            invoice_number: "INV-7".into(),
            user_id: "u1".into(),
            customer_id: "c1".into(),
            issued_date: "2025-03-01".into(),
            due_date: "2025-03-31".into(),
            total_amount: Money::from_cents(1300),
            items: vec![
                SaleItem::new("p1", 2, Money::from_cents(400)),
                SaleItem::new("p2", 1, Money::from_cents(500)),
            ],
        }
    }

    #[test]
    fn test_query_defaults() {
        assert_eq!(
            InvoiceQuery::new().to_query_string(),
            "pageNumber=1&pageSize=10"
        );
    }

    #[test]
    fn test_query_only_present_filters() {
        let query = InvoiceQuery::new().customer_id("C1");
        assert_eq!(
            query.to_query_string(),
            "pageNumber=1&pageSize=10&CustomerId=C1"
        );

        let query = InvoiceQuery::new()
            .page(3)
            .page_size(25)
            .user_id("")
            .invoice_number("INV 1&2");
        assert_eq!(
            query.to_query_string(),
            "pageNumber=3&pageSize=25&InvoiceNumber=INV+1%262"
        );
    }

    #[tokio::test]
    async fn test_list_sends_query() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/invoices")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("pageNumber".into(), "1".into()),
                Matcher::UrlEncoded("pageSize".into(), "10".into()),
                Matcher::UrlEncoded("CustomerId".into(), "C1".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items":[],"totalCount":0,"pageNumber":1,"pageSize":10,"totalPages":0}"#,
            )
            .create_async()
            .await;

        let page = client_for(&server)
            .invoices()
            .list(&InvoiceQuery::new().customer_id("C1"))
            .await
            .unwrap();
        m.assert_async().await;
        assert!(page.items.is_empty());
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn test_create_returns_string_id() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/invoices")
            .match_body(Matcher::Json(json!({
                "invoiceNumber": "INV-7",
                "userId": "u1",
                "customerId": "c1",
                "dueDate": "2025-03-31",
                "issuedDate": "2025-03-01",
                "totalAmount": 13.0
            })))
            .with_status(200)
            .with_body(r#""abc-123""#)
            .create_async()
            .await;

        let id = client_for(&server).invoices().create(&sale()).await.unwrap();
        m.assert_async().await;
        assert_eq!(id, "abc-123");
    }

    #[tokio::test]
    async fn test_create_rejects_object_response() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/invoices")
            .with_status(200)
            .with_body(r#"{"id":"abc-123"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .invoices()
            .create(&sale())
            .await
            .unwrap_err();
        m.assert_async().await;
        assert!(matches!(err, ClientError::Format(_)));
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let mut server = Server::new_async().await;
        let get = server
            .mock("GET", "/invoices/abc-123")
            .with_status(200)
            .with_body(
                r#"{"id":"abc-123","invoiceNumber":"INV-7","userId":"u1","customerId":"c1",
                    "issuedDate":"2025-03-01","dueDate":"2025-03-31","totalAmount":13,
                    "items":[{"invoiceId":"abc-123","itemId":"p1","quantity":2,"unitPrice":4}]}"#,
            )
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/invoices/abc-123")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        let dto = client.invoices().get("abc-123").await.unwrap();
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.total_amount, Money::from_cents(1300));
        client.invoices().delete("abc-123").await.unwrap();

        get.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_with_lines_posts_each_line() {
        let mut server = Server::new_async().await;
        let invoice = server
            .mock("POST", "/invoices")
            .with_status(200)
            .with_body(r#""inv-1""#)
            .create_async()
            .await;
        let lines = server
            .mock("POST", "/invoice-line")
            .match_body(Matcher::PartialJson(json!({"invoiceId": "inv-1"})))
            .with_status(200)
            .expect(2)
            .create_async()
            .await;

        let id = client_for(&server)
            .invoices()
            .create_with_lines(&sale())
            .await
            .unwrap();
        invoice.assert_async().await;
        lines.assert_async().await;
        assert_eq!(id, "inv-1");
    }

    #[tokio::test]
    async fn test_create_with_lines_stops_at_first_failure() {
        let mut server = Server::new_async().await;
        let invoice = server
            .mock("POST", "/invoices")
            .with_status(200)
            .with_body(r#""inv-1""#)
            .create_async()
            .await;
        let lines = server
            .mock("POST", "/invoice-line")
            .with_status(500)
            .with_body("line rejected")
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server)
            .invoices()
            .create_with_lines(&sale())
            .await
            .unwrap_err();
        invoice.assert_async().await;
        lines.assert_async().await;
        assert_eq!(err.status(), Some(500));
    }
}
