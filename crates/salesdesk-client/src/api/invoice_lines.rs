//! Invoice lines (`/invoice-line`).

use reqwest::Method;
use salesdesk_core::{NewInvoiceLine, SaleItem};
use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct InvoiceLinesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InvoiceLinesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Attaches `item` to `invoice_id`. Any `invoice_id` already on the item is ignored.
    pub async fn create(&self, invoice_id: &str, item: &SaleItem) -> ClientResult<()> {
        let line = NewInvoiceLine::for_invoice(invoice_id, item);
        self.client
            .execute(Method::POST, "/invoice-line", Some(&line))
            .await?;
        debug!(invoice_id = %invoice_id, item_id = %item.item_id, "Invoice line created");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/invoice-line/{}", id), None::<&()>)
            .await
    }

    pub async fn list_by_invoice(&self, invoice_id: &str) -> ClientResult<Vec<SaleItem>> {
        self.client
            .get(&format!("/invoice-line/getby-invoiceid/{}", invoice_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use salesdesk_core::Money;
    use salesdesk_store::{MemoryStore, SessionStore};
    use serde_json::json;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::with_base_url(&server.url(), SessionStore::new(MemoryStore::new())).unwrap()
    }

    #[tokio::test]
    async fn test_create_overrides_invoice_id() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/invoice-line")
            .match_body(Matcher::Json(json!({
                "invoiceId": "inv-2",
                "itemId": "p1",
                "quantity": 3,
                "unitPrice": 1.25
            })))
            .with_status(200)
            .create_async()
            .await;

        let mut item = SaleItem::new("p1", 3, Money::from_cents(125));
        item.invoice_id = "stale".into();
        client_for(&server)
            .invoice_lines()
            .create("inv-2", &item)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_by_invoice_and_delete() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/invoice-line/getby-invoiceid/inv-2")
            .with_status(200)
            .with_body(r#"[{"invoiceId":"inv-2","itemId":"p1","quantity":3,"unitPrice":1.25}]"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/invoice-line/line-9")
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server);
        let lines = client.invoice_lines().list_by_invoice("inv-2").await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_total().unwrap(), Money::from_cents(375));

        client.invoice_lines().delete("line-9").await.unwrap();
        list.assert_async().await;
        delete.assert_async().await;
    }
}
