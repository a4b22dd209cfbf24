//! Products (`/items`).

use reqwest::header::HeaderMap;
use reqwest::Method;
use salesdesk_core::{NewProduct, Product, ProductOption};
use serde_json::Value;
use tracing::info;

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates a product and returns whatever the server answered.
    pub async fn create(&self, product: &NewProduct) -> ClientResult<Value> {
        let created = self
            .client
            .request(Method::POST, "/items", Some(product), &HeaderMap::new())
            .await?;
        info!(name = %product.name, "Product created");
        Ok(created)
    }

    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.client.get("/items").await
    }

    /// Products reduced to `{ id, name }` for picking invoice lines.
    pub async fn list_for_sale(&self) -> ClientResult<Vec<ProductOption>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(ProductOption::from)
            .collect())
    }

    /// Replaces the product with `id`. The full entity is sent.
    pub async fn update(&self, id: &str, product: &Product) -> ClientResult<()> {
        self.client
            .execute(Method::PUT, &format!("/items/{}", id), Some(product))
            .await?;
        info!(id = %id, "Product updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/items/{}", id), None::<&()>)
            .await?;
        info!(id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use mockito::{Matcher, Server};
    use salesdesk_core::Money;
    use salesdesk_store::{MemoryStore, SessionStore};
    use serde_json::json;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::with_base_url(&server.url(), SessionStore::new(MemoryStore::new())).unwrap()
    }

    const ITEMS: &str = r#"[
        {"itemId":"p1","barcode":"123","name":"Coffee","descriptions":"Beans","unitPrice":4.5},
        {"itemId":"p2","barcode":null,"name":"Tea","descriptions":null,"unitPrice":3}
    ]"#;

    #[tokio::test]
    async fn test_create_sends_body_without_identity() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/items")
            .match_body(Matcher::Json(json!({
                "barcode": "123",
                "name": "Coffee",
                "unitPrice": 4.5
            })))
            .with_status(201)
            .with_body(r#"{"itemId":"p1"}"#)
            .create_async()
            .await;

        let product = NewProduct {
            barcode: Some("123".into()),
            name: "Coffee".into(),
            descriptions: None,
            unit_price: Money::from_cents(450),
        };
        let created = client_for(&server).products().create(&product).await.unwrap();
        m.assert_async().await;
        assert_eq!(created["itemId"], "p1");
    }

    #[tokio::test]
    async fn test_list_and_list_for_sale() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/items")
            .with_status(200)
            .with_body(ITEMS)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        let products = client.products().list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].unit_price.cents(), 300);
        assert_eq!(products[1].barcode, None);

        let options = client.products().list_for_sale().await.unwrap();
        m.assert_async().await;
        assert_eq!(
            options,
            vec![
                ProductOption { id: "p1".into(), name: "Coffee".into() },
                ProductOption { id: "p2".into(), name: "Tea".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_rejects_sub_cent_prices() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/items")
            .with_status(200)
            .with_body(
                r#"[{"itemId":"p1","barcode":null,"name":"Saffron","descriptions":null,"unitPrice":0.125}]"#,
            )
            .create_async()
            .await;

        let err = client_for(&server).products().list().await.unwrap_err();
        m.assert_async().await;
        assert!(matches!(err, ClientError::Format(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_update_puts_full_entity() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("PUT", "/items/p1")
            .match_body(Matcher::PartialJson(json!({"itemId": "p1", "name": "Dark Roast"})))
            .with_status(204)
            .create_async()
            .await;

        let product = Product {
            item_id: "p1".into(),
            barcode: None,
            name: "Dark Roast".into(),
            descriptions: None,
            unit_price: Money::from_cents(500),
        };
        client_for(&server)
            .products()
            .update("p1", &product)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_surfaces_server_error() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("DELETE", "/items/p1")
            .with_status(409)
            .with_body("item is on an invoice")
            .create_async()
            .await;

        let err = client_for(&server)
            .products()
            .delete("p1")
            .await
            .unwrap_err();
        m.assert_async().await;
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("item is on an invoice"));
    }
}
