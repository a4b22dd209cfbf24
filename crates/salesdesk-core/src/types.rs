//! # Domain Types
//!
//! Wire types exchanged with the SalesDesk backend.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │    SaleDto      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  itemId (srv)   │   │  id (srv)       │   │  id (srv)       │       │
//! │  │  barcode        │   │  name           │   │  invoiceNumber  │       │
//! │  │  name           │   │  email          │   │  totalAmount    │       │
//! │  │  unitPrice      │   │  phone, address │   │  items[]        │       │
//! │  └─────────────────┘   └─────────────────┘   └────────┬────────┘       │
//! │                                                       │                 │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌────────▼────────┐       │
//! │  │   NewProduct    │   │   NewCustomer   │   │    SaleItem     │       │
//! │  │  (create body,  │   │  (create body,  │   │  (invoiceId,    │       │
//! │  │   no identity)  │   │   no identity)  │   │   itemId) key   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Identities are assigned by the server. Create bodies never carry them;
//! the server answers with the new identity (or, for invoices, a bare string).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Session
// =============================================================================

/// The authenticated identity held for the current client.
///
/// Presence of a token is what "authenticated" means everywhere in SalesDesk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token issued by `/users/login`.
    pub token: Option<String>,
    /// Id of the signed-in user.
    pub user_id: Option<String>,
}

impl Session {
    /// Returns true when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Body of `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Token and user id extracted from a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product (the backend calls it an item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identity.
    pub item_id: String,

    /// Barcode (EAN-13, UPC-A, etc.).
    #[serde(default)]
    pub barcode: Option<String>,

    /// Display name.
    pub name: String,

    /// Free-text description.
    #[serde(default)]
    pub descriptions: Option<String>,

    /// Price per unit.
    pub unit_price: Money,
}

/// Body of `POST /items`. Identity is left to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<String>,
    pub unit_price: Money,
}

/// A product projected for the sale form: `itemId` is renamed to `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub name: String,
}

impl From<Product> for ProductOption {
    fn from(p: Product) -> Self {
        ProductOption {
            id: p.item_id,
            name: p.name,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer invoices are issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-assigned identity.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of `POST /customers`. Identity is left to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// =============================================================================
// Invoice Line
// =============================================================================

/// An invoice line. Identity is the pair `(invoice_id, item_id)`.
///
/// Lines built on the client before the invoice exists carry an empty
/// `invoice_id`; the real one is filled in when the line is posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    #[serde(default)]
    pub invoice_id: String,
    pub item_id: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl SaleItem {
    /// Creates a line that is not attached to an invoice yet.
    pub fn new(item_id: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        SaleItem {
            invoice_id: String::new(),
            item_id: item_id.into(),
            quantity,
            unit_price,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price
            .multiply_quantity(self.quantity)
            .ok_or_else(|| {
                CoreError::AmountOverflow(format!(
                    "{} x {} for item {}",
                    self.quantity, self.unit_price, self.item_id
                ))
            })
    }
}

/// Body of `POST /invoice-line`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoiceLine {
    pub invoice_id: String,
    pub item_id: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl NewInvoiceLine {
    /// Attaches a line to the given invoice.
    pub fn for_invoice(invoice_id: &str, item: &SaleItem) -> Self {
        NewInvoiceLine {
            invoice_id: invoice_id.to_string(),
            item_id: item.item_id.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice as built on the client, before the server assigns an id.
///
/// `total_amount` is supplied by the caller. It is expected to equal the sum
/// of the lines, but nothing here enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub invoice_number: String,
    pub user_id: String,
    pub customer_id: String,
    pub issued_date: String,
    pub due_date: String,
    pub total_amount: Money,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl Sale {
    /// Sum of all line totals.
    pub fn items_total(&self) -> CoreResult<Money> {
        let lines = self
            .items
            .iter()
            .map(SaleItem::line_total)
            .collect::<CoreResult<Vec<_>>>()?;
        Money::checked_sum(lines).ok_or_else(|| {
            CoreError::AmountOverflow(format!("total of invoice {}", self.invoice_number))
        })
    }

    /// True when `total_amount` matches the summed lines. False on overflow.
    pub fn has_consistent_total(&self) -> bool {
        matches!(self.items_total(), Ok(total) if total == self.total_amount)
    }

    /// Body for `POST /invoices`. Lines are posted separately.
    pub fn to_new_invoice(&self) -> NewInvoice {
        NewInvoice {
            invoice_number: self.invoice_number.clone(),
            user_id: self.user_id.clone(),
            customer_id: self.customer_id.clone(),
            due_date: self.due_date.clone(),
            issued_date: self.issued_date.clone(),
            total_amount: self.total_amount,
        }
    }
}

/// Body of `POST /invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub invoice_number: String,
    pub user_id: String,
    pub customer_id: String,
    pub due_date: String,
    pub issued_date: String,
    pub total_amount: Money,
}

/// An invoice as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: String,
    pub invoice_number: String,
    pub user_id: String,
    pub customer_id: String,
    pub issued_date: String,
    pub due_date: String,
    pub total_amount: Money,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl From<SaleDto> for Sale {
    fn from(dto: SaleDto) -> Self {
        Sale {
            invoice_number: dto.invoice_number,
            user_id: dto.user_id,
            customer_id: dto.customer_id,
            issued_date: dto.issued_date,
            due_date: dto.due_date,
            total_amount: dto.total_amount,
            items: dto.items,
        }
    }
}

/// One page of `GET /invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePage {
    pub items: Vec<SaleDto>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl InvoicePage {
    /// True when a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_with(total_cents: i64) -> Sale {
        Sale {
            invoice_number: "INV-001".to_string(),
            user_id: "u1".to_string(),
            customer_id: "c1".to_string(),
            issued_date: "2025-03-01".to_string(),
            due_date: "2025-03-31".to_string(),
            total_amount: Money::from_cents(total_cents),
            items: vec![
                SaleItem::new("i1", 2, Money::from_cents(250)),
                SaleItem::new("i2", 1, Money::from_cents(1000)),
            ],
        }
    }

    #[test]
    fn test_session_authenticated_only_with_token() {
        assert!(!Session::default().is_authenticated());
        let session = Session {
            token: Some(String::new()),
            user_id: Some("u1".to_string()),
        };
        assert!(!session.is_authenticated());
        let session = Session {
            token: Some("t".to_string()),
            user_id: None,
        };
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_items_total_and_consistency() {
        let sale = sale_with(1500);
        assert_eq!(sale.items_total().unwrap(), Money::from_cents(1500));
        assert!(sale.has_consistent_total());

        let sale = sale_with(1499);
        assert!(!sale.has_consistent_total());
    }

    #[test]
    fn test_totals_overflow_is_an_error() {
        let huge = SaleItem::new("i1", i64::MAX, Money::from_cents(2));
        assert!(matches!(huge.line_total(), Err(CoreError::AmountOverflow(_))));

        let mut sale = sale_with(0);
        sale.items = vec![
            SaleItem::new("i1", 1, Money::from_cents(i64::MAX)),
            SaleItem::new("i2", 1, Money::from_cents(1)),
        ];
        assert!(matches!(sale.items_total(), Err(CoreError::AmountOverflow(_))));
        assert!(!sale.has_consistent_total());
    }

    #[test]
    fn test_product_with_sub_cent_price_is_rejected() {
        let result: Result<Product, _> = serde_json::from_str(
            r#"{"itemId":"p1","barcode":null,"name":"Saffron","descriptions":null,"unitPrice":0.125}"#,
        );
        assert!(result.is_err());

        let product: Product = serde_json::from_str(
            r#"{"itemId":"p1","barcode":null,"name":"Saffron","descriptions":null,"unitPrice":0.13}"#,
        )
        .unwrap();
        let sent_back = serde_json::to_value(&product).unwrap();
        assert_eq!(sent_back["unitPrice"], serde_json::json!(0.13));
    }

    #[test]
    fn test_sale_dto_drops_server_identity() {
        let dto: SaleDto = serde_json::from_str(
            r#"{"id":"inv-1","invoiceNumber":"A-7","userId":"u","customerId":"c",
                "issuedDate":"2025-01-01","dueDate":"2025-01-31","totalAmount":7.5,
                "items":[{"invoiceId":"inv-1","itemId":"i1","quantity":3,"unitPrice":2.5}]}"#,
        )
        .unwrap();
        let sale = Sale::from(dto);

        assert_eq!(sale.invoice_number, "A-7");
        assert_eq!(sale.items[0].invoice_id, "inv-1");
        assert!(sale.has_consistent_total());
        assert!(!serde_json::to_value(&sale).unwrap().as_object().unwrap().contains_key("id"));
    }

    #[test]
    fn test_new_invoice_body_has_no_items_or_id() {
        let body = serde_json::to_value(sale_with(1500).to_new_invoice()).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert!(!obj.contains_key("items"));
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["invoiceNumber"], "INV-001");
        assert_eq!(obj["totalAmount"], 15.0);
    }

    #[test]
    fn test_product_option_renames_identity() {
        let product: Product = serde_json::from_str(
            r#"{"itemId":"p-1","barcode":null,"name":"Coffee","descriptions":"Beans","unitPrice":4.5}"#,
        )
        .unwrap();
        assert_eq!(product.unit_price.cents(), 450);

        let option = ProductOption::from(product);
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            serde_json::json!({"id": "p-1", "name": "Coffee"})
        );
    }

    #[test]
    fn test_new_customer_omits_missing_fields() {
        let body = NewCustomer {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            phone: None,
            address: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"name": "Ada", "email": "ada@example.com"})
        );
    }

    #[test]
    fn test_invoice_line_attaches_invoice_id() {
        let item = SaleItem::new("i1", 3, Money::from_cents(199));
        let line = NewInvoiceLine::for_invoice("inv-9", &item);
        assert_eq!(line.invoice_id, "inv-9");
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_invoice_page_decodes() {
        let page: InvoicePage = serde_json::from_str(
            r#"{"items":[{"id":"x","invoiceNumber":"A","userId":"u","customerId":"c",
                "issuedDate":"2025-01-01","dueDate":"2025-01-31","totalAmount":10}],
               "totalCount":11,"pageNumber":1,"pageSize":10,"totalPages":2}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.items[0].items.is_empty());
        assert!(page.has_next_page());
    }
}
