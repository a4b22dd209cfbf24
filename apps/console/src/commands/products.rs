//! `/products` commands.

use anyhow::{anyhow, Result};
use salesdesk_core::validation::{validate_required, validate_unit_price};
use salesdesk_core::{Money, NewProduct, Product};

use super::{non_blank, print_json};
use crate::cli::ProductsSubcommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: ProductsSubcommand) -> Result<()> {
    let products = ctx.client.products();

    match command {
        ProductsSubcommand::List => print_json(&products.list().await?),
        ProductsSubcommand::ForSale => print_json(&products.list_for_sale().await?),
        ProductsSubcommand::Create {
            name,
            price,
            barcode,
            description,
        } => {
            let body = new_product(&name, price, barcode, description)?;
            print_json(&products.create(&body).await?)
        }
        ProductsSubcommand::Update {
            id,
            name,
            price,
            barcode,
            description,
        } => {
            let mut product = products
                .list()
                .await?
                .into_iter()
                .find(|p| p.item_id == id)
                .ok_or_else(|| anyhow!("no product with id {}", id))?;
            apply_changes(&mut product, name, price, barcode, description)?;
            products.update(&id, &product).await?;
            print_json(&product)
        }
        ProductsSubcommand::Delete { id } => {
            products.delete(&id).await?;
            println!("Deleted product {}", id);
            Ok(())
        }
    }
}

fn new_product(
    name: &str,
    price: Money,
    barcode: Option<String>,
    description: Option<String>,
) -> Result<NewProduct> {
    let name = validate_required("name", name)?;
    validate_unit_price(price)?;
    Ok(NewProduct {
        barcode: non_blank(barcode),
        name: name.to_string(),
        descriptions: non_blank(description),
        unit_price: price,
    })
}

fn apply_changes(
    product: &mut Product,
    name: Option<String>,
    price: Option<Money>,
    barcode: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if let Some(name) = name {
        product.name = validate_required("name", &name)?.to_string();
    }
    if let Some(price) = price {
        validate_unit_price(price)?;
        product.unit_price = price;
    }
    if barcode.is_some() {
        product.barcode = non_blank(barcode);
    }
    if description.is_some() {
        product.descriptions = non_blank(description);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_validates() {
        assert!(new_product(" ", Money::from_cents(100), None, None).is_err());
        assert!(new_product("Tea", Money::from_cents(-1), None, None).is_err());

        let product = new_product(" Tea ", Money::from_cents(300), Some("".into()), None).unwrap();
        assert_eq!(product.name, "Tea");
        assert_eq!(product.barcode, None);
    }

    #[test]
    fn test_apply_changes_keeps_untouched_fields() {
        let mut product = Product {
            item_id: "p1".into(),
            barcode: Some("123".into()),
            name: "Tea".into(),
            descriptions: Some("Green".into()),
            unit_price: Money::from_cents(300),
        };
        apply_changes(
            &mut product,
            None,
            Some(Money::from_cents(350)),
            None,
            Some(String::new()),
        )
        .unwrap();

        assert_eq!(product.name, "Tea");
        assert_eq!(product.barcode.as_deref(), Some("123"));
        assert_eq!(product.descriptions, None);
        assert_eq!(product.unit_price.cents(), 350);
    }
}
