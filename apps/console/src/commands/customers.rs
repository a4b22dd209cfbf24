//! `/customers` commands.

use anyhow::{anyhow, Result};
use salesdesk_core::validation::{validate_email, validate_required};
use salesdesk_core::{Customer, NewCustomer};

use super::{non_blank, print_json};
use crate::cli::CustomersSubcommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: CustomersSubcommand) -> Result<()> {
    let customers = ctx.client.customers();

    match command {
        CustomersSubcommand::List => print_json(&customers.list().await?),
        CustomersSubcommand::Create {
            name,
            email,
            phone,
            address,
        } => {
            let body = new_customer(&name, email, phone, address)?;
            print_json(&customers.create(&body).await?)
        }
        CustomersSubcommand::Update {
            id,
            name,
            email,
            phone,
            address,
        } => {
            let mut customer = customers
                .list()
                .await?
                .into_iter()
                .find(|c| c.id == id)
                .ok_or_else(|| anyhow!("no customer with id {}", id))?;
            apply_changes(&mut customer, name, email, phone, address)?;
            customers.update(&id, &customer).await?;
            print_json(&customer)
        }
        CustomersSubcommand::Delete { id } => {
            customers.delete(&id).await?;
            println!("Deleted customer {}", id);
            Ok(())
        }
    }
}

fn checked_email(email: Option<String>) -> Result<Option<String>> {
    let email = non_blank(email);
    if let Some(e) = &email {
        validate_email(e)?;
    }
    Ok(email)
}

fn new_customer(
    name: &str,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> Result<NewCustomer> {
    Ok(NewCustomer {
        name: validate_required("name", name)?.to_string(),
        email: checked_email(email)?,
        phone: non_blank(phone),
        address: non_blank(address),
    })
}

fn apply_changes(
    customer: &mut Customer,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> Result<()> {
    if let Some(name) = name {
        customer.name = validate_required("name", &name)?.to_string();
    }
    if email.is_some() {
        customer.email = checked_email(email)?;
    }
    if phone.is_some() {
        customer.phone = non_blank(phone);
    }
    if address.is_some() {
        customer.address = non_blank(address);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_checks_email() {
        assert!(new_customer("Ada", Some("not-an-email".into()), None, None).is_err());
        assert!(new_customer("", None, None, None).is_err());

        let customer = new_customer("Ada", Some(" ".into()), Some("555".into()), None).unwrap();
        assert_eq!(customer.email, None);
        assert_eq!(customer.phone.as_deref(), Some("555"));
    }

    #[test]
    fn test_apply_changes() {
        let mut customer = Customer {
            id: "c1".into(),
            name: "Ada".into(),
            email: None,
            phone: Some("555".into()),
            address: None,
        };
        apply_changes(
            &mut customer,
            Some("Ada L.".into()),
            Some("ada@example.com".into()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(customer.name, "Ada L.");
        assert_eq!(customer.email.as_deref(), Some("ada@example.com"));
        assert_eq!(customer.phone.as_deref(), Some("555"));
    }
}
