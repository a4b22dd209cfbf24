//! `/sales` commands: invoice listing, detail, creation and deletion.

use anyhow::{anyhow, bail, Result};
use chrono::{Duration, Local, NaiveDate};
use salesdesk_client::InvoiceQuery;
use salesdesk_core::validation::{parse_line_spec, validate_page, validate_required};
use salesdesk_core::Sale;

use super::{non_blank, print_json};
use crate::cli::{CreateSaleArgs, SalesSubcommand};
use crate::context::AppContext;

/// Days between issue and due date when no due date is given.
const PAYMENT_TERM_DAYS: i64 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub async fn run(ctx: &AppContext, command: SalesSubcommand) -> Result<()> {
    match command {
        SalesSubcommand::List {
            page,
            page_size,
            user_id,
            customer_id,
            invoice_number,
        } => {
            validate_page(page, page_size)?;
            let mut query = InvoiceQuery::new().page(page).page_size(page_size);
            if let Some(id) = non_blank(user_id) {
                query = query.user_id(id);
            }
            if let Some(id) = non_blank(customer_id) {
                query = query.customer_id(id);
            }
            if let Some(number) = non_blank(invoice_number) {
                query = query.invoice_number(number);
            }
            print_json(&ctx.client.invoices().list(&query).await?)
        }
        SalesSubcommand::Show { id } => {
            let mut invoice = ctx.client.invoices().get(&id).await?;
            if invoice.items.is_empty() {
                invoice.items = ctx.client.invoice_lines().list_by_invoice(&id).await?;
            }
            print_json(&invoice)
        }
        SalesSubcommand::Create(args) => {
            let user_id = ctx
                .session()
                .user_id()?
                .ok_or_else(|| anyhow!("session has no user id; sign in again"))?;
            let sale = build_sale(args, &user_id, Local::now().date_naive())?;
            let invoice_id = ctx.client.invoices().create_with_lines(&sale).await?;
            println!(
                "Created invoice {} ({} lines, total {})",
                invoice_id,
                sale.items.len(),
                sale.total_amount
            );
            Ok(())
        }
        SalesSubcommand::Delete { id } => {
            ctx.client.invoices().delete(&id).await?;
            println!("Deleted invoice {}", id);
            Ok(())
        }
        SalesSubcommand::DeleteLine { id } => {
            ctx.client.invoice_lines().delete(&id).await?;
            println!("Deleted invoice line {}", id);
            Ok(())
        }
    }
}

/// Issue and due dates, filling in today and the payment term.
fn default_dates(
    issued: Option<NaiveDate>,
    due: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    let issued = issued.unwrap_or(today);
    let due = due.unwrap_or(issued + Duration::days(PAYMENT_TERM_DAYS));
    if due < issued {
        bail!("due date {} is before issue date {}", due, issued);
    }
    Ok((issued, due))
}

/// Builds the sale from command-line input. The total is the sum of the lines.
fn build_sale(args: CreateSaleArgs, user_id: &str, today: NaiveDate) -> Result<Sale> {
    let invoice_number = validate_required("invoice number", &args.invoice_number)?.to_string();
    let customer_id = validate_required("customer", &args.customer_id)?.to_string();
    if args.lines.is_empty() {
        bail!("an invoice needs at least one --line");
    }

    let items = args
        .lines
        .iter()
        .map(|line| parse_line_spec(line))
        .collect::<Result<Vec<_>, _>>()?;
    let (issued, due) = default_dates(args.issued_date, args.due_date, today)?;

    let mut sale = Sale {
        invoice_number,
        user_id: user_id.to_string(),
        customer_id,
        issued_date: issued.format(DATE_FORMAT).to_string(),
        due_date: due.format(DATE_FORMAT).to_string(),
        total_amount: Default::default(),
        items,
    };
    sale.total_amount = sale.items_total()?;
    Ok(sale)
}
