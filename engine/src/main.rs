// Engine CLI: renders the totals of an invoice draft file.
//
//   engine <draft.json>
//
// Locale and currency come from ACCOUNTING_* environment variables.
use engine::services::InvoiceCalculator;
use engine::{EngineSettings, InvoiceForm};
use shared::format::LocaleFormatter;
use shared::models::InvoiceDraft;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: engine <draft.json>")?;

    let settings = EngineSettings::from_env();
    let formatter = settings.formatter()?;
    info!(locale = %settings.locale, currency = %settings.currency, draft = %path, "Rendering invoice draft");

    let draft: InvoiceDraft = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let mut form = InvoiceForm::from_draft(&draft);
    let totals = InvoiceCalculator::new(&formatter).recalculate(&mut form);

    for (number, row) in form.rows().iter().enumerate() {
        println!(
            "{:>3}  {:>10} x {:>10}  {}",
            number + 1,
            row.quantity.value,
            row.price.value,
            row.total_display
        );
    }
    println!("Subtotal: {}", form.display.subtotal);
    println!("Tax:      {}", form.display.tax);
    if form.discount.is_some() {
        println!("Discount: {}", form.display.discount);
    }
    println!("Total:    {}", form.display.total);
    info!(rows = form.rows().len(), total = %formatter.format_number(totals.grand_total), "Done");

    Ok(())
}
