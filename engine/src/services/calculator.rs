// Live invoice totals: recomputed from scratch on every relevant input.
use shared::format::LocaleFormatter;
use shared::models::InvoiceTotals;
use shared::utils::parse_decimal_or_zero;

use crate::models::InvoiceForm;

pub struct InvoiceCalculator<'a> {
    formatter: &'a dyn LocaleFormatter,
}

impl<'a> InvoiceCalculator<'a> {
    pub fn new(formatter: &'a dyn LocaleFormatter) -> Self {
        Self { formatter }
    }

    /// Writes every row total and the subtotal/tax/total slots of `form`.
    /// Unparseable quantities, prices and rates count as zero.
    pub fn recalculate(&self, form: &mut InvoiceForm) -> InvoiceTotals {
        let mut row_totals = Vec::with_capacity(form.rows().len());
        for row in form.rows_mut().iter_mut() {
            let row_total = row.row_total();
            row.total_display = self.formatter.format_currency(row_total);
            row_totals.push(row_total);
        }

        let tax_rate = parse_decimal_or_zero(&form.tax_rate.value);
        let discount = form
            .discount
            .as_ref()
            .map_or(0.0, |field| parse_decimal_or_zero(&field.value));
        let totals = InvoiceTotals::compute(row_totals, tax_rate, discount);

        form.display.subtotal = self.formatter.format_currency(totals.subtotal);
        form.display.tax = self.formatter.format_currency(totals.tax);
        form.display.discount = self.formatter.format_currency(totals.discount);
        form.display.total = self.formatter.format_currency(totals.grand_total);

        tracing::debug!(
            rows = form.rows().len(),
            subtotal = totals.subtotal,
            tax = totals.tax,
            total = totals.grand_total,
            "Invoice totals recalculated"
        );
        totals
    }
}
