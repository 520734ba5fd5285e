// Inline validation errors: mark inputs invalid and fill their feedback text.
use shared::models::FieldErrorMap;

use crate::models::{FormField, InvoiceForm};

/// Anything holding named inputs that errors can be shown on.
pub trait ErrorTarget {
    fn for_each_field_mut(&mut self, visit: &mut dyn FnMut(&mut FormField));
}

impl ErrorTarget for InvoiceForm {
    fn for_each_field_mut(&mut self, visit: &mut dyn FnMut(&mut FormField)) {
        InvoiceForm::for_each_field_mut(self, visit)
    }
}

impl ErrorTarget for [FormField] {
    fn for_each_field_mut(&mut self, visit: &mut dyn FnMut(&mut FormField)) {
        for field in self.iter_mut() {
            visit(field);
        }
    }
}

impl ErrorTarget for Vec<FormField> {
    fn for_each_field_mut(&mut self, visit: &mut dyn FnMut(&mut FormField)) {
        self.as_mut_slice().for_each_field_mut(visit)
    }
}

/// Marks every input named by a key invalid and sets its message. Keys with
/// no matching input are skipped. Returns how many inputs were marked.
pub fn show_errors<T: ErrorTarget + ?Sized>(target: &mut T, errors: &FieldErrorMap) -> usize {
    let mut marked = 0;
    target.for_each_field_mut(&mut |field: &mut FormField| {
        if let Some(message) = errors.get(&field.name) {
            field.mark_invalid(message);
            marked += 1;
        }
    });
    marked
}

/// Removes the invalid marking and message from every input.
pub fn clear_errors<T: ErrorTarget + ?Sized>(target: &mut T) {
    target.for_each_field_mut(&mut |field: &mut FormField| {
        if field.invalid || !field.feedback.is_empty() {
            field.clear_error();
        }
    });
}

/// Per-field reset fired whenever the user edits an input.
pub fn clear_field(field: &mut FormField) {
    field.clear_error();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemRow;

    fn plain_form() -> Vec<FormField> {
        vec![FormField::new("name"), FormField::new("email"), FormField::new("phone")]
    }

    #[test]
    fn test_show_errors_marks_named_input() {
        let mut form = plain_form();
        let errors: FieldErrorMap = [("name", "required")].into_iter().collect();
        assert_eq!(show_errors(&mut form, &errors), 1);
        assert!(form[0].invalid);
        assert_eq!(form[0].feedback, "required");
        assert!(!form[1].invalid);
        assert!(form[1].feedback.is_empty());

        clear_errors(&mut form);
        assert!(!form[0].invalid);
        assert!(form[0].feedback.is_empty());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = plain_form();
        let before = form.clone();
        let errors: FieldErrorMap = [("does_not_exist", "boom")].into_iter().collect();
        assert_eq!(show_errors(&mut form, &errors), 0);
        assert_eq!(form, before);
    }

    #[test]
    fn test_unknown_field_does_not_affect_known_ones() {
        let mut form = plain_form();
        let errors: FieldErrorMap = [("ghost", "boom"), ("email", "invalid email")].into_iter().collect();
        assert_eq!(show_errors(&mut form, &errors), 1);
        assert_eq!(form[1].feedback, "invalid email");
        assert!(!form[0].invalid && !form[2].invalid);
    }

    #[test]
    fn test_show_and_clear_are_idempotent() {
        let mut form = plain_form();
        let errors: FieldErrorMap = [("phone", "too short")].into_iter().collect();
        show_errors(&mut form, &errors);
        let once = form.clone();
        show_errors(&mut form, &errors);
        assert_eq!(form, once);

        clear_errors(&mut form);
        let cleared = form.clone();
        clear_errors(&mut form);
        assert_eq!(form, cleared);
        assert_eq!(form, plain_form());
    }

    #[test]
    fn test_invoice_form_row_inputs_share_a_name() {
        let mut form = InvoiceForm::new("/invoices", "POST").with_header_field("customer", "");
        form.rows_mut().push(ItemRow::template().with_values("0", "1"));
        form.rows_mut().push(ItemRow::template().with_values("0", "2"));

        let errors: FieldErrorMap =
            [("customer", "required"), ("quantity", "must be positive")].into_iter().collect();
        assert_eq!(show_errors(&mut form, &errors), 3);
        assert!(form.rows().iter().all(|r| r.quantity.invalid && !r.price.invalid));

        clear_errors(&mut form);
        assert!(form.rows().iter().all(|r| !r.quantity.invalid));
        assert!(form.header().iter().all(|f| !f.invalid && f.feedback.is_empty()));
    }

    #[test]
    fn test_clear_field_only_touches_that_field() {
        let mut form = plain_form();
        let errors: FieldErrorMap = [("name", "required"), ("email", "required")].into_iter().collect();
        show_errors(&mut form, &errors);
        clear_field(&mut form[0]);
        assert!(!form[0].invalid);
        assert!(form[1].invalid);
    }
}
