//! Business-central financial records.

use graphbind_core::prelude::*;

///
/// CustomerPayment
///
/// One payment line in a customer payment journal.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.customerPayment")]
pub struct CustomerPayment {
    #[model(base)]
    entity: Entity,
    amount: Option<f64>,
    applies_to_invoice_id: Option<Uuid>,
    applies_to_invoice_number: Option<String>,
    comment: Option<String>,
    contact_id: Option<String>,
    customer_id: Option<Uuid>,
    customer_number: Option<String>,
    description: Option<String>,
    document_number: Option<String>,
    external_document_number: Option<String>,
    journal_display_name: Option<String>,
    last_modified_date_time: Option<Timestamp>,
    line_number: Option<i32>,
    posting_date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_scalars_are_returned_by_value() {
        let invoice = Uuid::from_u128(0x1f2e_3d4c_5b6a_7980_1f2e_3d4c_5b6a_7980);
        let posted = Date::new_checked(2024, 3, 31).unwrap();

        let payment = CustomerPayment::new()
            .with_amount(125.5)
            .with_applies_to_invoice_id(invoice)
            .with_posting_date(posted)
            .with_line_number(10_000);

        assert_eq!(payment.amount(), Some(125.5));
        assert_eq!(payment.applies_to_invoice_id(), Some(invoice));
        assert_eq!(payment.posting_date(), Some(posted));
        assert_eq!(payment.line_number(), Some(10_000));
        assert_eq!(payment.customer_id(), None);
    }
}
