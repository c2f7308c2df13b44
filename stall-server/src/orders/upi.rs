//! UPI deep links (`upi://pay?...`) for customer payment apps

use rust_decimal::Decimal;
use shared::models::MerchantAccount;
use url::form_urlencoded;

use super::money;

/// Build the pay link for an order
///
/// `pa` payee address, `pn` payee name, `am` amount, `cu` currency, `tn` note.
pub fn payment_link(merchant: &MerchantAccount, order_id: i64, amount: Decimal) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("pa", &merchant.upi_id)
        .append_pair("pn", &merchant.name)
        .append_pair("am", &money::format_amount(amount))
        .append_pair("cu", "INR")
        .append_pair("tn", &format!("Order {order_id}"))
        .finish();
    format!("upi://pay?{query}")
}
