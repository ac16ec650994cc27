//! PayPal express-checkout flow.
//!
//! The backend brokers the PayPal API: `prepare` returns a checkout token and
//! URL, the user completes the flow in a browser, and the redirect back to
//! `/paypal/update-status` is replayed through the client to settle the
//! payment status.

use serde::Serialize;
use serde_json::json;

use strato_core::error::Result;
use strato_core::payload::Payload;

use crate::dispatch::PendingJson;

use super::Strato;

/// One line item in a PayPal purchase.
#[derive(Debug, Clone, Serialize)]
pub struct PayPalBillItem {
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub quantity: u32,
}

/// A purchase to run through express checkout. Needs at least one item.
#[derive(Debug, Clone)]
pub struct PayPalBill {
    pub name: String,
    pub description: String,
    /// ISO currency code, e.g. "USD".
    pub currency: String,
    pub invoice_number: Option<String>,
    pub items: Vec<PayPalBillItem>,
    /// Cloud function to run when the payment completes.
    pub payment_completed_function: Option<String>,
    /// Cloud function to run when the payment is cancelled.
    pub payment_cancelled_function: Option<String>,
    pub payment_completed_url: Option<String>,
    pub payment_cancelled_url: Option<String>,
}

impl PayPalBill {
    /// Total across all items.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.amount * f64::from(item.quantity))
            .sum()
    }

    fn serialize_purchase(&self) -> Payload {
        json!({
            "name": self.name,
            "description": self.description,
            "amount": self.total(),
            "invoice_number": self.invoice_number,
            "items": self.items,
        })
    }
}

impl Strato {
    /// Request an express-checkout token for a purchase. The response payload
    /// carries the token and the checkout URL to open in a browser.
    pub fn prepare_paypal_purchase(&self, bill: &PayPalBill, live: bool) -> Result<PendingJson> {
        let mut values = json!({
            "purchase_details": bill.serialize_purchase(),
            "environment": if live { "live" } else { "sandbox" },
            "currency": bill.currency,
            "type": "purchase",
            "completed_cloudfunction": bill.payment_completed_function,
            "cancelled_cloudfunction": bill.payment_cancelled_function,
        });
        if let Some(url) = &bill.payment_completed_url {
            values["payment_completed_url"] = json!(url);
        }
        if let Some(url) = &bill.payment_cancelled_url {
            values["payment_cancelled_url"] = json!(url);
        }

        let request = self.request("paypal", "paypal/prepare")?.payload(values);
        Ok(self.dispatcher.submit(request))
    }

    /// Feed a browser redirect back into the flow. Returns `None` when the
    /// URL is not the update-status callback (PayPal is still interacting
    /// with the user); otherwise submits the status update and returns its
    /// handle.
    pub fn complete_paypal_purchase(&self, redirect_url: &str) -> Result<Option<PendingJson>> {
        if !redirect_url.contains("/paypal/update-status") {
            return Ok(None);
        }
        let request = self.request_absolute("paypal", redirect_url)?;
        Ok(Some(self.dispatcher.submit(request)))
    }

    /// Fetch details of a payment created by [`Self::prepare_paypal_purchase`].
    pub fn paypal_payment_details(&self, payment_id: &str) -> Result<PendingJson> {
        let request = self
            .request("paypal", "paypal/payment-details")?
            .field("payment_id", payment_id);
        Ok(self.dispatcher.submit(request))
    }
}
