//! Templated email delivery.

use std::collections::HashMap;

use serde_json::json;

use strato_core::error::Result;

use crate::dispatch::PendingJson;

use super::Strato;

impl Strato {
    /// Send an email to `recipient` using a server-side template; `variables`
    /// fill the template's placeholders.
    pub fn send_email(
        &self,
        template_code: &str,
        recipient: &str,
        subject: &str,
        variables: &HashMap<String, String>,
    ) -> Result<PendingJson> {
        let request = self.request("email", "email")?.payload(json!({
            "template_code": template_code,
            "recipient": recipient,
            "subject": subject,
            "variables": variables,
        }));
        Ok(self.dispatcher.submit(request))
    }
}
