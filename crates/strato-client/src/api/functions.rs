//! Server-side code execution: cloud functions, applets, shared APIs.

use std::collections::HashMap;

use strato_core::error::Result;

use crate::dispatch::PendingJson;

use super::Strato;

impl Strato {
    /// Execute a cloud function on demand; `params` surface to the function
    /// as POST parameters.
    pub fn execute_cloud_function(
        &self,
        code: &str,
        params: HashMap<String, String>,
    ) -> Result<PendingJson> {
        let mut request = self.request("cloudfunction", &format!("cloudfunction/{code}"))?;
        for (name, value) in params {
            request = request.field(name, value);
        }
        Ok(self.dispatcher.submit(request))
    }

    /// Execute an applet on demand.
    pub fn execute_applet(
        &self,
        code: &str,
        params: HashMap<String, String>,
    ) -> Result<PendingJson> {
        let mut request = self.request("applet", &format!("applet/{code}"))?;
        for (name, value) in params {
            request = request.field(name, value);
        }
        Ok(self.dispatcher.submit(request))
    }

    /// Execute a shared API. `password` is required only when the shared API
    /// is protected.
    pub fn execute_shared_api(
        &self,
        code: &str,
        password: Option<&str>,
        params: HashMap<String, String>,
    ) -> Result<PendingJson> {
        let mut request = self.request("shared-api", &format!("shared/{code}"))?;
        for (name, value) in params {
            request = request.field(name, value);
        }
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            request = request.field("cb_shared_password", password);
        }
        Ok(self.dispatcher.submit(request))
    }
}
