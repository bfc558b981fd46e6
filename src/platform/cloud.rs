use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use super::binding::{ServiceBinding, ServiceEntry};
use super::env::{EnvSource, ProcessEnv};

pub const VCAP_APPLICATION: &str = "VCAP_APPLICATION";
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// The platform's view of the running application and its bound services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudContext {
    application_name: Option<String>,
    bindings: Vec<ServiceBinding>,
}

impl CloudContext {
    pub fn new(application_name: Option<String>, bindings: Vec<ServiceBinding>) -> Self {
        Self {
            application_name,
            bindings,
        }
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn service_bindings(&self) -> &[ServiceBinding] {
        &self.bindings
    }
}

pub trait PlatformProvider {
    /// `None` when the process does not run on the platform, or the platform
    /// metadata cannot be read.
    fn try_context(&self) -> Option<CloudContext>;
}

/// Never reports a cloud context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlatform;

impl PlatformProvider for NoPlatform {
    fn try_context(&self) -> Option<CloudContext> {
        None
    }
}

/// Reports a fixed context.
#[derive(Debug, Clone, Default)]
pub struct StaticPlatform {
    context: CloudContext,
}

impl StaticPlatform {
    pub fn new(context: CloudContext) -> Self {
        Self { context }
    }
}

impl PlatformProvider for StaticPlatform {
    fn try_context(&self) -> Option<CloudContext> {
        Some(self.context.clone())
    }
}

/// Cloud Foundry detection through `VCAP_APPLICATION` and `VCAP_SERVICES`.
#[derive(Debug, Clone, Default)]
pub struct CloudFoundryProvider<E = ProcessEnv> {
    env: E,
}

impl CloudFoundryProvider<ProcessEnv> {
    pub fn from_process() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> CloudFoundryProvider<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvSource> PlatformProvider for CloudFoundryProvider<E> {
    fn try_context(&self) -> Option<CloudContext> {
        let Some(raw_application) = self.env.var(VCAP_APPLICATION) else {
            debug!("{VCAP_APPLICATION} not set, no cloud context");
            return None;
        };

        let application = match serde_json::from_str::<Value>(&raw_application) {
            Ok(Value::Object(application)) => application,
            Ok(_) => {
                warn!("{VCAP_APPLICATION} is not a json object, ignoring cloud context");
                return None;
            }
            Err(err) => {
                warn!("unable to parse {VCAP_APPLICATION}, ignoring cloud context: {err}");
                return None;
            }
        };

        let application_name = ["application_name", "name"]
            .iter()
            .find_map(|key| application.get(*key).and_then(Value::as_str))
            .map(ToOwned::to_owned);

        let bindings = match self.env.var(VCAP_SERVICES) {
            Some(raw_services) => match parse_services(&raw_services) {
                Ok(bindings) => bindings,
                Err(err) => {
                    warn!("unable to parse {VCAP_SERVICES}, ignoring cloud context: {err}");
                    return None;
                }
            },
            None => Vec::new(),
        };

        Some(CloudContext::new(application_name, bindings))
    }
}

/// Parses the `VCAP_SERVICES` document: service entries grouped by offering.
pub fn parse_services(raw: &str) -> Result<Vec<ServiceBinding>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let offerings: BTreeMap<String, Vec<ServiceEntry>> = serde_json::from_str(raw)?;
    let bindings = offerings
        .into_iter()
        .flat_map(|(offering, entries)| {
            entries
                .into_iter()
                .map(move |entry| ServiceBinding::from_entry(&offering, entry))
        })
        .collect();

    Ok(bindings)
}
