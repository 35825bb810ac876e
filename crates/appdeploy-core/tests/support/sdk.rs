use std::cell::RefCell;

use appdeploy_core::gcloud::{DeployRequest, DeployRunner, SdkConfig};

/// gcloud config stand-in with a fixed project.
pub struct StubSdk {
    project: Option<String>,
}

impl StubSdk {
    pub fn with_project(project: &str) -> Self {
        Self {
            project: Some(project.to_string()),
        }
    }

    pub fn empty() -> Self {
        Self { project: None }
    }
}

impl SdkConfig for StubSdk {
    fn project(&self) -> anyhow::Result<Option<String>> {
        Ok(self.project.clone())
    }
}

/// gcloud config that cannot be read, e.g. gcloud is not installed.
pub struct BrokenSdk;

impl SdkConfig for BrokenSdk {
    fn project(&self) -> anyhow::Result<Option<String>> {
        anyhow::bail!("Failed to run gcloud config list")
    }
}

/// Captures deploy requests instead of running gcloud.
#[derive(Default)]
pub struct RecordingRunner {
    pub requests: RefCell<Vec<DeployRequest>>,
}

impl DeployRunner for RecordingRunner {
    fn deploy(&self, request: &DeployRequest) -> anyhow::Result<()> {
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}

pub const PROJECT_XML: &str = "project-xml";
pub const VERSION_XML: &str = "version-xml";
pub const PROJECT_GCLOUD: &str = "project-gcloud";

pub fn appengine_web_xml(application: Option<&str>, version: Option<&str>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <appengine-web-app xmlns=\"http://appengine.google.com/ns/1.0\">\n",
    );
    if let Some(application) = application {
        xml.push_str(&format!("  <application>{application}</application>\n"));
    }
    if let Some(version) = version {
        xml.push_str(&format!("  <version>{version}</version>\n"));
    }
    xml.push_str("</appengine-web-app>\n");
    xml
}
