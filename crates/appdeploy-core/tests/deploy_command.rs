//! Tests for the deploy command and deploy planning.

mod support;

use std::path::{Path, PathBuf};

use appdeploy_core::commands::{DeployCommand, DeployOptions, DeployPlan, DeployTarget};
use appdeploy_core::config::{AppEngineConfig, ConfigOverrides, ConfigStore};
use appdeploy_core::context::DeployContext;
use appdeploy_core::deploy::{APPENGINE_CONFIG, DeployTargetError, DeployableKind, GCLOUD_CONFIG};
use appdeploy_core::types::Environment;
use tempfile::TempDir;

use support::sdk::{PROJECT_GCLOUD, PROJECT_XML, RecordingRunner, StubSdk, appengine_web_xml};

fn touch(dir: &Path, name: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, "").unwrap();
    path
}

fn standard_config() -> AppEngineConfig {
    let mut config = AppEngineConfig::new();
    config.deploy.project_id = Some("my-project".to_string());
    config.deploy.version = Some("v1".to_string());
    config
}

fn flexible_config() -> AppEngineConfig {
    let mut config = standard_config();
    config.environment = Environment::Flexible;
    config
}

#[test]
fn deploy_all_standard_uses_generated_directory() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), standard_config());
    let app_yaml = touch(ctx.staging_dir(), "app.yaml");
    let generated = ctx.staging_dir().join("WEB-INF/appengine-generated");
    let cron_yaml = touch(&generated, "cron.yaml");
    let queue_yaml = touch(&generated, "queue.yaml");
    touch(&generated, "invalid.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    let report = DeployCommand::new(&ctx)
        .execute(&DeployOptions::new(DeployTarget::All), &sdk, &runner)
        .unwrap();

    assert!(report.executed);
    let requests = runner.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].deployables, vec![app_yaml, cron_yaml, queue_yaml]);
    assert_eq!(requests[0].project_id.as_deref(), Some("my-project"));
    assert_eq!(requests[0].version.as_deref(), Some("v1"));
}

#[test]
fn deploy_all_flexible_reads_appengine_directory() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), flexible_config());
    let app_yaml = touch(ctx.staging_dir(), "app.yaml");
    let appengine = temp.path().join("src/main/appengine");
    let dispatch_yaml = touch(&appengine, "dispatch.yaml");
    let elsewhere = touch(temp.path(), "queue.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    DeployCommand::new(&ctx)
        .execute(&DeployOptions::new(DeployTarget::All), &sdk, &runner)
        .unwrap();

    let requests = runner.requests.borrow();
    assert_eq!(requests[0].deployables, vec![app_yaml, dispatch_yaml]);
    assert!(!requests[0].deployables.contains(&elsewhere));
}

#[test]
fn deploy_app_only_sends_app_yaml() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), standard_config());
    let app_yaml = touch(ctx.staging_dir(), "app.yaml");
    touch(ctx.staging_dir(), "cron.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    DeployCommand::new(&ctx)
        .execute(&DeployOptions::new(DeployTarget::App), &sdk, &runner)
        .unwrap();

    assert_eq!(runner.requests.borrow()[0].deployables, vec![app_yaml]);
}

#[test]
fn deploy_single_descriptor_requires_the_file() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), flexible_config());
    touch(ctx.staging_dir(), "app.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    let err = DeployCommand::new(&ctx)
        .execute(
            &DeployOptions::new(DeployTarget::Descriptor(DeployableKind::Cron)),
            &sdk,
            &runner,
        )
        .unwrap_err();

    assert!(err.to_string().contains("cron.yaml not found"));
    assert!(runner.requests.borrow().is_empty());
}

#[test]
fn deploy_single_descriptor_from_appengine_directory() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), flexible_config());
    std::fs::create_dir_all(ctx.staging_dir()).unwrap();
    let index_yaml = touch(ctx.appengine_dir(), "index.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    DeployCommand::new(&ctx)
        .execute(
            &DeployOptions::new(DeployTarget::Descriptor(DeployableKind::Index)),
            &sdk,
            &runner,
        )
        .unwrap();

    assert_eq!(runner.requests.borrow()[0].deployables, vec![index_yaml]);
}

#[test]
fn deploy_fails_when_staging_is_missing() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), standard_config());

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    let err = DeployCommand::new(&ctx)
        .execute(&DeployOptions::new(DeployTarget::All), &sdk, &runner)
        .unwrap_err();

    assert!(err.to_string().contains("Staging directory does not exist"));
}

#[test]
fn dry_run_does_not_invoke_runner() {
    let temp = TempDir::new().unwrap();
    let ctx = DeployContext::new(temp.path().to_path_buf(), standard_config());
    touch(ctx.staging_dir(), "app.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    let report = DeployCommand::new(&ctx)
        .execute(
            &DeployOptions::new(DeployTarget::App).with_dry_run(true),
            &sdk,
            &runner,
        )
        .unwrap();

    assert!(!report.executed);
    assert!(runner.requests.borrow().is_empty());
    let line = report.command_line(Path::new("gcloud"));
    assert!(line.starts_with("gcloud app deploy "));
    assert!(line.contains("--project=my-project"));
    assert!(line.ends_with("--version=v1 --quiet"));
}

#[test]
fn unresolvable_project_stops_before_deploying() {
    let temp = TempDir::new().unwrap();
    let mut config = flexible_config();
    config.deploy.project_id = Some(APPENGINE_CONFIG.to_string());
    let ctx = DeployContext::new(temp.path().to_path_buf(), config);
    touch(ctx.staging_dir(), "app.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    let err = DeployCommand::new(&ctx)
        .execute(&DeployOptions::new(DeployTarget::App), &sdk, &runner)
        .unwrap_err();

    let target_err = err.downcast_ref::<DeployTargetError>().unwrap();
    assert!(target_err.is_unresolvable());
    assert!(runner.requests.borrow().is_empty());
}

#[test]
fn plan_resolves_sentinels_for_standard() {
    let temp = TempDir::new().unwrap();
    let mut config = AppEngineConfig::new();
    config.deploy.project_id = Some(APPENGINE_CONFIG.to_string());
    config.deploy.version = Some(GCLOUD_CONFIG.to_string());
    let ctx = DeployContext::new(temp.path().to_path_buf(), config);
    let descriptor = ctx.descriptor_path().to_path_buf();
    std::fs::create_dir_all(descriptor.parent().unwrap()).unwrap();
    std::fs::write(&descriptor, appengine_web_xml(Some(PROJECT_XML), None)).unwrap();

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let plan = DeployPlan::build(&ctx, &sdk).unwrap();

    assert_eq!(plan.project_id.as_deref(), Some(PROJECT_XML));
    assert_eq!(plan.version, None);
}

#[test]
fn flexible_deploy_ignores_unrelated_project_settings() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("appengine.toml"),
        format!(
            "environment = \"flexible\"\n\n\
             [deploy]\nproject_id = \"my-project\"\nversion = \"v1\"\n\n\
             [run]\nproject_id = \"{APPENGINE_CONFIG}\"\n"
        ),
    )
    .unwrap();
    let store = ConfigStore::from_project_root(temp.path().to_path_buf());
    let ctx = DeployContext::load(&store, ConfigOverrides::default()).unwrap();
    let app_yaml = touch(ctx.staging_dir(), "app.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let runner = RecordingRunner::default();
    let report = DeployCommand::new(&ctx)
        .execute(&DeployOptions::new(DeployTarget::App), &sdk, &runner)
        .unwrap();

    assert_eq!(report.plan.project_id.as_deref(), Some("my-project"));
    assert_eq!(report.plan.version.as_deref(), Some("v1"));
    assert_eq!(runner.requests.borrow()[0].deployables, vec![app_yaml]);
}

#[test]
fn request_carries_deploy_flags() {
    let temp = TempDir::new().unwrap();
    let mut config = flexible_config();
    config.deploy.promote = Some(false);
    config.deploy.stop_previous_version = Some(true);
    config.deploy.bucket = Some("gs://staging-bucket".to_string());
    config.deploy.image_url = Some("gcr.io/my-project/app".to_string());
    let ctx = DeployContext::new(temp.path().to_path_buf(), config);
    touch(ctx.staging_dir(), "app.yaml");

    let sdk = StubSdk::with_project(PROJECT_GCLOUD);
    let (_, request) = DeployCommand::new(&ctx)
        .prepare(DeployTarget::App, &sdk)
        .unwrap();

    assert_eq!(request.promote, Some(false));
    assert_eq!(request.stop_previous_version, Some(true));
    assert_eq!(request.bucket.as_deref(), Some("gs://staging-bucket"));
    assert_eq!(request.image_url.as_deref(), Some("gcr.io/my-project/app"));
}
