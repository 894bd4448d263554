use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn cron_job_json() -> Value {
    json!({
        "apiVersion": "batch/v1",
        "kind": "CronJob",
        "metadata": {
            "name": "report",
            "namespace": "shop",
            "labels": { "app": "report" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": { "schedule": "*/5 * * * *", "jobTemplate": {} },
        "status": {
            "active": [{ "kind": "Job", "name": "report-28571", "namespace": "shop" }],
            "lastScheduleTime": "2024-05-01T09:55:00Z"
        }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let cron_job = CronJob::from_dynamic(&cron_job_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("*/5 * * * *", cron_job.schedule());
    assert_eq!(
        "prod shop report */5_*_*_*_* false 1 2024-05-01T09:55:00Z 3d app=report",
        cron_job.render_at(&now())
    );
}

#[test]
fn schedule_is_a_single_column_test() {
    let cron_job = CronJob::from_dynamic(&cron_job_json(), &CtorConfig::new("prod")).unwrap();
    let line = cron_job.render_at(&now());

    assert_eq!(9, line.split(' ').count());
    assert_eq!(Some("*/5_*_*_*_*"), line.split(' ').nth(3));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<CronJobObject>(cron_job_json()).unwrap();

    let from_typed = CronJob::from_typed(&typed, &config).unwrap();
    let from_dynamic = CronJob::from_dynamic(&cron_job_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case(json!({ "lastScheduleTime": "2024-05-01T09:55:00Z" }), "2024-05-01T09:55:00Z")]
#[case(json!({ "lastScheduleTime": "2024-05-01T09:55:00.000Z" }), "2024-05-01T09:55:00Z")]
#[case(json!({}), "")]
fn last_schedule_test(#[case] status: Value, #[case] expected: &str) {
    let mut object = cron_job_json();
    object["status"] = status;

    let cron_job = CronJob::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(expected, cron_job.columns()[3]);

    let typed = from_value::<CronJobObject>(object).unwrap();
    assert_eq!(expected, CronJob::from_typed(&typed, &CtorConfig::new("prod")).unwrap().columns()[3]);
}

#[test]
fn never_scheduled_render_test() {
    let mut object = cron_job_json();
    object["spec"]["suspend"] = json!(true);
    object.as_object_mut().unwrap().remove("status");

    let cron_job = CronJob::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod shop report */5_*_*_*_* true 0 None 3d app=report", cron_job.render_at(&now()));
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = CronJob::from_dynamic(&cron_job_json(), &config).unwrap();

    let mut object = cron_job_json();
    object["status"]["lastScheduleTime"] = json!("2024-05-01T10:00:00Z");
    assert!(current.has_changed(&CronJob::from_dynamic(&object, &config).unwrap()));

    let mut object = cron_job_json();
    object["status"]["active"] = json!([]);
    assert!(current.has_changed(&CronJob::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn invalid_last_schedule_test() {
    let mut object = cron_job_json();
    object["status"]["lastScheduleTime"] = json!("five minutes ago");

    let error = CronJob::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidTimestamp { .. }));
    assert_eq!(Some("status.lastScheduleTime"), error.path());
}

#[test]
fn wrong_typed_schedule_test() {
    let mut object = cron_job_json();
    object["spec"]["schedule"] = json!(5);

    let error = CronJob::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("spec.schedule"), error.path());
}
