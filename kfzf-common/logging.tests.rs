use super::*;

#[test]
fn default_filter_test() {
    assert_eq!(
        "warn,kfzf=info,kfzf_kube=info,kfzf_config=info",
        default_filter("kfzf", false)
    );
    assert_eq!(
        "warn,my_app=debug,my_app_kube=debug,my_app_config=debug",
        default_filter("my-app", true)
    );
}
