//! Resolution of maker configs into tool documents.

use kodegen_maker_nsis::maker::{
    AppBuilderConfigHook, Arch, CodesignOptions, Error, HookSource, MakeContext,
    MakeContextBuilder, MakerNsisConfig, PackageSettings, UpdaterConfig, resolve,
    hook::{CommandSource, FileSource},
};
use serde_json::json;
use std::{
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn context(make_dir: &Path) -> MakeContext {
    MakeContextBuilder::new()
        .app_directory("out/ExampleApp-win32-x64")
        .make_dir(make_dir)
        .target_arch(Arch::X64)
        .package_settings(PackageSettings {
            product_name: "ExampleApp".into(),
            version: "1.2.3".into(),
            ..Default::default()
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn empty_config_resolves_to_defaults_only() {
    let ctx = context(Path::new("out/make"));
    let resolved = resolve(&MakerNsisConfig::default(), &ctx).await.unwrap();

    assert!(resolved.sign_options.is_none());
    assert!(resolved.app_update.is_none());
    assert_eq!(resolved.app_builder_config["win"]["target"][0]["target"], "nsis");
    assert_eq!(resolved.app_builder_config["buildVersion"], "1.2.3.0");
}

#[tokio::test]
async fn hook_mapping_is_merged_over_defaults() {
    let config = MakerNsisConfig::default().with_app_builder_config(
        AppBuilderConfigHook::from_fn(|| async {
            Ok(json!({ "foo": 1, "nsis": { "oneClick": false } }))
        }),
    );

    let resolved = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap();

    assert_eq!(resolved.app_builder_config["foo"], 1);
    assert_eq!(resolved.app_builder_config["nsis"]["oneClick"], false);
    // untouched defaults survive the merge
    assert_eq!(resolved.app_builder_config["nsis"]["perMachine"], false);
    assert_eq!(resolved.app_builder_config["compression"], "maximum");
}

#[tokio::test]
async fn hook_returning_non_mapping_is_rejected() {
    let config = MakerNsisConfig::default()
        .with_app_builder_config(AppBuilderConfigHook::from_fn(|| async { Ok(json!([1, 2])) }));

    let err = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HookContract { found: "array" }), "{err}");
}

#[tokio::test]
async fn hook_failure_aborts_resolution() {
    let config = MakerNsisConfig::default().with_app_builder_config(
        AppBuilderConfigHook::from_fn(|| async { Err(anyhow::anyhow!("config server down")) }),
    );

    let err = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HookFailed(_)));
    assert!(err.to_string().contains("config server down"));
}

#[tokio::test]
async fn missing_hook_file_is_reported_with_path() {
    let config = MakerNsisConfig::default().with_app_builder_config(
        HookSource::File(FileSource {
            file: fixture("does-not-exist.json"),
        })
        .into(),
    );

    let err = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fs { .. }), "{err}");
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[tokio::test]
async fn invalid_updater_url_fails_resolution() {
    let config = MakerNsisConfig {
        updater: Some(UpdaterConfig::new("not a url")),
        ..Default::default()
    };

    let err = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUpdaterUrl { .. }));
}

#[tokio::test]
async fn invalid_updater_url_is_rejected_before_hook_runs() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let config = MakerNsisConfig {
        updater: Some(UpdaterConfig::new("not a url")),
        ..Default::default()
    }
    .with_app_builder_config(AppBuilderConfigHook::from_fn(move || {
        flag.store(true, Ordering::SeqCst);
        async { Ok(json!({})) }
    }));

    let err = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUpdaterUrl { .. }), "{err}");
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn unsupported_arch_fails_resolution() {
    let ctx = MakeContextBuilder::new()
        .app_directory("app")
        .make_dir("out/make")
        .target_arch(Arch::Universal)
        .build()
        .unwrap();

    let err = resolve(&MakerNsisConfig::default(), &ctx).await.unwrap_err();
    assert!(matches!(err, Error::ArchError(_)));
}

#[tokio::test]
async fn codesign_receives_app_directory_from_context() {
    let config = MakerNsisConfig {
        codesign: Some(CodesignOptions {
            certificate_file: Some("certs/app.pfx".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let resolved = resolve(&config, &context(Path::new("out/make")))
        .await
        .unwrap();
    let sign = resolved.sign_options.unwrap();
    assert_eq!(sign.app_directory, Path::new("out/ExampleApp-win32-x64"));
    assert_eq!(
        sign.options.certificate_file,
        Some(PathBuf::from("certs/app.pfx"))
    );
}

#[tokio::test]
async fn fixture_config_writes_all_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let config = MakerNsisConfig::from_file(&fixture("maker.toml")).await.unwrap();
    let ctx = context(tmp.path());

    let resolved = resolve(&config, &ctx).await.unwrap();

    // builder.yml overrides perMachine from [nsis] and adds keys
    assert_eq!(resolved.app_builder_config["appId"], "com.example.app");
    assert_eq!(resolved.app_builder_config["nsis"]["perMachine"], false);
    assert_eq!(
        resolved.app_builder_config["nsis"]["deleteAppDataOnUninstall"],
        true
    );
    assert_eq!(resolved.app_builder_config["nsis"]["installerLanguages"][0], "en_US");
    assert_eq!(resolved.app_builder_config["publish"][0]["channel"], "beta");

    let out_dir = ctx.output_directory();
    let written = resolved.write_to(&out_dir).await.unwrap();
    assert_eq!(written.len(), 3);
    assert!(out_dir.starts_with(tmp.path()));

    let sign: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("sign-options.json")).unwrap())
            .unwrap();
    assert_eq!(sign["appDirectory"], "out/ExampleApp-win32-x64");
    assert_eq!(sign["certificateFile"], "certs/app.pfx");
    assert_eq!(sign["hashes"], json!(["sha256"]));

    let builder: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("app-builder.json")).unwrap())
            .unwrap();
    assert_eq!(builder["win"]["publisherName"][0], "Example Inc.");

    let app_update = std::fs::read_to_string(out_dir.join("app-update.yml")).unwrap();
    assert!(app_update.contains("provider: generic"), "{app_update}");
    assert!(app_update.contains("channel: beta"), "{app_update}");
    assert!(app_update.contains("updaterCacheDirName: example-app-updater"), "{app_update}");
    assert!(app_update.contains("Example Inc."), "{app_update}");
}

#[tokio::test]
async fn write_skips_absent_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = context(tmp.path());
    let resolved = resolve(&MakerNsisConfig::default(), &ctx).await.unwrap();

    let written = resolved.write_to(&ctx.output_directory()).await.unwrap();
    assert_eq!(written, vec![ctx.output_directory().join("app-builder.json")]);
}

#[cfg(unix)]
mod command_hook {
    use super::*;

    fn sh(script: &str, timeout_secs: Option<u64>) -> AppBuilderConfigHook {
        HookSource::Command(CommandSource {
            command: "sh".into(),
            args: vec!["-c".into(), script.into()],
            cwd: None,
            timeout_secs,
        })
        .into()
    }

    #[tokio::test]
    async fn stdout_json_is_merged() {
        let config = MakerNsisConfig::default()
            .with_app_builder_config(sh(r#"echo '{"appId":"com.example.cmd"}'"#, Some(10)));

        let resolved = resolve(&config, &context(Path::new("out/make")))
            .await
            .unwrap();
        assert_eq!(resolved.app_builder_config["appId"], "com.example.cmd");
    }

    #[tokio::test]
    async fn non_zero_exit_fails_hook() {
        let config = MakerNsisConfig::default()
            .with_app_builder_config(sh("echo oops >&2; exit 3", None));

        let err = resolve(&config, &context(Path::new("out/make")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HookFailed(_)));
        assert!(err.to_string().contains("oops"), "{err}");
    }

    #[tokio::test]
    async fn slow_command_times_out() {
        let config =
            MakerNsisConfig::default().with_app_builder_config(sh("sleep 5", Some(1)));

        let err = resolve(&config, &context(Path::new("out/make")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HookTimeout(_)), "{err}");
    }

    #[tokio::test]
    async fn command_is_not_run_for_rejected_config() {
        let tmp = tempfile::tempdir().unwrap();
        let marker = tmp.path().join("ran");
        let config = MakerNsisConfig {
            updater: Some(UpdaterConfig::new("not a url")),
            ..Default::default()
        }
        .with_app_builder_config(sh(
            &format!("touch '{}'; echo '{{}}'", marker.display()),
            Some(10),
        ));

        let err = resolve(&config, &context(Path::new("out/make")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUpdaterUrl { .. }), "{err}");
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn missing_program_is_command_failure() {
        let config = MakerNsisConfig::default().with_app_builder_config(
            HookSource::Command(CommandSource {
                command: "definitely-not-a-real-program-4821".into(),
                args: vec![],
                cwd: None,
                timeout_secs: None,
            })
            .into(),
        );

        let err = resolve(&config, &context(Path::new("out/make")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }), "{err}");
    }
}
