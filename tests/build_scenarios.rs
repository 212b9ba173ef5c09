// tests/build_scenarios.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use cssdts::config::PluginOptions;
use cssdts::errors::CssDtsError;
use cssdts::plugin::{HostConfig, Plugin};
use cssdts::types::ExecutionMode;
use cssdts_test_utils::builders::OptionsBuilder;
use cssdts_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn write(path: &Path, contents: &str) -> TestResult {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn plugin(options: PluginOptions, root: &Path, mode: ExecutionMode) -> Result<Plugin, Box<dyn Error>> {
    let mut plugin = Plugin::new(options)?;
    plugin.config(&mut HostConfig::default());
    plugin.config_resolved(root, mode)?;
    Ok(plugin)
}

#[tokio::test]
async fn defaults_write_declarations_in_place() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let css = dir.path().join("sample.module.css");
    write(&css, ".container { display: flex; }\n")?;

    let plugin = plugin(PluginOptions::default(), dir.path(), ExecutionMode::Build)?;
    let summary = plugin.build_start().await?;

    assert_eq!(summary.written, 1);
    let declaration = fs::read_to_string(dir.path().join("sample.module.css.d.ts"))?;
    assert!(declaration.contains("readonly \"container\": string;"));
    Ok(())
}

#[tokio::test]
async fn root_dir_mirrors_the_tree_below_src() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("generated");
    write(
        &dir.path().join("src/components/Button.module.css"),
        ".button { color: blue; }\n",
    )?;

    let options = OptionsBuilder::new().root_dir(&out).build();
    let plugin = plugin(options, dir.path(), ExecutionMode::Build)?;
    plugin.build_start().await?;

    let declaration = out.join("components/Button.module.css.d.ts");
    assert!(declaration.is_file());
    assert!(fs::read_to_string(&declaration)?.contains("\"button\""));
    assert!(!out.join("src").exists());
    assert!(!dir.path().join("src/components/Button.module.css.d.ts").exists());
    Ok(())
}

#[tokio::test]
async fn custom_include_and_ignore_select_files() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    write(&dir.path().join("sample.styles.css"), ".a { }")?;
    write(&dir.path().join("__sample.styles.css"), ".b { }")?;
    write(&dir.path().join("other.module.css"), ".c { }")?;

    let options = OptionsBuilder::new()
        .include("**/*.styles.css")
        .ignore("**/__*")
        .build();
    let plugin = plugin(options, dir.path(), ExecutionMode::Build)?;
    let summary = plugin.build_start().await?;

    assert_eq!(summary.written, 1);
    assert!(dir.path().join("sample.styles.css.d.ts").is_file());
    assert!(!dir.path().join("__sample.styles.css.d.ts").exists());
    assert!(!dir.path().join("other.module.css.d.ts").exists());
    Ok(())
}

#[tokio::test]
async fn regenerating_unchanged_content_is_byte_identical() -> TestResult {
    let dir = tempfile::tempdir()?;
    write(&dir.path().join("a.module.css"), ".z { } .y-item { } .x { }")?;

    let plugin = plugin(PluginOptions::default(), dir.path(), ExecutionMode::Build)?;
    plugin.build_start().await?;
    let first = fs::read(dir.path().join("a.module.css.d.ts"))?;
    plugin.build_start().await?;
    let second = fs::read(dir.path().join("a.module.css.d.ts"))?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn dependency_directories_and_declarations_are_not_scanned() -> TestResult {
    let dir = tempfile::tempdir()?;
    write(&dir.path().join("node_modules/pkg/lib.module.css"), ".lib { }")?;
    write(&dir.path().join("src/app.module.css"), ".app { }")?;

    let plugin = plugin(PluginOptions::default(), dir.path(), ExecutionMode::Build)?;
    plugin.build_start().await?;
    // A second discovery must not pick up the declaration just written.
    let found = plugin.discover()?;

    assert_eq!(found, vec![dir.path().join("src/app.module.css")]);
    assert!(!dir.path().join("node_modules/pkg/lib.module.css.d.ts").exists());
    Ok(())
}

#[tokio::test]
async fn build_mode_fails_on_a_malformed_stylesheet() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    write(&dir.path().join("good.module.css"), ".ok { }")?;
    write(&dir.path().join("bad.module.css"), ".broken { color: red;")?;

    let plugin = plugin(PluginOptions::default(), dir.path(), ExecutionMode::Build)?;
    match plugin.build_start().await {
        Err(CssDtsError::BuildFailed { failed, total, first }) => {
            assert_eq!(failed, 1);
            assert_eq!(total, 2);
            assert!(first.contains("bad.module.css"));
        }
        other => panic!("Expected BuildFailed, got: {:?}", other),
    }
    // The other file still ran to completion.
    assert!(dir.path().join("good.module.css.d.ts").is_file());
    assert!(!dir.path().join("bad.module.css.d.ts").exists());
    Ok(())
}

#[tokio::test]
async fn watch_mode_logs_and_continues_on_a_malformed_stylesheet() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    write(&dir.path().join("good.module.css"), ".ok { }")?;
    write(&dir.path().join("bad.module.css"), ".broken { color: red;")?;

    let plugin = plugin(PluginOptions::default(), dir.path(), ExecutionMode::Watch)?;
    let summary = plugin.build_start().await?;

    assert_eq!(summary.written, 1);
    assert_eq!(summary.failed, 1);
    assert!(dir.path().join("good.module.css.d.ts").is_file());
    Ok(())
}

#[tokio::test]
async fn missing_scan_root_is_an_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let options = OptionsBuilder::new()
        .root_dir("types")
        .src_dir("does-not-exist")
        .build();
    let plugin = plugin(options, dir.path(), ExecutionMode::Build)?;

    assert!(plugin.build_start().await.is_err());
    Ok(())
}
