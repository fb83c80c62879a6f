//! Integration tests for INI file loading against the fixtures in
//! `tests/fixtures/`.

use std::path::{Path, PathBuf};

use figga::{Configuration, DefaultPolicy, FileLoader, LoadError};
use pretty_assertions::assert_eq;
use serial_test::serial;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn sorted_items(config: &Configuration<String>) -> Vec<(String, String)> {
    let mut items: Vec<_> = config
        .items()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    items.sort();
    items
}

#[test]
fn from_file_reads_default_section() {
    let config =
        Configuration::from_file(fixture("config_example_1.ini"), None, DefaultPolicy::None)
            .unwrap();
    assert_eq!(config.attr("ServerAliveInterval").unwrap().as_deref(), Some("45"));
    assert_eq!(config.get("serveraliveinterval").unwrap().as_deref(), Some("45"));
    assert_eq!(config.attr("ForwardX11").unwrap().as_deref(), Some("yes"));
    assert_eq!(config.attr("i_dont_exist").unwrap(), None);
}

#[test]
fn from_files_later_file_wins() {
    let config = Configuration::from_files(
        [fixture("config_example_1.ini"), fixture("config_example_2.ini")],
        None,
        DefaultPolicy::None,
    )
    .unwrap();
    assert_eq!(config.attr("ServerAliveInterval").unwrap().as_deref(), Some("45"));
    assert_eq!(config.attr("ForwardX11").unwrap().as_deref(), Some("no"));
    assert_eq!(
        config.attr("ControlPath").unwrap().as_deref(),
        Some("/home/fig/.ssh/%r@%h")
    );

    let reversed = Configuration::from_files(
        [fixture("config_example_2.ini"), fixture("config_example_1.ini")],
        None,
        DefaultPolicy::None,
    )
    .unwrap();
    assert_eq!(reversed.attr("ForwardX11").unwrap().as_deref(), Some("yes"));
}

#[test]
fn from_files_named_section() {
    let config = Configuration::from_files(
        [fixture("config_example_1.ini"), fixture("config_example_2.ini")],
        Some("topsecret.server.com"),
        DefaultPolicy::Fail,
    )
    .unwrap();
    assert_eq!(
        sorted_items(&config),
        vec![
            ("forwardx11".to_string(), "no".to_string()),
            ("port".to_string(), "2222".to_string()),
        ]
    );
    assert_eq!(config.get_parsed::<u16>("port").unwrap(), Some(2222));
    assert_eq!(config.get_bool("forwardx11").unwrap(), Some(false));
    assert!(config.get("compressionlevel").is_err());
    assert!(config.get("user").is_err());
}

#[test]
fn missing_section_is_empty() {
    let config = Configuration::from_file(
        fixture("config_example_1.ini"),
        Some("no.such.host"),
        DefaultPolicy::None,
    )
    .unwrap();
    assert!(config.is_empty());
    assert_eq!(config.get("compression").unwrap(), None);
}

#[test]
fn file_loader_section_inherits_defaults() {
    let config = FileLoader::new()
        .section("topsecret.server.com")
        .load([fixture("config_example_1.ini")], DefaultPolicy::Fail)
        .unwrap();
    assert_eq!(config.get("port").unwrap().as_deref(), Some("50022"));
    assert_eq!(config.get("compressionlevel").unwrap().as_deref(), Some("9"));
    assert_eq!(config.len(), 5);
}

#[test]
fn missing_file_is_not_an_error() {
    let config = Configuration::from_files(
        [fixture("does_not_exist.ini"), fixture("config_example_1.ini")],
        None,
        DefaultPolicy::None,
    )
    .unwrap();
    assert_eq!(config.len(), 4);

    let empty =
        Configuration::from_file(fixture("does_not_exist.ini"), None, DefaultPolicy::None).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn malformed_file_aborts_the_load() {
    let err = Configuration::from_files(
        [fixture("config_example_1.ini"), fixture("malformed.ini")],
        None,
        DefaultPolicy::None,
    )
    .unwrap_err();
    match err {
        LoadError::Parse { path, source } => {
            assert!(path.ends_with("malformed.ini"));
            assert!(source.to_string().starts_with("line 3:"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn loading_twice_gives_identical_items() {
    let load = || {
        Configuration::from_files(
            [fixture("config_example_1.ini"), fixture("config_example_2.ini")],
            None,
            DefaultPolicy::None,
        )
        .unwrap()
    };
    assert_eq!(sorted_items(&load()), sorted_items(&load()));
}

#[test]
fn loader_rereads_changed_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("live.ini");
    std::fs::write(&path, "[DEFAULT]\nlevel = info\n")?;
    let before = Configuration::from_file(&path, None, DefaultPolicy::None)?;

    std::fs::write(&path, "[DEFAULT]\nlevel = debug\n")?;
    let after = Configuration::from_file(&path, None, DefaultPolicy::Fail)?;

    assert_eq!(before.get("level")?.as_deref(), Some("info"));
    assert_eq!(after.get("level")?.as_deref(), Some("debug"));
    Ok(())
}

#[test]
#[serial]
fn relative_paths_follow_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("local.ini"), "[DEFAULT]\nwhere = tempdir\n").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = Configuration::from_file("local.ini", None, DefaultPolicy::None);
    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.get("where").unwrap().as_deref(), Some("tempdir"));
}

#[test]
fn file_loader_logs_through_tracing() {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_env_filter(tracing_subscriber::EnvFilter::new("figga=debug"))
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        FileLoader::new()
            .load([fixture("does_not_exist.ini")], DefaultPolicy::None)
            .unwrap();
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("config file not found, skipping"), "{output}");
}
