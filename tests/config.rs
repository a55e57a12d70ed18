use std::path::{Path, PathBuf};
use vidremote::cli::Args;
use vidremote::config::{find_config_file, Config, FileConfig};
use vidremote::display::SurfaceKind;

fn make_args(port: Option<u16>, embed_base: Option<String>) -> Args {
    Args {
        port,
        localhost: false,
        config: None,
        embed_base,
        surface: None,
    }
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, &make_args(None, None));
    assert_eq!(config.port, 8080);
    assert_eq!(config.embed_base, "https://youtube.com/embed/");
    assert_eq!(config.surface, SurfaceKind::Log);
    assert!(!config.localhost, "localhost should default to false when neither CLI nor TOML sets it");
}

#[test]
fn test_cli_flag_overrides_default() {
    let config = Config::resolve(None, &make_args(Some(9000), None));
    assert_eq!(config.port, 9000);
}

#[test]
fn test_toml_overrides_default() {
    let file = FileConfig {
        port: Some(7777),
        embed_base: Some("https://player.example/".into()),
        ..Default::default()
    };
    let config = Config::resolve(Some(file), &make_args(None, None));
    assert_eq!(config.port, 7777);
    assert_eq!(config.embed_base, "https://player.example/");
}

#[test]
fn test_cli_overrides_toml() {
    let file = FileConfig {
        port: Some(7777),
        embed_base: Some("https://player.example/".into()),
        surface: Some(SurfaceKind::Stdout),
        ..Default::default()
    };
    let mut args = make_args(Some(9000), Some("https://cli.example/".into()));
    args.surface = Some(SurfaceKind::Log);
    let config = Config::resolve(Some(file), &args);
    assert_eq!(config.port, 9000); // CLI wins
    assert_eq!(config.embed_base, "https://cli.example/");
    assert_eq!(config.surface, SurfaceKind::Log);
}

#[test]
fn test_localhost_from_toml() {
    let file = FileConfig { localhost: Some(true), ..Default::default() };
    let config = Config::resolve(Some(file), &make_args(None, None));
    assert!(config.localhost);
}

#[test]
fn test_toml_parse() {
    let toml_str = "port = 9000\nembed_base = \"https://e.example/\"\nsurface = \"stdout\"\n";
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.port, Some(9000));
    assert_eq!(parsed.embed_base.as_deref(), Some("https://e.example/"));
    assert_eq!(parsed.surface, Some(SurfaceKind::Stdout));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    // Future keys must not break parsing
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn test_explicit_config_path_wins() {
    let found = find_config_file(Some(Path::new("/nonexistent/custom.toml")));
    assert_eq!(found, Some(PathBuf::from("/nonexistent/custom.toml")));
}
