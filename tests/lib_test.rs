//! Library integration tests.

use langtable::LangtableError;

#[test]
fn error_types_are_public() {
    let err = LangtableError::CatalogUnavailable {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> langtable::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use langtable::cli::Cli;
    use langtable::render::OutputFormat;

    let cli = Cli::parse_from(["langtable", "-o", "json"]);
    assert_eq!(cli.format(), OutputFormat::Json);
}
