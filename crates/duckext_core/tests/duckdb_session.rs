use duckext_core::{
    open_db, BatchInstaller, DbError, DuckDbEngine, EngineSession, ExtensionEngine,
    ExtensionSource, InstallerConfig,
};

#[test]
fn open_db_creates_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scratch.duckdb");

    let conn = open_db(&path).unwrap();
    let answer: i64 = conn.query_row("SELECT 42;", [], |row| row.get(0)).unwrap();
    assert_eq!(answer, 42);
    assert!(path.exists());
}

#[test]
fn open_db_in_missing_directory_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("scratch.duckdb");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::DuckDb(_)));
}

#[test]
fn duckdb_session_rejects_blank_names_before_sql() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = DuckDbEngine
        .open(&dir.path().join("scratch.duckdb"))
        .unwrap();

    let err = session
        .install("  ", ExtensionSource::Default)
        .unwrap_err();
    assert!(matches!(err, DbError::InvalidIdentifier(_)));
    let err = session.load("").unwrap_err();
    assert!(matches!(err, DbError::InvalidIdentifier(_)));

    session.close().unwrap();
}

#[test]
fn duckdb_batch_with_no_extensions_removes_scratch_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("install_extensions.duckdb");
    let config = InstallerConfig::default()
        .with_db_path(&path)
        .with_core(Vec::<String>::new())
        .with_community(Vec::<String>::new());

    let mut out = Vec::new();
    let report = BatchInstaller::new(DuckDbEngine, config).run(&mut out);

    assert!(report.is_complete_success());
    assert!(!path.exists());
    assert!(!dir.path().join("install_extensions.duckdb.wal").exists());
}

#[test]
fn duckdb_batch_with_unwritable_path_reports_and_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("install_extensions.duckdb");
    let config = InstallerConfig::default().with_db_path(&path);

    let mut out = Vec::new();
    let report = BatchInstaller::new(DuckDbEngine, config).run(&mut out);
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("❌ Extension installation error: failed to open scratch database"));
    assert!(!output.lines().any(|line| line.starts_with('✓') || line.starts_with('⚠')));
    assert_eq!(
        output.lines().last(),
        Some("🎉 DuckDB extension installation completed")
    );
    assert!(report.outcomes.is_empty());
    assert!(report.fatal.is_some());
    assert!(!path.exists());
}

#[test]
fn duckdb_session_executes_rendered_install_and_load_statements() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = DuckDbEngine
        .open(&dir.path().join("scratch.duckdb"))
        .unwrap();

    let load_err = session.load("definitely_missing_ext").unwrap_err();
    assert!(matches!(load_err, DbError::DuckDb(_)));
    assert!(!load_err.to_string().contains("Parser Error"), "{load_err}");

    let install_err = session
        .install("definitely_missing_ext", ExtensionSource::Community)
        .unwrap_err();
    assert!(matches!(install_err, DbError::DuckDb(_)));
    assert!(
        !install_err.to_string().contains("Parser Error"),
        "{install_err}"
    );

    session.close().unwrap();
}
