// tests/unit_config.rs
use std::fs;

use recloc_core::config::Config;

struct TestDirectoryGuard {
    original: std::path::PathBuf,
}

impl TestDirectoryGuard {
    fn new(path: &std::path::Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        Self { original }
    }
}

impl Drop for TestDirectoryGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[test]
fn test_load_toml_from_cwd() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("recloc.toml"),
        "[locator]\nlength = 5\n\n[sweep]\nbase_count = 25\nmax_length = 3\n",
    )
    .unwrap();
    let _guard = TestDirectoryGuard::new(d.path());

    let c = Config::load();
    assert_eq!(c.locator.length, 5);
    assert_eq!(c.sweep.base_count, 25);
    assert_eq!(c.sweep.max_length, 3);
    // Unset keys keep their defaults.
    assert_eq!(c.sweep.max_multiplier, 4);
}
