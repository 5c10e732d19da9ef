//! Checks that every source file has a mirrored unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no logic of their own
    fn is_exempt(relative: &Path) -> bool {
        relative == Path::new("main.rs")
            || relative == Path::new("lib.rs")
            || relative.file_name().is_some_and(|name| name == "mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|e| io::Error::other(e.to_string()))?;
                found.insert(relative.to_path_buf());
            }
        }
        Ok(())
    }

    fn mirrored(dir: &str) -> BTreeSet<PathBuf> {
        let root = Path::new(dir);
        let mut found = BTreeSet::new();
        if let Err(error) = rust_files(root, root, &mut found) {
            assert!(!root.exists(), "Failed to scan {dir}: {error}");
        }
        found.retain(|path| !is_exempt(path));
        found
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = mirrored(UNIT_DIR);
        let missing: Vec<String> = mirrored(SRC_DIR)
            .iter()
            .filter(|path| !tests.contains(*path))
            .map(|path| format!("  - src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_file_has_a_source() {
        let sources = mirrored(SRC_DIR);
        let orphaned: Vec<String> = mirrored(UNIT_DIR)
            .iter()
            .filter(|path| !sources.contains(*path))
            .map(|path| format!("  - tests/unit/{}", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let root = Path::new("tests");
        let mut found = BTreeSet::new();
        rust_files(root, root, &mut found).unwrap();

        let empty: Vec<String> = found
            .iter()
            .filter(|path| !is_exempt(path))
            .filter(|path| {
                fs::read_to_string(root.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
