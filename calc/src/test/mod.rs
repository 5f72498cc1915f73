use libtest_mimic::{run_tests, Arguments, Outcome, Test};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
mod common;

use calc_emit_test::CalcEmitTest;
use common::*;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let test_files = collect_test_files()?;
    let tests = test_files.into_iter().map(TestCase::new).collect();
    run_tests(&args, tests, TestCase::drive_test).exit();
}

/// Collects all `.calc` system test files, starting from calc/src/test and visiting all nested
/// directories.
fn collect_test_files() -> Result<Vec<Test<PathBuf>>, Box<dyn Error>> {
    let root_test_path = Path::new("src/test");
    let mut dirs_to_visit = vec![root_test_path.to_path_buf()];
    let mut tests = Vec::with_capacity(64);
    while let Some(dir) = dirs_to_visit.pop() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                dirs_to_visit.push(path);
                continue;
            }
            if path.extension() == Some(OsStr::new("calc")) {
                let name = path.strip_prefix(root_test_path)?.display().to_string();

                tests.push(Test {
                    name,
                    kind: "system".to_owned(),
                    is_ignored: false,
                    is_bench: false,
                    data: path,
                });
            }
        }
    }
    tests.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tests)
}

#[derive(Clone)]
struct TestCase {
    path: PathBuf,
    variant: Result<CalcEmitTest, String>,
}

impl TestCase {
    /// Executes a calc system test.
    fn drive_test(test: &Test<Self>) -> Outcome {
        match test.data.variant.clone() {
            Ok(tc) => tc.drive_test(&test.name, &test.data.path),
            Err(construction_failure) => fail!("{}", construction_failure),
        }
    }

    /// Creates a test case from a calc system test file.
    fn new(test_file: Test<PathBuf>) -> Test<Self> {
        let variant = fs::read_to_string(&test_file.data)
            .map_err(|e| e.to_string())
            .and_then(|content| CalcEmitTest::new(&test_file, content));

        Test {
            name: test_file.name,
            kind: test_file.kind,
            is_ignored: test_file.is_ignored,
            is_bench: test_file.is_bench,
            data: TestCase {
                path: test_file.data,
                variant,
            },
        }
    }
}
