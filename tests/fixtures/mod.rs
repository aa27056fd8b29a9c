//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Two seats in row 1, groups A (red) and B (green).
pub const SCENARIO_LAYOUT: &str = r##"{
  "s1": {"row": 1, "col": 1, "groupName": "A", "color": "#ff0000"},
  "s2": {"row": 1, "col": 2, "groupName": "B", "color": "00ff00"}
}"##;

/// Seat 1-1 in partition A, seat 1-2 in partition C (no layout color).
pub const SCENARIO_SEATS: &str = "1-1,A,SchoolX\n1-2,C,SchoolY\n";

/// Path to the seatchart binary
pub fn seatchart_bin() -> &'static str {
    env!("CARGO_BIN_EXE_seatchart")
}

/// Temporary working directory with an isolated config directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("config")).expect("Failed to create config dir");
        Self { dir }
    }

    /// Creates a workspace holding the scenario inputs as `layout.json` and `seats.csv`.
    pub fn scenario() -> Self {
        let workspace = Self::new();
        workspace.write("layout.json", SCENARIO_LAYOUT);
        workspace.write("seats.csv", SCENARIO_SEATS);
        workspace
    }

    /// Workspace root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Isolated config directory passed as `SEATCHART_CONFIG_DIR`.
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Writes a file relative to the workspace root.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Builds a command running in the workspace with isolated config.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(seatchart_bin());
        cmd.current_dir(self.dir.path());
        cmd.env("SEATCHART_CONFIG_DIR", self.config_dir());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts that a command exited with the given code, printing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Reads a named part from a zip archive on disk.
pub fn read_zip_part(path: &Path, name: &str) -> String {
    use std::io::Read;

    let file = fs::File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Not a zip archive");
    let mut part = archive.by_name(name).expect("Missing archive part");
    let mut content = String::new();
    part.read_to_string(&mut content)
        .expect("Failed to read archive part");
    content
}

/// Writes a single-sheet workbook of string cells.
pub fn write_xlsx_table(path: &Path, sheet_name: &str, rows: &[&[&str]]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).expect("Invalid sheet name");

    for (row, values) in (0u32..).zip(rows) {
        for (col, value) in (0u16..).zip(values.iter()) {
            sheet
                .write_string(row, col, *value)
                .expect("Failed to write cell");
        }
    }

    workbook.save(path).expect("Failed to save workbook");
}
