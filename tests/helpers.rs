// Shared helpers: stub collaborator executables for orchestrator tests.
//
// The stubs are small POSIX shell scripts standing in for subfinder and httpx.
// They honour `-h` (dependency check) and otherwise mimic the real tools'
// input/output contract.
#![cfg(unix)]
#![allow(dead_code)] // each test target uses a subset

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use recon_status::{Config, MaxHosts};

/// Writes an executable script named `name` into `dir` and returns its path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub script");
    let mut perms = std::fs::metadata(&path)
        .expect("Failed to stat stub script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to chmod stub script");
    path
}

/// A subfinder stand-in that writes `hosts` to the `-o` file.
///
/// The path it was asked to write is recorded in `<dir>/subfinder_output_path`
/// so tests can check the staging directory was cleaned up.
pub fn stub_subfinder(dir: &Path, hosts: &[&str]) -> PathBuf {
    let marker = dir.join("subfinder_output_path");
    let lines: String = hosts.iter().map(|h| format!("{h}\\n")).collect();
    let body = format!(
        r#"out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; shift; fi
  shift
done
[ -z "$out" ] && exit 0
printf '%s' "$out" > '{marker}'
printf '{lines}' > "$out""#,
        marker = marker.display()
    );
    write_script(dir, "subfinder", &body)
}

/// An httpx stand-in that drains stdin and then runs `body`.
pub fn stub_httpx(dir: &Path, body: &str) -> PathBuf {
    let script = format!(
        r#"case "$1" in -h) exit 0;; esac
cat > /dev/null
{body}"#
    );
    write_script(dir, "httpx", &script)
}

/// An httpx stand-in that prints `lines` as its JSON output.
pub fn stub_httpx_lines(dir: &Path, lines: &[&str]) -> PathBuf {
    let body: String = lines
        .iter()
        .map(|l| format!("echo '{l}'\n"))
        .collect();
    stub_httpx(dir, &body)
}

/// A config pointing at the given stubs and writing reports to `output`.
pub fn test_config(subfinder: &Path, httpx: &Path, output: &Path) -> Config {
    Config {
        domain: "example.com".to_string(),
        output: output.to_path_buf(),
        max_hosts: MaxHosts::Limit(2),
        simple: true,
        subfinder_bin: subfinder.to_string_lossy().into_owned(),
        httpx_bin: httpx.to_string_lossy().into_owned(),
        no_color: true,
        ..Default::default()
    }
}
