//! Cross-process determinism of the suggestion stream.
//!
//! Runs the `cursor_fixture` binary from several working directories and
//! environments. Every corrupted and padded list depends only on the
//! session's cursor and request counter, so the output is pinned.

use std::path::{Path, PathBuf};
use std::process::Command;

const FIXTURE: &str = env!("CARGO_BIN_EXE_cursor_fixture");

struct Variant {
    name: &'static str,
    work_dir: PathBuf,
    env: &'static [(&'static str, &'static str)],
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("workspace root exists")
        .to_path_buf()
}

fn fixture_output(variant: &Variant) -> String {
    let output = Command::new(FIXTURE)
        .current_dir(&variant.work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG")
        .envs(variant.env.iter().copied())
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {FIXTURE} ({}): {e}", variant.name));

    assert!(
        output.status.success(),
        "cursor_fixture ({}) exited with {}: stderr={}",
        variant.name,
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let variants = [
        Variant {
            name: "baseline",
            work_dir: root.clone(),
            env: &[],
        },
        Variant {
            name: "cwd",
            work_dir: std::env::temp_dir(),
            env: &[],
        },
        Variant {
            name: "locale",
            work_dir: root.clone(),
            env: &[("LC_ALL", "C"), ("LANG", "C")],
        },
        Variant {
            name: "spurious env",
            work_dir: root,
            env: &[
                ("DINING_NOISE", "should_not_matter"),
                ("RUST_LOG", "trace"),
                ("TZ", "America/New_York"),
            ],
        },
    ];

    let baseline = fixture_output(&variants[0]);
    let lines: Vec<&str> = baseline.lines().collect();
    assert_eq!(lines.len(), 10, "unexpected output:\n{baseline}");
    assert_eq!(
        lines[0],
        "at_counter_above_mug=sha256:cd98ceea27bd7f717399f9a634809e1cbafce2f0aa64d5f7cbf0288ff3bfccf0"
    );
    assert_eq!(lines[8], "final_cursor=1824287960");
    assert_eq!(lines[9], "request_counter=46");

    for variant in &variants[1..] {
        assert_eq!(
            baseline,
            fixture_output(variant),
            "output differs under {}",
            variant.name
        );
    }
}
