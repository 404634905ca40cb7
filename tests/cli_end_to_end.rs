//! End-to-end tests for the policy-index binary
//!
//! Each test builds a throwaway site in a temp directory (marked as a
//! repository root so config discovery never leaves it) and runs the compiled
//! binary there with `assert_cmd`.

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const START: &str = "<!-- AUTO-GENERATED-LIST:START -->";
const END: &str = "<!-- AUTO-GENERATED-LIST:END -->";

fn policy_index_in(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("policy-index"));
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn site(pages: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    for page in pages {
        fs::write(temp.path().join(page), "<html><body>policy</body></html>").unwrap();
    }
    temp
}

fn readme(inner: &str) -> String {
    format!("# Our apps\n\nSee below.\n\n{START}{inner}{END}\n\n## License\nMIT\n")
}

#[test]
fn no_arguments_regenerates_readme_and_index() {
    let temp = site(&[
        "my-app-privacy.html",
        "my-app-user-agreement.en.html",
        "my-app-support.zh-Hans.html",
    ]);
    fs::write(temp.path().join("README.md"), readme("\nold list\n")).unwrap();

    policy_index_in(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ README.md 已更新"))
        .stdout(predicate::str::contains("✅ index.html 索引已生成！"));

    let expected_line = "- **My App**: 隐私协议: [默认](my-app-privacy.html) ｜ \
                         用户协议: [en](my-app-user-agreement.en.html) ｜ \
                         技术支持: [zh-Hans](my-app-support.zh-Hans.html)";
    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        readme(&format!("\n{expected_line}\n"))
    );

    let index = fs::read_to_string(temp.path().join("index.html")).unwrap();
    assert!(index.contains("<a href=\"my-app-support.zh-Hans.html\">简体中文</a>"));
    assert!(index.contains("<a href=\"my-app-user-agreement.en.html\">英语</a>"));
}

#[test]
fn second_run_reports_readme_up_to_date() {
    let temp = site(&["app-privacy.html"]);
    fs::write(temp.path().join("README.md"), readme("")).unwrap();

    policy_index_in(temp.path()).assert().success();
    policy_index_in(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ README.md 已是最新"));
}

#[test]
fn missing_readme_is_a_warning_and_index_is_still_written() {
    let temp = site(&["app-privacy.html"]);

    policy_index_in(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ 未找到 README.md，跳过更新"));

    assert!(temp.path().join("index.html").is_file());
    assert!(!temp.path().join("README.md").exists());
}

#[test]
fn invalid_markers_exit_3_but_index_is_still_written() {
    let temp = site(&["app-privacy.html"]);
    let content = format!("# Apps\n{START}\nno end marker here\n");
    fs::write(temp.path().join("README.md"), &content).unwrap();

    policy_index_in(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid auto-generated markers"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert_eq!(fs::read_to_string(temp.path().join("README.md")).unwrap(), content);
    let index = fs::read_to_string(temp.path().join("index.html")).unwrap();
    assert!(index.contains("<a href=\"app-privacy.html\">"));
}

#[test]
fn check_mode_exits_5_when_stale_and_0_when_current() {
    let temp = site(&["app-privacy.html", "app-support.de.html"]);
    fs::write(temp.path().join("README.md"), readme("\nstale\n")).unwrap();

    policy_index_in(temp.path())
        .arg("--check")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("⚠️ README.md 需要更新"))
        .stderr(predicate::str::contains("out of date"));
    assert!(!temp.path().join("index.html").exists());

    policy_index_in(temp.path()).assert().success();
    policy_index_in(temp.path()).arg("--check").assert().success();
}

#[test]
fn collision_policy_fail_exits_4() {
    let temp = site(&["app-privacy.html", "App-privacy.html"]);
    if fs::read_dir(temp.path()).unwrap().count() < 3 {
        // Case-insensitive filesystem: only one page exists
        return;
    }

    policy_index_in(temp.path())
        .args(["--on-collision", "fail"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("claimed by more than one file"));
    assert!(!temp.path().join("index.html").exists());

    policy_index_in(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️ 文件冲突：App / privacy"));
}

#[test]
fn json_summary_describes_the_run() {
    let temp = site(&["zeta-privacy.en.html", "alpha-support.html", "notes.html"]);
    fs::write(temp.path().join("README.md"), readme("")).unwrap();

    let output = policy_index_in(temp.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(summary["mode"], "write");
    assert_eq!(summary["applications"], 2);
    assert_eq!(summary["readme"], "updated");
    assert_eq!(summary["index"], "written");
    assert_eq!(summary["documents"][0]["app"], "Alpha");
    assert_eq!(summary["documents"][0]["kind"], "support");
    assert!(summary["documents"][0]["language"].is_null());
    assert_eq!(summary["documents"][1]["language"], "en");
    assert_eq!(summary["collisions"].as_array().unwrap().len(), 0);
}

#[test]
fn empty_directory_renders_placeholder_and_page_shell() {
    let temp = site(&[]);
    fs::write(temp.path().join("README.md"), readme("")).unwrap();

    policy_index_in(temp.path()).assert().success();

    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        readme("\n暂无隐私政策文件，请添加 HTML 文件到仓库。\n")
    );
    let index = fs::read_to_string(temp.path().join("index.html")).unwrap();
    assert!(index.contains("<h1>应用隐私与用户协议合集</h1>"));
    assert!(!index.contains("app-entry\">"));
}

#[test]
fn generated_index_is_never_indexed() {
    let temp = site(&["app-privacy.html"]);
    policy_index_in(temp.path()).assert().success();
    let first = fs::read_to_string(temp.path().join("index.html")).unwrap();

    policy_index_in(temp.path()).assert().success();
    assert_eq!(fs::read_to_string(temp.path().join("index.html")).unwrap(), first);
}

#[test]
fn invalid_locale_exits_2() {
    let temp = site(&[]);
    policy_index_in(temp.path())
        .args(["--locale", "fr"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Use 'zh' or 'en'"));
}

#[test]
fn config_file_is_discovered_from_subdirectory() {
    let temp = site(&[]);
    let pages = temp.path().join("pages");
    fs::create_dir(&pages).unwrap();
    fs::write(pages.join("reader-privacy.fr.html"), "<html></html>").unwrap();
    fs::create_dir(temp.path().join(".policy-index")).unwrap();
    fs::write(
        temp.path().join(".policy-index/config.toml"),
        "[paths]\ndir = \"pages\"\nindex = \"pages/index.html\"\n\n\
         [render]\nlocale = \"en\"\n\n[render.languages]\nfr = \"French\"\n",
    )
    .unwrap();
    let nested = temp.path().join("tools");
    fs::create_dir(&nested).unwrap();

    policy_index_in(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, skipping update"))
        .stdout(predicate::str::contains("index generated!"));

    let index = fs::read_to_string(pages.join("index.html")).unwrap();
    assert!(index.contains("<html lang=\"en\">"));
    assert!(index.contains("<a href=\"reader-privacy.fr.html\">French</a>"));
}

#[test]
fn version_output() {
    let temp = site(&[]);
    policy_index_in(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("policy-index"));
}
