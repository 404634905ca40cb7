//! Human-readable status lines printed on stdout

use std::path::Path;

use policy_index_config::Locale;
use policy_index_publish::{IndexOutcome, ReadmeOutcome};
use policy_index_scanner::Collision;

use crate::pipeline::RunSummary;

/// Path as shown to the user: relative to `base` when it lies underneath
#[must_use]
pub fn short_path(path: &str, base: &Path) -> String {
    Path::new(path)
        .strip_prefix(base)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map_or_else(|| path.to_string(), |relative| relative.display().to_string())
}

fn readme_line(outcome: ReadmeOutcome, name: &str, locale: Locale) -> String {
    match (locale, outcome) {
        (Locale::Zh, ReadmeOutcome::Missing) => format!("❌ 未找到 {name}，跳过更新"),
        (Locale::Zh, ReadmeOutcome::Unchanged) => format!("✅ {name} 已是最新"),
        (Locale::Zh, ReadmeOutcome::Updated) => format!("✅ {name} 已更新"),
        (Locale::Zh, ReadmeOutcome::Stale) => format!("⚠️ {name} 需要更新"),
        (Locale::En, ReadmeOutcome::Missing) => format!("❌ {name} not found, skipping update"),
        (Locale::En, ReadmeOutcome::Unchanged) => format!("✅ {name} is up to date"),
        (Locale::En, ReadmeOutcome::Updated) => format!("✅ {name} updated"),
        (Locale::En, ReadmeOutcome::Stale) => format!("⚠️ {name} is out of date"),
    }
}

fn index_line(outcome: IndexOutcome, name: &str, locale: Locale) -> String {
    match (locale, outcome) {
        (Locale::Zh, IndexOutcome::Written) => format!("✅ {name} 索引已生成！"),
        (Locale::Zh, IndexOutcome::UpToDate) => format!("✅ {name} 已是最新"),
        (Locale::Zh, IndexOutcome::Stale) => format!("⚠️ {name} 需要更新"),
        (Locale::En, IndexOutcome::Written) => format!("✅ {name} index generated!"),
        (Locale::En, IndexOutcome::UpToDate) => format!("✅ {name} is up to date"),
        (Locale::En, IndexOutcome::Stale) => format!("⚠️ {name} is out of date"),
    }
}

fn collision_line(collision: &Collision, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("⚠️ 文件冲突：{collision}"),
        Locale::En => format!("⚠️ Collision: {collision}"),
    }
}

/// Status lines for a finished run, in print order
#[must_use]
pub fn status_lines(summary: &RunSummary, locale: Locale, base: &Path) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .collisions
        .iter()
        .map(|collision| collision_line(collision, locale))
        .collect();

    lines.push(readme_line(
        summary.readme,
        &short_path(&summary.readme_path, base),
        locale,
    ));
    lines.push(index_line(
        summary.index,
        &short_path(&summary.index_path, base),
        locale,
    ));

    lines
}
