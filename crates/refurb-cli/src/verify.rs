//! `refurb verify`: data-quality report for a written dataset.

use std::path::Path;

use refurb_core::{CoverageReport, Dataset};

pub(crate) fn run_verify(dataset_path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(dataset_path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", dataset_path.display()))?;
    let dataset: Dataset = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid dataset {}: {e}", dataset_path.display()))?;

    let report = dataset.coverage();
    if report.gaps.is_empty() && report.missing_price == 0 {
        tracing::info!(listings = report.total, "dataset is complete");
    }
    println!("{}", render_report(&report));
    Ok(())
}

fn render_report(report: &CoverageReport) -> String {
    let mut lines = vec![
        format!("listings:        {}", report.total),
        format!(
            "missing memory:  {} ({:.1}%)",
            report.missing_ram,
            report.percent(report.missing_ram)
        ),
        format!(
            "missing storage: {} ({:.1}%)",
            report.missing_storage,
            report.percent(report.missing_storage)
        ),
        format!(
            "unparsed prices: {} ({:.1}%)",
            report.missing_price,
            report.percent(report.missing_price)
        ),
    ];

    if !report.gaps.is_empty() {
        lines.push(String::new());
        lines.push("incomplete listings:".to_owned());
        for gap in &report.gaps {
            let missing = match (gap.missing_ram, gap.missing_storage) {
                (true, true) => "memory, storage",
                (true, false) => "memory",
                _ => "storage",
            };
            lines.push(format!("  [{}] {} (missing {missing})", gap.locale, gap.name));
        }
    }

    lines.join("\n")
}
