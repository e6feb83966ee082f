use std::str::FromStr;

use crate::count::BranchCounts;

pub const COLUMN_NAMES: [&str; 2] = ["repo", "amount of branches"];

/// Printed instead of a table when there is nothing to show
pub const NO_DATA: &str = "No data found";

const SEPARATOR: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Markdown,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Format::Plain),
            "markdown" => Ok(Format::Markdown),
            other => Err(format!("Unknown table format: {}", other)),
        }
    }
}

pub fn render(counts: &BranchCounts, columns: [&str; 2], format: Format) -> String {
    if counts.is_empty() {
        return NO_DATA.to_string();
    }

    match format {
        Format::Plain => build_plain(counts, columns),
        Format::Markdown => build_markdown(counts, columns),
    }
}

/// Aligned text table with a leading row index, values right-aligned:
///
/// ```text
///    repo  amount of branches
/// 0     a                   2
/// ```
fn build_plain(counts: &BranchCounts, columns: [&str; 2]) -> String {
    let rows: Vec<(String, &str, String)> = counts
        .iter()
        .enumerate()
        .map(|(i, (repo, count))| (i.to_string(), repo, count.to_string()))
        .collect();

    let index_width = rows.iter().map(|(i, _, _)| i.len()).max().unwrap_or(0);
    let repo_width = rows
        .iter()
        .map(|(_, repo, _)| repo.chars().count())
        .chain(Some(columns[0].chars().count()))
        .max()
        .unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|(_, _, count)| count.len())
        .chain(Some(columns[1].chars().count()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:<iw$}{sep}{:>rw$}{sep}{:>cw$}",
        "",
        columns[0],
        columns[1],
        sep = SEPARATOR,
        iw = index_width,
        rw = repo_width,
        cw = count_width
    ));

    for (index, repo, count) in &rows {
        lines.push(format!(
            "{:<iw$}{sep}{:>rw$}{sep}{:>cw$}",
            index,
            repo,
            count,
            sep = SEPARATOR,
            iw = index_width,
            rw = repo_width,
            cw = count_width
        ));
    }

    lines.join("\n")
}

fn build_markdown(counts: &BranchCounts, columns: [&str; 2]) -> String {
    let mut out = String::new();

    out.push_str(&format!("| {} | {} |\n", columns[0], columns[1]));
    out.push_str("|:-----|-----:|\n");

    for (repo, count) in counts.iter() {
        out.push_str(&format!("| {} | {} |\n", repo, count));
    }

    out.trim_end().to_string()
}
