use std::{collections::HashMap, fmt::Display};

use num_format::{Locale, ToFormattedString};

/// Renders one report as a two-column table, rows sorted by count
/// descending then key ascending so output is stable across runs.
pub fn format_table<K: Display>(title: &str, counts: &HashMap<K, usize>) -> String {
    let mut rows: Vec<_> = counts
        .iter()
        .map(|(key, count)| (key.to_string(), *count))
        .collect();
    rows.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let key_width = rows
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0)
        .max(title.len());

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(key_width + 12));
    out.push('\n');
    for (key, count) in rows {
        let formatted = count.to_formatted_string(&Locale::en);
        out.push_str(&format!("{key:<key_width$}  {formatted:>10}\n"));
    }
    out
}

pub fn print_table<K: Display>(title: &str, counts: &HashMap<K, usize>) {
    print!("{}", format_table(title, counts));
}
