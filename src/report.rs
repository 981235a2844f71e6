//! Human-readable report formatting.

use std::fmt::Write;

use crate::stats::BucketStats;

/// Format a byte count with binary scaling through B/KB/MB/GB/TB.
///
/// Always two decimals; display caps at TB.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{b:.2} B")
    } else if b < MB {
        format!("{:.2} KB", b / KB)
    } else if b < GB {
        format!("{:.2} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

/// The report body printed after a successful pass.
pub fn render(stats: &BucketStats) -> String {
    let mut out = String::new();

    out.push_str("\nErgebnis:\n");
    let _ = writeln!(out, "- Gesamtobjekte: {}", format_count(stats.total));
    let _ = writeln!(out, "- Gesamtdatenmenge: {}", format_size(stats.total_size));
    let _ = writeln!(out, "- Formulare (CSV): {}", format_count(stats.csv_count));
    let _ = writeln!(
        out,
        "- Anhänge (nicht CSV): {}",
        format_count(stats.attachment_count)
    );

    let extensions = stats.extensions_by_count();
    if !extensions.is_empty() {
        out.push_str("\nAnhänge nach Dateiendung:\n");
        for (extension, count) in extensions {
            let _ = writeln!(out, "  • {extension}: {}", format_count(count));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{format_count, format_size, render};
    use crate::stats::BucketStats;

    #[test]
    fn format_size_bytes() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
    }

    #[test]
    fn format_size_kb() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
    }

    #[test]
    fn format_size_mb() {
        assert_eq!(format_size(1_048_576), "1.00 MB");
    }

    #[test]
    fn format_size_gb() {
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
    }

    #[test]
    fn format_size_caps_at_tb() {
        assert_eq!(format_size(1_099_511_627_776), "1.00 TB");
        // A pebibyte still displays in TB.
        assert_eq!(format_size(1_125_899_906_842_624), "1024.00 TB");
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn render_full_report() {
        let mut stats = BucketStats {
            total: 1234,
            csv_count: 1000,
            attachment_count: 234,
            total_size: 1536,
            ..BucketStats::default()
        };
        stats.extensions.insert("jpg".to_string(), 200);
        stats.extensions.insert("pdf".to_string(), 30);
        stats.extensions.insert("<ohne_endung>".to_string(), 4);

        let expected = [
            "",
            "Ergebnis:",
            "- Gesamtobjekte: 1,234",
            "- Gesamtdatenmenge: 1.50 KB",
            "- Formulare (CSV): 1,000",
            "- Anhänge (nicht CSV): 234",
            "",
            "Anhänge nach Dateiendung:",
            "  • jpg: 200",
            "  • pdf: 30",
            "  • <ohne_endung>: 4",
        ]
        .join("\n")
            + "\n";
        assert_eq!(render(&stats), expected);
    }

    #[test]
    fn render_omits_extension_block_when_empty() {
        let stats = BucketStats {
            total: 2,
            csv_count: 2,
            ..BucketStats::default()
        };

        let rendered = render(&stats);
        assert!(!rendered.contains("Anhänge nach Dateiendung"));
        assert!(rendered.contains("- Formulare (CSV): 2\n"));
    }
}
