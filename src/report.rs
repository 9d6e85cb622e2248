use crate::types::PairReport;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

pub fn print_summary(reports: &[PairReport]) {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Pair", "Files", "Bytes", "Status"]);

    for report in reports {
        let status = match &report.error {
            Some(err) => Cell::new(format!("FAILED: {err}")).fg(Color::Red),
            None => Cell::new("OK").fg(Color::Green),
        };

        table.add_row(vec![
            Cell::new(&report.label),
            Cell::new(report.files_copied),
            Cell::new(human_bytes::human_bytes(report.bytes_copied as f64)),
            status,
        ]);
    }

    let total_files: usize = reports.iter().map(|r| r.files_copied).sum();
    let total_bytes: u64 = reports.iter().map(|r| r.bytes_copied).sum();

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(total_files).add_attribute(Attribute::Bold),
        Cell::new(human_bytes::human_bytes(total_bytes as f64)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    println!("{table}");

    if reports.iter().any(|r| r.error.is_some()) {
        println!("{}", "Completed with errors (see above).".yellow());
    } else {
        println!("{}", "Image copy process completed!".green());
    }
}
