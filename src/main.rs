mod copier;
mod report;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;

use crate::types::DirectoryPair;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Backend static-assets directory containing images/ and product_img/
    #[arg(
        long,
        short = 's',
        default_value = "C:/OnAndHome/src/main/resources/static"
    )]
    backend_static: String,

    /// Frontend public directory receiving the copied folders
    #[arg(long, short = 't', default_value = "C:/onandhomefront/public")]
    frontend_public: String,

    /// Create a missing target directory instead of reporting an error
    #[arg(long)]
    create_missing: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!(
        "{}",
        format!(
            "=== Image copy run: {} ===",
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );

    let pairs = DirectoryPair::default_pairs(&args.backend_static, &args.frontend_public);

    let mut reports = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        println!("\nCopying {}...", pair.label.to_lowercase());
        reports.push(copier::copy_pair(pair, args.create_missing));
    }

    println!();
    report::print_summary(&reports);

    // Pair failures are contained and reported above; the run itself is
    // always a normal exit.
}
