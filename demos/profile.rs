//! Quick profile dump - run with: cargo run --example profile [json]

use std::env;

use folio::report::{format_profile, OutputFormat};

fn main() {
    let format = match env::args().nth(1).as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Human,
    };

    print!("{}", format_profile(format));
}
