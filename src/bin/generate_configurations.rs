// Generate the legacy-shape cabinet configuration table.
//
// Usage:
//   cargo run --bin generate_configurations -- [output.csv]
//
// Defaults to ./cabinet_library.csv with the built-in size ranges.

use cabinet_export::generator::{self, GeneratorSpec};
use cabinet_export::i18n::t_with_args;
use cabinet_export::logging;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    logging::init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cabinet_library.csv"));

    let spec = GeneratorSpec::default();
    let rows = generator::generate(&spec)?;
    generator::write_csv(&output, &rows)?;

    println!(
        "{}",
        t_with_args(
            "generator.summary",
            &[
                ("count", &rows.len().to_string()),
                ("path", &output.display().to_string()),
            ]
        )
    );
    for summary in generator::summarize(&spec)? {
        println!(
            "{}",
            t_with_args(
                "generator.height_line",
                &[
                    ("height", &summary.height.to_string()),
                    ("max", &summary.max_shelves.to_string()),
                    ("usable", &format!("{:.1}", summary.usable_height)),
                ]
            )
        );
    }

    Ok(())
}
