//! CLI logic for the Anlage diagram annotator.
//!
//! The CLI stands in for the interactive page: it binds a diagram file,
//! selects one disorder, and writes the annotated SVG back out.

mod args;

pub use args::Args;

use std::fs;

use log::{info, warn};

use anlage::catalog::Catalog;
use anlage::{AnlageError, SvgDocument, Viewer};

/// Run the Anlage CLI application
///
/// Reads the input diagram, applies the selected disorder, and writes the
/// annotated SVG to the output file. With `--list`, prints the catalog and
/// exits instead.
///
/// # Errors
///
/// Returns `AnlageError` for file I/O errors and malformed input SVG.
/// Unknown disorder keys are not errors; they select the baseline entry.
pub fn run(args: &Args) -> Result<(), AnlageError> {
    if args.list {
        for disorder in Catalog::builtin().iter() {
            println!("{:<22} {}", disorder.key(), disorder.label());
        }
        return Ok(());
    }

    // clap enforces presence unless --list was given
    let Some(input) = args.input.as_deref() else {
        return Ok(());
    };

    info!(
        input_path = input,
        output_path = args.output,
        disorder = args.disorder;
        "Annotating diagram"
    );

    let source = fs::read_to_string(input)?;
    let document = SvgDocument::parse(&source)?;

    let mut viewer = Viewer::new();
    viewer.bind_diagram(document);
    let panel = viewer.select_disorder(&args.disorder);

    if args.panel {
        match serde_json::to_string_pretty(&panel) {
            Ok(json) => println!("{json}"),
            Err(err) => warn!(err:? = err; "Failed to serialize panel payload"),
        }
    }

    if let Some(svg) = viewer.render_svg() {
        fs::write(&args.output, svg)?;
        info!(output_file = args.output; "Annotated SVG written");
    }

    Ok(())
}
