//! Nimbus's main application entry point and orchestration logic.
//! Handles command-line argument parsing, manifest loading, generation,
//! and writing the generated files to the output directory.

use std::path::{Path, PathBuf};

use nimbus::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    generator::Generator,
    manifest::{load_manifest, parse_manifest},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * Returns `Error::OutputDirectoryExistsError` if the directory exists
///   and force is false
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        base_path.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(abs_path, content).map_err(Error::IoError)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the output directory
/// 2. Loads and parses the deployment manifest
/// 3. Selects and renders the catalog templates for the configuration
/// 4. Writes every generated file under the output directory
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    let output_root = get_output_dir(args.output_dir, args.force)?;
    let manifest_content = load_manifest(&args.manifest)?;
    let config = parse_manifest(&manifest_content)?;

    let generator = Generator::new(&engine);
    let files = generator.generate(&config)?;

    for (filename, content) in &files {
        let target = output_root.join(filename);
        write_file(content, &target)?;
        println!("created: '{}'", target.display());
    }

    println!(
        "Generated {} files for '{}' in {}.",
        files.len(),
        config.application_name(),
        output_root.display()
    );
    Ok(())
}
