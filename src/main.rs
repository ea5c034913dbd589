use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fractal_viewer::{
    PpmFilePresenter, RasterController, RasterOptions, Viewport, describe_presets, init_tracing,
};

/// Renders one frame of the viewer's home view to a binary PPM file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 1366)]
    width: u32,

    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Index into the seed catalog (see --list)
    #[arg(long, default_value_t = 0)]
    seed: usize,

    /// Index into the palette catalog (see --list)
    #[arg(long, default_value_t = 0)]
    palette: usize,

    #[arg(long, default_value_t = 200)]
    max_iterations: u32,

    /// Draw the active palette along the bottom of the frame
    #[arg(long)]
    palette_strip: bool,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Print the seed and palette catalogs and exit
    #[arg(long)]
    list: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.list {
        print!("{}", describe_presets()?);
        return Ok(());
    }

    let options = RasterOptions {
        viewport: Viewport::new(cli.width, cli.height)?,
        seed_index: cli.seed,
        palette_index: cli.palette,
        max_iterations: cli.max_iterations,
        palette_strip: cli.palette_strip,
    };

    let mut controller = RasterController::new(PpmFilePresenter::new());
    controller.generate(&options)?;
    controller.write(&cli.output)?;

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "render failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_home_view() {
        let cli = Cli::try_parse_from(["fractal_viewer"]).unwrap();

        assert_eq!(cli.width, 1366);
        assert_eq!(cli.height, 768);
        assert_eq!(cli.output, PathBuf::from("output/fractal.ppm"));
        assert!(!cli.list);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "fractal_viewer",
            "--width",
            "64",
            "--height",
            "32",
            "--seed",
            "3",
            "--palette",
            "5",
            "--palette-strip",
            "-o",
            "out.ppm",
        ])
        .unwrap();

        assert_eq!((cli.width, cli.height), (64, 32));
        assert_eq!((cli.seed, cli.palette), (3, 5));
        assert!(cli.palette_strip);
        assert_eq!(cli.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn degenerate_size_is_an_error() {
        let cli = Cli::try_parse_from(["fractal_viewer", "--width", "1", "--list"]).unwrap();
        let cli = Cli { list: false, ..cli };

        assert!(run(&cli).is_err());
    }

    #[test]
    fn writes_small_frame() {
        let output = std::env::temp_dir()
            .join("fractal_viewer_main_test")
            .join("frame.ppm");
        let cli = Cli {
            width: 16,
            height: 8,
            seed: 0,
            palette: 0,
            max_iterations: 50,
            palette_strip: false,
            output: output.clone(),
            list: false,
        };

        run(&cli).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"P6\n16 8\n255\n"));
        assert_eq!(bytes.len(), "P6\n16 8\n255\n".len() + 16 * 8 * 3);
    }
}
