#![deny(unsafe_code)]
//! CLI binary for colorlerp.
//!
//! Subcommands:
//! - `lerp <from> <to>`: interpolate two hex colors in one space
//! - `render`: write gradient comparison PNGs
//! - `list`: print available interpolation spaces
//! - `convert <hex>`: show a color in every space

mod error;

use clap::{Parser, Subcommand};
use colorlerp_core::convert::{
    cielab_to_cielch, linear_to_xyz, oklab_to_oklch, srgb_to_cielab, srgb_to_linear,
    xyz_to_oklab,
};
use colorlerp_core::hsv::{srgb_to_hsl, srgb_to_hsv};
use colorlerp_core::{RgbaChannels, Space, Srgb};
use colorlerp_gradient::{snapshot, RenderConfig};
use error::CliError;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "colorlerp", about = "Color space interpolation and gamut mapping")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interpolate between two hex colors.
    Lerp {
        /// Start color, e.g. "#ff0000".
        from: String,

        /// End color.
        to: String,

        /// Interpolation parameter; values outside [0, 1] extrapolate.
        #[arg(short = 't', long = "at", default_value_t = 0.5, allow_negative_numbers = true)]
        v: f32,

        /// Interpolation space (SRGB, LSRGB, CIEXYZ, OKLAB, OKLCH).
        #[arg(short, long, default_value = "OKLCH")]
        space: String,
    },
    /// Render gradient comparison strips to PNG files.
    Render {
        /// Output directory.
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// JSON render config; defaults to the four demo ranges.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Strip width in pixels.
        #[arg(short = 'W', long)]
        width: Option<usize>,

        /// Strip height in pixels.
        #[arg(short = 'H', long)]
        height: Option<usize>,

        /// Restrict to these spaces, in order (repeatable).
        #[arg(short = 's', long = "space")]
        spaces: Vec<String>,
    },
    /// List available interpolation spaces.
    List,
    /// Show a hex color in every color space.
    Convert {
        /// Color to convert, e.g. "#a07f7f".
        color: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install logger: {e}");
    }
}

/// Every representation of `c`, in conversion-graph order.
fn conversions(c: Srgb) -> Vec<(&'static str, [f32; 3])> {
    let linear = srgb_to_linear(c);
    let xyz = linear_to_xyz(linear);
    let oklab = xyz_to_oklab(xyz);
    let lab = srgb_to_cielab(c);
    vec![
        ("sRGB", c.to_array()),
        ("linear sRGB", linear.to_array()),
        ("CIE XYZ", xyz.to_array()),
        ("CIELab (D50)", lab.to_array()),
        ("CIELCh (D50)", cielab_to_cielch(lab).to_array()),
        ("OKLab", oklab.to_array()),
        ("OKLCh", oklab_to_oklch(oklab).to_array()),
        ("HSV", srgb_to_hsv(c).to_array()),
        ("HSL", srgb_to_hsl(c).to_array()),
    ]
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let spaces = Space::list_names();
            if cli.json {
                let info = serde_json::json!({ "spaces": spaces });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Spaces:");
                for space in Space::ALL {
                    let note = if space.gamut_maps() { " (gamut mapped)" } else { "" };
                    println!("  {space}{note}");
                }
            }
        }
        Command::Lerp { from, to, v, space } => {
            let space = Space::from_name(&space)?;
            let a = Srgb::from_hex(&from)?;
            let b = Srgb::from_hex(&to)?;
            debug!(%space, v, "interpolating {from} -> {to}");
            let px = space.lerp(&a, &b, v);
            let [r, g, b8, _] = px.to_rgba8();
            let hex = format!("#{r:02x}{g:02x}{b8:02x}");

            if cli.json {
                let info = serde_json::json!({
                    "from": a,
                    "to": b,
                    "space": space,
                    "v": v,
                    "hex": hex,
                    "rgba16": px.rgba16(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{hex}");
            }
        }
        Command::Render {
            output,
            config,
            width,
            height,
            spaces,
        } => {
            let mut config = match config {
                Some(path) => RenderConfig::from_json_file(&path)?,
                None => RenderConfig::default(),
            };
            if let Some(w) = width {
                config.width = w;
            }
            if let Some(h) = height {
                config.height = h;
            }
            if !spaces.is_empty() {
                config.set_spaces_by_name(&spaces)?;
            }

            let paths = snapshot::render_all(&config, &output)?;

            if cli.json {
                let files: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                let info = serde_json::json!({
                    "width": config.width,
                    "height": config.image_height(),
                    "spaces": config.spaces,
                    "files": files,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for path in &paths {
                    eprintln!(
                        "rendered {}x{} ({} spaces) -> {}",
                        config.width,
                        config.image_height(),
                        config.spaces.len(),
                        path.display()
                    );
                }
            }
        }
        Command::Convert { color } => {
            let c = Srgb::from_hex(&color)?;
            let rows = conversions(c);
            if cli.json {
                let map: serde_json::Map<String, serde_json::Value> = rows
                    .iter()
                    .map(|(name, v)| (name.to_string(), serde_json::json!(v)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                println!("{}", c.to_hex());
                for (name, [x, y, z]) in rows {
                    println!("  {name:<13} {x:>10.5} {y:>10.5} {z:>10.5}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
