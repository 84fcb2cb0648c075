use docopt::Docopt;
use rand::{SeedableRng, XorShiftRng};
use serde_derive::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use mazecarve::generators::{self, SelectionPolicy};
use mazecarve::grids::{self, LargeRectangularGrid};
use mazecarve::masks::BinaryMask2D;
use mazecarve::renderers::{self, RenderOptions, WallSegment};
use mazecarve::units::{ColumnsCount, RowsCount};

const USAGE: &str = "
Usage:
    mazecarve binary [options]
    mazecarve growing [options]
    mazecarve (-h | --help)

Carve a perfect maze and print it as text, or write it out as text or SVG.

Options:
    -h, --help             Show this screen.
    --grid-width=<w>       Grid width in cells [default: 20].
    --grid-height=<h>      Grid height in cells [default: 20].
    --mask-file=<path>     Image file whose dark pixels mask grid cells off.
                           Overrides the grid width and height.
    --policy=<name>        Growing tree selection policy, one of newest,
                           oldest or random [default: newest].
    --seed=<n>             Seed for a reproducible maze.
    --text-out=<path>      Write the text rendering to a file.
    --svg-out=<path>       Write an SVG rendering to a file.
    --cell-size=<n>        Rendered size of one cell [default: 10].
    --wall-thickness=<n>   Rendered wall thickness, 0 for hairline walls
                           [default: 0].
";

#[derive(Debug, Deserialize)]
struct Args {
    cmd_binary: bool,
    cmd_growing: bool,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_mask_file: String,
    flag_policy: String,
    flag_seed: Option<u32>,
    flag_text_out: String,
    flag_svg_out: String,
    flag_cell_size: f32,
    flag_wall_thickness: f32,
}

// Binary-local errors: the library's own kinds plus the failures only the
// driver can hit (argument parsing, image decoding, file IO).
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::mazecarve::errors::Error, ::mazecarve::errors::ErrorKind);
        }
        foreign_links {
            CmdLineArgs(::docopt::Error);
            ImageLoad(::image::ImageError);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    let args: Args = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut rng = match args.flag_seed {
        Some(seed) => {
            // XorShift seeds must not be all zero.
            XorShiftRng::from_seed([seed, seed ^ 0x9e37_79b9, !seed, 0x1f12_3bb5])
        }
        None => rand::weak_rng(),
    };

    let mut maze_grid = if args.flag_mask_file.is_empty() {
        grids::large_rect_grid(RowsCount(args.flag_grid_height),
                               ColumnsCount(args.flag_grid_width))?
    } else {
        let mask_image = image::open(&Path::new(&args.flag_mask_file))?;
        let mask = BinaryMask2D::from_image(&mask_image);
        grids::large_masked_grid(&mask)?
    };

    if args.cmd_binary {
        generators::binary_tree(&mut maze_grid, &mut rng)?;
    } else {
        let policy: SelectionPolicy = args.flag_policy.parse()?;
        generators::growing_tree(&mut maze_grid, &mut rng, &policy)?;
    }

    if !args.flag_svg_out.is_empty() {
        let options = RenderOptions {
            cell_size: args.flag_cell_size,
            wall_thickness: args.flag_wall_thickness,
            ..RenderOptions::default()
        };
        let segments = renderers::wall_segments(&maze_grid, &options);
        write_text_to_file(&svg_document(&segments, &maze_grid, &options), &args.flag_svg_out)?;
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&format!("{}", maze_grid), &args.flag_text_out)?;
    } else if args.flag_svg_out.is_empty() {
        println!("{}", maze_grid);
    }

    Ok(())
}

fn svg_document(segments: &[WallSegment],
                grid: &LargeRectangularGrid,
                options: &RenderOptions)
                -> String {
    let (min_x, min_y, width, height) = renderers::drawing_bounds(grid, options);
    let mut document = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        min_x, min_y, width, height);
    for segment in segments {
        let style = options.stroke_style(segment.class);
        document.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            segment.x1, segment.y1, segment.x2, segment.y2, style.colour, segment.stroke_width));
    }
    document.push_str("</svg>\n");
    document
}

fn write_text_to_file(data: &str, file_name: &str) -> Result<()> {
    let mut file = File::create(file_name)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
