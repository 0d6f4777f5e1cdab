//! Startup banner: "GRADES" in figlet's standard font, shaded from the title color
//! to the pass color of the screen palette.

use crate::adapters::ui::render::{self, PRIMARY, Rgb, SUCCESS};
use crate::domain::DomainError;
use figlet_rs::FIGfont;

fn mix(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

/// Color of row `row` out of `rows`, first row PRIMARY, last row SUCCESS.
fn shade(row: usize, rows: usize) -> Rgb {
    let t = if rows <= 1 {
        1.0
    } else {
        row as f64 / (rows - 1) as f64
    };
    (
        mix(PRIMARY.0, SUCCESS.0, t),
        mix(PRIMARY.1, SUCCESS.1, t),
        mix(PRIMARY.2, SUCCESS.2, t),
    )
}

fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("GRADES").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "GRADES\n".to_string())
}

/// Banner rows with their colors, followed by the version line.
fn banner_rows() -> Vec<(Rgb, String)> {
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let mut rows: Vec<(Rgb, String)> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (shade(i, lines.len()), line.to_string()))
        .collect();
    rows.push((SUCCESS, format!("grade-gate v{}", env!("CARGO_PKG_VERSION"))));
    rows
}

pub fn print_welcome() -> Result<(), DomainError> {
    let rows = banner_rows();
    render::paint(rows.iter().map(|(c, text)| (render::rgb(*c), text.as_str())))
}
