use log::info;
use rand::Rng;
use sgr_github::day_record::ColoredDay;
use std::{fmt::Write as _, fs, path::Path};

use crate::{
    config::GridConfig,
    error::{RenderError, Result},
    grid::squares,
    submarine::{animation_css, write_submarine},
    waypoint::{keyframes, sample_waypoints},
};

pub const DEFAULT_OUTPUT: &str = "submarine_graph.svg";

fn escape_xml_into(out: &mut String, text: &str) {
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
}

/// Render the full SVG document for `days`.
pub fn render_svg<R: Rng + ?Sized>(
    days: &[ColoredDay],
    config: &GridConfig,
    rng: &mut R,
) -> String {
    let waypoints = sample_waypoints(days.len(), config.max_waypoints, rng);
    let frames = keyframes(&waypoints, config);

    let mut out = String::with_capacity(64 * days.len() + 2048);
    out.push_str(r#"<?xml version="1.0" encoding="utf-8" ?>"#);
    out.push('\n');
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}px" height="{h}px" viewBox="0 0 {w} {h}">"#,
        w = config.width(),
        h = config.height()
    );
    out.push('\n');

    out.push_str("<defs><style>\n");
    // CSS text inside <style> must not carry a raw `<` or `&`
    escape_xml_into(&mut out, &animation_css(&frames, config));
    out.push_str("</style></defs>\n");

    for square in squares(days, config) {
        let _ = write!(
            &mut out,
            r#"<rect x="{}" y="{}" width="{s}" height="{s}" fill=""#,
            square.x,
            square.y,
            s = config.square_size
        );
        escape_xml_into(&mut out, square.fill);
        out.push_str("\"/>\n");
    }

    write_submarine(&mut out, config);
    out.push_str("\n</svg>\n");
    out
}

/// Write `svg` to `path`, replacing any existing file.
///
/// The document lands in a sibling temporary file first and is renamed into
/// place, so `path` never holds a partial artifact.
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    let fs_err = |source| RenderError::Filesystem {
        path: path.display().to_string(),
        source,
    };
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp_path, svg) {
        let _ = fs::remove_file(&tmp_path);
        return Err(fs_err(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(fs_err(e));
    }
    info!("Wrote {} bytes to {}", svg.len(), path.display());
    Ok(())
}
