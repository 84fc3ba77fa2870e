// SPDX: CC0-1.0

use crate::{
    draw::{DrawCmd, Frame},
    Surface,
};
use std::io::{self, Write};

const FONT: &str = "font-family=\"Arial\" font-size=\"12\"";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Writes `frame` as a standalone SVG document the size of `surface`.
/// Dots become 1x1 rectangles, like single painted pixels.
pub fn write_frame<W: Write>(mut out: W, frame: &Frame, surface: Surface) -> io::Result<()> {
    let Surface { w, h } = surface;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    for cmd in &frame.cmds {
        match cmd {
            DrawCmd::Clear(color) => {
                writeln!(out, r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{color}"/>"#)?
            }
            DrawCmd::Text { at, color, text } => writeln!(
                out,
                r#"  <text x="{x}" y="{y}" fill="{color}" {FONT} text-anchor="middle">{text}</text>"#,
                x = at.x,
                y = at.y,
                text = escape(text),
            )?,
            DrawCmd::Dot { at, color } => writeln!(
                out,
                r#"  <rect x="{x}" y="{y}" width="1" height="1" fill="{color}"/>"#,
                x = at.x,
                y = at.y,
            )?,
        }
    }
    writeln!(out, "</svg>")?;
    Ok(())
}
