//! SVG export of recorded draw commands.

use crate::draw_list::{DrawCommand, DrawList};
use crate::renderer::RenderResult;
use kurbo::{Affine, Rect};
use peniko::Color;
use std::fmt::Write as _;
use std::io;
use std::path::Path;

/// Serializes a [`DrawList`] into a standalone SVG document.
///
/// Textures are external, so textured shapes keep their fill and carry the
/// texture id in a `data-texture` attribute for the consumer to resolve.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Padding around the content, in pixels.
    pub padding: f64,
    /// Optional background fill.
    pub background: Option<Color>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            padding: 20.0,
            background: None,
        }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Render the list to an SVG string.
    pub fn render(&self, list: &DrawList) -> RenderResult<String> {
        let bounds = list
            .bounds()
            .unwrap_or(Rect::ZERO)
            .inflate(self.padding, self.padding);
        // Move content so the padded bounds start at the origin.
        let transform = Affine::translate((-bounds.x0, -bounds.y0));

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = bounds.width(),
            h = bounds.height(),
        )?;
        if let Some(background) = self.background {
            writeln!(
                out,
                r#"  <rect width="100%" height="100%" {}/>"#,
                fill_attrs(background)
            )?;
        }
        for command in list.commands() {
            write_command(&mut out, command, transform)?;
        }
        out.push_str("</svg>\n");

        log::debug!("exported {} draw commands to svg", list.len());
        Ok(out)
    }

    /// Render the list and write it to `writer`.
    pub fn write_to<W: io::Write>(&self, list: &DrawList, mut writer: W) -> RenderResult<()> {
        let svg = self.render(list)?;
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render the list into a file at `path`, replacing it if present.
    pub fn save(&self, list: &DrawList, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(list, io::BufWriter::new(file))?;
        log::info!("saved svg to {}", path.display());
        Ok(())
    }
}

fn write_command(out: &mut String, command: &DrawCommand, transform: Affine) -> RenderResult<()> {
    match command {
        DrawCommand::Shape {
            kind,
            path,
            fill,
            texture,
        } => {
            let path = transform * path.clone();
            write!(
                out,
                r#"  <path data-kind="{kind:?}" d="{}" {}"#,
                path.to_svg(),
                fill_attrs(*fill)
            )?;
            if let Some(texture) = texture {
                write!(out, r#" data-texture="{}""#, texture.id)?;
            }
            out.push_str("/>\n");
        }
        DrawCommand::Label {
            content,
            bounds,
            color,
            character_size,
            ..
        } => {
            let origin = transform * bounds.origin();
            writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" dominant-baseline="hanging" {}>{}</text>"#,
                origin.x,
                origin.y,
                character_size,
                fill_attrs(*color),
                escape(content)
            )?;
        }
    }
    Ok(())
}

fn fill_attrs(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!(r#"fill="rgb({},{},{})""#, rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            r#"fill="rgb({},{},{})" fill-opacity="{:.3}""#,
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
