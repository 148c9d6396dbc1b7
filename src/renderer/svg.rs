//! Streaming SVG output for plus textures

use std::io::{self, Write};

use crate::layout::MarkerDescriptor;

use super::plus::plus_outline;
use super::SvgConfig;

/// Write an SVG document incrementally to a sink
///
/// Calls must follow the document order: [`write_header`](Self::write_header)
/// once, [`write_marker`](Self::write_marker) for each marker, then
/// [`write_footer`](Self::write_footer). Nothing is buffered beyond what the
/// sink itself buffers.
pub struct SvgWriter<W: Write> {
    sink: W,
    config: SvgConfig,
    markers_written: usize,
}

impl<W: Write> SvgWriter<W> {
    /// Create a writer over `sink`
    pub fn new(sink: W, config: SvgConfig) -> Self {
        Self {
            sink,
            config,
            markers_written: 0,
        }
    }

    /// Preamble, root element, metadata and the background rectangle
    ///
    /// One user unit is one millimeter.
    pub fn write_header(
        &mut self,
        width: f64,
        height: f64,
        background_lightness: u8,
    ) -> io::Result<()> {
        let sink = &mut self.sink;
        writeln!(sink, r#"<?xml version="1.0" standalone="no"?>"#)?;
        writeln!(sink, r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN""#)?;
        writeln!(sink, r#"    "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#)?;
        writeln!(sink)?;
        writeln!(
            sink,
            r#"<svg width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}""#,
            w = width,
            h = height
        )?;
        writeln!(sink, r#"    xmlns="http://www.w3.org/2000/svg" version="1.1">"#)?;
        writeln!(sink)?;
        writeln!(sink, "  <title>{}</title>", escape_xml(&self.config.title))?;
        writeln!(sink, "  <desc>{}</desc>", escape_xml(&self.config.description))?;
        writeln!(sink)?;
        writeln!(
            sink,
            r#"  <rect width="{}" height="{}" fill="{}" />"#,
            width,
            height,
            gray_hex(background_lightness)
        )?;
        writeln!(sink)
    }

    /// One closed path per marker, filled with its gray level
    pub fn write_marker(&mut self, marker: &MarkerDescriptor) -> io::Result<()> {
        let d = outline_to_d(marker, self.config.precision);
        writeln!(self.sink, r#"  <path d="{}""#, d)?;
        writeln!(self.sink, r#"    fill="{}" />"#, gray_hex(marker.lightness))?;
        writeln!(self.sink)?;
        self.markers_written += 1;
        Ok(())
    }

    /// Close the root element; nothing follows it
    pub fn write_footer(&mut self) -> io::Result<()> {
        write!(self.sink, "</svg>")
    }

    /// Number of markers written so far
    pub fn markers_written(&self) -> usize {
        self.markers_written
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// `#rrggbb` with every channel set to `lightness`
pub fn gray_hex(lightness: u8) -> String {
    format!("#{0:02x}{0:02x}{0:02x}", lightness)
}

/// Path `d` attribute for a marker: absolute move, implicit line-tos, close
fn outline_to_d(marker: &MarkerDescriptor, precision: usize) -> String {
    let mut d = String::from("M ");
    for point in plus_outline(marker) {
        d.push_str(&format!("{:.*},{:.*} ", precision, point.x, precision, point.y));
    }
    d.push('z');
    d
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&mut SvgWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut writer = SvgWriter::new(Vec::new(), SvgConfig::default());
        f(&mut writer).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_gray_hex() {
        assert_eq!(gray_hex(0), "#000000");
        assert_eq!(gray_hex(10), "#0a0a0a");
        assert_eq!(gray_hex(127), "#7f7f7f");
        assert_eq!(gray_hex(255), "#ffffff");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_header_dimensions_and_background() {
        let svg = render(|w| w.write_header(210.0, 297.0, 127));
        assert!(svg.starts_with(r#"<?xml version="1.0" standalone="no"?>"#));
        assert!(svg.contains(r#"<svg width="210mm" height="297mm" viewBox="0 0 210 297""#));
        assert!(svg.contains(r##"<rect width="210" height="297" fill="#7f7f7f" />"##));
        assert!(svg.contains("<title>Plus texture</title>"));
    }

    #[test]
    fn test_header_fractional_dimensions() {
        let svg = render(|w| w.write_header(215.9, 279.4, 0));
        assert!(svg.contains(r#"viewBox="0 0 215.9 279.4""#));
        assert!(svg.contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_header_escapes_metadata() {
        let mut writer = SvgWriter::new(
            Vec::new(),
            SvgConfig::default().with_title("Tom & Jerry <3"),
        );
        writer.write_header(10.0, 10.0, 1).unwrap();
        let svg = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(svg.contains("<title>Tom &amp; Jerry &lt;3</title>"));
    }

    #[test]
    fn test_marker_path() {
        let marker = MarkerDescriptor {
            x: 10.0,
            y: 20.0,
            rotation: 0.0,
            size: 3.0,
            lightness: 200,
        };
        let svg = render(|w| w.write_marker(&marker));
        assert_eq!(
            svg,
            concat!(
                r#"  <path d="M 8.500,20.500 9.500,20.500 9.500,21.500 10.500,21.500 "#,
                r#"10.500,20.500 11.500,20.500 11.500,19.500 10.500,19.500 "#,
                r#"10.500,18.500 9.500,18.500 9.500,19.500 8.500,19.500 z""#,
                "\n",
                r##"    fill="#c8c8c8" />"##,
                "\n\n"
            )
        );
    }

    #[test]
    fn test_marker_precision() {
        let marker = MarkerDescriptor {
            x: 1.0,
            y: 1.0,
            rotation: 0.0,
            size: 1.0,
            lightness: 0,
        };
        let mut writer = SvgWriter::new(Vec::new(), SvgConfig::default().with_precision(1));
        writer.write_marker(&marker).unwrap();
        assert_eq!(writer.markers_written(), 1);
        let svg = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(svg.contains("M 0.5,1.2 0.8,1.2 0.8,1.5 "));
        assert!(svg.ends_with("z\"\n    fill=\"#000000\" />\n\n"));
    }

    #[test]
    fn test_footer_has_no_trailing_newline() {
        let svg = render(|w| w.write_footer());
        assert_eq!(svg, "</svg>");
    }
}
