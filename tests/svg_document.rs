//! End-to-end tests of the generated SVG document

use std::fs;

use pretty_assertions::assert_eq;

use plus_texture::{generate, generate_to_file, seeded_rng, SvgConfig, TextureConfig, TextureError};

fn render(config: &TextureConfig, seed: u64) -> String {
    let mut out = Vec::new();
    generate(config, &SvgConfig::default(), &mut seeded_rng(seed), &mut out)
        .expect("generation into memory should succeed");
    String::from_utf8(out).expect("SVG output is UTF-8")
}

/// Value of the first `name="..."` attribute in `svg`
fn attribute<'a>(svg: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = svg.find(&needle)? + needle.len();
    let end = svg[start..].find('"')?;
    Some(&svg[start..start + end])
}

/// Fill colors of every marker path, in document order
fn path_fills(svg: &str) -> Vec<&str> {
    svg.split("<path")
        .skip(1)
        .filter_map(|chunk| attribute(chunk, "fill"))
        .collect()
}

#[test]
fn test_empty_document_fixture() {
    let svg = render(&TextureConfig::default().with_density(0.0), 0);
    insta::assert_snapshot!(svg, @r##"
<?xml version="1.0" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
    "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">

<svg width="210mm" height="297mm" viewBox="0 0 210 297"
    xmlns="http://www.w3.org/2000/svg" version="1.1">

  <title>Plus texture</title>
  <desc>Generated texture for FAST corner detector</desc>

  <rect width="210" height="297" fill="#7f7f7f" />

</svg>
"##);
}

#[test]
fn test_viewbox_and_background_round_trip() {
    let pages = [
        (210.0, 297.0, 127u8),
        (100.0, 50.0, 12),
        (841.0, 1189.0, 255),
    ];
    for (width, height, background) in pages {
        let config = TextureConfig::new()
            .with_page_size(width, height)
            .with_density(200.0)
            .with_background_lightness(background);
        let svg = render(&config, 1);

        assert_eq!(
            attribute(&svg, "viewBox"),
            Some(format!("0 0 {} {}", width, height).as_str())
        );

        let rect = &svg[svg.find("<rect").expect("background rect")..];
        let hex = format!("{:02x}", background);
        assert_eq!(
            attribute(rect, "fill"),
            Some(format!("#{0}{0}{0}", hex).as_str())
        );
    }
}

#[test]
fn test_structure_order() {
    let svg = render(&TextureConfig::default().with_density(500.0), 5);
    let tags = [
        "<?xml", "<!DOCTYPE", "<svg", "<title>", "<desc>", "<rect", "<path",
    ];
    let positions: Vec<usize> = tags
        .iter()
        .map(|tag| svg.find(tag).unwrap_or_else(|| panic!("missing {}", tag)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(svg.rfind("<path").unwrap() < svg.rfind("</svg>").unwrap());
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_one_closed_path_per_marker() {
    let config = TextureConfig::default().with_density(1000.0);
    let svg = render(&config, 8);
    // 1000 * 0.21 * 0.297 = 62.37
    assert_eq!(svg.matches("<path").count(), 62);

    for chunk in svg.split("<path").skip(1) {
        let d = attribute(chunk, "d").expect("path data");
        assert!(d.starts_with("M "));
        assert!(d.ends_with(" z"));
        // Twelve vertices, each an x,y pair
        let vertices = d.trim_start_matches("M ").trim_end_matches(" z");
        assert_eq!(vertices.split(' ').count(), 12);
        assert!(vertices.split(' ').all(|v| v.split(',').count() == 2));
    }
}

#[test]
fn test_marker_fills_are_gray() {
    let svg = render(&TextureConfig::default(), 21);
    let fills = path_fills(&svg);
    assert_eq!(fills.len(), 624);
    for fill in fills {
        assert_eq!(fill.len(), 7);
        let channel = &fill[1..3];
        assert_eq!(fill, format!("#{0}{0}{0}", channel));
        assert_eq!(channel, channel.to_lowercase());
    }
}

#[test]
fn test_generate_to_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("texture.svg");
    let config = TextureConfig::default().with_density(300.0);

    let summary =
        generate_to_file(&config, &SvgConfig::default(), &mut seeded_rng(9), &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();

    assert_eq!(summary.marker_count, 19);
    assert_eq!(written, render(&config, 9));
}

#[test]
fn test_generate_to_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("texture.svg");

    let err = generate_to_file(
        &TextureConfig::default(),
        &SvgConfig::default(),
        &mut seeded_rng(0),
        &path,
    )
    .unwrap_err();

    assert!(matches!(err, TextureError::OutputUnavailable { .. }));
    assert!(err.to_string().contains("texture.svg"));
}
