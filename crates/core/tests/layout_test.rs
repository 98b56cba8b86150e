//! Tests for the pixel-to-percentage layout transform.

use facsimile_core::layout::zone_style;
use facsimile_core::{Facsimile, FacsimileError, RenderParams};

const FIXTURE: &str = include_str!("fixtures/annotated.xml");

fn attributes(doc: &Facsimile<'_>, id: &str) -> String {
    let zone = doc.zone_by_id(id).unwrap();
    zone_style(&zone, &RenderParams::default())
        .unwrap()
        .to_attributes()
}

fn style_error(doc: &Facsimile<'_>, id: &str) -> FacsimileError {
    let zone = doc.zone_by_id(id).unwrap();
    zone_style(&zone, &RenderParams::default()).unwrap_err()
}

// ============================================================================
// Lines
// ============================================================================

mod line_tests {
    use super::*;

    #[test]
    fn test_line_relative_to_page() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        assert_eq!(
            attributes(&doc, "p1l1"),
            r#"style="left:51.50%;top:14.40%;width:5.30%;height:1.00%;text-align:left;font-size:10.00px" data-vhfontsize="1.00""#
        );
    }

    #[test]
    fn test_line_font_size_from_word_heights() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        assert_eq!(
            attributes(&doc, "p3l1"),
            r#"style="left:6.67%;top:10.00%;width:40.00%;height:3.00%;text-align:left;font-size:25.00px" data-vhfontsize="3.00""#
        );
    }

    #[test]
    fn test_reference_size_scales_font_only() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let zone = doc.zone_by_id("p1l1").unwrap();
        let params = RenderParams::default().with_reference_size(3000.0);
        let style = zone_style(&zone, &params).unwrap();
        assert_eq!(style.style["font-size"], "30.00px");
        assert_eq!(style.style["left"], "51.50%");
        assert_eq!(style.data["vhfontsize"], "1.00");
    }

    #[test]
    fn test_line_filling_its_page() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><facsimile>
<surface type="page" ulx="0" uly="0" lrx="800" lry="1000">
<zone type="line" xml:id="full" ulx="0" uly="0" lrx="800" lry="1000"><line>all</line></zone>
</surface></facsimile></TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let zone = doc.zone_by_id("full").unwrap();
        let style = zone_style(&zone, &RenderParams::default()).unwrap();
        assert_eq!(style.style["left"], "0.00%");
        assert_eq!(style.style["top"], "0.00%");
        assert_eq!(style.style["width"], "100.00%");
        assert_eq!(style.style["height"], "100.00%");
        assert_eq!(style.style["font-size"], "1000.00px");
    }
}

// ============================================================================
// Words and image highlights
// ============================================================================

mod word_tests {
    use super::*;

    #[test]
    fn test_words_relative_to_line() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        assert_eq!(
            attributes(&doc, "p3w1"),
            r#"style="width:33.33%;height:66.67%;left:0.00%""#
        );
        assert_eq!(
            attributes(&doc, "p3w2"),
            r#"style="width:58.33%;height:100.00%;left:41.67%""#
        );
    }

    #[test]
    fn test_image_highlight_relative_to_page() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        assert_eq!(
            attributes(&doc, "highlight-ccc"),
            r#"style="left:10.00%;top:26.67%;width:20.00%;height:13.33%""#
        );
    }

    #[test]
    fn test_other_regions_have_no_style() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let zone = doc.zone_by_id("p1b1").unwrap();
        let style = zone_style(&zone, &RenderParams::default()).unwrap();
        assert!(style.is_empty());
        assert_eq!(style.to_attributes(), "");
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failure_tests {
    use super::*;

    #[test]
    fn test_missing_coordinate() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let err = style_error(&doc, "p3l3");
        assert!(
            matches!(err, FacsimileError::MissingAttribute { attribute: "lry", .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_zero_area_page() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let err = style_error(&doc, "p4l1");
        assert!(matches!(err, FacsimileError::ZeroAreaPage { ref page } if page == "p4"), "{err:?}");
    }

    #[test]
    fn test_degenerate_word_parent() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><facsimile>
<surface type="page" ulx="0" uly="0" lrx="100" lry="100">
<zone type="textLine" xml:id="flat" ulx="10" uly="10" lrx="10" lry="20">
<zone type="string" xml:id="w" ulx="10" uly="10" lrx="10" lry="20"><w>x</w></zone>
</zone>
</surface></facsimile></TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let err = style_error(&doc, "w");
        assert!(matches!(err, FacsimileError::DegenerateZone { ref zone } if zone == "flat"), "{err:?}");
    }

    #[test]
    fn test_zone_outside_any_page() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><facsimile>
<surface type="cover" ulx="0" uly="0" lrx="100" lry="100">
<zone type="line" xml:id="stray" ulx="0" uly="0" lrx="10" lry="10"><line>x</line></zone>
</surface></facsimile></TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let err = style_error(&doc, "stray");
        assert!(matches!(err, FacsimileError::MissingAncestor { .. }), "{err:?}");
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><facsimile>
<surface type="page" ulx="0" uly="0" lrx="100" lry="100">
<zone type="line" xml:id="nan" ulx="NaN" uly="0" lrx="10" lry="10"><line>x</line></zone>
</surface></facsimile></TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let err = style_error(&doc, "nan");
        assert!(matches!(err, FacsimileError::InvalidNumber { attribute: "ulx", .. }), "{err:?}");
    }
}
