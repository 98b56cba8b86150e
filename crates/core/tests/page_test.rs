//! Tests for whole-page overlay rendering.

use facsimile_core::render::PageRenderer;
use facsimile_core::{Facsimile, FacsimileError, RenderParams};

const FIXTURE: &str = include_str!("fixtures/annotated.xml");

// ============================================================================
// Markup
// ============================================================================

mod markup_tests {
    use super::*;

    #[test]
    fn test_plain_line_markup() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(0).unwrap());
        assert!(markup.is_complete());

        let first = markup.html.lines().next().unwrap();
        assert_eq!(
            first,
            concat!(
                r#"<div class="ocr-line ocrtext" id="p1l1" "#,
                r#"style="left:51.50%;top:14.40%;width:5.30%;height:1.00%;text-align:left;font-size:10.00px" "#,
                r#"data-vhfontsize="1.00"><span>^ Ui</span></div>"#,
            )
        );
    }

    #[test]
    fn test_lines_then_image_highlights() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(0).unwrap());

        let lines: Vec<&str> = markup.html.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[..5].iter().all(|l| l.starts_with("<div class=\"ocr-line ocrtext\"")));
        assert_eq!(
            lines[5],
            concat!(
                r#"<span class="annotator-hl image-annotation-highlight" data-annotation-id="ccc" "#,
                r#"style="left:10.00%;top:26.67%;width:20.00%;height:13.33%"></span>"#,
            )
        );
        assert!(lines[1].contains(
            r#"<span class="annotator-hl" data-annotation-id="aaa">First highlighted line</span>"#
        ));
    }

    #[test]
    fn test_line_with_words() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(2).unwrap());

        let first = markup.html.lines().next().unwrap();
        assert_eq!(
            first,
            concat!(
                r#"<div class="ocr-line" id="p3l1" "#,
                r#"style="left:6.67%;top:10.00%;width:40.00%;height:3.00%;text-align:left;font-size:25.00px" "#,
                r#"data-vhfontsize="3.00">"#,
                r#"<div class="ocr-zone ocrtext" style="width:33.33%;height:66.67%;left:0.00%"><span>Hello</span></div>"#,
                r#"<div class="ocr-zone ocrtext" style="width:58.33%;height:100.00%;left:41.67%"><span>world</span></div>"#,
                "</div>",
            )
        );
        assert!(markup.html.contains(
            r#"<span class="annotator-hl" data-annotation-id="ddd">highlighted</span>"#
        ));
    }

    #[test]
    fn test_liquid_raw_wraps_text() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let params = RenderParams::default().with_liquid_raw(true);
        let markup = PageRenderer::new(&params).render_page(&doc.page(0).unwrap());
        assert!(markup.html.contains("<span>{% raw %}^ Ui{% endraw %}</span>"));
        let image = markup.html.lines().last().unwrap();
        assert!(image.contains("image-annotation-highlight"));
        assert!(!image.contains("{% raw %}"));
    }

    #[test]
    fn test_image_highlight_keeps_unprefixed_id() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><facsimile>
<surface type="page" xml:id="pg" ulx="0" uly="0" lrx="100" lry="100">
<zone type="image-annotation-highlight" xml:id="img-42" ulx="20" uly="30" lrx="60" lry="50"/>
</surface></facsimile></TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(0).unwrap());
        assert!(markup.is_complete());
        assert_eq!(
            markup.html,
            concat!(
                r#"<span class="annotator-hl image-annotation-highlight" data-annotation-id="img-42" "#,
                r#"style="left:20.00%;top:30.00%;width:40.00%;height:20.00%"></span>"#,
                "\n",
            )
        );
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failure_tests {
    use super::*;

    #[test]
    fn test_bad_line_is_skipped() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(2).unwrap());

        assert!(!markup.is_complete());
        assert_eq!(markup.failures.len(), 1);
        assert_eq!(markup.failures[0].zone, "p3l3");
        assert!(matches!(
            markup.failures[0].error,
            FacsimileError::MissingAttribute { attribute: "lry", .. }
        ));

        assert!(!markup.html.contains("<span>broken box"));
        assert!(markup.html.contains("after the broken box"));
        assert_eq!(markup.html.lines().count(), 3);
    }

    #[test]
    fn test_zero_area_page() {
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(3).unwrap());

        assert!(markup.html.is_empty());
        assert_eq!(markup.failures.len(), 1);
        assert_eq!(markup.failures[0].zone, "p4l1");
        assert!(matches!(
            markup.failures[0].error,
            FacsimileError::ZeroAreaPage { .. }
        ));
    }

    #[test]
    fn test_bad_word_skips_only_that_word() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><facsimile>
<surface type="page" xml:id="pg" ulx="0" uly="0" lrx="100" lry="100">
<zone type="textLine" xml:id="l" ulx="0" uly="0" lrx="50" lry="10">
<zone type="string" xml:id="ok" ulx="0" uly="0" lrx="20" lry="10"><w>ok</w></zone>
<zone type="string" xml:id="bad" ulx="25" uly="0" lrx="50"><w>bad</w></zone>
</zone>
</surface></facsimile></TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let params = RenderParams::default();
        let markup = PageRenderer::new(&params).render_page(&doc.page(0).unwrap());

        assert_eq!(markup.failures.len(), 1);
        assert_eq!(markup.failures[0].zone, "bad");
        assert!(markup.html.contains("<span>ok</span>"));
        assert!(!markup.html.contains("<span>bad</span>"));
    }
}
