//! Tests for highlight span markup around zone text.

use facsimile_core::render::SpanRenderer;
use facsimile_core::{Facsimile, RenderParams};

const FIXTURE: &str = include_str!("fixtures/annotated.xml");

const HL_BBB: &str = r#"<span class="annotator-hl" data-annotation-id="bbb">"#;
const HL_FFF: &str = r#"<span class="annotator-hl" data-annotation-id="fff">"#;
const HL_GGG: &str = r#"<span class="annotator-hl" data-annotation-id="ggg">"#;

fn render_zone(params: &RenderParams, id: &str) -> String {
    let doc = Facsimile::parse(FIXTURE).unwrap();
    let zone = doc.zone_by_id(id).unwrap();
    SpanRenderer::new(params).render_zone(&zone)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ============================================================================
// Begin / end wrappers
// ============================================================================

mod wrapper_tests {
    use super::*;

    #[test]
    fn test_open_highlight() {
        let params = RenderParams::default();
        let spans = SpanRenderer::new(&params);
        assert_eq!(spans.open_highlight("bbb"), HL_BBB);
    }

    #[test]
    fn test_uncovered_zone_gets_plain_span() {
        let params = RenderParams::default();
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let zone = doc.zone_by_id("p1l1").unwrap();
        let spans = SpanRenderer::new(&params);
        assert_eq!(spans.begin_markup(&zone), "<span>");
        assert_eq!(spans.end_markup(&zone), "</span>");
    }

    #[test]
    fn test_nested_wrappers() {
        let params = RenderParams::default();
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let zone = doc.zone_by_id("p2l2").unwrap();
        let spans = SpanRenderer::new(&params);
        assert_eq!(
            spans.begin_markup(&zone),
            concat!(
                r#"<span class="annotator-hl" data-annotation-id="outer">"#,
                r#"<span class="annotator-hl" data-annotation-id="inner">"#,
            )
        );
        assert_eq!(spans.end_markup(&zone), "</span></span>");
    }

    #[test]
    fn test_overlapping_wrappers() {
        let params = RenderParams::default();
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let spans = SpanRenderer::new(&params);
        for id in ["p2l5", "p2l5b"] {
            let zone = doc.zone_by_id(id).unwrap();
            assert_eq!(
                spans.begin_markup(&zone),
                concat!(
                    r#"<span class="annotator-hl" data-annotation-id="ppp">"#,
                    r#"<span class="annotator-hl" data-annotation-id="qqq">"#,
                ),
                "{id}"
            );
            assert_eq!(spans.end_markup(&zone), "</span></span>", "{id}");
        }
        assert_eq!(
            render_zone(&params, "p2l5b"),
            concat!(
                r#"<span class="annotator-hl" data-annotation-id="ppp">"#,
                r#"<span class="annotator-hl" data-annotation-id="qqq">"#,
                "still p and q</span></span>",
            )
        );
    }

    #[test]
    fn test_custom_highlight_class() {
        let params = RenderParams {
            highlight_class: "hl".to_string(),
            ..RenderParams::default()
        };
        assert_eq!(
            render_zone(&params, "p1l2"),
            r#"<span class="hl" data-annotation-id="aaa">First highlighted line</span>"#
        );
    }
}

// ============================================================================
// Text with anchors inside it
// ============================================================================

mod text_tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let params = RenderParams::default();
        assert_eq!(render_zone(&params, "p1l1"), "<span>^ Ui</span>");
    }

    #[test]
    fn test_inline_highlight() {
        let params = RenderParams::default();
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let zone = doc.zone_by_id("p1l4").unwrap();
        let text = SpanRenderer::new(&params).rendered_text(&zone);
        assert_eq!(
            text,
            format!("\" XIV.—In {HL_BBB} Search of a Father, </span> - 162")
        );
    }

    #[test]
    fn test_highlight_opening_inside_covered_line() {
        let params = RenderParams::default();
        assert_eq!(
            render_zone(&params, "p2l7"),
            format!("{HL_FFF}alpha {HL_GGG}beta</span>")
        );
    }

    #[test]
    fn test_line_starting_inside_highlight() {
        let params = RenderParams::default();
        assert_eq!(
            render_zone(&params, "p2l8"),
            format!("{HL_FFF}{HL_GGG}gamma</span> delta</span>")
        );
    }

    #[test]
    fn test_malformed_anchor_keeps_text() {
        let params = RenderParams::default();
        assert_eq!(render_zone(&params, "p2l9"), "<span>keep text</span>");
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
<surface type="page"><zone type="line" xml:id="z"><line>a &lt;b&gt; &amp; c</line></zone></surface>
</TEI>"#;
        let doc = Facsimile::parse(xml).unwrap();
        let params = RenderParams::default();
        let html = SpanRenderer::new(&params).render_zone(&doc.zone_by_id("z").unwrap());
        assert_eq!(html, "<span>a &lt;b&gt; &amp; c</span>");
    }

    #[test]
    fn test_liquid_raw() {
        let params = RenderParams::default().with_liquid_raw(true);
        assert_eq!(
            render_zone(&params, "p1l1"),
            "<span>{% raw %}^ Ui{% endraw %}</span>"
        );
    }
}

// ============================================================================
// Balance
// ============================================================================

mod balance_tests {
    use super::*;
    use facsimile_core::highlight::is_partially_highlighted;

    #[test]
    fn test_zones_without_anchors_are_balanced() {
        let params = RenderParams::default();
        let doc = Facsimile::parse(FIXTURE).unwrap();
        let spans = SpanRenderer::new(&params);
        for page in doc.pages() {
            for zone in page.lines().iter().chain(page.word_zones().iter()) {
                if is_partially_highlighted(zone) {
                    continue;
                }
                let html = spans.render_zone(zone);
                assert_eq!(
                    count(&html, "<span"),
                    count(&html, "</span>"),
                    "{:?}: {html}",
                    zone.id()
                );
            }
        }
    }

    #[test]
    fn test_paired_inline_anchors_are_balanced() {
        let params = RenderParams::default();
        let html = render_zone(&params, "p1l4");
        assert_eq!(count(&html, "<span"), 2);
        assert_eq!(count(&html, "</span>"), 2);
    }

    #[test]
    fn test_start_without_end_leaves_wrapper_open() {
        let params = RenderParams::default();
        let html = render_zone(&params, "p2l7");
        assert_eq!(count(&html, "<span"), count(&html, "</span>") + 1);
    }
}
