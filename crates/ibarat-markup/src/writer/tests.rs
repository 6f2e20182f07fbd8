//! Snapshot tests for HtmlWriter output.

use crate::nodes::SpanStyle;
use crate::parse;
use crate::render::{RenderOptions, StyleClassProvider, TextDirection};

use super::{render_html, render_paragraphs, render_segments};

fn html(source: &str) -> String {
    render_html(&parse(source), &RenderOptions::default())
}

#[test]
fn test_mixed_styles() {
    insta::assert_snapshot!(
        html("Plain [Ref] **Bold** *Italic*"),
        @r#"<p dir="rtl">Plain <span class="ibarat-ref">Ref</span> <strong>Bold</strong> <em>Italic</em></p>"#
    );
}

#[test]
fn test_separator_blocks() {
    insta::assert_snapshot!(html("A\n***\nB"), @r#"
    <p dir="rtl">A</p>
    <hr />
    <p dir="rtl">B</p>
    "#);
}

#[test]
fn test_empty_document() {
    insta::assert_snapshot!(html(""), @r#"<p dir="rtl"></p>"#);
}

#[test]
fn test_text_is_escaped() {
    insta::assert_snapshot!(
        html("a < b & **<c>**"),
        @r#"<p dir="rtl">a &lt; b &amp; <strong>&lt;c&gt;</strong></p>"#
    );
}

#[test]
fn test_reference_content_is_literal() {
    insta::assert_snapshot!(
        html("[**x**]"),
        @r#"<p dir="rtl"><span class="ibarat-ref">**x**</span></p>"#
    );
}

#[test]
fn test_empty_spans_kept_by_default() {
    insta::assert_snapshot!(html("a[]b"), @r#"<p dir="rtl">a<span class="ibarat-ref"></span>b</p>"#);
}

#[test]
fn test_empty_spans_elided() {
    let options = RenderOptions {
        elide_empty_spans: true,
        direction: TextDirection::Ltr,
        ..Default::default()
    };
    let out = render_html(&parse("a[]****b"), &options);
    insta::assert_snapshot!(out, @r#"<p dir="ltr">ab</p>"#);
}

struct Classes;

impl StyleClassProvider for Classes {
    fn class_for(&self, style: SpanStyle) -> Option<&str> {
        match style {
            SpanStyle::Reference => Some("text-primary"),
            SpanStyle::Plain => Some("arabic"),
            _ => None,
        }
    }
}

#[test]
fn test_extra_classes() {
    let segments = render_segments(&parse("x [y]"), &RenderOptions::default(), Classes);
    assert_eq!(segments.len(), 1);
    insta::assert_snapshot!(
        segments[0],
        @r#"<p dir="rtl"><span class="arabic">x </span><span class="ibarat-ref text-primary">y</span></p>"#
    );
}

#[test]
fn test_render_paragraphs_skips_separators() {
    let doc = parse("A\n***\n*B*");
    let paras = render_paragraphs(&doc, &RenderOptions::default(), ());
    assert_eq!(paras.len(), 2);
    assert_eq!(paras[0].id, "p-0");
    assert_eq!(paras[1].id, "p-1");
    assert_eq!(paras[1].char_range, 6..9);
    assert_eq!(paras[1].html, "<p dir=\"rtl\"><em>B</em></p>\n");
    assert_ne!(paras[0].source_hash, paras[1].source_hash);
}
