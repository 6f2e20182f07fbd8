//! End-to-end checks over the public API: insert with the toolbar
//! operations, parse the result, render it.

use ibarat_markup::{
    Block, Document, EditorDocument, IbaratEditor, MarkupOperation, Range, RenderOptions,
    Selection, SpanStyle, insert_markup, parse, render_html, render_plain,
};

const SAMPLES: &[&str] = &[
    "",
    "plain",
    "Plain [Ref] **Bold** *Italic*",
    "A\n***\nB",
    "\n***\n",
    "\n***\n\n***\n",
    "**unterminated",
    "*half",
    "[open",
    "close]",
    "**",
    "*",
    "***",
    "a ***b*** c",
    "[**x**]",
    "**[x]**",
    "a[]b****c**d",
    "***\n***\n***",
    "قال [النووي] في **المجموع**: *والأصح* الجواز\n***\nوالله أعلم",
    "**a\n***\nb**",
];

fn styles(doc: &Document) -> Vec<(SpanStyle, &str)> {
    doc.spans().map(|s| (s.style, s.text.as_str())).collect()
}

#[test]
fn insert_bold_scenario() {
    let ins = insert_markup("hello world", Range::new(0, 5), MarkupOperation::Bold).unwrap();
    assert_eq!(ins.text, "**hello** world");
    assert_eq!(ins.selection, Range::new(2, 7));
}

#[test]
fn parse_mixed_scenario() {
    let doc = parse("Plain [Ref] **Bold** *Italic*");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(
        styles(&doc),
        vec![
            (SpanStyle::Plain, "Plain "),
            (SpanStyle::Reference, "Ref"),
            (SpanStyle::Plain, " "),
            (SpanStyle::Bold, "Bold"),
            (SpanStyle::Plain, " "),
            (SpanStyle::Italic, "Italic"),
        ]
    );
}

#[test]
fn parse_separator_scenario() {
    let doc = parse("A\n***\nB");
    assert_eq!(doc.blocks.len(), 3);
    assert!(doc.blocks[1].is_separator());
    let texts: Vec<String> = doc.paragraphs().map(|p| p.to_plain_text()).collect();
    assert_eq!(texts, ["A", "B"]);
}

#[test]
fn insert_separator_scenario() {
    let ins = insert_markup("abc", Range::caret(1), MarkupOperation::Separator).unwrap();
    assert_eq!(ins.text, "a\n***\nbc");
    // Caret lands right after the inserted literal.
    assert_eq!(ins.selection, Range::caret(6));
    assert!(ins.selection.is_caret());
}

#[test]
fn parse_empty_scenario() {
    let doc = parse("");
    assert_eq!(doc.blocks.len(), 1);
    assert!(doc.blocks[0].as_paragraph().is_some_and(|p| p.is_empty()));
}

#[test]
fn parse_reference_is_literal_scenario() {
    let doc = parse("[**x**]");
    assert_eq!(styles(&doc), vec![(SpanStyle::Reference, "**x**")]);
}

#[test]
fn unterminated_bold_is_plain() {
    let doc = parse("**unterminated");
    assert_eq!(styles(&doc), vec![(SpanStyle::Plain, "**unterminated")]);
}

#[test]
fn markup_round_trips() {
    for sample in SAMPLES {
        assert_eq!(parse(sample).to_markup(), *sample, "{sample:?}");
    }
}

#[test]
fn plain_text_keeps_separators() {
    for sample in SAMPLES {
        let doc = parse(sample);
        let plain = doc.to_plain_text();
        assert_eq!(
            plain.matches("\n***\n").count(),
            sample.matches("\n***\n").count(),
            "{sample:?}"
        );
        assert_eq!(doc.separator_count(), sample.matches("\n***\n").count());
    }
}

#[test]
fn parse_is_idempotent() {
    for sample in SAMPLES {
        assert_eq!(parse(sample), parse(sample));
    }
}

#[test]
fn blocks_alternate() {
    for sample in SAMPLES {
        let doc = parse(sample);
        for (i, block) in doc.blocks.iter().enumerate() {
            assert_eq!(block.is_separator(), i % 2 == 1, "{sample:?}");
        }
        assert_eq!(doc.blocks.len() % 2, 1);
    }
}

#[test]
fn plain_spans_never_empty_or_adjacent() {
    for sample in SAMPLES {
        for para in parse(sample).paragraphs() {
            for pair in para.spans.windows(2) {
                assert!(
                    !(pair[0].style == SpanStyle::Plain && pair[1].style == SpanStyle::Plain),
                    "{sample:?}"
                );
            }
            for span in &para.spans {
                if span.style == SpanStyle::Plain {
                    assert!(!span.is_empty(), "{sample:?}");
                }
            }
        }
    }
}

#[test]
fn span_ranges_index_raw_text() {
    for sample in SAMPLES {
        let chars: Vec<char> = sample.chars().collect();
        for span in parse(sample).spans() {
            assert_eq!(&sample[span.byte_range.clone()], span.to_markup());
            let by_char: String = chars[span.char_range.clone()].iter().collect();
            assert_eq!(by_char, span.to_markup());
        }
    }
}

/// Every string of up to `max_len` chars over `alphabet`.
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        out.extend(frontier.iter().cloned());
    }
    out
}

fn assert_parse_invariants(text: &str) {
    let doc = parse(text);
    assert_eq!(doc.to_markup(), text, "{text:?}");
    assert_eq!(doc, parse(text), "{text:?}");
    assert_eq!(doc.separator_count(), text.matches("\n***\n").count(), "{text:?}");

    assert_eq!(doc.blocks.len() % 2, 1, "{text:?}");
    for (i, block) in doc.blocks.iter().enumerate() {
        assert_eq!(block.is_separator(), i % 2 == 1, "{text:?}");
    }

    let chars: Vec<char> = text.chars().collect();
    for para in doc.paragraphs() {
        for pair in para.spans.windows(2) {
            assert!(
                !(pair[0].style == SpanStyle::Plain && pair[1].style == SpanStyle::Plain),
                "{text:?}"
            );
        }
        for span in &para.spans {
            if span.style == SpanStyle::Plain {
                assert!(!span.is_empty(), "{text:?}");
            }
            assert_eq!(&text[span.byte_range.clone()], span.to_markup(), "{text:?}");
            let by_char: String = chars[span.char_range.clone()].iter().collect();
            assert_eq!(by_char, span.to_markup(), "{text:?}");
        }
    }
}

#[test]
fn short_strings_keep_parse_invariants() {
    let texts = all_strings(&['[', ']', '*', '\n', 'a', 'ق'], 5);
    assert_eq!(texts.len(), 1 + 6 + 36 + 216 + 1296 + 7776);
    for text in &texts {
        assert_parse_invariants(text);
    }
}

#[test]
fn wrap_selects_original_content() {
    let texts = ["hello world", "", "قال الشيخ رحمه الله", "a*b[c]d"];
    let ops = [
        MarkupOperation::Reference,
        MarkupOperation::Bold,
        MarkupOperation::Italic,
    ];
    for text in texts {
        let chars: Vec<char> = text.chars().collect();
        for start in 0..=chars.len() {
            for end in start..=chars.len() {
                for op in ops {
                    let ins = insert_markup(text, Range::new(start, end), op).unwrap();
                    let selected: String = ins
                        .text
                        .chars()
                        .skip(ins.selection.start)
                        .take(ins.selection.len())
                        .collect();
                    let original: String = chars[start..end].iter().collect();
                    assert_eq!(selected, original, "{text:?} {start}..{end} {op}");
                }
            }
        }
    }
}

#[test]
fn wrapped_selection_parses_to_styled_span() {
    let text = "والأصح الجواز";
    let ins = insert_markup(text, Range::new(0, 6), MarkupOperation::Reference).unwrap();
    let doc = parse(&ins.text);
    assert_eq!(
        styles(&doc),
        vec![
            (SpanStyle::Reference, "والأصح"),
            (SpanStyle::Plain, " الجواز"),
        ]
    );
}

#[test]
fn editor_session_to_html() {
    let mut editor = IbaratEditor::from_text("hukum asal x");
    editor.set_selection(Selection::new(6, 10));
    editor.apply(MarkupOperation::Bold).unwrap();
    editor.set_cursor_offset(editor.len_chars());
    editor.apply(MarkupOperation::Separator).unwrap();
    editor.insert(editor.len_chars(), "[Fath al-Qarib]");

    let raw = editor.content_string();
    assert_eq!(raw, "hukum **asal** x\n***\n[Fath al-Qarib]");

    let doc = parse(&raw);
    insta::assert_snapshot!(render_html(&doc, &RenderOptions::default()), @r#"
    <p dir="rtl">hukum <strong>asal</strong> x</p>
    <hr />
    <p dir="rtl"><span class="ibarat-ref">Fath al-Qarib</span></p>
    "#);
    assert_eq!(render_plain(&doc), "hukum asal x\n* * *\nFath al-Qarib\n");
}

#[test]
fn document_serializes_with_block_tags() {
    let doc = parse("*A*\n***\n");
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["blocks"][0]["type"], "paragraph");
    assert_eq!(value["blocks"][0]["spans"][0]["style"], "italic");
    assert_eq!(value["blocks"][1], serde_json::json!({ "type": "separator" }));

    let back: Document = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
    assert!(matches!(back.blocks[2], Block::Paragraph(ref p) if p.is_empty()));
}
