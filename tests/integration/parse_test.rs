//! Emitted sequences as a terminal parser reads them.

use escapes::table::NAMED_SEQUENCES;
use escapes::*;

use crate::helpers::{parse, Csi};

fn csi(params: &[u16], action: char) -> Csi {
    Csi {
        params: params.to_vec(),
        intermediates: Vec::new(),
        action,
    }
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn cursor_pos_is_row_then_column() {
    let parsed = parse(&cursor_pos(9, 4));
    assert_eq!(parsed.csi, vec![csi(&[5, 10], 'H')]);
}

#[test]
fn cursor_pos_x_and_y() {
    assert_eq!(parse(&cursor_pos_x(0)).csi, vec![csi(&[1], 'G')]);
    assert_eq!(parse(&cursor_pos_y(11)).csi, vec![csi(&[12], 'd')]);
}

#[test]
fn cursor_move_dispatches_two_sequences() {
    let parsed = parse(&cursor_move(-7, 3));
    assert_eq!(parsed.csi, vec![csi(&[7], 'D'), csi(&[3], 'B')]);
}

#[test]
fn cursor_move_zero_dispatches_nothing() {
    let parsed = parse(&cursor_move(0, 0));
    assert!(parsed.csi.is_empty());
}

#[test]
fn cursor_blink_disable_final_byte() {
    let parsed = parse(CURSOR_BLINK_DISABLE);
    assert_eq!(parsed.csi.len(), 1);
    assert_eq!(parsed.csi[0].params, vec![12]);
    assert_eq!(parsed.csi[0].intermediates, b"?".to_vec());
    assert_eq!(parsed.csi[0].action, 'I');
}

// ============================================================================
// Scroll and text editing
// ============================================================================

#[test]
fn scroll_direction() {
    assert_eq!(parse(&scroll(5)).csi, vec![csi(&[5], 'S')]);
    assert_eq!(parse(&scroll(-5)).csi, vec![csi(&[5], 'T')]);
    assert!(parse(&scroll(0)).csi.is_empty());
}

#[test]
fn text_edit_actions() {
    let test_cases = [
        (text_insert_chars(3), '@'),
        (text_delete_chars(3), 'P'),
        (text_erase_chars(3), 'X'),
        (text_insert_lines(3), 'L'),
        (text_delete_lines(3), 'M'),
    ];

    for (seq, action) in test_cases {
        assert_eq!(parse(&seq).csi, vec![csi(&[3], action)], "Failed for {action}");
    }
}

// ============================================================================
// Named constants
// ============================================================================

#[test]
fn every_named_sequence_dispatches_once() {
    for entry in NAMED_SEQUENCES {
        let parsed = parse(entry.value);
        let dispatched = parsed.csi.len() + parsed.esc.len();
        assert_eq!(dispatched, 1, "Failed for {}", entry.name);
    }
}

#[test]
fn clear_screen_is_an_esc_sequence() {
    let parsed = parse(CLEAR_SCREEN);
    assert!(parsed.csi.is_empty());
    assert_eq!(parsed.esc, vec![b'c']);
}

#[test]
fn bright_colors_carry_bold_parameter() {
    assert_eq!(parse(TEXT_COLOR_BRIGHT_CYAN).csi, vec![csi(&[36, 1], 'm')]);
    assert_eq!(parse(BACKGROUND_COLOR_BRIGHT_RED).csi, vec![csi(&[41, 1], 'm')]);
}

// ============================================================================
// OSC
// ============================================================================

#[test]
fn link_opens_and_closes_hyperlink() {
    let parsed = parse(&link("http://x", "t"));
    assert_eq!(
        parsed.osc,
        vec![
            vec![b"8".to_vec(), Vec::new(), b"http://x".to_vec()],
            vec![b"8".to_vec(), Vec::new(), Vec::new()],
        ]
    );
}

#[test]
fn set_cwd_single_osc() {
    let parsed = parse(&set_cwd("/tmp"));
    assert_eq!(
        parsed.osc,
        vec![vec![b"50".to_vec(), b"CurrentDir=/tmp".to_vec()]]
    );
}

#[test]
fn image_fields_in_order() {
    let parsed = parse(&image_width_height(b"abc", 10, 20, false));
    assert_eq!(
        parsed.osc,
        vec![vec![
            b"1337".to_vec(),
            b"File=inline=1".to_vec(),
            b"width=10".to_vec(),
            b"height=20".to_vec(),
            b"preserveAspectRatio=0:YWJj".to_vec(),
        ]]
    );
}

#[test]
fn console_dim_is_plain_data() {
    let dim = ConsoleDim::new(24, 80);
    assert_eq!((dim.rows, dim.cols), (24, 80));
}
