use super::*;

#[test]
fn parses_six_digit_hex() {
    assert_eq!(Rgba::from_hex("#FF6B6B").unwrap(), Rgba::opaque(0xFF, 0x6B, 0x6B));
    assert_eq!(Rgba::from_hex("073b4c").unwrap(), Rgba::opaque(0x07, 0x3B, 0x4C));
}

#[test]
fn parses_alpha_hex() {
    let c = Rgba::from_hex("#11223380").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_hex(), "#11223380");
}

#[test]
fn rejects_bad_hex() {
    for bad in ["", "#FFF", "#GG0000", "#12345", "#ÿÿÿÿÿÿ"] {
        assert!(Rgba::from_hex(bad).is_err(), "{bad} should not parse");
    }
}

#[test]
fn palette_has_twenty_distinct_opaque_swatches() {
    let colors = palette();
    assert_eq!(colors.len(), 20);
    assert!(colors.iter().all(|c| c.a == 255));
    for (i, c) in colors.iter().enumerate() {
        assert!(!colors[i + 1..].contains(c));
    }
    assert_eq!(colors[0].to_hex(), "#FF6B6B");
}

#[test]
fn brush_clamps_to_range() {
    assert_eq!(BrushSize::new(1, 5, 50).diameter(), 5);
    assert_eq!(BrushSize::new(80, 5, 50).diameter(), 50);
    assert_eq!(BrushSize::new(20, 5, 50).radius(), 10.0);
}

#[test]
fn age_group_labels_round_trip() {
    for g in AgeGroup::ALL {
        assert_eq!(AgeGroup::from_label(g.label()), Some(g));
    }
    assert_eq!(AgeGroup::from_label("16-18"), None);
}

#[test]
fn age_group_serializes_as_label() {
    assert_eq!(serde_json::to_string(&AgeGroup::Preteen).unwrap(), "\"9-12\"");
}

#[test]
fn tool_state_defaults_to_first_swatch() {
    let tools = ToolState::new(20, 5, 50);
    assert_eq!(tools.color, palette()[0]);
    assert_eq!(tools.brush.diameter(), 20);
    assert_eq!(tools.brush_range(), (5, 50));
}

#[test]
fn tool_reducer_clamps_brush() {
    let tools = Rc::new(ToolState::new(20, 5, 50));
    let tools = tools.reduce(ToolAction::SetBrush(500));
    assert_eq!(tools.brush.diameter(), 50);
    let blue = Rgba::from_hex("#3A86FF").unwrap();
    let tools = tools.reduce(ToolAction::SelectColor(blue));
    assert_eq!(tools.color, blue);
}

#[test]
fn notices_read_as_success_or_failure() {
    assert_eq!(Notice::Cleared.text(), "Canvas cleared!");
    assert_eq!(Notice::Downloaded.text(), "Downloaded successfully!");
    assert!(!Notice::Downloaded.is_error());
    assert!(Notice::DownloadFailed.is_error());
}
