use super::*;

#[test]
fn test_line_map_simple() {
    let source = "line1\nline2\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);

    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
    assert_eq!(map.offset_to_position(6, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(12, source), Position::new(2, 0));
}

#[test]
fn test_line_map_windows_line_endings() {
    let source = "line1\r\nline2\r\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(7, source), Position::new(1, 0));
    assert_eq!(map.position_to_offset(Position::new(1, 2), source), Some(9));
}

#[test]
fn test_position_to_offset_roundtrip() {
    let source = "int x = 1;\nint y = 2;\nint z = 3;";
    let map = LineMap::build(source);

    for offset in 0..source.len() as u32 {
        let pos = map.offset_to_position(offset, source);
        let back = map.position_to_offset(pos, source).unwrap();
        assert_eq!(offset, back, "roundtrip failed for offset {}", offset);
    }
}

#[test]
fn test_position_past_line_end() {
    let source = "ab\ncd";
    let map = LineMap::build(source);

    // Column == line length maps to the terminator
    assert_eq!(map.position_to_offset(Position::new(0, 2), source), Some(2));
    assert_eq!(map.position_to_offset(Position::new(0, 3), source), None);
    assert_eq!(map.position_to_offset(Position::new(1, 2), source), Some(5));
    assert_eq!(map.position_to_offset(Position::new(2, 0), source), None);
}

#[test]
fn test_multibyte_columns() {
    let source = "é x";
    let map = LineMap::build(source);

    // 'é' is two bytes but one column
    assert_eq!(map.position_to_offset(Position::new(0, 2), source), Some(3));
    assert_eq!(map.offset_to_position(3, source), Position::new(0, 2));
}

#[test]
fn test_host_position_conversion() {
    assert_eq!(
        HostPosition::new(3, 5).to_internal(),
        Some(Position::new(3, 4))
    );
    assert_eq!(HostPosition::new(0, 0).to_internal(), None);
}
