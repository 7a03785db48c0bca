use super::*;

#[test]
fn parse_path_data_ok_and_err() {
    let p = parse_svg_path_d("M0 0 L10 0 L10 10 Z").unwrap();
    assert_eq!(p.elements().len(), 4);

    assert!(parse_svg_path_d("   ").is_err());
    assert!(parse_svg_path_d("M0 0 L").is_err());
}

#[test]
fn svg_outline_applies_transforms() {
    let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <g transform="translate(10 20)">
    <path d="M0 0 L4 0 L4 4 Z"/>
  </g>
</svg>"#;
    let outline = outline_from_svg(svg).unwrap();
    let bbox = kurbo::Shape::bounding_box(&outline);
    assert!((bbox.x0 - 10.0).abs() < 1e-4);
    assert!((bbox.y0 - 20.0).abs() < 1e-4);
    assert!((bbox.x1 - 14.0).abs() < 1e-4);
    assert!((bbox.y1 - 24.0).abs() < 1e-4);
}

#[test]
fn svg_without_paths_is_rejected() {
    let empty = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    let err = outline_from_svg(empty).unwrap_err();
    assert!(matches!(err, EpicycleError::Validation(_)));

    assert!(outline_from_svg(br#"<svg"#).is_err());
}
