// Import the library functions
use geo::{line_string, point, polygon, Geometry, GeometryCollection, MultiPoint, MultiPolygon};
use gmaps_render::maps::{self, DescribeOptions, Rendered};
use gmaps_render::options::{options_from, LatLngOptions, OptionMap, RenderOptions};
use gmaps_render::{GeometryKind, PolylineError, RenderError};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    const RING_LAT_LNGS: &str = "[new google.maps.LatLng(0.0, 0.0), new google.maps.LatLng(1.0, 1.0), new google.maps.LatLng(2.5, 2.5), new google.maps.LatLng(5.0, 5.0), new google.maps.LatLng(0.0, 0.0)]";

    fn setup() {
        maps::use_api(3).expect("API 3 is always registered");
    }

    fn test_point() -> Geometry<f64> {
        point!(x: 10.0, y: 10.01).into()
    }

    fn test_polygon() -> Geometry<f64> {
        polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 2.5, y: 2.5),
            (x: 5.0, y: 5.0),
            (x: 0.0, y: 0.0),
        ]
        .into()
    }

    fn square(offset: f64) -> geo::Polygon<f64> {
        polygon![
            (x: offset, y: offset),
            (x: offset + 4.0, y: offset),
            (x: offset + 4.0, y: offset + 4.0),
            (x: offset, y: offset + 4.0),
        ]
    }

    fn literal(rendered: Result<Rendered, RenderError>) -> String {
        rendered
            .expect("render failed")
            .into_literal()
            .expect("expected a single literal")
    }

    #[test]
    fn test_to_lat_lng() {
        setup();
        let point = test_point();
        assert_eq!(
            literal(maps::lat_lng(&point, &LatLngOptions::default())),
            "new google.maps.LatLng(10.01, 10.0)"
        );
        assert_eq!(
            literal(maps::lat_lng(&point, &LatLngOptions::new().no_wrap(true))),
            "new google.maps.LatLng(10.01, 10.0, true)"
        );
    }

    #[test]
    fn test_coordinate_sequence_lat_lngs() {
        setup();
        let line: Geometry<f64> = line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)].into();
        let rendered = maps::lat_lng(&line, &LatLngOptions::default()).unwrap();
        assert_eq!(
            rendered,
            Rendered::List(vec![
                Rendered::Literal("new google.maps.LatLng(2.0, 1.0)".into()),
                Rendered::Literal("new google.maps.LatLng(4.0, 3.0)".into()),
            ])
        );
    }

    #[test]
    fn test_to_g_point() {
        setup();
        assert_eq!(literal(maps::point(&test_point())), "new google.maps.Point(10.0, 10.01)");
    }

    #[test]
    fn test_to_polygon() {
        setup();
        assert_eq!(
            literal(maps::polygon(&test_polygon(), &OptionMap::new(), &RenderOptions::default())),
            format!("new google.maps.Polygon({{\"paths\": {}}})", RING_LAT_LNGS)
        );

        let options = options_from(&json!({
            "stroke_color": "#b00b1e",
            "stroke_weight": 5,
            "stroke_opacity": 0.5,
            "fill_color": "#b00b1e",
            "map": "map"
        }))
        .unwrap();
        assert_eq!(
            literal(maps::polygon(&test_polygon(), &options, &RenderOptions::default())),
            format!(
                "new google.maps.Polygon({{\"strokeColor\": \"#b00b1e\", \"strokeWeight\": 5, \"strokeOpacity\": 0.5, \"fillColor\": \"#b00b1e\", \"map\": map, \"paths\": {}}})",
                RING_LAT_LNGS
            )
        );
    }

    #[test]
    fn test_to_polyline() {
        setup();
        assert_eq!(
            literal(maps::polyline(&test_polygon(), &OptionMap::new(), &RenderOptions::default())),
            format!("new google.maps.Polyline({{\"path\": {}}})", RING_LAT_LNGS)
        );

        let options = options_from(&json!({
            "stroke_weight": 5,
            "polyline_options": { "mouse_out_tolerence": 5 }
        }))
        .unwrap();
        assert_eq!(
            literal(maps::polyline(&test_polygon(), &options, &RenderOptions::default())),
            format!(
                "new google.maps.Polyline({{\"strokeWeight\": 5, \"polylineOptions\": {{\"mouseOutTolerence\":5}}, \"path\": {}}})",
                RING_LAT_LNGS
            )
        );
    }

    #[test]
    fn test_escape_removes_default_unescaped_key() {
        setup();
        let options = options_from(&json!({ "map": "map", "z_index": 2 })).unwrap();
        let render = RenderOptions::new().escape("map");
        let rendered = literal(maps::polyline(&test_polygon(), &options, &render));
        assert!(rendered.starts_with(r#"new google.maps.Polyline({"map": "map", "zIndex": 2, "path": ["#));
    }

    #[test]
    fn test_encoded_polygon_path() {
        setup();
        let render = RenderOptions::new().encoded(true);
        assert_eq!(
            literal(maps::polygon(&test_polygon(), &OptionMap::new(), &render)),
            r#"new google.maps.Polygon({"paths": google.maps.geometry.encoding.decodePath("??_ibE_ibE_~cH_~cH_hgN_hgN~po]~po]")})"#
        );
    }

    #[test]
    fn test_polygon_drops_interior_rings() {
        setup();
        let with_hole: Geometry<f64> = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 1.0)]]
        )
        .into();
        let rendered = literal(maps::polygon(&with_hole, &OptionMap::new(), &RenderOptions::default()));
        assert_eq!(rendered.matches("google.maps.LatLng(").count(), 4);
        assert!(!rendered.contains("LatLng(1.0, 2.0)"));
    }

    #[test]
    fn test_to_marker() {
        setup();
        assert_eq!(
            literal(maps::marker(&test_point(), &OptionMap::new(), &RenderOptions::default())),
            r#"new google.maps.Marker({"position": new google.maps.LatLng(10.01, 10.0)})"#
        );
    }

    #[test]
    fn test_marker_with_options() {
        setup();
        let options = options_from(&json!({ "raise_on_drag": true, "cursor": "test" })).unwrap();
        let render = RenderOptions::new().escape("position");
        let marker = literal(maps::marker(&test_point(), &options, &render));

        let json = marker
            .strip_prefix("new google.maps.Marker(")
            .and_then(|s| s.strip_suffix(')'))
            .expect("marker constructor");
        let parsed: serde_json::Value = serde_json::from_str(json).expect("escaped marker options are JSON");
        assert_eq!(
            parsed,
            json!({
                "raiseOnDrag": true,
                "cursor": "test",
                "position": "new google.maps.LatLng(10.01, 10.0)"
            })
        );
    }

    #[test]
    fn test_marker_position_is_unquoted_and_cursor_quoted() {
        setup();
        let options = options_from(&json!({ "cursor": "pointer", "icon": "icons.pin" })).unwrap();
        assert_eq!(
            literal(maps::marker(&test_point(), &options, &RenderOptions::default())),
            r#"new google.maps.Marker({"cursor": "pointer", "icon": icons.pin, "position": new google.maps.LatLng(10.01, 10.0)})"#
        );
    }

    #[test]
    fn test_marker_overrides_caller_position() {
        setup();
        let options = options_from(&json!({ "position": "new google.maps.LatLng(0.0, 0.0)" })).unwrap();
        assert_eq!(
            literal(maps::marker(&test_point(), &options, &RenderOptions::default())),
            r#"new google.maps.Marker({"position": new google.maps.LatLng(10.01, 10.0)})"#
        );
    }

    #[test]
    fn test_lat_lng_bounds() {
        setup();
        assert_eq!(
            literal(maps::lat_lng_bounds(&test_polygon(), &LatLngOptions::default())),
            "new google.maps.LatLngBounds(new google.maps.LatLng(0.0, 0.0), new google.maps.LatLng(5.0, 5.0))"
        );
        assert_eq!(
            literal(maps::lat_lng_bounds_string(&test_polygon(), 10)),
            "((0.0,0.0), (5.0,5.0))"
        );
        assert_eq!(
            literal(maps::lat_lng_bounds_string(&test_point(), 1)),
            "((10.0,10.0), (10.0,10.0))"
        );
    }

    #[test]
    fn test_collections_render_each_child() {
        setup();
        let empty: Geometry<f64> = Geometry::GeometryCollection(GeometryCollection::<f64>(vec![]));
        assert_eq!(
            maps::polyline(&empty, &OptionMap::new(), &RenderOptions::default()).unwrap(),
            Rendered::List(vec![])
        );

        let multi: Geometry<f64> = MultiPolygon::new(vec![square(0.0), square(10.0)]).into();
        let rendered = maps::polygon(&multi, &OptionMap::new(), &RenderOptions::default()).unwrap();
        let items = rendered.as_list().expect("one result per child");
        assert_eq!(items.len(), 2);
        assert!(items[0].as_literal().unwrap().contains("LatLng(0.0, 0.0)"));
        assert!(items[1].as_literal().unwrap().contains("LatLng(10.0, 10.0)"));

        let mixed: Geometry<f64> = Geometry::GeometryCollection(GeometryCollection::<f64>(vec![
            test_point(),
            line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)].into(),
        ]));
        let rendered = maps::polyline(&mixed, &OptionMap::new(), &RenderOptions::default()).unwrap();
        assert_eq!(
            rendered,
            Rendered::List(vec![
                Rendered::Literal(
                    r#"new google.maps.Polyline({"path": [new google.maps.LatLng(10.01, 10.0)]})"#.into()
                ),
                Rendered::Literal(
                    r#"new google.maps.Polyline({"path": [new google.maps.LatLng(2.0, 1.0), new google.maps.LatLng(4.0, 3.0)]})"#.into()
                ),
            ])
        );
    }

    #[test]
    fn test_collection_marker_uses_centroid() {
        setup();
        let points: Geometry<f64> =
            MultiPoint::new(vec![point!(x: 0.0, y: 0.0), point!(x: 2.0, y: 4.0)]).into();
        assert_eq!(
            literal(maps::marker(&points, &OptionMap::new(), &RenderOptions::default())),
            r#"new google.maps.Marker({"position": new google.maps.LatLng(2.0, 1.0)})"#
        );
    }

    #[test]
    fn test_errors() {
        setup();
        assert_eq!(
            maps::lat_lng(&test_polygon(), &LatLngOptions::default()),
            Err(RenderError::UnsupportedGeometryKind {
                kind: GeometryKind::Polygon,
                operation: "lat_lng",
                version: 3,
            })
        );

        let empty: Geometry<f64> = Geometry::GeometryCollection(GeometryCollection::<f64>(vec![]));
        assert_eq!(
            maps::marker(&empty, &OptionMap::new(), &RenderOptions::default()),
            Err(RenderError::EmptyGeometry { operation: "marker" })
        );

        let options = options_from(&json!({ "map": { "nested": true } })).unwrap();
        let err = maps::polyline(&test_polygon(), &options, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::MalformedOptions { ref key, .. } if key == "map"));
    }

    #[test]
    fn test_to_jsonable() {
        let point = maps::describe(&test_point(), &DescribeOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({ "type": "point", "lat": 10.01, "lng": 10.0 })
        );

        let polygon = maps::describe(&test_polygon(), &DescribeOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&polygon).unwrap(),
            json!({
                "type": "polygon",
                "polylines": [{
                    "points": "??_ibE_ibE_~cH_~cH_hgN_hgN~po]~po]",
                    "bounds": { "sw": [0.0, 0.0], "ne": [5.0, 5.0] },
                    "levels": "BBBBB"
                }],
                "options": {},
                "encoded": true
            })
        );
    }

    #[test]
    fn test_describe_interior_rings_and_style() {
        let with_hole: Geometry<f64> = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 1.0)]]
        )
        .into();
        let style = options_from(&json!({ "fill_color": "#ff0000" })).unwrap();

        let outer_only = maps::describe(&with_hole, &DescribeOptions::default()).unwrap();
        let value = serde_json::to_value(&outer_only).unwrap();
        assert_eq!(value["polylines"].as_array().unwrap().len(), 1);

        let options = DescribeOptions::new().interior_rings(true).style(style);
        let value = serde_json::to_value(maps::describe(&with_hole, &options).unwrap()).unwrap();
        assert_eq!(value["polylines"].as_array().unwrap().len(), 2);
        assert_eq!(
            value["polylines"][1]["bounds"],
            json!({ "sw": [1.0, 1.0], "ne": [2.0, 2.0] })
        );
        assert_eq!(value["options"], json!({ "fillColor": "#ff0000" }));
    }

    #[test]
    fn test_to_g_lat_lon_box() {
        let bounds = maps::lat_lon_box(&test_polygon()).unwrap();
        assert_eq!(
            serde_json::to_value(bounds).unwrap(),
            json!({ "east": 5.0, "west": 0.0, "north": 5.0, "south": 0.0 })
        );
    }

    #[test]
    fn test_to_g_json_point() {
        assert_eq!(
            serde_json::to_value(maps::json_point(&test_point()).unwrap()).unwrap(),
            json!({ "coordinates": [10.0, 10.01, 0.0] })
        );
    }

    #[test]
    fn test_coordinates_below_1e_minus_4_stay_decimal() {
        setup();
        let near_meridian: Geometry<f64> = point!(x: 0.00005, y: 51.5).into();
        assert_eq!(
            literal(maps::marker(&near_meridian, &OptionMap::new(), &RenderOptions::default())),
            r#"new google.maps.Marker({"position": new google.maps.LatLng(51.5, 0.00005)})"#
        );

        let line: Geometry<f64> = line_string![(x: 0.00001234, y: 0.0), (x: 1.0, y: 1.0)].into();
        assert_eq!(
            literal(maps::lat_lng_bounds_string(&line, 10)),
            "((0.0,0.00001234), (1.0,1.0))"
        );
        assert_eq!(
            literal(maps::polyline(&line, &OptionMap::new(), &RenderOptions::default())),
            r#"new google.maps.Polyline({"path": [new google.maps.LatLng(0.0, 0.00001234), new google.maps.LatLng(1.0, 1.0)]})"#
        );
    }

    #[test]
    fn test_encoded_path_out_of_range() {
        setup();
        let far: Geometry<f64> = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 30000.0)].into();
        assert_eq!(
            maps::polyline(&far, &OptionMap::new(), &RenderOptions::new().encoded(true)),
            Err(RenderError::Polyline(PolylineError::OutOfRange(1)))
        );
        assert!(maps::polyline(&far, &OptionMap::new(), &RenderOptions::default()).is_ok());
    }
}
