use crate::api::ports::RenderSink;
use crate::core::style::Style;
use geo_types::Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// A [`RenderSink`] that records drawn segments as GeoJSON line features.
///
/// Each feature carries `strokeWidth`, `strokeColor` and `strokeDashstyle`
/// properties so the collection can be styled by any GeoJSON viewer.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonSink {
    layer: Option<String>,
    features: Vec<Feature>,
}

impl GeoJsonSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.layer.is_some()
    }

    pub fn layer_name(&self) -> Option<&str> {
        self.layer.as_deref()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features.clone(),
            foreign_members: None,
        }
    }
}

impl RenderSink for GeoJsonSink {
    fn attach_layer(&mut self, name: &str) {
        self.layer = Some(name.to_string());
    }

    fn detach_layer(&mut self) {
        self.features.clear();
        self.layer = None;
    }

    fn clear_all(&mut self) {
        self.features.clear();
    }

    fn add_segment(&mut self, start: Point<f64>, end: Point<f64>, style: &Style) {
        if self.layer.is_none() {
            log::warn!("Dropping segment drawn without an attached layer");
            return;
        }

        let geometry = Geometry::new(Value::LineString(vec![
            vec![start.x(), start.y()],
            vec![end.x(), end.y()],
        ]));

        let mut properties = JsonObject::new();
        properties.insert("strokeWidth".to_string(), JsonValue::from(style.line_width));
        properties.insert(
            "strokeColor".to_string(),
            JsonValue::from(style.line_color.as_css()),
        );
        properties.insert(
            "strokeDashstyle".to_string(),
            JsonValue::from(style.dash_style()),
        );

        self.features.push(Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::select_style;
    use geo_types::point;

    #[test]
    fn test_add_segment_records_feature() {
        let mut sink = GeoJsonSink::new();
        sink.attach_layer("grid");
        sink.add_segment(
            point! { x: 1.0, y: 2.0 },
            point! { x: 3.0, y: 2.0 },
            &select_style(5),
        );

        assert_eq!(sink.len(), 1);
        let feature = &sink.features()[0];
        assert_eq!(
            feature.property("strokeColor"),
            Some(&JsonValue::from("#EDEDED"))
        );
        assert_eq!(feature.property("strokeWidth"), Some(&JsonValue::from(2)));
        assert_eq!(feature.property("strokeDashstyle"), Some(&JsonValue::from("4 4")));

        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::LineString(coords)) => {
                assert_eq!(coords, &vec![vec![1.0, 2.0], vec![3.0, 2.0]]);
            }
            other => panic!("Expected LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_detached_sink_drops_segments() {
        let mut sink = GeoJsonSink::new();
        sink.add_segment(point! { x: 0.0, y: 0.0 }, point! { x: 1.0, y: 0.0 }, &Style::default());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_clear_and_detach() {
        let mut sink = GeoJsonSink::new();
        sink.attach_layer("grid");
        assert_eq!(sink.layer_name(), Some("grid"));

        sink.add_segment(point! { x: 0.0, y: 0.0 }, point! { x: 1.0, y: 0.0 }, &Style::default());
        sink.clear_all();
        assert!(sink.is_empty());
        assert!(sink.is_attached());

        sink.add_segment(point! { x: 0.0, y: 0.0 }, point! { x: 1.0, y: 0.0 }, &Style::default());
        sink.detach_layer();
        assert!(sink.is_empty());
        assert!(!sink.is_attached());
    }

    #[test]
    fn test_feature_collection_serializes() {
        let mut sink = GeoJsonSink::new();
        sink.attach_layer("grid");
        sink.add_segment(point! { x: 0.0, y: 0.0 }, point! { x: 1.0, y: 0.0 }, &Style::default());

        let json = serde_json::to_string(&sink.to_feature_collection()).unwrap();
        assert!(json.contains("\"FeatureCollection\""));
        assert!(json.contains("\"strokeColor\":\"gray\""));
    }
}
