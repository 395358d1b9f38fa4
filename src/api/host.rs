use crate::api::ports::{MapHost, Subscription, SubscriptionId};
use crate::core::geometry::GeoPoint;
use crate::util::coord::{Crs, SphericalMercator};
use geo_types::{Rect, coord};
use std::future::Future;
use std::time::Duration;

/// When a [`StaticHost`] reports itself ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    Ready,
    After(Duration),
    Never,
}

/// A headless [`MapHost`] with a view that only changes when told to.
///
/// Useful for rendering the grid for a fixed area and for driving the
/// overlay in tests.
#[derive(Debug, Clone)]
pub struct StaticHost {
    crs: Crs,
    extent: Rect<f64>,
    zoom_level: i32,
    readiness: Readiness,
    next_id: SubscriptionId,
    active: Vec<SubscriptionId>,
    toggle: Option<(String, bool)>,
}

impl StaticHost {
    pub fn new(crs: Crs, extent: Rect<f64>, zoom_level: i32) -> Self {
        Self {
            crs,
            extent,
            zoom_level,
            readiness: Readiness::default(),
            next_id: 1,
            active: Vec::new(),
            toggle: None,
        }
    }

    /// A Web Mercator host whose view spans the two geographic corners.
    pub fn web_mercator(corner_a: GeoPoint, corner_b: GeoPoint, zoom_level: i32) -> Self {
        Self::new(
            Crs::WebMercator,
            mercator_rect(corner_a, corner_b),
            zoom_level,
        )
    }

    pub fn with_readiness(mut self, readiness: Readiness) -> Self {
        self.readiness = readiness;
        self
    }

    /// Moves the view and returns the subscriptions that should be told the
    /// viewport settled.
    pub fn set_view(&mut self, extent: Rect<f64>, zoom_level: i32) -> Vec<SubscriptionId> {
        self.extent = extent;
        self.zoom_level = zoom_level;
        self.active.clone()
    }

    /// [`StaticHost::set_view`] for a Web Mercator host, taking degrees.
    pub fn pan_to(
        &mut self,
        corner_a: GeoPoint,
        corner_b: GeoPoint,
        zoom_level: i32,
    ) -> Vec<SubscriptionId> {
        let extent = match self.crs {
            Crs::WebMercator => mercator_rect(corner_a, corner_b),
            Crs::Wgs84 => Rect::new(
                coord! { x: corner_a.lon, y: corner_a.lat },
                coord! { x: corner_b.lon, y: corner_b.lat },
            ),
        };
        self.set_view(extent, zoom_level)
    }

    pub fn active_subscriptions(&self) -> &[SubscriptionId] {
        &self.active
    }

    /// Label and initial state of the registered layer toggle, if any.
    pub fn toggle(&self) -> Option<(&str, bool)> {
        self.toggle
            .as_ref()
            .map(|(label, checked)| (label.as_str(), *checked))
    }
}

fn mercator_rect(corner_a: GeoPoint, corner_b: GeoPoint) -> Rect<f64> {
    let (ax, ay) = SphericalMercator::lonlat_to_merc(corner_a.lon, corner_a.lat);
    let (bx, by) = SphericalMercator::lonlat_to_merc(corner_b.lon, corner_b.lat);
    Rect::new(coord! { x: ax, y: ay }, coord! { x: bx, y: by })
}

impl MapHost for StaticHost {
    fn native_crs(&self) -> Crs {
        self.crs
    }

    fn visible_extent(&self) -> Rect<f64> {
        self.extent
    }

    fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    fn on_viewport_settled(&mut self) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(id);
        Subscription::new(id)
    }

    fn off_viewport_settled(&mut self, subscription: Subscription) {
        self.active.retain(|id| *id != subscription.id());
    }

    fn add_layer_toggle(&mut self, label: &str, checked: bool) {
        self.toggle = Some((label.to_string(), checked));
    }

    fn ready(&self) -> impl Future<Output = ()> {
        let readiness = self.readiness;
        async move {
            match readiness {
                Readiness::Ready => {}
                Readiness::After(delay) => tokio::time::sleep(delay).await,
                Readiness::Never => std::future::pending::<()>().await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> StaticHost {
        StaticHost::new(
            Crs::Wgs84,
            Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }),
            4,
        )
    }

    #[test]
    fn test_subscriptions_are_unique_and_released() {
        let mut host = host();
        let a = host.on_viewport_settled();
        let b = host.on_viewport_settled();
        assert_ne!(a.id(), b.id());
        assert_eq!(host.active_subscriptions(), &[a.id(), b.id()]);

        let a_id = a.id();
        host.off_viewport_settled(a);
        assert_eq!(host.active_subscriptions(), &[b.id()]);
        assert!(!host.active_subscriptions().contains(&a_id));
    }

    #[test]
    fn test_set_view_reports_listeners() {
        let mut host = host();
        assert!(host.pan_to(GeoPoint::new(2.0, 2.0), GeoPoint::new(3.0, 3.0), 5).is_empty());

        let sub = host.on_viewport_settled();
        let notified = host.pan_to(GeoPoint::new(2.0, 2.0), GeoPoint::new(3.0, 3.0), 6);
        assert_eq!(notified, vec![sub.id()]);
        assert_eq!(host.zoom_level(), 6);
        assert_eq!(host.visible_extent().min(), coord! { x: 2.0, y: 2.0 });
    }

    #[test]
    fn test_web_mercator_extent() {
        let host = StaticHost::web_mercator(GeoPoint::new(1.0, -1.0), GeoPoint::new(-1.0, 1.0), 3);
        let extent = host.visible_extent();
        assert_eq!(host.native_crs(), Crs::WebMercator);
        assert!(extent.min().x < 0.0 && extent.max().x > 0.0);
        assert!((extent.max().x - 111319.49).abs() < 1.0);
    }

    #[test]
    fn test_toggle_registration() {
        let mut host = host();
        assert_eq!(host.toggle(), None);
        host.add_layer_toggle("Client Tile Borders", true);
        assert_eq!(host.toggle(), Some(("Client Tile Borders", true)));
    }
}
