//! Traits the overlay needs from its surroundings.
//!
//! The host map, the drawing layer and the settings storage are all supplied
//! by the embedding application. [`crate::StaticHost`], [`crate::GeoJsonSink`],
//! [`crate::MemoryStore`] and [`crate::JsonFileStore`] are the in-crate
//! implementations.

use crate::core::style::Style;
use crate::util::coord::Crs;
use crate::util::error::GridError;
use geo_types::{Point, Rect};
use std::future::Future;

pub type SubscriptionId = u64;

/// A live registration for viewport-settled events.
///
/// Deliberately not `Clone`: [`MapHost::off_viewport_settled`] takes it by
/// value, so a registration is released exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: SubscriptionId,
}

impl Subscription {
    pub fn new(id: SubscriptionId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// The map viewport hosting the overlay.
pub trait MapHost {
    /// Projection of [`MapHost::visible_extent`] and of drawn segments.
    fn native_crs(&self) -> Crs;

    /// Currently visible area in the native projection.
    fn visible_extent(&self) -> Rect<f64>;

    fn zoom_level(&self) -> i32;

    fn on_viewport_settled(&mut self) -> Subscription;

    fn off_viewport_settled(&mut self, subscription: Subscription);

    /// Adds the checkbox that enables or disables the overlay. The host
    /// reports changes back through [`crate::GridOverlay::set_enabled`].
    fn add_layer_toggle(&mut self, label: &str, checked: bool);

    /// Resolves once the host is initialized and can be queried.
    fn ready(&self) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Drawing layer that receives grid segments in the host projection.
pub trait RenderSink {
    fn attach_layer(&mut self, name: &str);

    fn detach_layer(&mut self);

    fn clear_all(&mut self);

    fn add_segment(&mut self, start: Point<f64>, end: Point<f64>, style: &Style);
}

/// Synchronous string key/value storage for persisted settings.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), GridError>;
}
