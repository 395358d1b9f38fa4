use crate::api::config::OverlayConfig;
use crate::api::grid_lines::GridLines;
use crate::api::ports::{MapHost, RenderSink, SettingsStore, Subscription, SubscriptionId};
use crate::api::settings::Settings;
use crate::core::geometry::GeoExtent;
use crate::core::quantize::QuantizedExtent;
use crate::core::style::Style;
use crate::util::coord::{Crs, Reprojector};
use crate::util::error::GridError;

/// Where the overlay is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Settings not loaded yet, or the overlay was stopped.
    Unloaded,
    Enabled,
    Disabled,
}

/// What the last redraw put on the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RedrawSummary {
    pub ranges: QuantizedExtent,
    pub segments: usize,
    pub style: Style,
}

/// Draws the 0.01° tile-border grid onto a host map.
///
/// The overlay owns its collaborators for the whole host session. The host
/// forwards two kinds of events: checkbox changes go to
/// [`GridOverlay::set_enabled`] and viewport-settled notifications go to
/// [`GridOverlay::handle_viewport_settled`].
///
/// # Example
///
/// ```
/// use tile_borders::{
///     GeoJsonSink, GeoPoint, GridOverlay, MemoryStore, OverlayConfig, SphericalMercator,
///     StaticHost,
/// };
///
/// # fn main() -> Result<(), tile_borders::GridError> {
/// let host = StaticHost::web_mercator(
///     GeoPoint::new(51.515, -0.135),
///     GeoPoint::new(51.495, -0.095),
///     4,
/// );
/// let mut overlay = GridOverlay::new(
///     host,
///     GeoJsonSink::new(),
///     MemoryStore::new(),
///     SphericalMercator,
///     OverlayConfig::default(),
/// );
/// overlay.start()?;
/// assert!(!overlay.sink().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct GridOverlay<H, R, S, P> {
    host: H,
    sink: R,
    store: S,
    reprojector: P,
    config: OverlayConfig,
    settings: Option<Settings>,
    layer_attached: bool,
    subscription: Option<Subscription>,
}

impl<H, R, S, P> GridOverlay<H, R, S, P>
where
    H: MapHost,
    R: RenderSink,
    S: SettingsStore,
    P: Reprojector,
{
    pub fn new(host: H, sink: R, store: S, reprojector: P, config: OverlayConfig) -> Self {
        Self {
            host,
            sink,
            store,
            reprojector,
            config,
            settings: None,
            layer_attached: false,
            subscription: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        match self.settings {
            None => OverlayState::Unloaded,
            Some(Settings { enabled: true }) => OverlayState::Enabled,
            Some(Settings { enabled: false }) => OverlayState::Disabled,
        }
    }

    pub fn settings(&self) -> Option<Settings> {
        self.settings
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Id of the live viewport-settled registration, if enabled.
    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    /// Waits for the host to become ready, then calls [`GridOverlay::start`].
    ///
    /// Gives up with [`GridError::HostNotReady`] once
    /// [`OverlayConfig::ready_timeout`] has passed.
    pub async fn start_when_ready(&mut self) -> Result<(), GridError> {
        let timeout = self.config.ready_timeout;
        if tokio::time::timeout(timeout, self.host.ready()).await.is_err() {
            log::error!(
                "Map host not ready after {} ms, grid overlay not started",
                timeout.as_millis()
            );
            return Err(GridError::HostNotReady(timeout));
        }
        self.start()
    }

    /// Loads settings, applies the stored state and registers the layer toggle.
    ///
    /// Calling `start` on a running overlay does nothing. If the stored state
    /// cannot be applied the overlay is left unloaded, so `start` can be
    /// retried.
    pub fn start(&mut self) -> Result<(), GridError> {
        if self.settings.is_some() {
            return Ok(());
        }

        let settings = Settings::load(&self.store, &self.config.settings_key);
        log::info!("Starting grid overlay (enabled: {})", settings.enabled);
        self.settings = Some(settings);
        if let Err(e) = self.set_enabled(settings.enabled) {
            log::error!("Grid overlay failed to start: {}", e);
            self.hide();
            self.settings = None;
            return Err(e);
        }

        self.host
            .add_layer_toggle(&self.config.toggle_label, settings.enabled);
        Ok(())
    }

    /// Tears down the layer and the event subscription. Persisted settings
    /// are left untouched.
    pub fn stop(&mut self) {
        self.hide();
        if self.settings.take().is_some() {
            log::info!("Stopped grid overlay");
        }
    }

    /// Toggle callback: persists the new state, then shows or hides the grid.
    ///
    /// Nothing changes when the settings cannot be saved. Once saved, the new
    /// state sticks even if the redraw that follows fails.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), GridError> {
        if self.settings.is_none() {
            return Err(GridError::NotStarted);
        }
        let settings = Settings { enabled };
        settings.save(&mut self.store, &self.config.settings_key)?;
        self.settings = Some(settings);

        if enabled {
            self.show()
        } else {
            self.hide();
            Ok(())
        }
    }

    /// Redraws for a settle event, ignoring events for released subscriptions.
    pub fn handle_viewport_settled(
        &mut self,
        subscription_id: SubscriptionId,
    ) -> Result<Option<RedrawSummary>, GridError> {
        if self.subscription_id() != Some(subscription_id) {
            log::debug!("Ignoring settle event for subscription {}", subscription_id);
            return Ok(None);
        }
        self.redraw()
    }

    /// The current viewport in geographic degrees.
    pub fn current_extent(&self) -> Result<GeoExtent, GridError> {
        let crs = self.host.native_crs();
        let rect = self.host.visible_extent();
        let north_west =
            self.reprojector
                .project_coord(&(rect.min().x, rect.max().y), crs, Crs::Wgs84)?;
        let south_east =
            self.reprojector
                .project_coord(&(rect.max().x, rect.min().y), crs, Crs::Wgs84)?;
        GeoExtent::new(north_west.into(), south_east.into())
    }

    /// Grid lines and style for the current view, in degrees.
    pub fn compute_grid(&self) -> Result<GridLines, GridError> {
        GridLines::builder()
            .extent(&self.current_extent()?)
            .zoom_level(self.host.zoom_level())
            .clamp_to_world(self.config.clamp_to_world)
            .max_lines(self.config.max_lines)
            .build()
    }

    /// Replaces everything on the layer with the grid for the current view.
    ///
    /// Returns `Ok(None)` when no layer is attached.
    pub fn redraw(&mut self) -> Result<Option<RedrawSummary>, GridError> {
        if !self.layer_attached {
            return Ok(None);
        }

        let grid = self.compute_grid()?;
        let crs = self.host.native_crs();

        // Project everything before touching the sink so a failure leaves the
        // previous grid on screen.
        let mut projected = Vec::with_capacity(grid.len());
        for segment in grid.iter() {
            let start = self
                .reprojector
                .project(segment.start.into(), Crs::Wgs84, crs)?;
            let end = self
                .reprojector
                .project(segment.end.into(), Crs::Wgs84, crs)?;
            projected.push((start, end));
        }

        self.sink.clear_all();
        for (start, end) in projected {
            self.sink.add_segment(start, end, grid.style());
        }

        let summary = RedrawSummary {
            ranges: *grid.ranges(),
            segments: grid.len(),
            style: *grid.style(),
        };
        log::debug!(
            "Drew {} grid lines (lat {}..={}, lon {}..={}, width {}, {})",
            summary.segments,
            summary.ranges.lat_range.start(),
            summary.ranges.lat_range.end(),
            summary.ranges.lon_range.start(),
            summary.ranges.lon_range.end(),
            summary.style.line_width,
            summary.style.line_color.as_css()
        );
        Ok(Some(summary))
    }

    fn show(&mut self) -> Result<(), GridError> {
        if !self.layer_attached {
            self.sink.attach_layer(&self.config.layer_name);
            self.layer_attached = true;
        }
        if self.subscription.is_none() {
            self.subscription = Some(self.host.on_viewport_settled());
        }
        self.redraw().map(|_| ())
    }

    fn hide(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.host.off_viewport_settled(subscription);
        }
        if self.layer_attached {
            self.sink.clear_all();
            self.sink.detach_layer();
            self.layer_attached = false;
        }
    }
}
