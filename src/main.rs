use tile_borders::{
    GeoJsonSink, GeoPoint, GridOverlay, MemoryStore, OverlayConfig, SphericalMercator,
    StaticHost,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let host = StaticHost::web_mercator(
        GeoPoint::new(40.7580, -73.9855),
        GeoPoint::new(40.7484, -73.9680),
        3,
    );

    let mut overlay = GridOverlay::new(
        host,
        GeoJsonSink::new(),
        MemoryStore::new(),
        SphericalMercator,
        OverlayConfig::default(),
    );
    overlay.start()?;

    let collection = overlay.sink().to_feature_collection();
    let json = serde_json::to_string_pretty(&collection)?;
    println!("{}", json);

    Ok(())
}
