use anyhow::Result;
use modisrest::{Mod13Q1Band, ModisClient, Product, Sensor, Tool, is_error};

// Walks the main operations against the public service for a point in the
// Apuan Alps. Run with `cargo run --example mod13q1_ndvi`.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client = ModisClient::from_env()?;
    let (latitude, longitude) = (44.0478, 10.3526);

    let products = client.products(Sensor::ModisTerra, Tool::GlobalSubset);
    println!("products: {products:#}");

    let bands = client.bands(Product::Mod13Q1);
    println!("bands: {bands:#}");

    let dates = client.dates(Product::Mod13Q1, latitude, longitude);
    println!("dates: {dates:#}");
    println!("served at {}", client.last_request_time()?);

    let latest = client.last_acquisition(
        Product::Mod13Q1,
        latitude,
        longitude,
        Mod13Q1Band::Ndvi,
        0,
        0,
    );
    if is_error(&latest) {
        eprintln!("last acquisition failed: {latest:#}");
    } else {
        println!("last acquisition: {latest:#}");
    }

    // One year of NDVI, ten requests in flight at a time.
    let series = client.execute_range_concurrent(
        Product::Mod13Q1,
        latitude,
        longitude,
        Mod13Q1Band::Ndvi,
        "A2020001",
        "A2020365",
        0,
        0,
    )?;
    let failed = series.iter().filter(|r| is_error(r)).count();
    println!("fetched {} subsets ({failed} failed)", series.len());

    Ok(())
}
