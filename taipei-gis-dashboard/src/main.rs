//! Renders the dashboard pages to the terminal.
//!
//! ```shell
//! cargo run -p taipei-gis-dashboard -- buildings --url https://example.com/buildings.geojson
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` and defaults to `info`. A failed load is not an
//! error of the program: it is shown in the status line and the exit code stays 0.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use taipei_gis::pages::buildings::BuildingsPage;
use taipei_gis::pages::counter::ClickCounter;
use taipei_gis::pages::transit::TransitMap;
use taipei_gis::pages::{Page, DASHBOARD_TITLE};
use taipei_gis::provider::DEFAULT_TIMEOUT;
use taipei_gis::taipei_gis_types::BoundingRect;
use taipei_gis::{Basemap, Ingestor, UrlDocumentProvider, ViewState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Taipei GIS dashboard")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Home page with the click counter
    Home {
        /// Number of button clicks to simulate
        #[arg(long, default_value_t = 0)]
        clicks: u32,
    },

    /// 2D map of the Taipei MRT network
    Transit {
        /// GeoJSON document with the transit lines
        #[arg(long)]
        url: Option<String>,

        /// Basemap provider name, e.g. CartoDB.Positron
        #[arg(long, default_value = "CartoDB.DarkMatter")]
        basemap: String,
    },

    /// 3D map of extruded buildings
    Buildings {
        /// GeoJSON document with building polygons; the demo buildings are shown if omitted
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
        timeout: u64,

        /// Property the building height is read from; repeat to give fallbacks in order
        #[arg(long = "height-key")]
        height_keys: Vec<String>,

        /// Height of buildings without a usable height property
        #[arg(long)]
        default_height: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Args::parse().command {
        Command::Home { clicks } => home(clicks),
        Command::Transit { url, basemap } => transit(url, basemap.parse()?).await?,
        Command::Buildings {
            url,
            timeout,
            height_keys,
            default_height,
        } => {
            let mut ingestor = Ingestor::default();
            if !height_keys.is_empty() {
                ingestor = ingestor.with_height_keys(height_keys);
            }
            if let Some(height) = default_height {
                ingestor = ingestor.with_default_height(height);
            }

            buildings(url, Duration::from_secs(timeout), ingestor).await?
        }
    }

    Ok(())
}

fn print_header(page: Page) {
    println!("### {DASHBOARD_TITLE}");
    for link in Page::ALL {
        let marker = if link == page { '*' } else { '-' };
        println!("{marker} {} ({})", link.label(), link.path());
    }
    println!();
    println!("# {}", page.title());
}

fn print_basemap(basemap: Basemap) {
    let attribution = basemap.attribution();
    println!("Basemap: {basemap}");
    match attribution.url {
        Some(url) => println!("Attribution: {} ({url})", attribution.text),
        None => println!("Attribution: {}", attribution.text),
    }
}

fn print_extent(extent: Option<BoundingRect>) {
    if let Some(rect) = extent {
        println!(
            "Extent: lon {:.4}..{:.4}, lat {:.4}..{:.4}",
            rect.lon_min, rect.lon_max, rect.lat_min, rect.lat_max
        );
    }
}

fn home(clicks: u32) {
    let mut counter = ClickCounter::new();
    counter.subscribe(|count| log::debug!("Button clicked, count is now {count}"));
    for _ in 0..clicks {
        counter.increment();
    }

    print_header(Page::Home);
    println!("{}", counter.label());
}

async fn transit(url: Option<String>, basemap: Basemap) -> Result<()> {
    let provider = UrlDocumentProvider::new()?;
    let mut map = TransitMap::new().with_basemap(basemap);
    if let Some(url) = url {
        map.set_url(url);
    }

    map.load_layer(&provider).await;

    print_header(Page::Transit);
    print_basemap(map.basemap());
    println!("Source: {}", map.url());
    for layer in map.layers().iter() {
        println!("Layer: {}", layer.id());
    }
    if let Some(layer) = map.transit_layer() {
        for (kind, count) in layer.geometry_counts() {
            println!("  {kind}: {count}");
        }
        print_extent(layer.extent());
    }
    println!("Status: {}", map.status());

    Ok(())
}

async fn buildings(url: Option<String>, timeout: Duration, ingestor: Ingestor) -> Result<()> {
    let mut page = BuildingsPage::with_ingestor(ingestor);
    page.state_mut().subscribe(|state: &ViewState| {
        log::debug!(
            "View switched to {:?} with {} buildings",
            state.phase(),
            state.rows().len()
        )
    });

    if let Some(url) = url {
        let provider = UrlDocumentProvider::builder()
            .with_timeout(timeout)
            .build()?;
        page.set_url(url);
        page.load_from_url(&provider).await;
    }

    print_header(Page::Buildings);
    print_basemap(page.basemap());
    println!("Buildings: {}", page.state().rows().len());
    print_extent(page.state().extent());
    println!("Status: {}", page.status());
    println!("{}", page.deck_spec().to_json_string_pretty()?);

    Ok(())
}
