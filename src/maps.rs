//! Standalone Leaflet HTML pages for the geospatial outputs.
//!
//! Each page embeds its point data as a JSON literal and pulls Leaflet and
//! its plugins from a CDN, so the file opens in a browser on its own.

use anyhow::Result;
use serde::Serialize;

use crate::charts::xml_escape;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";
const CLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const CLUSTER_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";

/// Marker row embedded as `[lat, lon, label]`; the label is pre-escaped HTML.
#[derive(Serialize)]
struct MarkerRow(f64, f64, Option<String>);

fn page(title: &str, extra_head: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}"/>
{extra_head}
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script src="{LEAFLET_JS}"></script>
{script}
</body>
</html>
"#
    )
}

fn base_map(center: (f64, f64), zoom: u32) -> String {
    format!(
        r#"var map = L.map('map').setView([{:.6}, {:.6}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);"#,
        center.0, center.1
    )
}

/// Renders the density heatmap page.
pub fn heatmap_page(points: &[(f64, f64)], center: (f64, f64), zoom: u32) -> Result<String> {
    let data = serde_json::to_string(points)?;
    let script = format!(
        r#"<script src="{HEAT_JS}"></script>
<script>
{}
var points = {data};
L.heatLayer(points).addTo(map);
</script>"#,
        base_map(center, zoom)
    );
    Ok(page("Crime Density Heatmap", "", &script))
}

/// Renders the clustered marker page.
///
/// Charge labels are HTML-escaped before they reach the popup; a missing
/// label shows as `unknown`.
pub fn cluster_page(
    points: &[(f64, f64, Option<String>)],
    center: (f64, f64),
    zoom: u32,
) -> Result<String> {
    let rows: Vec<MarkerRow> = points
        .iter()
        .map(|(lat, lon, label)| {
            MarkerRow(*lat, *lon, label.as_deref().map(xml_escape))
        })
        .collect();
    let data = serde_json::to_string(&rows)?;

    let extra_head = format!(
        r#"<link rel="stylesheet" href="{CLUSTER_CSS}"/>
<link rel="stylesheet" href="{CLUSTER_DEFAULT_CSS}"/>"#
    );

    let script = format!(
        r#"<script src="{CLUSTER_JS}"></script>
<script>
{}
var cluster = L.markerClusterGroup();
var points = {data};
points.forEach(function (p) {{
  L.marker([p[0], p[1]])
    .bindPopup('Charge: ' + (p[2] === null ? 'unknown' : p[2]))
    .addTo(cluster);
}});
map.addLayer(cluster);
</script>"#,
        base_map(center, zoom)
    );

    Ok(page("Crime Cluster Map", &extra_head, &script))
}
