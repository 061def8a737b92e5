//! GeoJSON validation for forecast zone geometries.
//!
//! Only `Point` and `Polygon` are accepted. The returned value is the normalized
//! geometry (`type` + `coordinates` only, polygon rings closed).

use geojson::{Geometry, PolygonType, Position, Value as GeoValue};
use serde_json::Value;

use crate::domain::error::DomainError;

const FIELD: &str = "geom";

pub fn validate_geometry(geom: &Value) -> Result<Value, DomainError> {
    let kind = geom
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("geometry must be a GeoJSON object with a type"))?
        .to_owned();
    let parsed = Geometry::from_json_value(geom.clone())
        .map_err(|e| invalid(format!("invalid GeoJSON geometry: {e}")))?;

    let normalized = match parsed.value {
        GeoValue::Point(position) => GeoValue::Point(check_position(position)?),
        GeoValue::Polygon(rings) => GeoValue::Polygon(check_polygon(rings)?),
        _ => return Err(invalid(format!("unsupported geometry type: {kind}"))),
    };
    serde_json::to_value(Geometry::new(normalized))
        .map_err(|e| invalid(format!("geometry cannot be encoded: {e}")))
}

fn check_position(position: Position) -> Result<Position, DomainError> {
    if !(2..=3).contains(&position.len()) {
        return Err(invalid("position must have 2 or 3 coordinates"));
    }
    if position.iter().any(|c| !c.is_finite()) {
        return Err(invalid("coordinates must be finite numbers"));
    }
    let (lon, lat) = (position[0], position[1]);
    if !(-180.0..=180.0).contains(&lon) {
        return Err(invalid(format!("longitude {lon} out of range [-180, 180]")));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(invalid(format!("latitude {lat} out of range [-90, 90]")));
    }
    Ok(position)
}

fn check_polygon(rings: PolygonType) -> Result<PolygonType, DomainError> {
    if rings.is_empty() {
        return Err(invalid("polygon must have at least one ring"));
    }
    rings.into_iter().map(check_ring).collect()
}

fn check_ring(ring: Vec<Position>) -> Result<Vec<Position>, DomainError> {
    let mut ring = ring
        .into_iter()
        .map(check_position)
        .collect::<Result<Vec<_>, _>>()?;

    let mut distinct: Vec<&Position> = Vec::new();
    for p in &ring {
        if !distinct.contains(&p) {
            distinct.push(p);
        }
    }
    if distinct.len() < 3 {
        return Err(invalid("polygon ring needs at least 3 distinct positions"));
    }

    if ring.first() != ring.last() {
        let first = ring[0].clone();
        ring.push(first);
    }
    if ring.len() < 4 {
        return Err(invalid("closed polygon ring needs at least 4 positions"));
    }
    Ok(ring)
}

fn invalid(message: impl Into<String>) -> DomainError {
    DomainError::validation(FIELD, message)
}
