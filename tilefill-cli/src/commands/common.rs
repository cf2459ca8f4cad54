//! Shared flag parsers for colors and coordinate pairs.
//!
//! All validation happens here, at argument-parsing time, before any fill
//! begins: channel values outside 0-255 and malformed pairs are rejected
//! with a message naming the offending part.

use image::Rgba;
use tilefill::coord::{PixelPos, TileCoord};

const CHANNEL_NAMES: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Parses `R,G,B` or `R,G,B,A` into a color. Alpha defaults to 255.
pub fn parse_color(value: &str) -> Result<Rgba<u8>, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(format!(
            "expected R,G,B or R,G,B,A, got {} value(s)",
            parts.len()
        ));
    }
    let mut channels = [0u8, 0, 0, 255];
    for (i, part) in parts.iter().enumerate() {
        channels[i] = part
            .parse::<u8>()
            .map_err(|_| format!("{} must be between 0 and 255", CHANNEL_NAMES[i]))?;
    }
    Ok(Rgba(channels))
}

/// Parses `X,Y` into a local pixel position.
pub fn parse_pixel_pos(value: &str) -> Result<PixelPos, String> {
    let (x, y) = parse_pair(value)?;
    let x = u32::try_from(x).map_err(|_| "pixel coordinates cannot be negative".to_string())?;
    let y = u32::try_from(y).map_err(|_| "pixel coordinates cannot be negative".to_string())?;
    Ok(PixelPos::new(x, y))
}

/// Parses `X,Y` into a world grid position.
pub fn parse_tile_coord(value: &str) -> Result<TileCoord, String> {
    let (x, y) = parse_pair(value)?;
    Ok(TileCoord::new(x, y))
}

fn parse_pair(value: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("position must contain 2 parts, got {}", parts.len()));
    }
    let x = parts[0]
        .parse::<i32>()
        .map_err(|_| format!("'{}' is not a valid coordinate", parts[0]))?;
    let y = parts[1]
        .parse::<i32>()
        .map_err(|_| format!("'{}' is not a valid coordinate", parts[1]))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_with_and_without_alpha() {
        assert_eq!(parse_color("255,0,0").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_color("1, 2, 3, 4").unwrap(), Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_parse_color_rejects_out_of_range_channels() {
        let err = parse_color("256,0,0").unwrap_err();
        assert!(err.contains("red"));
        let err = parse_color("0,0,0,999").unwrap_err();
        assert!(err.contains("alpha"));
        assert!(parse_color("0,-1,0").unwrap_err().contains("green"));
    }

    #[test]
    fn test_parse_color_rejects_wrong_arity() {
        assert!(parse_color("255,0").is_err());
        assert!(parse_color("1,2,3,4,5").is_err());
    }

    #[test]
    fn test_parse_pixel_pos_rejects_negatives() {
        assert_eq!(parse_pixel_pos("3,7").unwrap(), PixelPos::new(3, 7));
        assert!(parse_pixel_pos("-1,0").is_err());
    }

    #[test]
    fn test_parse_tile_coord_allows_negatives() {
        assert_eq!(parse_tile_coord("-2,5").unwrap(), TileCoord::new(-2, 5));
    }

    #[test]
    fn test_parse_pair_arity_and_digits() {
        assert!(parse_tile_coord("1").is_err());
        assert!(parse_tile_coord("1,2,3").is_err());
        assert!(parse_tile_coord("a,b").is_err());
    }
}
