//! Tests for crop rectangle calculation and cropping

extern crate std;

use image::{Rgba, RgbaImage};
use crate::coordinate::{BoundingBox, Point};
use crate::crop::{compute_crop, crop_image, crop_to_boundary, PixelRect};
use crate::errors::CropError;
use crate::tile::{aggregate_tile_bbox_and_dims, bbox_of_coordinates, composite};
use super::test_utils::{assert_bbox_approx, l_boundary, two_tile_row};

fn contains_with_tolerance(outer: &BoundingBox, inner: &BoundingBox) -> bool {
    let eps = 1e-9;
    outer.min.x <= inner.min.x + eps && outer.min.y <= inner.min.y + eps
        && outer.max.x >= inner.max.x - eps && outer.max.y >= inner.max.y - eps
}

#[test]
fn test_crop_of_l_boundary() {
    let composite_bbox = BoundingBox::from_coords(10.0, 5.0, 30.0, 10.0);
    let target = bbox_of_coordinates(&l_boundary()).unwrap();

    let (rect, cropped_bbox) = compute_crop((200, 50), &composite_bbox, &target).unwrap();
    std::assert_eq!(rect, PixelRect::new(50, 10, 150, 30));
    std::assert_eq!((rect.width(), rect.height()), (100, 20));
    assert_bbox_approx(&cropped_bbox, &BoundingBox::from_coords(15.0, 7.0, 25.0, 9.0));
}

#[test]
fn test_crop_rounds_outwards() {
    // 1 geographic unit per pixel, origin at top-left (0, 100)
    let uncropped = BoundingBox::from_coords(0.0, 0.0, 100.0, 100.0);
    let target = BoundingBox::from_coords(10.2, 30.4, 20.7, 40.6);

    let (rect, cropped_bbox) = compute_crop((100, 100), &uncropped, &target).unwrap();
    std::assert_eq!(rect, PixelRect::new(10, 59, 21, 70));
    assert_bbox_approx(&cropped_bbox, &BoundingBox::from_coords(10.0, 30.0, 21.0, 41.0));
}

#[test]
fn test_cropped_bbox_contains_target() {
    let uncropped = BoundingBox::from_coords(-180.0, -90.0, 180.0, 90.0);
    let dims = (733, 419);

    for i in 0..50 {
        let f = i as f64;
        let min_x = -170.0 + f * 3.37;
        let min_y = -80.0 + f * 1.91;
        let target = BoundingBox::from_coords(min_x, min_y, min_x + 0.13 + f * 0.7, min_y + 0.29 + f * 0.3);

        let (rect, cropped_bbox) = compute_crop(dims, &uncropped, &target).unwrap();
        std::assert!(!rect.is_empty());
        std::assert!(contains_with_tolerance(&cropped_bbox, &target),
                     "[{}] does not contain [{}]", cropped_bbox, target);
    }
}

#[test]
fn test_compute_crop_rejects_zero_extent_source() {
    let flat = BoundingBox::from_coords(0.0, 0.0, 0.0, 10.0);
    let target = BoundingBox::from_coords(0.0, 0.0, 1.0, 1.0);
    std::assert!(matches!(compute_crop((10, 10), &flat, &target), Err(CropError::InvalidInput(_))));
    std::assert!(matches!(
        compute_crop((0, 10), &BoundingBox::from_coords(0.0, 0.0, 1.0, 1.0), &target),
        Err(CropError::InvalidInput(_))));
}

#[test]
fn test_crop_to_boundary_copies_pixels() {
    let tiles = two_tile_row();
    let (bbox, dims) = aggregate_tile_bbox_and_dims(&tiles).unwrap();
    let image = composite(&tiles, &bbox, dims).unwrap();

    let (cropped, cropped_bbox) = crop_to_boundary(&l_boundary(), &image, &bbox).unwrap();
    std::assert_eq!(cropped.dimensions(), (100, 20));
    assert_bbox_approx(&cropped_bbox, &BoundingBox::from_coords(15.0, 7.0, 25.0, 9.0));

    std::assert_eq!(cropped.get_pixel(0, 0), image.get_pixel(50, 10));
    std::assert_eq!(*cropped.get_pixel(0, 0), Rgba([50, 10, 1, 255]));
    std::assert_eq!(*cropped.get_pixel(60, 19), Rgba([10, 29, 2, 255]));
}

#[test]
fn test_tile_round_trip() {
    let tiles = two_tile_row();
    let (bbox, dims) = aggregate_tile_bbox_and_dims(&tiles).unwrap();
    let image = composite(&tiles, &bbox, dims).unwrap();

    for tile in &tiles {
        let corners = [
            tile.bbox.min,
            Point::new(tile.bbox.max.x, tile.bbox.min.y),
            tile.bbox.max,
            Point::new(tile.bbox.min.x, tile.bbox.max.y),
        ];
        let (cropped, cropped_bbox) = crop_to_boundary(&corners, &image, &bbox).unwrap();
        assert_bbox_approx(&cropped_bbox, &tile.bbox);
        std::assert_eq!(cropped, tile.image);
    }
}

#[test]
fn test_boundary_outside_image_gives_transparent_crop() {
    let image = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    let bbox = BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0);
    let boundary = [Point::new(20.0, 20.0), Point::new(23.0, 20.0), Point::new(23.0, 22.0)];

    let (cropped, cropped_bbox) = crop_to_boundary(&boundary, &image, &bbox).unwrap();
    std::assert_eq!(cropped.dimensions(), (3, 2));
    std::assert!(cropped.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    assert_bbox_approx(&cropped_bbox, &BoundingBox::from_coords(20.0, 20.0, 23.0, 22.0));
}

#[test]
fn test_partially_outside_crop_is_padded() {
    let image = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    let rect = PixelRect::new(-2, 8, 3, 12);
    let cropped = crop_image(&image, &rect).unwrap();

    std::assert_eq!(cropped.dimensions(), (5, 4));
    std::assert_eq!(*cropped.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    std::assert_eq!(*cropped.get_pixel(2, 0), Rgba([255, 255, 255, 255]));
    std::assert_eq!(*cropped.get_pixel(4, 1), Rgba([255, 255, 255, 255]));
    std::assert_eq!(*cropped.get_pixel(4, 2), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_degenerate_boundary_is_rejected() {
    let tiles = two_tile_row();
    let (bbox, dims) = aggregate_tile_bbox_and_dims(&tiles).unwrap();
    let image = composite(&tiles, &bbox, dims).unwrap();

    // Lands exactly on pixel corner (100, 25)
    let boundary = [Point::new(20.0, 7.5)];
    match crop_to_boundary(&boundary, &image, &bbox) {
        Err(CropError::InvalidInput(msg)) => std::assert!(msg.contains("empty")),
        other => panic!("expected InvalidInput, got {:?}", other.map(|(_, b)| b)),
    }
}

#[test]
fn test_crop_image_rejects_unrepresentable_rect() {
    let image = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));

    let too_wide = PixelRect::new(i64::MIN, 0, 10, 10);
    std::assert!(matches!(crop_image(&image, &too_wide), Err(CropError::InvalidInput(_))));

    let beyond_u32 = PixelRect::new(0, 0, u32::MAX as i64 + 1, 10);
    std::assert!(matches!(crop_image(&image, &beyond_u32), Err(CropError::InvalidInput(_))));

    let inverted = PixelRect::new(5, 5, 2, 8);
    std::assert!(matches!(crop_image(&image, &inverted), Err(CropError::InvalidInput(_))));
}

#[test]
fn test_huge_boundary_is_rejected() {
    let image = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    let bbox = BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0);

    for far_x in [1e12, 1e300] {
        let boundary = [Point::new(1.0, 1.0), Point::new(far_x, 1.0), Point::new(1.0, 9.0)];
        std::assert!(matches!(crop_to_boundary(&boundary, &image, &bbox), Err(CropError::InvalidInput(_))));
    }
}
