use std::cmp::Ordering;

use crate::models::GriddedDataset;
use crate::utils::coordinates::normalize_longitude;

/// Rewrite the longitude axis from [0, 360) to [-180, 180) and re-sort it
/// ascending, permuting every layer to match.
///
/// Idempotent: a dataset already in [-180, 180) with a sorted axis passes
/// through unchanged.
pub fn normalize(mut ds: GriddedDataset) -> GriddedDataset {
    for lon in &mut ds.longitudes {
        *lon = normalize_longitude(*lon);
    }

    let mut order: Vec<usize> = (0..ds.longitudes.len()).collect();
    order.sort_by(|&a, &b| {
        ds.longitudes[a]
            .partial_cmp(&ds.longitudes[b])
            .unwrap_or(Ordering::Equal)
    });

    if order.iter().enumerate().all(|(i, &j)| i == j) {
        return ds;
    }

    ds.longitudes = order.iter().map(|&j| ds.longitudes[j]).collect();

    let nlon = ds.longitudes.len();
    for layer in &mut ds.layers {
        let mut reordered = Vec::with_capacity(layer.values.len());
        for row in layer.values.chunks(nlon) {
            reordered.extend(order.iter().map(|&j| row[j]));
        }
        layer.values = reordered;
    }

    ds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gfs_style_dataset() -> GriddedDataset {
        // Two latitude rows over the 0-360 convention
        let mut ds = GriddedDataset::new(vec![10.0, 9.75], vec![0.0, 90.0, 180.0, 270.0]);
        ds.add_layer("t2m", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
            .unwrap();
        ds
    }

    #[test]
    fn test_normalize_remaps_and_sorts() {
        let ds = normalize(gfs_style_dataset());

        assert_eq!(ds.longitudes, vec![-180.0, -90.0, 0.0, 90.0]);
        assert_eq!(ds.latitudes, vec![10.0, 9.75]);
    }

    #[test]
    fn test_normalize_permutes_layers_with_axis() {
        let ds = normalize(gfs_style_dataset());

        // 0->0.0deg, 1->90deg, 2->180deg(-180), 3->270deg(-90), per row
        let layer = ds.layer("t2m").unwrap();
        assert_eq!(layer.values, vec![3.0, 4.0, 1.0, 2.0, 7.0, 8.0, 5.0, 6.0]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(gfs_style_dataset());
        let twice = normalize(once.clone());

        assert_eq!(twice.longitudes, once.longitudes);
        assert_eq!(
            twice.layer("t2m").unwrap().values,
            once.layer("t2m").unwrap().values
        );
    }

    #[test]
    fn test_normalize_range_invariant() {
        let ds = normalize(gfs_style_dataset());

        for lon in &ds.longitudes {
            assert!((-180.0..180.0).contains(lon));
        }
        for window in ds.longitudes.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_normalize_preserves_point_count() {
        let ds = normalize(gfs_style_dataset());

        assert_eq!(ds.num_points(), 8);
        assert_eq!(ds.layer("t2m").unwrap().values.len(), 8);
    }
}
