//! Weighted k-means in CIELAB
//!
//! Each distinct color is a point weighted by its pixel count. Assignment
//! uses the triangle inequality to skip clusters that cannot be closer than
//! the current one: if two centres are more than twice the point's current
//! distance apart (four times in squared terms), the far centre is skipped.
//!
//! # References
//!
//! M. Emre Celebi, "Improving the performance of k-means for color
//! quantization", Image and Vision Computing, 2011.

use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cancel::{check, CancellationToken, Cancelled};
use crate::color::{Argb, Lab};

const MAX_ITERATIONS: usize = 10;
const MIN_MOVEMENT_DISTANCE: f64 = 3.0;
const RANDOM_SEED: u64 = 0x42688;

#[derive(Debug, Clone, Copy)]
struct Neighbor {
    distance: f64,
    index: usize,
}

/// Refines `starting_clusters` over the opaque pixels of `input_pixels`.
///
/// With no starting clusters, up to `max_colors` random centres are used.
/// Clusters that end up at the same sRGB color are merged, so the returned
/// populations always sum to the number of opaque input pixels.
pub fn quantize_wsmeans(
    input_pixels: &[Argb],
    starting_clusters: &[Argb],
    max_colors: usize,
    cancel: Option<&CancellationToken>,
) -> Result<BTreeMap<Argb, u32>, Cancelled> {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);

    // Distinct colors in first-seen order.
    let mut pixel_to_index: HashMap<Argb, usize> = HashMap::new();
    let mut points: Vec<Lab> = Vec::new();
    let mut pixels: Vec<Argb> = Vec::new();
    let mut counts: Vec<u32> = Vec::new();
    for &pixel in input_pixels.iter().filter(|p| p.is_opaque()) {
        match pixel_to_index.get(&pixel) {
            Some(&i) => counts[i] += 1,
            None => {
                pixel_to_index.insert(pixel, points.len());
                points.push(Lab::from(pixel));
                pixels.push(pixel);
                counts.push(1);
            }
        }
    }

    let mut cluster_count = max_colors.min(points.len());
    if !starting_clusters.is_empty() {
        cluster_count = cluster_count.min(starting_clusters.len());
    }
    if cluster_count == 0 {
        return Ok(BTreeMap::new());
    }

    let mut clusters: Vec<Lab> = starting_clusters
        .iter()
        .take(cluster_count)
        .map(|&argb| Lab::from(argb))
        .collect();
    while clusters.len() < cluster_count {
        clusters.push(Lab::new(
            rng.gen::<f64>() * 100.0,
            rng.gen::<f64>() * 200.0 - 100.0,
            rng.gen::<f64>() * 200.0 - 100.0,
        ));
    }

    let mut cluster_indices: Vec<usize> = (0..points.len())
        .map(|_| rng.gen_range(0..cluster_count))
        .collect();
    let mut neighbors = vec![
        vec![
            Neighbor {
                distance: 0.0,
                index: 0
            };
            cluster_count
        ];
        cluster_count
    ];
    let mut pixel_count_sums = vec![0u32; cluster_count];

    for iteration in 0..MAX_ITERATIONS {
        check(cancel)?;

        for i in 0..cluster_count {
            neighbors[i][i] = Neighbor {
                distance: 0.0,
                index: i,
            };
            for j in (i + 1)..cluster_count {
                let distance = clusters[i].distance_squared(clusters[j]);
                neighbors[j][i] = Neighbor { distance, index: i };
                neighbors[i][j] = Neighbor { distance, index: j };
            }
        }
        // Nearest first, so the pruning test below can stop early.
        for row in neighbors.iter_mut() {
            row.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        }

        let mut points_moved = 0;
        for (i, point) in points.iter().enumerate() {
            let previous_cluster_index = cluster_indices[i];
            let previous_distance = point.distance_squared(clusters[previous_cluster_index]);
            let mut minimum_distance = previous_distance;
            let mut new_cluster_index = None;
            for neighbor in &neighbors[previous_cluster_index] {
                if neighbor.distance >= 4.0 * previous_distance {
                    break;
                }
                let distance = point.distance_squared(clusters[neighbor.index]);
                if distance < minimum_distance {
                    minimum_distance = distance;
                    new_cluster_index = Some(neighbor.index);
                }
            }
            if let Some(new_index) = new_cluster_index {
                let distance_change = (minimum_distance.sqrt() - previous_distance.sqrt()).abs();
                if distance_change > MIN_MOVEMENT_DISTANCE {
                    points_moved += 1;
                    cluster_indices[i] = new_index;
                }
            }
        }

        if points_moved == 0 && iteration != 0 {
            debug!(iteration, "k-means converged");
            break;
        }

        let mut l_sums = vec![0.0; cluster_count];
        let mut a_sums = vec![0.0; cluster_count];
        let mut b_sums = vec![0.0; cluster_count];
        pixel_count_sums.fill(0);
        for ((point, &cluster), &count) in points.iter().zip(&cluster_indices).zip(&counts) {
            pixel_count_sums[cluster] += count;
            let weight = count as f64;
            l_sums[cluster] += point.l * weight;
            a_sums[cluster] += point.a * weight;
            b_sums[cluster] += point.b * weight;
        }
        for (i, cluster) in clusters.iter_mut().enumerate() {
            let count = pixel_count_sums[i];
            *cluster = if count == 0 {
                Lab::new(0.0, 0.0, 0.0)
            } else {
                let count = count as f64;
                Lab::new(l_sums[i] / count, a_sums[i] / count, b_sums[i] / count)
            };
        }
    }

    let mut argb_to_population = BTreeMap::new();
    for (cluster, &count) in clusters.iter().zip(&pixel_count_sums) {
        if count == 0 {
            continue;
        }
        *argb_to_population.entry(cluster.to_argb()).or_insert(0) += count;
    }
    debug!(
        points = pixels.len(),
        clusters = argb_to_population.len(),
        "k-means finished"
    );
    Ok(argb_to_population)
}
