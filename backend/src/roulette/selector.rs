/// Inverse-CDF draw over unnormalized weights.
///
/// `draw` is a uniform sample in `[0, 1)`. Returns `None` only for an empty
/// pool. When rounding leaves the cumulative sum short of the target, or the
/// weights carry no usable mass at all, the last item is returned.
pub fn select_weighted<'a, T>(items: &'a [T], weights: &[f64], draw: f64) -> Option<&'a T> {
    let total = total_weight(weights);
    if !(total > 0.0 && total.is_finite()) {
        return items.last();
    }
    pick_at(items, weights, draw * total)
}

/// Walks the running sum and returns the first item whose cumulative weight
/// reaches `target`. The upper boundary of each slot is inclusive.
pub fn pick_at<'a, T>(items: &'a [T], weights: &[f64], target: f64) -> Option<&'a T> {
    let mut cumulative = 0.0;

    for (item, &weight) in items.iter().zip(weights) {
        if !has_mass(weight) {
            continue;
        }
        cumulative += weight;
        if target <= cumulative {
            return Some(item);
        }
    }

    items.last()
}

/// Probability of each slot, for display.
pub fn probabilities(weights: &[f64]) -> Vec<f64> {
    let total = total_weight(weights);
    weights
        .iter()
        .map(|&w| if has_mass(w) && total > 0.0 { w / total } else { 0.0 })
        .collect()
}

fn total_weight(weights: &[f64]) -> f64 {
    weights.iter().copied().filter(|&w| has_mass(w)).sum()
}

fn has_mass(weight: f64) -> bool {
    weight > 0.0 && weight.is_finite()
}
