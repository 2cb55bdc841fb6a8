use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

/// Bucket for `value` given the array's `min`/`max` and `count` buckets.
///
/// An all-equal array (`max == min`) maps everything to bucket 0 instead of
/// dividing by zero.
pub(crate) fn bucket_index(value: u32, min: u32, max: u32, count: usize) -> usize {
    let range = max - min;
    if range == 0 {
        return 0;
    }
    let scaled = (value - min) as f64 / range as f64 * (count - 1) as f64;
    (scaled.floor() as usize).min(count - 1)
}

impl SortContext<'_> {
    /// Scatter into `max(n / 2, 1)` value-range buckets, insertion-sort each
    /// bucket, then write the buckets back in order. Steps only.
    pub(crate) fn bucket_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        let n = arr.len();
        let (Some(min), Some(max)) = (
            arr.iter().map(|t| t.value).min(),
            arr.iter().map(|t| t.value).max(),
        ) else {
            return Ok(());
        };

        let count = (n / 2).max(1);
        let mut buckets: Vec<Vec<Tracked>> = vec![Vec::new(); count];

        for i in 0..n {
            buckets[bucket_index(arr[i].value, min, max, count)].push(arr[i]);

            self.select(i);
            self.pause()?;
            self.release(i);
        }

        for bucket in &mut buckets {
            insertion_sort_values(bucket);
        }

        for (i, item) in buckets.into_iter().flatten().enumerate() {
            arr[i] = item;
            self.change(i, ElementUpdate::selected_value(item.value));
            self.pause()?;
            self.change(i, ElementUpdate::idle_value(item.value));
        }

        Ok(())
    }
}

/// Plain stable insertion sort for a single bucket (not visualized)
fn insertion_sort_values(bucket: &mut [Tracked]) {
    for j in 1..bucket.len() {
        let key = bucket[j];
        let mut k = j;
        while k > 0 && bucket[k - 1].value > key.value {
            bucket[k] = bucket[k - 1];
            k -= 1;
        }
        bucket[k] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index_guards_flat_range() {
        assert_eq!(bucket_index(4, 4, 4, 2), 0);
        assert_eq!(bucket_index(4, 4, 4, 1), 0);
    }

    #[test]
    fn test_bucket_index_spreads_and_clamps() {
        assert_eq!(bucket_index(100, 100, 900, 5), 0);
        assert_eq!(bucket_index(500, 100, 900, 5), 2);
        assert_eq!(bucket_index(900, 100, 900, 5), 4);
        assert_eq!(bucket_index(899, 100, 900, 1), 0);
    }
}
