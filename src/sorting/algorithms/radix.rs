use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

const RADIX: u32 = 10;

/// Number of base-10 digits in `value` (zero has one digit)
pub(crate) fn digit_count(value: u32) -> u32 {
    if value == 0 {
        1
    } else {
        value.ilog10() + 1
    }
}

/// Base-10 digit of `value` at `position`, counting from the least significant
pub(crate) fn digit_at(value: u32, position: u32) -> usize {
    RADIX
        .checked_pow(position)
        .map_or(0, |place| (value / place % RADIX) as usize)
}

impl SortContext<'_> {
    /// LSD radix sort: one stable bucketing pass per digit of the maximum,
    /// each pass written back slot by slot. Steps only.
    pub(crate) fn radix_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        let passes = arr.iter().map(|t| digit_count(t.value)).max().unwrap_or(0);

        for position in 0..passes {
            let mut buckets: [Vec<Tracked>; RADIX as usize] = Default::default();
            for &item in arr.iter() {
                buckets[digit_at(item.value, position)].push(item);
            }

            for (slot, item) in arr.iter_mut().zip(buckets.into_iter().flatten()) {
                *slot = item;
            }

            for i in 0..arr.len() {
                self.change(i, ElementUpdate::selected_value(arr[i].value));
                self.pause()?;
                self.change(i, ElementUpdate::idle_value(arr[i].value));
            }
        }

        Ok(())
    }
}
