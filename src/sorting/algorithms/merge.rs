use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

impl SortContext<'_> {
    /// Top-down merge sort over the whole buffer. Steps only.
    pub(crate) fn merge_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        if arr.is_empty() {
            return Ok(());
        }
        let end = arr.len() - 1;
        self.merge_sort_range(arr, 0, end)
    }

    /// Sort `arr[start..=end]`; the left half gets the extra element on odd lengths
    fn merge_sort_range(&mut self, arr: &mut [Tracked], start: usize, end: usize) -> Result<()> {
        if start >= end {
            return Ok(());
        }

        let middle = (start + end) / 2;
        self.merge_sort_range(arr, start, middle)?;
        self.merge_sort_range(arr, middle + 1, end)?;
        self.merge_ranges(arr, start, middle, end)
    }

    fn merge_ranges(
        &mut self,
        arr: &mut [Tracked],
        start: usize,
        middle: usize,
        end: usize,
    ) -> Result<()> {
        let left = arr[start..=middle].to_vec();
        let right = arr[middle + 1..=end].to_vec();

        let (mut i, mut j, mut k) = (0, 0, start);

        while i < left.len() && j < right.len() {
            // Right wins only when strictly smaller, so ties keep left-half order
            let next = if right[j].value < left[i].value {
                j += 1;
                right[j - 1]
            } else {
                i += 1;
                left[i - 1]
            };
            arr[k] = next;
            self.change(k, ElementUpdate::selected_value(next.value));
            k += 1;
            self.pause()?;
        }

        for &rest in left[i..].iter().chain(&right[j..]) {
            arr[k] = rest;
            self.change(k, ElementUpdate::selected_value(rest.value));
            k += 1;
            self.pause()?;
        }

        for idx in start..=end {
            self.change(idx, ElementUpdate::idle_value(arr[idx].value));
        }

        Ok(())
    }
}
