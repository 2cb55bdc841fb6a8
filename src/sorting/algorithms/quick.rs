use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

impl SortContext<'_> {
    /// Hoare-partition quick sort with the middle element as pivot
    pub(crate) fn quick_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        let end = arr.len() as isize - 1;
        self.quick_sort_range(arr, 0, end)
    }

    /// Sort `arr[start..=end]`; bounds are signed because `j` may step below `start`
    fn quick_sort_range(&mut self, arr: &mut [Tracked], start: isize, end: isize) -> Result<()> {
        if start >= end {
            return Ok(());
        }

        let pivot = arr[((start + end) / 2) as usize].value;
        let mut i = start;
        let mut j = end;

        while i <= j {
            // Both scans stop at the pivot at the latest, so they stay in range
            while arr[i as usize].value < pivot {
                i += 1;
                self.count_comparison();
            }
            while arr[j as usize].value > pivot {
                j -= 1;
                self.count_comparison();
            }

            if i <= j {
                let (a, b) = (i as usize, j as usize);
                arr.swap(a, b);
                self.count_swap();
                self.change(a, ElementUpdate::selected_value(arr[a].value));
                self.change(b, ElementUpdate::selected_value(arr[b].value));
                self.pause()?;
                self.change(a, ElementUpdate::idle_value(arr[a].value));
                self.change(b, ElementUpdate::idle_value(arr[b].value));
                i += 1;
                j -= 1;
            }
        }

        self.quick_sort_range(arr, start, j)?;
        self.quick_sort_range(arr, i, end)
    }
}
