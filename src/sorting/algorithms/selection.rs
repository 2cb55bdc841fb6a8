use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

impl SortContext<'_> {
    /// Scan the unsorted suffix for the minimum (one comparison per
    /// candidate) and swap it into place only when it is strictly smaller.
    pub(crate) fn selection_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        let n = arr.len();

        for i in 0..n {
            let mut min = i;
            self.select(min);

            for j in i + 1..n {
                self.select(j);
                self.count_comparison();
                self.pause()?;

                if arr[j].value < arr[min].value {
                    self.release(min);
                    min = j;
                    self.select(min);
                } else {
                    self.release(j);
                }
            }

            if min != i {
                arr.swap(i, min);
                self.change(i, ElementUpdate::idle_value(arr[i].value));
                self.change(min, ElementUpdate::idle_value(arr[min].value));
                self.count_swap();
            } else {
                self.release(i);
            }
        }

        Ok(())
    }
}
