use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

impl SortContext<'_> {
    /// Adjacent-pair passes without early exit: `n` passes, every pair visit
    /// counts one comparison and every inversion one swap.
    pub(crate) fn bubble_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        let n = arr.len();

        for i in 0..n {
            for j in 0..n - i - 1 {
                self.select(j);
                self.select(j + 1);
                self.count_comparison();
                self.pause()?;

                if arr[j].value > arr[j + 1].value {
                    arr.swap(j, j + 1);
                    self.change(j, ElementUpdate::value(arr[j].value));
                    self.change(j + 1, ElementUpdate::value(arr[j + 1].value));
                    self.count_swap();
                    self.pause()?;
                }

                self.release(j);
                self.release(j + 1);
            }
        }

        Ok(())
    }
}
