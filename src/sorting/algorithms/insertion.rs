use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

impl SortContext<'_> {
    /// Shift left while the left neighbour is strictly greater, then place.
    /// Steps only; the counters are not touched.
    pub(crate) fn insertion_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        for i in 1..arr.len() {
            let current = arr[i];
            let mut j = i;

            self.change(i, ElementUpdate::selected_value(current.value));

            while j > 0 && current.value < arr[j - 1].value {
                arr[j] = arr[j - 1];
                self.change(j, ElementUpdate::selected_value(arr[j].value));
                self.pause()?;
                self.change(j, ElementUpdate::idle_value(arr[j].value));
                j -= 1;
            }

            arr[j] = current;
            self.change(j, ElementUpdate::idle_value(current.value));
        }

        Ok(())
    }
}
