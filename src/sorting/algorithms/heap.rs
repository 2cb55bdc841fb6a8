use crate::sorting::engine::{SortContext, Tracked};
use crate::sorting::errors::Result;
use crate::store::ElementUpdate;

impl SortContext<'_> {
    /// Build a max-heap bottom-up, then repeatedly move the root behind the
    /// shrinking heap. Steps only.
    pub(crate) fn heap_sort(&mut self, arr: &mut [Tracked]) -> Result<()> {
        let n = arr.len();

        for i in (0..n / 2).rev() {
            self.sift_down(arr, n, i)?;
        }

        for end in (1..n).rev() {
            arr.swap(0, end);
            self.change(0, ElementUpdate::selected_value(arr[0].value));
            self.change(end, ElementUpdate::selected_value(arr[end].value));
            self.pause()?;
            self.change(0, ElementUpdate::idle_value(arr[0].value));
            self.change(end, ElementUpdate::idle_value(arr[end].value));

            self.sift_down(arr, end, 0)?;
        }

        Ok(())
    }

    /// Push `arr[root]` down within `arr[..len]` until no child exceeds it
    fn sift_down(&mut self, arr: &mut [Tracked], len: usize, mut root: usize) -> Result<()> {
        loop {
            let left = 2 * root + 1;
            let right = 2 * root + 2;
            let mut largest = root;

            if left < len && arr[left].value > arr[largest].value {
                largest = left;
            }
            if right < len && arr[right].value > arr[largest].value {
                largest = right;
            }
            if largest == root {
                return Ok(());
            }

            self.select(root);
            self.select(largest);
            self.pause()?;

            arr.swap(root, largest);
            self.change(root, ElementUpdate::idle_value(arr[root].value));
            self.change(largest, ElementUpdate::idle_value(arr[largest].value));
            self.pause()?;

            root = largest;
        }
    }
}
