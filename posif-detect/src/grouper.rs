//! Splitting of integer positions into maximal consecutive runs.

/// Iterator over maximal runs of values that increase by exactly `step`.
///
/// Created by [`group_consecutive`]. Single pass: the underlying iterator is
/// consumed as runs are produced.
pub struct ConsecutiveRuns<I: Iterator<Item = u32>> {
    values: std::iter::Peekable<I>,
    step: u32,
}

impl<I: Iterator<Item = u32>> Iterator for ConsecutiveRuns<I> {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.values.next()?;
        let mut run = vec![first];
        let mut last = first;

        while let Some(&v) = self.values.peek() {
            if last.checked_add(self.step) != Some(v) {
                break;
            }
            run.push(v);
            last = v;
            self.values.next();
        }

        Some(run)
    }
}

///
/// Partition `values` into maximal runs where each value equals the previous
/// one plus `step`.
///
/// A new run starts whenever a value breaks the progression; the very first
/// value always starts the first run. Concatenating the runs reproduces the
/// input.
///
/// # Example
/// ```text
/// values: 1 2 3 7 8 10
/// runs:   [1 2 3] [7 8] [10]
/// ```
pub fn group_consecutive<T>(values: T, step: u32) -> ConsecutiveRuns<T::IntoIter>
where
    T: IntoIterator<Item = u32>,
{
    ConsecutiveRuns {
        values: values.into_iter().peekable(),
        step,
    }
}
