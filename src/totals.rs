/// Return an iterator over the running totals of `changes`, starting from
/// zero and wrapping back to the start of `changes` each time it runs out.
///
/// For example:
///
///     use chronal_calibration::totals::running_totals;
///     let totals = running_totals(&[1, -2, 3, 1]);
///     assert_eq!(totals.take(6).collect::<Vec<_>>(), vec![1, -1, 2, 3, 4, 2]);
///
/// The iterator ends only if `changes` is empty, in which case it produces
/// nothing at all, or if the next total would overflow an `i64`.
pub fn running_totals(changes: &[i32]) -> RunningTotals<'_> {
    RunningTotals {
        changes,
        next: 0,
        total: 0,
        cycles: 0,
    }
}

/// Cloning a `RunningTotals` gives an independent scan that resumes from the
/// same point.
#[derive(Debug, Clone)]
pub struct RunningTotals<'a> {
    changes: &'a [i32],
    next: usize,
    total: i64,
    cycles: usize,
}

impl<'a> RunningTotals<'a> {
    /// The number of complete passes made over the changes so far.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// The number of totals produced so far.
    pub fn steps(&self) -> usize {
        self.cycles * self.changes.len() + self.next
    }
}

impl<'a> Iterator for RunningTotals<'a> {
    type Item = i64;
    fn next(&mut self) -> Option<i64> {
        let change = *self.changes.get(self.next)?;
        self.total = self.total.checked_add(i64::from(change))?;
        self.next += 1;
        if self.next == self.changes.len() {
            self.next = 0;
            self.cycles += 1;
        }
        Some(self.total)
    }
}

#[test]
fn test_running_totals() {
    let mut totals = running_totals(&[3, 3, 4, -2, -4]);
    assert_eq!(
        totals.by_ref().take(7).collect::<Vec<_>>(),
        vec![3, 6, 10, 8, 4, 7, 10]
    );
    assert_eq!(totals.cycles(), 1);
    assert_eq!(totals.steps(), 7);

    let resumed = totals.clone();
    assert_eq!(
        totals.take(3).collect::<Vec<_>>(),
        resumed.take(3).collect::<Vec<_>>()
    );
}

#[test]
fn test_running_totals_empty() {
    let mut totals = running_totals(&[]);
    assert_eq!(totals.next(), None);
    assert_eq!(totals.cycles(), 0);
    assert_eq!(totals.steps(), 0);
}

#[test]
fn test_running_totals_wide() {
    // The accumulator must not wrap at i32's limits.
    let totals = running_totals(&[i32::max_value(), i32::max_value()]);
    assert_eq!(
        totals.take(3).collect::<Vec<_>>(),
        vec![2147483647, 4294967294, 6442450941]
    );
}

#[test]
fn test_running_totals_overflow() {
    let mut totals = RunningTotals {
        changes: &[i32::max_value()],
        next: 0,
        total: i64::max_value() - 3 * i64::from(i32::max_value()),
        cycles: 0,
    };
    assert_eq!(totals.by_ref().count(), 3);
    assert_eq!(totals.next(), None);
    assert_eq!(totals.cycles(), 3);
}
