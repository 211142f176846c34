use qmoo_core::QuditConfig;

/// Iterator over every assignment of a qudit configuration.
///
/// States are produced in row-major order: the last variable changes
/// fastest, so the `k`-th state is the mixed-radix digits of `k`.
///
/// # Example
///
/// ```
/// use qmoo_core::QuditConfig;
/// use qmoo_enumerate::States;
///
/// let qudits = QuditConfig::new(vec![2, 3]).unwrap();
/// let states: Vec<_> = States::new(&qudits).collect();
///
/// assert_eq!(states.len(), 6);
/// assert_eq!(states[1], vec![0, 1]);
/// assert_eq!(states[3], vec![1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct States<'a> {
    levels: &'a [usize],
    next: Option<Vec<usize>>,
}

impl<'a> States<'a> {
    #[must_use]
    pub fn new(qudits: &'a QuditConfig) -> Self {
        Self {
            levels: qudits.levels(),
            next: Some(vec![0; qudits.len()]),
        }
    }
}

impl Iterator for States<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut following = current.clone();
        for (digit, &d) in following.iter_mut().zip(self.levels).rev() {
            *digit += 1;
            if *digit < d {
                self.next = Some(following);
                break;
            }
            *digit = 0;
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_state_once() {
        let qudits = QuditConfig::new(vec![2, 3, 4]).unwrap();
        let states: Vec<_> = States::new(&qudits).collect();

        assert_eq!(states.len(), 24);
        assert_eq!(states.first(), Some(&vec![0, 0, 0]));
        assert_eq!(states.last(), Some(&vec![1, 2, 3]));

        let mut sorted = states.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, states);
    }

    #[test]
    fn last_variable_changes_fastest() {
        let qudits = QuditConfig::uniform(2, 3).unwrap();
        let states: Vec<_> = States::new(&qudits).collect();

        assert_eq!(
            states,
            vec![
                vec![0, 0, 0],
                vec![0, 0, 1],
                vec![0, 1, 0],
                vec![0, 1, 1],
                vec![1, 0, 0],
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn single_qudit_lists_its_levels() {
        let qudits = QuditConfig::new(vec![5]).unwrap();
        let states: Vec<_> = States::new(&qudits).collect();
        assert_eq!(states, (0..5).map(|x| vec![x]).collect::<Vec<_>>());
    }
}
