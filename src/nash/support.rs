/// Iterator over every nonempty subset of `0..n`, smallest subsets
/// first and lexicographic within a size. Candidate supports are drawn
/// in this order, and it is load-bearing: enumeration order decides
/// which equilibrium "first" and "last" selection policies pick.
pub struct Supports {
    n: usize,
    current: Vec<usize>,
}

impl From<usize> for Supports {
    fn from(n: usize) -> Self {
        Self {
            n,
            current: vec![0],
        }
    }
}

impl Iterator for Supports {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() || self.current.len() > self.n {
            return None;
        }
        let item = self.current.clone();
        self.advance();
        Some(item)
    }
}

impl Supports {
    /// step to the next k-combination, rolling over to size k + 1
    fn advance(&mut self) {
        let k = self.current.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.current[i] < self.n - (k - i) {
                self.current[i] += 1;
                for j in (i + 1)..k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                return;
            }
        }
        if k < self.n {
            self.current = (0..=k).collect();
        } else {
            self.current.clear();
        }
    }
}
