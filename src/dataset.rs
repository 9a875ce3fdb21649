//! Shared input generation
//!
//! Every lane of a race starts from the same generated array so the
//! algorithms are compared on equal terms.

use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Initial arrangement of the generated values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrder {
    #[default]
    Random,
    Sorted,
    Reverse,
}

impl DataOrder {
    pub const ALL: [DataOrder; 3] = [DataOrder::Random, DataOrder::Sorted, DataOrder::Reverse];

    pub fn name(self) -> &'static str {
        match self {
            DataOrder::Random => "random",
            DataOrder::Sorted => "sorted",
            DataOrder::Reverse => "reverse",
        }
    }
}

impl fmt::Display for DataOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate `n` values uniformly drawn from `0..=max_value`, then arranged
/// according to `order`.
pub fn generate<R: Rng>(n: usize, max_value: i64, order: DataOrder, rng: &mut R) -> Vec<i64> {
    let mut values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=max_value)).collect();
    match order {
        DataOrder::Random => {}
        DataOrder::Sorted => values.sort_unstable(),
        DataOrder::Reverse => values.sort_unstable_by(|a, b| b.cmp(a)),
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_orders() {
        let mut rng = StdRng::seed_from_u64(11);

        let random = generate(50, 3000, DataOrder::Random, &mut rng);
        assert_eq!(random.len(), 50);
        assert!(random.iter().all(|v| (0..=3000).contains(v)));

        let sorted = generate(50, 3000, DataOrder::Sorted, &mut rng);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let reverse = generate(50, 3000, DataOrder::Reverse, &mut rng);
        assert!(reverse.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = generate(20, 100, DataOrder::Random, &mut StdRng::seed_from_u64(5));
        let b = generate(20, 100, DataOrder::Random, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_names() {
        assert_eq!(DataOrder::Reverse.to_string(), "reverse");
        assert_eq!(DataOrder::default(), DataOrder::Random);
    }
}
