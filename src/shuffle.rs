use rand::Rng;

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
///
/// Uses the Durstenfeld variant of Fisher–Yates: walks the copy from the last
/// index down, swapping each position with a random index at or below it.
pub fn shuffle_array<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn empty_input_yields_empty_output() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: Vec<u32> = Vec::new();

        assert!(shuffle_array(&mut rng, &items).is_empty());
    }

    #[test]
    fn single_element_is_returned_as_is() {
        let mut rng = StdRng::seed_from_u64(2);

        assert_eq!(shuffle_array(&mut rng, &["only"]), vec!["only"]);
    }

    #[test]
    fn result_is_a_permutation_and_input_is_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let items: Vec<u32> = (0..50).collect();
        let original = items.clone();

        let shuffled = shuffle_array(&mut rng, &items);

        assert_eq!(items, original);
        assert_eq!(shuffled.len(), items.len());

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn keeps_duplicate_elements() {
        let mut rng = StdRng::seed_from_u64(4);
        let items = vec!["a", "b", "a", "c", "a"];

        let shuffled = shuffle_array(&mut rng, &items);

        assert_eq!(shuffled.iter().filter(|item| **item == "a").count(), 3);
        assert_eq!(shuffled.len(), 5);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let items: Vec<u32> = (0..20).collect();

        let first = shuffle_array(&mut StdRng::seed_from_u64(99), &items);
        let second = shuffle_array(&mut StdRng::seed_from_u64(99), &items);

        assert_eq!(first, second);
    }

    #[test]
    fn produces_varied_orderings() {
        let mut rng = StdRng::seed_from_u64(5);
        let items: Vec<u32> = (0..10).collect();

        let orderings: HashSet<Vec<u32>> =
            (0..20).map(|_| shuffle_array(&mut rng, &items)).collect();

        assert!(orderings.len() > 1);
    }

    #[test]
    fn every_position_receives_every_element() {
        let mut rng = StdRng::seed_from_u64(6);
        let items = [0usize, 1, 2];
        let mut seen = [[false; 3]; 3];

        for _ in 0..200 {
            for (position, value) in shuffle_array(&mut rng, &items).into_iter().enumerate() {
                seen[position][value] = true;
            }
        }

        assert!(seen.iter().flatten().all(|hit| *hit));
    }
}
