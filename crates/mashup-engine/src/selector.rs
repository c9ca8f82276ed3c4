//! Uniform random selection from a category pool.

use mashup_core::ElementType;
use rand::Rng;

use crate::error::EmptyPoolError;

/// Pick one value uniformly at random from a non-empty pool.
pub fn pick_one<T: Clone>(element_type: ElementType, pool: &[T]) -> Result<T, EmptyPoolError> {
    pick_one_with(element_type, pool, &mut rand::rng())
}

/// Like [`pick_one`], drawing from the given RNG.
pub fn pick_one_with<T: Clone, R: Rng>(
    element_type: ElementType,
    pool: &[T],
    rng: &mut R,
) -> Result<T, EmptyPoolError> {
    if pool.is_empty() {
        return Err(EmptyPoolError { element_type });
    }
    let index = rng.random_range(0..pool.len());
    Ok(pool[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_pool_names_category() {
        let pool: Vec<String> = vec![];
        let err = pick_one(ElementType::Trend, &pool).unwrap_err();
        assert_eq!(err.element_type, ElementType::Trend);
        assert_eq!(err.to_string(), "no active trend elements found");
    }

    #[test]
    fn test_single_element_pool() {
        let pool = vec!["only".to_string()];
        assert_eq!(pick_one(ElementType::Persona, &pool).unwrap(), "only");
    }

    #[test]
    fn test_picks_stay_in_pool_and_cover_it() {
        let pool = vec!["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let picked = pick_one_with(ElementType::Problem, &pool, &mut rng).unwrap();
            assert!(pool.contains(&picked));
            seen.insert(picked);
        }
        assert_eq!(seen.len(), pool.len());
    }
}
