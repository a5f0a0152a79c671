use super::*;

fn engine(values: Vec<i64>, conformation: i64) -> LookupEngine {
    LookupEngine::new(Dataset::new(values), conformation).expect("engine")
}

#[test]
fn exact_match_returns_index_and_value() {
    let engine = engine(vec![1, 5, 9, 42, 77], 10);

    for (index, value) in [(0, 1), (2, 9), (4, 77)] {
        assert_eq!(engine.find(value), Ok(Entry { index, value }));
    }
}

#[test]
fn single_value_scenarios() {
    let engine = engine(vec![10], 10);

    assert_eq!(engine.find(10), Ok(Entry { index: 0, value: 10 }));
    // 9 / 10 truncates to zero, so proximity does not help.
    assert_eq!(engine.find(9), Err(LookupError::NotFound));
    assert_eq!(engine.find(11), Ok(Entry { index: 0, value: 10 }));
    assert_eq!(engine.find(1000), Err(LookupError::NotFound));
}

#[test]
fn two_value_scenarios() {
    let engine = engine(vec![10, 100], 10);

    assert_eq!(engine.find(100), Ok(Entry { index: 1, value: 100 }));
    assert_eq!(engine.find(105), Ok(Entry { index: 1, value: 100 }));
    assert_eq!(engine.find(109), Ok(Entry { index: 1, value: 100 }));
    // 111 - 111/10 = 100, so the band still just covers the stored value;
    // 112 is the first miss.
    assert_eq!(engine.find(111), Ok(Entry { index: 1, value: 100 }));
    assert_eq!(engine.find(112), Err(LookupError::NotFound));
    assert_eq!(engine.find(1000), Err(LookupError::NotFound));
}

#[test]
fn tolerance_truncates_toward_zero() {
    // A divisor larger than the query collapses the band to nothing, even
    // one step away from a stored value.
    let engine = engine(vec![1000], 1000);
    assert_eq!(engine.find(999), Err(LookupError::NotFound));
    assert_eq!(engine.find(1000), Ok(Entry { index: 0, value: 1000 }));
}

#[test]
fn prefers_lower_neighbor_when_both_qualify() {
    // With divisor 2 the band around 101 covers both 100 and 102; the
    // below-candidate is checked first.
    let engine = engine(vec![100, 102], 2);
    assert_eq!(engine.find(101), Ok(Entry { index: 0, value: 100 }));
}

#[test]
fn target_below_smallest_value_matches_it() {
    // The below-candidate check only bounds the band from below, so any
    // target under the first element with a nonzero tolerance lands on it.
    let engine = engine(vec![100, 200], 10);
    assert_eq!(engine.find(95), Ok(Entry { index: 0, value: 100 }));
    assert_eq!(engine.find(10), Ok(Entry { index: 0, value: 100 }));
}

#[test]
fn hundreds_grid_scenarios() {
    let values: Vec<i64> = (0..=10_000_000_i64).step_by(100).collect();
    let engine = engine(values, 10);

    assert_eq!(engine.find(0), Ok(Entry { index: 0, value: 0 }));
    assert_eq!(engine.find(2299), Ok(Entry { index: 22, value: 2200 }));
    assert_eq!(engine.find(2399), Ok(Entry { index: 23, value: 2300 }));
    assert_eq!(
        engine.find(9_999_999),
        Ok(Entry {
            index: 99_999,
            value: 9_999_900
        })
    );
    assert_eq!(engine.find(12_000_000), Err(LookupError::NotFound));
}

#[test]
fn negative_values_match_exactly() {
    let engine = engine(vec![-100, -10, 0], 10);

    assert_eq!(engine.find(-10), Ok(Entry { index: 1, value: -10 }));
    // A negative target yields a negative tolerance, which inverts the
    // band checks; only exact hits resolve.
    assert_eq!(engine.find(-95), Err(LookupError::NotFound));
}

#[test]
fn empty_dataset_is_rejected() {
    let err = LookupEngine::new(Dataset::new(vec![]), 10).expect_err("empty dataset");
    assert_eq!(err, LookupError::EmptyDataset);
}

#[test]
fn non_positive_divisor_is_rejected() {
    for divisor in [0, -5] {
        let err = LookupEngine::new(Dataset::new(vec![10]), divisor).expect_err("bad divisor");
        assert_eq!(err, LookupError::InvalidDivisor(divisor));
    }
}

#[test]
fn find_is_deterministic() {
    let engine = engine(vec![10, 100], 10);

    let first = engine.find(105);
    let second = engine.find(105);
    assert_eq!(first, second);
    assert_eq!(first, Ok(Entry { index: 1, value: 100 }));
}

#[test]
fn usable_through_the_capability_trait() {
    let lookup: Box<dyn ValueLookup> = Box::new(engine(vec![10], 10));
    assert_eq!(lookup.find(10), Ok(Entry { index: 0, value: 10 }));
}
